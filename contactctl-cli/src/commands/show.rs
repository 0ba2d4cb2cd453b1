use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use contactctl_core::{card_rows, Contact, ContactError, ContactStore, Detail, DetailKind};

use super::{fetch_contacts, load_config, SourceArgs};

#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Contact ID
    pub id: u64,

    /// Which detail panel to print
    #[arg(long, value_enum, default_value_t = DetailArg::All)]
    pub detail: DetailArg,

    /// Print the record as JSON instead
    #[arg(long)]
    pub json: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailArg {
    /// Street, suite, city, zipcode and coordinates
    Address,
    /// Company name, catchphrase and bs
    Company,
    /// Summary plus both panels
    All,
}

pub async fn run_show(args: ShowArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path, &args.source)?;
    let contacts = fetch_contacts(&config, &args.source).await?;
    let store = ContactStore::new(contacts, config.page_size);

    let contact = store
        .find(args.id)
        .ok_or_else(|| ContactError::not_found(args.id))?;

    let output = if args.json {
        serde_json::to_string_pretty(contact).context("Failed to serialize contact")?
    } else {
        render_contact(contact, args.detail)
    };

    print!("{}", output);
    if args.json {
        println!();
    }
    Ok(())
}

fn render_detail(out: &mut String, detail: Detail<'_>) {
    let _ = writeln!(out, "{}", detail.heading());
    for (label, value) in detail.rows() {
        let _ = writeln!(out, "  {}: {}", label, value);
    }
}

pub fn render_contact(contact: &Contact, detail: DetailArg) -> String {
    let mut out = String::new();
    match detail {
        DetailArg::Address => render_detail(&mut out, Detail::new(DetailKind::Address, contact)),
        DetailArg::Company => render_detail(&mut out, Detail::new(DetailKind::Company, contact)),
        DetailArg::All => {
            let _ = writeln!(out, "{}", contact.name);
            for (label, value) in card_rows(contact) {
                if label == "Website" {
                    let _ = writeln!(out, "  {}: {}", label, contact.website_url());
                } else {
                    let _ = writeln!(out, "  {}: {}", label, value);
                }
            }
            out.push('\n');
            render_detail(&mut out, Detail::new(DetailKind::Address, contact));
            out.push('\n');
            render_detail(&mut out, Detail::new(DetailKind::Company, contact));
        }
    }
    out
}
