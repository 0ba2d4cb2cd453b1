use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use contactctl_core::{card_rows, Contact, ContactStore, TableColumn};

use super::{fetch_contacts, load_config, SourceArgs};

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Case-insensitive search across all text fields
    #[arg(long, short = 'q')]
    pub query: Option<String>,

    /// Page to print (1-based)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub page: u64,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = ListFormat::Table)]
    pub format: ListFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFormat {
    /// Aligned columns, long values shortened
    Table,
    /// One block per contact
    Cards,
    /// JSON array of the page's records
    Json,
}

pub async fn run_list(args: ListArgs, config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path, &args.source)?;
    let contacts = fetch_contacts(&config, &args.source).await?;

    let mut store = ContactStore::new(contacts, config.page_size);
    if let Some(query) = args.query {
        store.set_query(query);
    }
    store.set_page(usize::try_from(args.page - 1).unwrap_or(usize::MAX));

    let output = match args.format {
        ListFormat::Json => serde_json::to_string_pretty(store.visible())
            .context("Failed to serialize contacts")?,
        ListFormat::Table => format!("{}{}", render_table(store.visible()), footer(&store)),
        ListFormat::Cards => format!("{}{}", render_cards(store.visible()), footer(&store)),
    };

    println!("{}", output);
    Ok(())
}

/// Plain-text table; each column is as wide as its longest cell
pub fn render_table(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts found\n".to_string();
    }

    let cells: Vec<Vec<String>> = contacts
        .iter()
        .map(|c| TableColumn::ALL.iter().map(|col| col.display(c)).collect())
        .collect();

    let widths: Vec<usize> = TableColumn::ALL
        .iter()
        .enumerate()
        .map(|(i, col)| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(col.header().len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let header: Vec<&str> = TableColumn::ALL.iter().map(|col| col.header()).collect();
    push_row(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in &cells {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// One labelled block per contact
pub fn render_cards(contacts: &[Contact]) -> String {
    if contacts.is_empty() {
        return "No contacts found\n".to_string();
    }

    let mut out = String::new();
    for contact in contacts {
        let _ = writeln!(out, "{}", contact.name);
        for (label, value) in card_rows(contact) {
            let _ = writeln!(out, "  {}: {}", label, value);
        }
        out.push('\n');
    }
    out
}

fn footer(store: &ContactStore) -> String {
    format!(
        "Page {} of {} ({} of {} contacts)",
        store.page() + 1,
        store.page_count(),
        store.filtered().len(),
        store.all().len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use contactctl_core::{Address, Company, Geo};

    fn contact(id: u64, name: &str) -> Contact {
        Contact {
            id,
            name: name.to_string(),
            username: "Bret".to_string(),
            email: "Sincere@april.biz".to_string(),
            phone: "1-770-736-8031 x56442".to_string(),
            website: "hildegard.org".to_string(),
            address: Address {
                street: "Kulas Light".to_string(),
                suite: "Apt. 556".to_string(),
                city: "Gwenborough".to_string(),
                zipcode: "92998-3874".to_string(),
                geo: Geo {
                    lat: "-37.3159".to_string(),
                    lng: "81.1496".to_string(),
                },
            },
            company: Company {
                name: "Romaguera-Crona".to_string(),
                catch_phrase: "Multi-layered client-server neural-net".to_string(),
                bs: "harness real-time e-markets".to_string(),
            },
        }
    }

    #[test]
    fn table_aligns_columns() {
        let out = render_table(&[contact(1, "Leanne Graham"), contact(10, "Clementina DuBuque Jr.")]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID  Name"));
        assert!(lines[2].starts_with("1   Leanne Graham"));
        assert!(lines[3].contains("Clementina DuBuque J..."));
        assert!(lines[3].contains("Apt. 556, Kulas Light, Gwenborough"));
        // Name column is as wide as the truncated long name
        let name_col = lines[0].find("Username").unwrap();
        assert_eq!(lines[3].find("Bret"), Some(name_col));
    }

    #[test]
    fn empty_page_message() {
        assert_eq!(render_table(&[]), "No contacts found\n");
        assert_eq!(render_cards(&[]), "No contacts found\n");
    }

    #[test]
    fn cards_list_labelled_rows() {
        let out = render_cards(&[contact(1, "Leanne Graham")]);
        assert!(out.starts_with("Leanne Graham\n  ID: 1\n  Username: Bret\n"));
        assert!(out.contains("  Company: Romaguera-Crona\n"));
    }

    #[test]
    fn footer_counts() {
        let contacts = (1..=12).map(|id| contact(id, &format!("Person {id}"))).collect();
        let mut store = ContactStore::new(contacts, 5);
        store.next_page();
        assert_eq!(footer(&store), "Page 2 of 3 (12 of 12 contacts)");

        store.set_query("person 1");
        assert_eq!(footer(&store), "Page 1 of 1 (4 of 12 contacts)");
    }
}
