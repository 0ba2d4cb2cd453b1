//! Presentation helpers shared by the TUI and the plain-text commands
//!
//! - [`ViewMode`]: wide table vs compact cards, chosen by viewport width
//! - [`TableColumn`]: column set, header labels, widths and truncation limits
//! - [`Detail`]: the expanded address / company panels
//! - [`truncate`]: ellipsis truncation on character boundaries

use crate::model::Contact;

/// Default viewport width (columns) at or below which cards are used
pub const DEFAULT_COMPACT_MAX_WIDTH: u16 = 100;

/// How the record list is laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// One row per record, eight columns
    Table,
    /// One stacked card per record
    Cards,
}

impl ViewMode {
    pub fn for_width(width: u16, compact_max_width: u16) -> Self {
        if width <= compact_max_width {
            ViewMode::Cards
        } else {
            ViewMode::Table
        }
    }
}

/// Cut `text` to `max_chars` characters and append "..." when it is longer.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Columns of the table layout, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableColumn {
    Id,
    Name,
    Username,
    Email,
    Phone,
    Website,
    Address,
    Company,
}

impl TableColumn {
    pub const ALL: [TableColumn; 8] = [
        TableColumn::Id,
        TableColumn::Name,
        TableColumn::Username,
        TableColumn::Email,
        TableColumn::Phone,
        TableColumn::Website,
        TableColumn::Address,
        TableColumn::Company,
    ];

    pub fn header(&self) -> &'static str {
        match self {
            TableColumn::Id => "ID",
            TableColumn::Name => "Name",
            TableColumn::Username => "Username",
            TableColumn::Email => "Email",
            TableColumn::Phone => "Phone",
            TableColumn::Website => "Website",
            TableColumn::Address => "Address",
            TableColumn::Company => "Company",
        }
    }

    /// Share of the table width, in percent
    pub fn width_percent(&self) -> u16 {
        match self {
            TableColumn::Id => 5,
            TableColumn::Name
            | TableColumn::Username
            | TableColumn::Phone
            | TableColumn::Website
            | TableColumn::Company => 10,
            TableColumn::Email => 15,
            TableColumn::Address => 30,
        }
    }

    /// Character limit before the cell is shortened with "..."
    pub fn truncate_at(&self) -> Option<usize> {
        match self {
            TableColumn::Name | TableColumn::Username | TableColumn::Phone => Some(20),
            TableColumn::Email => Some(25),
            _ => None,
        }
    }

    /// Full, untruncated value for this column
    pub fn value(&self, contact: &Contact) -> String {
        match self {
            TableColumn::Id => contact.id.to_string(),
            TableColumn::Name => contact.name.clone(),
            TableColumn::Username => contact.username.clone(),
            TableColumn::Email => contact.email.clone(),
            TableColumn::Phone => contact.phone.clone(),
            TableColumn::Website => contact.website.clone(),
            TableColumn::Address => contact.address_summary(),
            TableColumn::Company => contact.company.name.clone(),
        }
    }

    /// Value as shown in the cell
    pub fn display(&self, contact: &Contact) -> String {
        let value = self.value(contact);
        match self.truncate_at() {
            Some(limit) => truncate(&value, limit),
            None => value,
        }
    }

    /// Hover text: the full value, or a hint for the clickable columns
    pub fn tooltip(&self, contact: &Contact) -> String {
        match self {
            TableColumn::Address => "Press 'a' to see full address".to_string(),
            TableColumn::Company => "Press 'c' to see full company info".to_string(),
            TableColumn::Website => contact.website_url(),
            _ => self.value(contact),
        }
    }

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Labelled rows for the card layout
pub fn card_rows(contact: &Contact) -> Vec<(&'static str, String)> {
    vec![
        ("ID", contact.id.to_string()),
        ("Username", contact.username.clone()),
        ("Email", contact.email.clone()),
        ("Phone", contact.phone.clone()),
        ("Website", contact.website.clone()),
        ("Address", contact.address_summary()),
        ("Company", contact.company.name.clone()),
    ]
}

/// Which expanded panel to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailKind {
    Address,
    Company,
}

/// Expanded detail for one record
#[derive(Debug, Clone, Copy)]
pub struct Detail<'a> {
    pub kind: DetailKind,
    pub contact: &'a Contact,
}

impl<'a> Detail<'a> {
    pub fn new(kind: DetailKind, contact: &'a Contact) -> Self {
        Self { kind, contact }
    }

    pub fn heading(&self) -> &'static str {
        match self.kind {
            DetailKind::Address => "Full Address",
            DetailKind::Company => "Company Info",
        }
    }

    pub fn rows(&self) -> Vec<(&'static str, &'a str)> {
        let c = self.contact;
        match self.kind {
            DetailKind::Address => vec![
                ("Street", c.address.street.as_str()),
                ("Suite", c.address.suite.as_str()),
                ("City", c.address.city.as_str()),
                ("Zipcode", c.address.zipcode.as_str()),
                ("Lat", c.address.geo.lat.as_str()),
                ("Lng", c.address.geo.lng.as_str()),
            ],
            DetailKind::Company => vec![
                ("Name", c.company.name.as_str()),
                ("Catchphrase", c.company.catch_phrase.as_str()),
                ("BS", c.company.bs.as_str()),
            ],
        }
    }
}
