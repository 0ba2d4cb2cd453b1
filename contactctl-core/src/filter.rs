//! Search filtering over contact records
//!
//! Plain case-insensitive substring matching across a fixed field set.
//! No scoring, results keep the input order.

use crate::model::Contact;

impl Contact {
    /// True when any searchable field contains `query`, ignoring case.
    ///
    /// An empty query matches every record.
    pub fn matches(&self, query: &str) -> bool {
        matches_lowered(self, &query.to_lowercase())
    }
}

fn matches_lowered(contact: &Contact, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    contact
        .searchable_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Filter contacts by query, preserving order
pub fn filter_contacts(contacts: &[Contact], query: &str) -> Vec<Contact> {
    if query.is_empty() {
        return contacts.to_vec();
    }

    let needle = query.to_lowercase();
    contacts
        .iter()
        .filter(|contact| matches_lowered(contact, &needle))
        .cloned()
        .collect()
}
