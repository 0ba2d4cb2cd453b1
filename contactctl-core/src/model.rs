//! Contact record as served by the users endpoint.
//!
//! Records are read-only after load; `id` is the identity.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub address: Address,
    pub company: Company,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

/// Coordinates arrive as decimal strings and are only ever displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
    pub bs: String,
}

impl Contact {
    /// One-line address: "suite, street, city"
    pub fn address_summary(&self) -> String {
        format!(
            "{}, {}, {}",
            self.address.suite, self.address.street, self.address.city
        )
    }

    /// Link target for the website column
    pub fn website_url(&self) -> String {
        format!("http://{}", self.website)
    }

    /// Every text field the search box looks at, in display order.
    ///
    /// Geo coordinates are not searchable.
    pub fn searchable_fields(&self) -> [&str; 12] {
        [
            &self.name,
            &self.username,
            &self.email,
            &self.phone,
            &self.website,
            &self.address.street,
            &self.address.suite,
            &self.address.city,
            &self.address.zipcode,
            &self.company.name,
            &self.company.catch_phrase,
            &self.company.bs,
        ]
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Build a contact whose text fields are derived from `id`
    pub fn contact(id: u64) -> Contact {
        Contact {
            id,
            name: format!("Person {id}"),
            username: format!("user{id}"),
            email: format!("user{id}@example.test"),
            phone: format!("555-01{id:02}"),
            website: format!("site{id}.example"),
            address: Address {
                street: format!("{id} Main Street"),
                suite: format!("Apt. {id}"),
                city: "Springfield".to_string(),
                zipcode: format!("0{id:04}"),
                geo: Geo {
                    lat: "-37.3159".to_string(),
                    lng: "81.1496".to_string(),
                },
            },
            company: Company {
                name: format!("Company {id}"),
                catch_phrase: "Multi-layered client-server neural-net".to_string(),
                bs: "harness real-time e-markets".to_string(),
            },
        }
    }

    pub fn contacts(count: u64) -> Vec<Contact> {
        (1..=count).map(contact).collect()
    }
}
