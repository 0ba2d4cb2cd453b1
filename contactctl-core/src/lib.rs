//! contactctl-core - contact records, search filtering and paging
//!
//! ```text
//! ContactClient::fetch → ContactStore { all → filter → filtered → page window }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod pager;
pub mod store;
pub mod view;

pub use client::{parse_contacts, ContactClient, ContactSource};
pub use config::ContactConfig;
pub use error::{ContactError, Result};
pub use filter::filter_contacts;
pub use model::{Address, Company, Contact, Geo};
pub use pager::Pager;
pub use store::ContactStore;
pub use view::{card_rows, truncate, Detail, DetailKind, TableColumn, ViewMode};
