//! Interactive contact browser
//!
//! - Table layout on wide terminals, cards on narrow ones (switches on resize)
//! - Live search across text fields, paging through the filtered list
//! - Address and company overlays for the selected record

pub mod app;
pub mod event;
pub mod terminal;
pub mod ui;

pub use app::Settings;
pub use terminal::run;
