//! Headless Buyer Console: state machine, debounced search and view models.

pub mod client;
pub mod config;
pub mod console;
pub mod dashboard;
pub mod debounce;
pub mod driver;
pub mod view_model;

pub use client::{ApiClient, FabricSearch};
pub use console::{BuyerConsole, FetchRequest, MergeOutcome, Ticket};
pub use dashboard::{bundled_dashboard, parse_dashboard};
pub use debounce::{sleep, Debouncer};
pub use driver::{ConsoleStore, SearchDriver};
pub use view_model::{ConsoleView, LibraryItem, LibraryPhase, LibraryView, OVERVIEW_RFQ_LIMIT};
