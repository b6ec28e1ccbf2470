//! Inventory domain module.
//!
//! This crate contains business rules for the shop inventory, implemented
//! purely as deterministic domain logic (no IO, no rendering, no storage).

pub mod expiry;
pub mod item;
pub mod ops;

pub use expiry::{ALERT_WINDOW_DAYS, ChartRow, ExpiryReport, chart_rows, classify};
pub use item::{Item, Table};
pub use ops::{AddItem, DeleteItem, InventoryCommand, StockUpdate, UpdateStock};
