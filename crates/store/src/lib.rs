//! Load/save boundary between the in-memory table and persisted storage.
//!
//! The persisted form is a flat CSV file with columns
//! `Item_Name, Quantity, Unit, Expiry_Date`, rewritten in full on every
//! mutation. A missing file is not an error; it reads as an empty table.

pub mod csv_file;
pub mod error;

pub use csv_file::CsvStore;
pub use error::StoreError;
