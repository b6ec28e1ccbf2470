//! CSV-backed store for the inventory table.

use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shopstock_core::Unit;
use shopstock_inventory::{Item, Table};

use crate::error::StoreError;

/// On-disk date format (`2026-08-06`).
const DATE_FORMAT: &str = "%Y-%m-%d";

/// One CSV row, column names matching the persisted header exactly.
///
/// Every field is read as text; typing happens in [`CsvRecord::into_item`]
/// so that a bad expiry date can degrade to an absent date instead of
/// failing the whole load.
#[derive(Debug, Serialize, Deserialize)]
struct CsvRecord {
    #[serde(rename = "Item_Name")]
    name: String,
    #[serde(rename = "Quantity")]
    quantity: String,
    #[serde(rename = "Unit")]
    unit: String,
    #[serde(rename = "Expiry_Date")]
    expiry: String,
}

impl CsvRecord {
    /// `row` is the 1-based line number in the file (header is line 1).
    fn into_item(self, row: usize) -> Result<Item, StoreError> {
        let quantity: f64 = self.quantity.trim().parse().map_err(|_| StoreError::Malformed {
            row,
            field: "Quantity",
            value: self.quantity.clone(),
        })?;

        let unit: Unit = self.unit.parse().map_err(|_| StoreError::Malformed {
            row,
            field: "Unit",
            value: self.unit.clone(),
        })?;

        let expiry = parse_expiry(&self.expiry);
        if expiry.is_none() && !self.expiry.trim().is_empty() {
            tracing::warn!(row, value = %self.expiry, "unparseable expiry date, treating as unknown");
        }

        Ok(Item {
            name: self.name,
            quantity,
            unit,
            expiry,
        })
    }

    fn from_item(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity.to_string(),
            unit: item.unit.to_string(),
            expiry: item
                .expiry
                .map(|date| date.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
        }
    }
}

fn parse_expiry(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// Owns the path to the persisted table.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted table.
    ///
    /// A missing file yields an empty table. An unparseable expiry date
    /// yields a row with an absent date. Anything else malformed fails the
    /// load.
    pub fn load(&self) -> Result<Table, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no inventory file yet, starting empty");
                return Ok(Table::new());
            }
            Err(err) => return Err(err.into()),
        };

        let mut reader = csv::Reader::from_reader(file);
        let mut rows = Vec::new();
        for (index, record) in reader.deserialize::<CsvRecord>().enumerate() {
            // Line 1 is the header, so data rows start at line 2.
            rows.push(record?.into_item(index + 2)?);
        }

        tracing::debug!(path = %self.path.display(), rows = rows.len(), "loaded inventory");
        Ok(Table::from_rows(rows))
    }

    /// Serialize the full table, overwriting prior contents.
    pub fn save(&self, table: &Table) -> Result<(), StoreError> {
        let mut writer = csv::Writer::from_path(&self.path)?;
        for item in table.rows() {
            writer.serialize(CsvRecord::from_item(item))?;
        }
        writer.flush()?;

        tracing::debug!(path = %self.path.display(), rows = table.len(), "saved inventory");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn item(name: &str, quantity: f64, unit: Unit, expiry: Option<NaiveDate>) -> Item {
        Item {
            name: name.to_string(),
            quantity,
            unit,
            expiry,
        }
    }

    fn store_in(dir: &tempfile::TempDir) -> CsvStore {
        CsvStore::new(dir.path().join("inventory.csv"))
    }

    #[test]
    fn missing_file_loads_as_empty_table() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let table = store.load().unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let table = Table::from_rows(vec![
            item("Milk", 2.5, Unit::Litre, Some(date(2026, 8, 10))),
            item("Eggs", 12.0, Unit::Pcs, Some(date(2026, 8, 20))),
        ]);
        store.save(&table).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 2);
        for (saved, read) in table.rows().iter().zip(loaded.rows()) {
            assert_eq!(saved.name, read.name);
            assert!((saved.quantity - read.quantity).abs() < 1e-9);
            assert_eq!(saved.unit, read.unit);
            assert_eq!(saved.expiry, read.expiry);
        }
    }

    #[test]
    fn save_overwrites_prior_contents() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store
            .save(&Table::from_rows(vec![
                item("Milk", 1.0, Unit::Litre, Some(date(2026, 8, 10))),
                item("Eggs", 6.0, Unit::Pcs, Some(date(2026, 8, 12))),
            ]))
            .unwrap();
        store
            .save(&Table::from_rows(vec![item(
                "Milk",
                1.0,
                Unit::Litre,
                Some(date(2026, 8, 10)),
            )]))
            .unwrap();

        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn row_without_expiry_round_trips_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        store
            .save(&Table::from_rows(vec![item("Salt", 1.0, Unit::Kg, None)]))
            .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.rows()[0].expiry, None);
    }

    #[test]
    fn unparseable_date_loads_as_absent_date() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "Item_Name,Quantity,Unit,Expiry_Date").unwrap();
        writeln!(file, "Milk,2.5,litre,next tuesday").unwrap();

        let table = CsvStore::new(path).load().unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows()[0].expiry, None);
    }

    #[test]
    fn malformed_quantity_fails_the_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "Item_Name,Quantity,Unit,Expiry_Date").unwrap();
        writeln!(file, "Milk,plenty,litre,2026-08-10").unwrap();

        let err = CsvStore::new(path).load().unwrap_err();
        match err {
            StoreError::Malformed { row, field, .. } => {
                assert_eq!(row, 2);
                assert_eq!(field, "Quantity");
            }
            _ => panic!("Expected Malformed error for bad quantity"),
        }
    }

    #[test]
    fn malformed_unit_fails_the_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.csv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "Item_Name,Quantity,Unit,Expiry_Date").unwrap();
        writeln!(file, "Milk,2.5,barrel,2026-08-10").unwrap();

        let err = CsvStore::new(path).load().unwrap_err();
        match err {
            StoreError::Malformed { field, .. } => assert_eq!(field, "Unit"),
            _ => panic!("Expected Malformed error for bad unit"),
        }
    }

    #[test]
    fn header_matches_the_persisted_schema() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store
            .save(&Table::from_rows(vec![item(
                "Milk",
                2.5,
                Unit::Litre,
                Some(date(2026, 8, 10)),
            )]))
            .unwrap();

        let contents = std::fs::read_to_string(store.path()).unwrap();
        let header = contents.lines().next().unwrap();
        assert_eq!(header, "Item_Name,Quantity,Unit,Expiry_Date");
    }
}
