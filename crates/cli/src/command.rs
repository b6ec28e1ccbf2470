//! Command dispatch: one user action against the table and the store.

use chrono::NaiveDate;

use shopstock_core::DomainError;
use shopstock_inventory::{
    AddItem, DeleteItem, InventoryCommand, Table, UpdateStock, chart_rows, classify,
};
use shopstock_store::{CsvStore, StoreError};

use crate::render;

/// One fully-specified user action, ready to run.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddItem(AddItem),
    UpdateStock(UpdateStock),
    DeleteItem(DeleteItem),
    ViewInventory,
    ExpiryAlerts,
    GraphicalReport,
}

/// What a dispatched command produced.
#[derive(Debug)]
pub enum Outcome {
    /// Rendered output (or a confirmation line) for the user.
    Success(String),
    /// A recoverable domain rejection; the table and file are unchanged.
    Rejected(DomainError),
}

/// Run one command against the loaded table.
///
/// Mutating commands save the table back through the store on success and
/// skip the save entirely when the domain rejects them, so the file is never
/// rewritten for a refused operation. Read-only commands never save.
pub fn execute(
    table: &mut Table,
    store: &CsvStore,
    command: Command,
    today: NaiveDate,
) -> Result<Outcome, StoreError> {
    match command {
        Command::AddItem(cmd) => {
            let name = cmd.name.trim().to_string();
            mutate(table, store, InventoryCommand::AddItem(cmd), || {
                format!("{name} added to inventory")
            })
        }
        Command::UpdateStock(cmd) => {
            let name = cmd.name.clone();
            mutate(table, store, InventoryCommand::UpdateStock(cmd), || {
                format!("stock updated for {name}")
            })
        }
        Command::DeleteItem(cmd) => {
            let name = cmd.name.clone();
            mutate(table, store, InventoryCommand::DeleteItem(cmd), || {
                format!("{name} deleted from inventory")
            })
        }
        Command::ViewInventory => Ok(Outcome::Success(render::inventory(table))),
        Command::ExpiryAlerts => {
            let report = classify(table, today);
            Ok(Outcome::Success(render::expiry_report(&report)))
        }
        Command::GraphicalReport => {
            let rows = chart_rows(table, today);
            Ok(Outcome::Success(render::chart(&rows)))
        }
    }
}

fn mutate(
    table: &mut Table,
    store: &CsvStore,
    command: InventoryCommand,
    success: impl FnOnce() -> String,
) -> Result<Outcome, StoreError> {
    match table.handle(&command) {
        Ok(()) => {
            store.save(table)?;
            tracing::info!(?command, "inventory updated");
            Ok(Outcome::Success(success()))
        }
        Err(err) => {
            tracing::warn!(%err, "command rejected");
            Ok(Outcome::Rejected(err))
        }
    }
}
