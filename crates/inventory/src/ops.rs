//! Inventory operations: add, update stock, delete.
//!
//! Each operation is a single-shot transform of the table. Handlers check
//! every precondition before touching a row, so a returned error means the
//! table is exactly as it was. Persistence is the caller's concern.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shopstock_core::{DomainError, DomainResult, Unit};

use crate::item::{Item, Table};

/// Command: AddItem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddItem {
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
    pub expiry: NaiveDate,
}

/// Direction of a stock update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockUpdate {
    AddStock,
    SellStock,
}

/// Command: UpdateStock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateStock {
    pub name: String,
    pub update: StockUpdate,
    pub amount: f64,
}

/// Command: DeleteItem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteItem {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InventoryCommand {
    AddItem(AddItem),
    UpdateStock(UpdateStock),
    DeleteItem(DeleteItem),
}

impl Table {
    /// Apply one command to the table.
    pub fn handle(&mut self, command: &InventoryCommand) -> DomainResult<()> {
        match command {
            InventoryCommand::AddItem(cmd) => self.handle_add(cmd),
            InventoryCommand::UpdateStock(cmd) => self.handle_update(cmd),
            InventoryCommand::DeleteItem(cmd) => self.handle_delete(cmd),
        }
    }

    fn handle_add(&mut self, cmd: &AddItem) -> DomainResult<()> {
        let name = cmd.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        if !cmd.quantity.is_finite() || cmd.quantity < 0.0 {
            return Err(DomainError::validation("quantity must be >= 0"));
        }
        if self.contains_name(name) {
            return Err(DomainError::duplicate_item(name));
        }

        self.push(Item {
            name: name.to_string(),
            quantity: cmd.quantity,
            unit: cmd.unit,
            expiry: Some(cmd.expiry),
        });
        Ok(())
    }

    fn handle_update(&mut self, cmd: &UpdateStock) -> DomainResult<()> {
        if !cmd.amount.is_finite() || cmd.amount < 0.0 {
            return Err(DomainError::validation("amount must be >= 0"));
        }

        // Check every precondition before taking a mutable borrow.
        let available = self
            .find(&cmd.name)
            .ok_or_else(|| DomainError::not_found(&cmd.name))?
            .quantity;

        if cmd.update == StockUpdate::SellStock && cmd.amount > available {
            return Err(DomainError::insufficient_stock(available, cmd.amount));
        }

        let row = self
            .find_mut(&cmd.name)
            .ok_or_else(|| DomainError::not_found(&cmd.name))?;
        match cmd.update {
            StockUpdate::AddStock => row.quantity += cmd.amount,
            StockUpdate::SellStock => row.quantity -= cmd.amount,
        }
        Ok(())
    }

    fn handle_delete(&mut self, cmd: &DeleteItem) -> DomainResult<()> {
        // Removes every row with exactly this name; absent names are a no-op
        // (the selection UI offers only existing names).
        self.retain(|row| row.name != cmd.name);
        Ok(())
    }
}
