//! Top-level menu of user actions.

/// The six shop actions plus Quit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddItem,
    UpdateStock,
    DeleteItem,
    ViewInventory,
    ExpiryAlerts,
    GraphicalReport,
    Quit,
}

/// Menu text shown before each selection.
pub const MENU: &str = "\
Menu
  1. Add Item
  2. Update Stock
  3. Delete Item
  4. View Inventory
  5. Expiry Alerts
  6. Graphical Report
  7. Quit";

impl MenuAction {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" => Some(MenuAction::AddItem),
            "2" => Some(MenuAction::UpdateStock),
            "3" => Some(MenuAction::DeleteItem),
            "4" => Some(MenuAction::ViewInventory),
            "5" => Some(MenuAction::ExpiryAlerts),
            "6" => Some(MenuAction::GraphicalReport),
            "7" | "q" | "Q" => Some(MenuAction::Quit),
            _ => None,
        }
    }
}
