use anyhow::Context;
use chrono::Local;

use shopstock_cli::menu::{self, MenuAction};
use shopstock_cli::{Command, Outcome, execute, forms};
use shopstock_store::CsvStore;

fn main() -> anyhow::Result<()> {
    shopstock_observability::init();

    let path = std::env::var("SHOPSTOCK_DATA").unwrap_or_else(|_| {
        tracing::debug!("SHOPSTOCK_DATA not set; using shop_inventory.csv");
        "shop_inventory.csv".to_string()
    });
    let store = CsvStore::new(&path);

    println!("Shop Inventory Tracker");
    println!("data file: {path}");

    loop {
        println!();
        println!("{}", menu::MENU);
        let action = forms::menu_selection()?;
        if action == MenuAction::Quit {
            break;
        }

        let today = Local::now().date_naive();
        let mut table = store
            .load()
            .with_context(|| format!("failed to load inventory from {path}"))?;

        let command = match action {
            MenuAction::AddItem => Command::AddItem(forms::add_item_form(today)?),
            MenuAction::UpdateStock if table.is_empty() => {
                println!("No items available to update.");
                continue;
            }
            MenuAction::UpdateStock => {
                let names = owned_names(&table);
                Command::UpdateStock(forms::update_stock_form(&names)?)
            }
            MenuAction::DeleteItem if table.is_empty() => {
                println!("No items available to delete.");
                continue;
            }
            MenuAction::DeleteItem => {
                let names = owned_names(&table);
                Command::DeleteItem(forms::delete_item_form(&names)?)
            }
            MenuAction::ViewInventory => Command::ViewInventory,
            MenuAction::ExpiryAlerts => Command::ExpiryAlerts,
            MenuAction::GraphicalReport => Command::GraphicalReport,
            MenuAction::Quit => unreachable!("handled above"),
        };

        match execute(&mut table, &store, command, today)
            .with_context(|| format!("failed to persist inventory to {path}"))?
        {
            Outcome::Success(text) => println!("{text}"),
            Outcome::Rejected(err) => println!("error: {err}"),
        }
    }

    Ok(())
}

fn owned_names(table: &shopstock_inventory::Table) -> Vec<String> {
    table.item_names().iter().map(|s| s.to_string()).collect()
}
