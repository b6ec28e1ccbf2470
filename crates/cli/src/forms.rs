//! Form-style prompts for the menu actions.
//!
//! Invalid field input re-prompts with a short hint rather than aborting the
//! action, the way a form re-presents itself. The parsers are split from the
//! terminal plumbing so they can be tested directly.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use shopstock_core::Unit;
use shopstock_inventory::{AddItem, DeleteItem, StockUpdate, UpdateStock};

use crate::menu::MenuAction;

/// Ask for a menu selection until a valid one is entered.
pub fn menu_selection() -> anyhow::Result<MenuAction> {
    prompt_until("Select option", |raw| {
        MenuAction::parse(raw).ok_or_else(|| "enter a number from 1 to 7".to_string())
    })
}

/// Gather the fields for Add Item. A blank expiry defaults to today.
pub fn add_item_form(today: NaiveDate) -> anyhow::Result<AddItem> {
    let name = prompt("Item name")?;
    let quantity = prompt_until("Quantity", parse_quantity)?;
    let unit = prompt_until("Unit (kg, g, litre, ml, pcs)", |raw| {
        raw.parse::<Unit>().map_err(|err| err.to_string())
    })?;
    let expiry = prompt_until("Expiry date (YYYY-MM-DD, blank for today)", |raw| {
        parse_expiry(raw, today)
    })?;

    Ok(AddItem {
        name,
        quantity,
        unit,
        expiry,
    })
}

/// Gather the fields for Update Stock, selecting from existing names.
pub fn update_stock_form(names: &[String]) -> anyhow::Result<UpdateStock> {
    let name = select_item(names)?;
    let update = prompt_until("Update type (1 = add stock, 2 = sell stock)", parse_update_mode)?;
    let amount = prompt_until("Amount", parse_quantity)?;

    Ok(UpdateStock {
        name,
        update,
        amount,
    })
}

/// Pick the item to delete from existing names.
pub fn delete_item_form(names: &[String]) -> anyhow::Result<DeleteItem> {
    let name = select_item(names)?;
    Ok(DeleteItem { name })
}

fn select_item(names: &[String]) -> anyhow::Result<String> {
    for (index, name) in names.iter().enumerate() {
        println!("  {}. {name}", index + 1);
    }
    let choice = prompt_until("Select item", |raw| parse_choice(raw, names.len()))?;
    Ok(names[choice - 1].clone())
}

fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{label}: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    let read = std::io::stdin().lock().read_line(&mut line)?;
    anyhow::ensure!(read != 0, "input closed");
    Ok(line.trim().to_string())
}

fn prompt_until<T>(
    label: &str,
    parse: impl Fn(&str) -> Result<T, String>,
) -> anyhow::Result<T> {
    loop {
        let raw = prompt(label)?;
        match parse(&raw) {
            Ok(value) => return Ok(value),
            Err(hint) => println!("{hint}"),
        }
    }
}

fn parse_quantity(raw: &str) -> Result<f64, String> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err("enter a number >= 0".to_string()),
    }
}

fn parse_expiry(raw: &str, today: NaiveDate) -> Result<NaiveDate, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(today);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| "enter a date as YYYY-MM-DD".to_string())
}

fn parse_update_mode(raw: &str) -> Result<StockUpdate, String> {
    match raw.trim() {
        "1" => Ok(StockUpdate::AddStock),
        "2" => Ok(StockUpdate::SellStock),
        _ => Err("enter 1 to add stock or 2 to sell stock".to_string()),
    }
}

/// 1-based selection from a list of `count` entries.
fn parse_choice(raw: &str, count: usize) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(choice) if (1..=count).contains(&choice) => Ok(choice),
        _ => Err(format!("enter a number from 1 to {count}")),
    }
}
