//! Menu command - preview the purchase form

use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use super::get_context;
use crate::output;

pub fn run(data_dir: &Path, json: bool) -> Result<()> {
    let ctx = get_context(data_dir)?;
    let menu = ctx.shop.menu();

    if json {
        println!("{}", serde_json::to_string_pretty(&menu)?);
        return Ok(());
    }

    println!("{}\n", output::plain(&menu.title).bold());

    if menu.buttons.is_empty() {
        output::warning("No substances configured");
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["#", "ID", "Button", "Price"]);
    for (index, button) in menu.buttons.iter().enumerate() {
        table.add_row(vec![
            index.to_string(),
            button.substance_id.clone(),
            output::plain(&button.text),
            button.price.clone(),
        ]);
    }
    println!("{table}");

    Ok(())
}
