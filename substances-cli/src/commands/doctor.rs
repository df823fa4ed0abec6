//! Doctor command - run config and economy health checks

use std::path::Path;

use anyhow::Result;
use colored::Colorize;
use comfy_table::{Cell, Color};
use substances_core::services::CheckStatus;

use super::get_context;
use crate::output;

pub fn run(data_dir: &Path, details: bool, json: bool) -> Result<()> {
    let ctx = get_context(data_dir)?;
    let report = ctx.doctor();

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        if !report.is_healthy() {
            std::process::exit(1);
        }
        return Ok(());
    }

    println!("{}", "Substances Health Check".bold());
    println!();

    let mut table = output::create_table();
    table.set_header(vec!["Check", "Status", "Message"]);

    for check in &report.checks {
        let status_cell = match check.status {
            CheckStatus::Pass => Cell::new("PASS").fg(Color::Green),
            CheckStatus::Warn => Cell::new("WARN").fg(Color::Yellow),
            CheckStatus::Fail => Cell::new("ERROR").fg(Color::Red),
        };
        table.add_row(vec![
            Cell::new(&check.name),
            status_cell,
            Cell::new(&check.message),
        ]);

        if details {
            for detail in &check.details {
                table.add_row(vec![
                    Cell::new(""),
                    Cell::new(""),
                    Cell::new(format!("  - {}", detail)).fg(Color::DarkGrey),
                ]);
            }
        }
    }

    println!("{table}");
    println!();

    println!(
        "Summary: {} passed, {} warnings, {} errors",
        report.passed.to_string().green(),
        report.warnings.to_string().yellow(),
        report.failures.to_string().red()
    );

    if !report.is_healthy() {
        std::process::exit(1);
    }

    Ok(())
}
