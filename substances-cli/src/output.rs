//! Terminal rendering helpers

use colored::{ColoredString, Colorize};
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};

fn status_line(marker: ColoredString, msg: &str) -> String {
    format!("{} {}", marker, msg)
}

/// `✓ msg` on stdout
pub fn success(msg: &str) {
    println!("{}", status_line("✓".green().bold(), msg));
}

/// `error: msg` on stderr
pub fn error(msg: &str) {
    eprintln!("{}", status_line("error:".red().bold(), msg));
}

/// `! msg` on stdout
pub fn warning(msg: &str) {
    println!("{}", status_line("!".yellow().bold(), msg));
}

/// `· msg` on stdout, dimmed
pub fn info(msg: &str) {
    println!("{}", status_line("·".cyan(), &msg.dimmed().to_string()));
}

/// Condensed table that wraps to the terminal width
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Remove in-game `§x` formatting codes for terminal display
pub fn plain(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c == '§' {
            chars.next();
        } else {
            out.push(c);
        }
    }
    out
}
