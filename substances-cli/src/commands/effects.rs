//! Effects command - list effect names accepted in config

use anyhow::Result;
use substances_core::domain::effect::{DEFAULT_AMPLIFIER, DEFAULT_DURATION_SECS};
use substances_core::EffectKind;

use crate::output;

pub fn run() -> Result<()> {
    let mut table = output::create_table();
    table.set_header(vec!["Effect"]);
    for kind in EffectKind::ALL {
        table.add_row(vec![kind.name()]);
    }
    println!("{table}");

    output::info(&format!(
        "Defaults: duration {}s, amplifier {}",
        DEFAULT_DURATION_SECS, DEFAULT_AMPLIFIER
    ));
    Ok(())
}
