//! Format command - render an amount the way players see it

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use substances_core::Money;

use super::get_context;

pub fn run(data_dir: &Path, amount: &str) -> Result<()> {
    let value = Decimal::from_str(amount.trim())
        .with_context(|| format!("Not a number: {}", amount))?;
    let money = Money::new(value)?;

    let ctx = get_context(data_dir)?;
    println!("{}", ctx.gateway.format(money));
    Ok(())
}
