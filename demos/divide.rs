//! Divides two numbers and takes the square root of the quotient.
//!
//! Usage: `divide <a> <b>`

use anyhow::{anyhow, Context};
use strict_result::{config, err, ok, try_result, Config, Result};

fn divide(a: f64, b: f64) -> Result<f64, String> {
    if b == 0.0 {
        return err("division by zero".to_string());
    }
    ok(a / b)
}

fn divide_then_root(a: f64, b: f64) -> Result<f64, String> {
    let quotient;
    try_result!(divide(a, b), quotient);
    ok(quotient.sqrt())
}

fn parse_arg(args: &[String], index: usize) -> anyhow::Result<f64> {
    let raw = args
        .get(index)
        .ok_or_else(|| anyhow!("usage: divide <a> <b>"))?;
    raw.parse::<f64>()
        .with_context(|| format!("argument {index} is not a number: {raw:?}"))
}

fn main() -> anyhow::Result<()> {
    let settings = Config::from_env().context("reading result configuration")?;
    config::init(settings)?;

    let args: Vec<String> = std::env::args().collect();
    let a = parse_arg(&args, 1)?;
    let b = parse_arg(&args, 2)?;

    let root = divide_then_root(a, b)
        .into_std()
        .map_err(|e| anyhow!("cannot compute sqrt({a} / {b}): {e}"))?;
    println!("sqrt({a} / {b}) = {root}");
    Ok(())
}
