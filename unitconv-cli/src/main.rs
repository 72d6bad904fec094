//! Unitconv CLI
//!
//! Command-line surface over the conversion engine:
//! - `unitconv list [--json]` - categories and their units
//! - `unitconv convert CATEGORY FROM TO VALUE [--json]` - one conversion
//!
//! Human-readable conversion output is a single result line with the value
//! rounded to 4 decimal places. `--json` emits machine-readable output
//! instead. Contract violations (unknown category/unit, non-finite
//! value) exit with code 1 and the error message on stderr.

use std::env;
use std::process::ExitCode;

use serde_json::json;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use unitconv_core::ConversionEngine;

const USAGE: &str = "usage: unitconv <command>

commands:
  list [--json]                           list categories and units
  convert CATEGORY FROM TO VALUE [--json] convert VALUE from FROM to TO";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let as_json = take_flag(&mut args, "--json");

    let engine = ConversionEngine::new();

    let result = match args.first().map(String::as_str) {
        Some("list") if args.len() == 1 => {
            print!("{}", render_list(&engine, as_json));
            Ok(())
        }
        Some("convert") if args.len() == 5 => run_convert(&engine, &args[1..], as_json),
        _ => {
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {}", message);
            ExitCode::FAILURE
        }
    }
}

/// Remove `flag` from `args` if present, reporting whether it was there
fn take_flag(args: &mut Vec<String>, flag: &str) -> bool {
    match args.iter().position(|a| a == flag) {
        Some(index) => {
            args.remove(index);
            true
        }
        None => false,
    }
}

fn run_convert(engine: &ConversionEngine, args: &[String], as_json: bool) -> Result<(), String> {
    let (category, from_unit, to_unit) = (&args[0], &args[1], &args[2]);
    let value: f64 = args[3]
        .parse()
        .map_err(|_| format!("not a number: {}", args[3]))?;

    debug!(%category, %from_unit, %to_unit, value, "converting");

    let result = engine
        .convert(category, from_unit, to_unit, value)
        .map_err(|e| e.to_string())?;

    if as_json {
        let payload = json!({
            "category": category,
            "from": from_unit,
            "to": to_unit,
            "value": value,
            "result": result,
        });
        println!("{}", payload);
    } else {
        println!("{}", format_result(value, from_unit, result, to_unit));
    }
    Ok(())
}

/// Result line with the converted value rounded to 4 decimal places
fn format_result(value: f64, from_unit: &str, result: f64, to_unit: &str) -> String {
    format!("{} {} = {:.4} {}", value, from_unit, result, to_unit)
}

fn render_list(engine: &ConversionEngine, as_json: bool) -> String {
    if as_json {
        let categories: Vec<_> = engine
            .list_categories()
            .iter()
            .map(|c| json!({ "id": c.id, "units": c.units }))
            .collect();
        format!("{}\n", json!(categories))
    } else {
        let mut out = String::new();
        for category in engine.list_categories() {
            out.push_str(&format!("{}: {}\n", category.id, category.units.join(", ")));
        }
        out
    }
}
