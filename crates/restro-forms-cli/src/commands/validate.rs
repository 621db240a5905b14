use std::fs;
use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use colored::Colorize;
use restro_forms::{parse_submission, FormName, FormsConfig};

pub fn execute(
    form: &str,
    input: Option<&Path>,
    config: Option<&Path>,
    today: Option<&str>,
    json: bool,
) -> Result<ExitCode> {
    let name: FormName = form.parse()?;

    let config = match config {
        Some(path) => FormsConfig::load(path)?,
        None => FormsConfig::load_default()?,
    };

    let today = match today {
        Some(day) => NaiveDate::parse_from_str(day, "%Y-%m-%d")
            .with_context(|| format!("Invalid --today date: {}", day))?,
        None => Local::now().date_naive(),
    };

    let raw = match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read submission: {:?}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read submission from stdin")?;
            buf
        }
    };

    let values = parse_submission(&raw)?;
    let spec = name.spec(&config);
    spec.check_known_fields(&values)?;

    let report = spec.validate_on(&values, today);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.is_valid() {
        println!("{} {}", "✓".green().bold(), format!("{} form is valid", name).green());
    } else {
        println!("{} {}", "✗".red().bold(), format!("{} form has errors:", name).red());
        for (field, message) in report.messages() {
            println!("  {}: {}", field.cyan(), message);
        }
    }

    Ok(if report.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
