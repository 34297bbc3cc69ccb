//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `seo_monitor` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Report rendering and exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use seo_monitor::initialization::init_logger_with;
use seo_monitor::present::{log_summary, render_json, render_plain};
use seo_monitor::{exit_code_for, run_audit, Opt, OutputFormat};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_audit(&opt).await {
        Ok(outcome) => {
            log_summary(&outcome.report, &outcome.site_name);
            match opt.format {
                OutputFormat::Plain => {
                    print!("{}", render_plain(&outcome.report, &outcome.site_name))
                }
                OutputFormat::Json => println!(
                    "{}",
                    render_json(&outcome.report).context("Failed to serialize report")?
                ),
            }

            let code = exit_code_for(&outcome.report, opt.fail_under);
            if code != 0 {
                eprintln!(
                    "{}: score {} is below --fail-under {}",
                    outcome.source,
                    outcome.report.score(),
                    opt.fail_under.unwrap_or_default()
                );
                process::exit(code);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("seo_monitor error: {:#}", e);
            process::exit(1);
        }
    }
}
