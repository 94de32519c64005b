//! Sweep command implementation.

use super::output::{JsonSweepResult, format_sweep_csv, format_sweep_text};
use super::{CliError, SweepArgs, SweepFormat, configure_threads};
use indicatif::{ProgressBar, ProgressStyle};
use miscellania::run_sweep_with_progress;
use std::time::Instant;

/// Execute the sweep command.
///
/// # Errors
///
/// Returns an error if the sweep configuration is invalid or any run fails.
#[allow(clippy::needless_pass_by_value)]
pub(crate) fn execute(args: SweepArgs, format: SweepFormat, progress: bool) -> Result<(), CliError> {
    configure_threads(args.threads);
    let config = args.to_config();

    // Progress bar
    let pb = if progress {
        let pb = ProgressBar::new(config.starting_cash.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} kingdoms ({per_sec})")
            .map_err(|e| CliError::new(format!("Invalid progress template: {e}")))?
            .progress_chars("=>-");
        pb.set_style(style);
        Some(pb)
    } else {
        None
    };

    let start = Instant::now();
    let report = run_sweep_with_progress(&config, |_| {
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    })?;
    let duration = start.elapsed();

    if let Some(pb) = pb {
        pb.finish_with_message("done");
    }

    match format {
        SweepFormat::Text => {
            print!("{}", format_sweep_text(&report));
            println!();
            println!("Duration: {:.2}s", duration.as_secs_f64());
        }
        SweepFormat::Json => {
            let json_result = JsonSweepResult::from_report(&report);
            println!("{}", serde_json::to_string_pretty(&json_result)?);
        }
        SweepFormat::Csv => {
            print!("{}", format_sweep_csv(&report));
        }
    }

    Ok(())
}
