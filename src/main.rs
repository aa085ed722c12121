use anyhow::{Context, Result};
use colored::Colorize;
use human_panic::setup_panic;
use log::info;

use number_extractor::cli::{get_log_file, get_matches, get_processing_options, get_verbosity};
use number_extractor::logging::{format_message, init_logger};
use number_extractor::workflow::{WorkflowContext, process_files};

fn main() -> Result<()> {
    setup_panic!();

    let matches = get_matches();
    init_logger(get_verbosity(&matches), &get_log_file(&matches))
        .context("Failed to initialise logging")?;

    let options = get_processing_options(&matches);
    let config_path = options.config_path.clone();
    let context = process_files(options)
        .with_context(|| format!("Run with configuration {} failed", config_path.display()))?;

    print_summary(&context);
    Ok(())
}

fn print_summary(context: &WorkflowContext) {
    for planned in &context.planned_operations {
        let message = format!(
            "{} -> {} ({} numbers)",
            planned.source.display(),
            planned.destination.display(),
            planned.numbers
        );
        let colored_message = format!(
            "{} -> {} ({} numbers)",
            planned.source.display(),
            planned.destination.display().to_string().bold(),
            planned.numbers
        );
        info!("{}", format_message(&message, &colored_message));
    }

    let stats = &context.stats;
    let message = format!(
        "Done: {} files from {} directories, {} numbers written to {}",
        stats.files_processed,
        stats.directories_scanned,
        stats.numbers_written,
        context.directories.output().display()
    );
    let colored_message = format!(
        "{}: {} files from {} directories, {} numbers written to {}",
        "Done".green().bold(),
        stats.files_processed,
        stats.directories_scanned,
        stats.numbers_written,
        context.directories.output().display()
    );
    info!("{}", format_message(&message, &colored_message));
}
