use clap::Parser;

use log::{error, info};
use std::process::ExitCode;

use ccpd2voc::{process_dataset, Args};

fn main() -> ExitCode {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    info!("Starting CCPD to VOC conversion...");

    match process_dataset(&args) {
        Ok(summary) => {
            summary.print_summary();
            info!("Conversion process completed successfully.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Failed to process dataset: {}", e);
            ExitCode::FAILURE
        }
    }
}
