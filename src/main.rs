use clap::Parser;
use cost_report::utils::{logger, validation::Validate};
use cost_report::{CliConfig, CostReportPipeline, LocalStorage, ReportEngine, RunConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = CliConfig::parse();

    let log_format = if cli.json_logs {
        logger::LogFormat::Json
    } else {
        logger::LogFormat::Compact
    };
    logger::init_logger(cli.verbose, log_format);

    tracing::info!("Starting cost-report");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match RunConfig::from_cli(&cli).and_then(|config| {
        config.validate()?;
        Ok(config)
    }) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("Error: {}", e.user_friendly_message());
            eprintln!("Hint: {}", e.recovery_suggestion());
            return ExitCode::FAILURE;
        }
    };

    let pipeline = CostReportPipeline::new(LocalStorage::new(), config);
    let engine = ReportEngine::new(pipeline);

    match engine.run() {
        Ok(summary) => {
            tracing::info!(
                "Report covers {} services, total {:.2}",
                summary.services,
                summary.total_cost
            );
            println!("Report generated: {}", summary.output_path);
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Report generation failed: {} (Category: {:?})", e, e.category());
            eprintln!("Error processing costs: {}", e.user_friendly_message());
            eprintln!("Hint: {}", e.recovery_suggestion());
            ExitCode::FAILURE
        }
    }
}
