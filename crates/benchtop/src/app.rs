//! Application entry point and dispatch.

use anyhow::Result;

use benchtop_cli::output::{report_to_json, write_report};
use benchtop_cli::presenter::ReportPresenter;
use benchtop_core::{compute_parallel_sum, CancellationToken, SumError, SumOptions};

use crate::config::{AppConfig, PlotKind};
use crate::demo;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        benchtop_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    // Handle demo charts
    if let Some(kind) = config.plot {
        return run_plot(kind);
    }

    // Parallel sum mode
    run_sum(config)
}

fn run_sum(config: &AppConfig) -> Result<()> {
    let total = config
        .draws
        .ok_or_else(|| SumError::InvalidArgument("missing draw count <N>".into()))?;

    let opts = SumOptions {
        worker_count: config.workers,
        timeout: Some(config.timeout_duration()),
    };

    let cancel = CancellationToken::new();

    // Set up Ctrl+C handler
    let cancel_clone = cancel.clone();
    ctrlc_handler(cancel_clone);

    let report = compute_parallel_sum(total, &opts, &cancel)?;

    if config.json {
        println!("{}", report_to_json(&report)?);
    } else {
        let presenter = ReportPresenter::new(config.verbose, config.quiet);
        presenter.present(&report);
    }

    // Write to file if requested
    if let Some(ref path) = config.output {
        write_report(path, &report)?;
    }

    Ok(())
}

fn run_plot(kind: PlotKind) -> Result<()> {
    match kind {
        PlotKind::HeatingCurve => {
            let curve = demo::heating_curve()?;
            benchtop_plot::show_heating_curve(&curve)?;
        }
        PlotKind::XrdScan => {
            let scan = demo::xrd_scan()?;
            benchtop_plot::show_xrd_scan(&scan)?;
        }
    }
    Ok(())
}

fn ctrlc_handler(cancel: CancellationToken) {
    ctrlc::set_handler(move || {
        cancel.cancel();
    })
    .expect("Error setting Ctrl+C handler");
}
