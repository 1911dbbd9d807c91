use anyhow::Context;
use clap::Parser;
use imgpress::cli::Args;
use imgpress::logger::{self, Verbosity};
use imgpress::report::{render_result_line, render_summary};
use imgpress::runner::{start_run, BatchEvent};
use imgpress::select::expand_inputs;
use imgpress::CompressionRequest;
use imgpress::{detail, error, info};
use indicatif::{ProgressBar, ProgressStyle};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.quiet {
        Verbosity::Quiet
    } else if args.verbose {
        Verbosity::Verbose
    } else {
        Verbosity::Normal
    };
    logger::set_verbosity(level);

    let selected = expand_inputs(&args.inputs, args.recursive);
    let request = CompressionRequest::new(selected, args.quality)?;
    let total = request.len();

    let handle = start_run(request).context("cannot start compression batch")?;
    info!("🚀 Compressing {} file(s) at quality {}", total, args.quality);

    let progress = if args.quiet {
        ProgressBar::hidden()
    } else {
        ProgressBar::new(100)
    };
    progress.set_style(ProgressStyle::default_bar());

    let mut summary = None;
    for event in handle.events() {
        match event {
            BatchEvent::Progress(percent) => progress.set_position(percent as u64),
            BatchEvent::ItemFailed { message, .. } => {
                progress.suspend(|| error!("{}", message));
            }
            BatchEvent::Completed(outcome) => {
                progress.finish_and_clear();
                for result in &outcome.results {
                    detail!("{}", render_result_line(result));
                }
                summary = Some(render_summary(&outcome));
            }
        }
    }
    handle.join();

    if let Some(summary) = summary {
        info!("{}", summary);
    }

    Ok(())
}
