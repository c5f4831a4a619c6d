use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use coldread::{
    format_report, summarize, BenchmarkError, Config, HostCacheInvalidator, MonotonicClock,
    RawFileProbe, TrialRunner,
};

#[derive(clap::Parser, Debug)]
#[command(
    name = "coldread",
    about = "Benchmark cold-cache sequential read throughput of a matrix file"
)]
struct Args {
    /// Matrix file to benchmark.
    path: PathBuf,

    /// Number of cold-cache trials (minimum 2).
    #[clap(long, default_value_t = coldread::DEFAULT_TRIALS)]
    trials: usize,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // clap renders usage with the error; errors go to stderr.
            let _ = e.print();
            return ExitCode::from(1);
        }
    };

    match run(&args) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> Result<String, BenchmarkError> {
    let invalidator = HostCacheInvalidator::for_host()?;
    let config = Config::new().trials(args.trials);
    let mut runner = TrialRunner::new(MonotonicClock::new(), invalidator, config)?;

    let mut probe = RawFileProbe::new();
    let trials = runner.run(&mut probe, &args.path)?;
    let stats = summarize(&trials)?;

    Ok(format_report(&trials, &stats))
}
