use std::io::{self, Write};
use std::process::ExitCode;

use log::LevelFilter;

use sort_bench_rs::{report, BenchConfig, BenchError};

fn main() -> ExitCode {
    // Fixed level, the binary reads no configuration from the environment.
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .init();

    match bench() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn bench() -> Result<(), BenchError> {
    let report = sort_bench_rs::run(&BenchConfig::default())?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    report::write_report(&mut out, &report)?;
    out.flush()?;

    Ok(())
}
