use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use xxiv::{input::parse_numbers, Solver, DEFAULT_TARGET};

/// Reads four integers from stdin and prints every distinct way to combine
/// them into the target with + - * /.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    #[arg(short, long, default_value_t = DEFAULT_TARGET, allow_negative_numbers = true)]
    target: i64,
}

fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Only initialize if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn run(args: &Args) -> xxiv::Result<()> {
    let input = io::read_to_string(io::stdin().lock())?;
    let numbers = parse_numbers(&input)?;

    let mut solver = Solver::new(args.target);
    let mut out = io::stdout().lock();
    let mut written = Ok(());
    solver.search(numbers, |solution| {
        if written.is_ok() {
            written = writeln!(out, "{solution}");
        }
    });
    written?;
    if solver.stats().reported == 0 {
        writeln!(out, "No solutions!")?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}
