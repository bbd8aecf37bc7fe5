use clap::Parser;
use std::process::ExitCode;
use subnet_calculator::cmd::{run, Args};
use subnet_calculator::logging;

fn main() -> ExitCode {
    // Do as little as possible in main.rs as it can't contain any tests
    let args = Args::parse();
    if let Err(e) = logging::init(logging::level_from_verbosity(args.verbose)) {
        eprintln!("Error initializing logging: {e}");
    }
    log::info!("#Start main()");

    let mut stdout = std::io::stdout().lock();
    match run(&args, &mut stdout) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            log::error!("Error writing output: {e}");
            eprintln!("Error writing output: {e}");
            ExitCode::from(2)
        }
    }
}
