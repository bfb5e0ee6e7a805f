use std::path::PathBuf;
use std::process::ExitCode;

use faktur_cli::{Config, Outcome, USAGE};

fn main() -> ExitCode {
    let config = Config::from_env();
    faktur_observability::tracing::init(config.log_format);
    for warning in &config.warnings {
        tracing::warn!("{warning}; using default");
    }

    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let Some(input) = args.next() else {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    };
    let output = args.next();

    let today = chrono::Local::now().date_naive();
    match faktur_cli::run(&input, output.as_deref(), &config, today) {
        Ok(Outcome::Printed(path)) => {
            println!("{}", path.display());
            ExitCode::SUCCESS
        }
        Ok(Outcome::Rejected(message)) => {
            eprintln!("{message}");
            ExitCode::from(1)
        }
        Err(e) => {
            tracing::error!(error = %format!("{e:#}"), "cannot process invoice form");
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}
