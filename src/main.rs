use std::process::ExitCode;

use charcount::cli;

fn main() -> ExitCode {
    // An interrupt exits with the same status as a usage error.
    if ctrlc::set_handler(|| std::process::exit(1)).is_err() {
        eprintln!("warning: could not install interrupt handler");
    }

    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
