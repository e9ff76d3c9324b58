//! modulemd - inspect, check and normalize module metadata documents

use std::process::ExitCode;

use modulemd::cli;
use modulemd::ui::output;

fn main() -> ExitCode {
    match cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
