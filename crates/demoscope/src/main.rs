//! The demoscope binary: opens the widget demo viewer and runs it until the
//! window is closed.

use std::process::ExitCode;

use demoscope::ViewerOptions;

fn main() -> ExitCode {
    env_logger::init();

    match demoscope::run(ViewerOptions::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("demoscope exited with error: {err}");
            ExitCode::FAILURE
        }
    }
}
