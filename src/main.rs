use std::process::ExitCode;

use chess_rules::console::run_console_loop;

fn main() -> ExitCode {
    #[cfg(feature = "logging")]
    env_logger::init();

    match run_console_loop() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
