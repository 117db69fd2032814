use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(err) = larder::run() {
        log::debug!("command failed: {err:?}");
        eprintln!("error: {err:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
