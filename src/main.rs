use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    match one_rep_max::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("exiting with {err:?}");
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
