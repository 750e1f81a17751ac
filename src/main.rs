use std::process::ExitCode;

fn main() -> ExitCode {
    match pedro_autogen::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(pedro_autogen::exit_code(&e))
        }
    }
}
