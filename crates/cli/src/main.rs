use std::process::ExitCode;

fn main() -> ExitCode {
    satsuma_cli::run()
}
