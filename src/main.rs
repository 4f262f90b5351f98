use memcheck_runner::{cli, infra::logging};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    match cli::run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
