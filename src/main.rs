use std::process::ExitCode;

use env_logger::Env;
use log::error;
use singly_linked::self_test;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match self_test::run() {
        Ok(()) => {
            println!("-- all tests pass --");
            ExitCode::SUCCESS
        },
        Err(failure) => {
            error!("{failure}");
            ExitCode::FAILURE
        },
    }
}
