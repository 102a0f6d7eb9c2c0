use anyhow::Context;
use std::process::ExitCode;

use pathfacts::module::{self, Response};

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let response = match pathfacts::cli::parse_args() {
        Ok(request) => module::run(&request),
        Err(err) => Response::failure(&err),
    };

    let json = response
        .to_json()
        .context("could not serialize the result envelope")?;
    println!("{json}");

    Ok(if response.is_failure() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}
