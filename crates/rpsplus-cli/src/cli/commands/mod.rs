use super::args::*;

pub mod play;

use super::render;
use crate::exit_codes::SUCCESS;

pub async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Play(args) => play::run(args).await,
        Command::Rules => {
            print!("{}", render::rules_text());
            Ok(SUCCESS)
        }
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(SUCCESS)
        }
    }
}
