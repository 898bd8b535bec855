use crate::cli::args::{OutputFormat, PlayArgs};
use crate::cli::render;
use crate::exit_codes::SUCCESS;
use anyhow::Context;
use rpsplus_core::engine::Engine;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

pub async fn run(args: PlayArgs) -> anyhow::Result<i32> {
    let cfg = args.resolve_config()?;
    let mut engine = Engine::from_config(&cfg).context("failed to set up the referee")?;
    tracing::info!(
        provider = cfg.provider.as_str(),
        model = %cfg.model(),
        mode = ?cfg.judge_mode,
        rounds = cfg.max_rounds,
        "game started"
    );

    let json = args.format == OutputFormat::Json;
    if !json {
        print!("{}", render::banner());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    for i in 1..=cfg.max_rounds {
        prompt(&format!("\nRound {i} - Enter your move: "), json)?;

        let Some(line) = lines.next_line().await.context("failed to read stdin")? else {
            tracing::debug!(round = i, "stdin closed, ending game early");
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            prompt("Empty input - skipping turn\n", json)?;
            continue;
        }

        let round = engine.play_round(input).await;
        if json {
            println!("{}", serde_json::to_string(&round)?);
        } else {
            print!("{}", render::round(&round));
        }
    }

    let result = engine.get_final_result();
    if json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        print!("{}", render::final_result(&result));
    }
    Ok(SUCCESS)
}

/// Prompts and notices go to stderr in JSON mode so stdout stays machine-readable.
fn prompt(text: &str, json: bool) -> anyhow::Result<()> {
    if json {
        let mut err = std::io::stderr();
        write!(err, "{text}")?;
        err.flush()?;
    } else {
        let mut out = std::io::stdout();
        write!(out, "{text}")?;
        out.flush()?;
    }
    Ok(())
}
