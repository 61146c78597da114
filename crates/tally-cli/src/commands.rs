use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use colored::Colorize;
use serde_json::json;
use tally_rules::{breakdown, validate, ScoreBreakdown};
use tally_server::{ServerConfig, TallyServer};
use tally_types::Receipt;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Score(args) => cmd_score(args, cli.format),
        Command::Validate(args) => cmd_validate(args, cli.format),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<ExitCode> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    let runtime = tokio::runtime::Runtime::new().context("cannot start async runtime")?;
    runtime.block_on(TallyServer::new(config).serve())?;
    Ok(ExitCode::SUCCESS)
}

fn cmd_score(args: ReceiptArgs, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let receipt = read_receipt(&args.file)?;
    if let Err(err) = validate(&receipt) {
        anyhow::bail!("receipt is invalid: {err}");
    }
    let scored = breakdown(&receipt);
    match format {
        OutputFormat::Text => print!("{}", render_score(&receipt, &scored)),
        OutputFormat::Json => println!("{}", score_json(&scored)),
    }
    Ok(ExitCode::SUCCESS)
}

fn cmd_validate(args: ReceiptArgs, format: OutputFormat) -> anyhow::Result<ExitCode> {
    let receipt = read_receipt(&args.file)?;
    let outcome = validate(&receipt);
    match format {
        OutputFormat::Text => match &outcome {
            Ok(()) => println!("{} Receipt is valid.", "✓".green().bold()),
            Err(err) => println!("{} Receipt is invalid: {}", "✗".red().bold(), err),
        },
        OutputFormat::Json => {
            let value = match &outcome {
                Ok(()) => json!({ "valid": true }),
                Err(err) => json!({ "valid": false, "error": err.to_string() }),
            };
            println!("{value}");
        }
    }
    Ok(if outcome.is_ok() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

fn read_receipt(path: &Path) -> anyhow::Result<Receipt> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("cannot read receipt from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?
    };
    serde_json::from_str(&text).context("receipt is not valid JSON")
}

fn render_score(receipt: &Receipt, scored: &ScoreBreakdown) -> String {
    let mut out = format!(
        "{} {} {}\n",
        receipt.retailer.bold(),
        receipt.purchase_date.dimmed(),
        receipt.purchase_time.dimmed()
    );
    for c in &scored.contributions {
        let points = c.points.to_string();
        let points = if c.points > 0 { points.green() } else { points.dimmed() };
        out.push_str(&format!("  {:<26}{:>6}\n", c.rule, points));
    }
    out.push_str(&format!("  {:<26}{:>6}\n", "total".bold(), scored.total().to_string().yellow().bold()));
    out
}

fn score_json(scored: &ScoreBreakdown) -> serde_json::Value {
    json!({
        "points": scored.total(),
        "rules": scored.contributions,
    })
}
