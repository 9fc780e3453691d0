use anyhow::Context;
use colored::Colorize;
use serde_json::json;

use abacus_cipher::Direction;
use abacus_interval::{IntervalMerger, MergeConfig, MergeReport, Validation, ZeroWidthPolicy};
use abacus_trade::Trade;

use crate::cli::*;
use crate::input;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let format = cli.format;
    let output = match cli.command {
        Command::Merge(args) => cmd_merge(args, format)?,
        Command::Caesar(args) => cmd_caesar(args, format)?,
        Command::Currency(args) => cmd_currency(args, format)?,
        Command::Trade(args) => cmd_trade(args, format)?,
    };
    println!("{output}");
    Ok(())
}

fn merge_config(args: &MergeArgs) -> anyhow::Result<MergeConfig> {
    let mut config = match &args.config {
        Some(path) => input::load_config(path)?,
        None => MergeConfig::default(),
    };
    if args.strict {
        config.validation = Validation::Strict;
        config.zero_width = ZeroWidthPolicy::Reject;
    }
    if let Some(threshold) = args.threshold {
        config.threshold = threshold;
    }
    Ok(config)
}

fn cmd_merge(args: MergeArgs, format: OutputFormat) -> anyhow::Result<String> {
    let merger = IntervalMerger::new(merge_config(&args)?)?;

    let (first, second) = match (&args.first, &args.second) {
        (Some(a), Some(b)) if !args.demo => (input::load_intervals(a)?, input::load_intervals(b)?),
        _ => input::demo_intervals(),
    };

    let report = merger.merge_with_report(first, second)?;
    render_merge(&report, format)
}

fn render_merge(report: &MergeReport, format: OutputFormat) -> anyhow::Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(&report.intervals)?);
    }

    let mut lines: Vec<String> = report
        .intervals
        .iter()
        .map(|iv| {
            let values: Vec<String> = iv.values.iter().map(|v| v.to_string()).collect();
            format!(
                "{} [{}]",
                format!("[{}, {}]", iv.left(), iv.right()).cyan(),
                values.join(", ")
            )
        })
        .collect();
    lines.push(format!(
        "{} {} intervals in, {} out, {} merged",
        "✓".green(),
        report.input_count,
        report.intervals.len().to_string().bold(),
        report.merge_events
    ));
    Ok(lines.join("\n"))
}

fn cmd_caesar(args: CaesarArgs, format: OutputFormat) -> anyhow::Result<String> {
    let text = match args.text {
        Some(text) => text,
        None => input::read_stdin()?.trim_end_matches(&['\r', '\n'][..]).to_string(),
    };
    Ok(render_caesar(&text, args.shift, args.mode, format))
}

fn render_caesar(text: &str, shift: i32, mode: CaesarMode, format: OutputFormat) -> String {
    let single = |direction: Direction| abacus_cipher::caesar(text, shift, direction);

    match (mode, format) {
        (CaesarMode::Roundtrip, OutputFormat::Text) => {
            let encoded = abacus_cipher::encode(text, shift);
            let decoded = abacus_cipher::decode(&encoded, shift);
            format!(
                "{} {text}\n{} {encoded}\n{} {decoded}",
                "Input:".bold(),
                "Encoded:".bold(),
                "Decoded:".bold()
            )
        }
        (CaesarMode::Roundtrip, OutputFormat::Json) => {
            let encoded = abacus_cipher::encode(text, shift);
            let decoded = abacus_cipher::decode(&encoded, shift);
            json!({ "input": text, "shift": shift, "encoded": encoded, "decoded": decoded })
                .to_string()
        }
        (CaesarMode::Encode, OutputFormat::Text) => single(Direction::Encode),
        (CaesarMode::Decode, OutputFormat::Text) => single(Direction::Decode),
        (CaesarMode::Encode, OutputFormat::Json) => {
            let encoded = single(Direction::Encode);
            json!({ "input": text, "shift": shift, "encoded": encoded }).to_string()
        }
        (CaesarMode::Decode, OutputFormat::Json) => {
            let decoded = single(Direction::Decode);
            json!({ "input": text, "shift": shift, "decoded": decoded }).to_string()
        }
    }
}

fn cmd_currency(args: CurrencyArgs, format: OutputFormat) -> anyhow::Result<String> {
    let formatted = abacus_currency::format_indian(&args.number)?;
    Ok(match format {
        OutputFormat::Text => formatted,
        OutputFormat::Json => json!({ "input": args.number, "formatted": formatted }).to_string(),
    })
}

fn cmd_trade(args: TradeArgs, format: OutputFormat) -> anyhow::Result<String> {
    let prices = if args.prices.is_empty() {
        abacus_trade::parse_prices(&input::read_stdin()?).context("reading prices from stdin")?
    } else {
        args.prices
    };

    let trade = if args.exhaustive {
        abacus_trade::min_loss(&prices)
    } else {
        abacus_trade::min_loss_sorted(&prices)
    };
    render_trade(trade, format)
}

fn render_trade(trade: Option<Trade>, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match (trade, format) {
        (Some(t), OutputFormat::Text) => format!(
            "Buy in year {} at {}, sell in year {} at {}, loss {}",
            t.buy_index + 1,
            t.buy.to_string().yellow(),
            t.sell_index + 1,
            t.sell.to_string().yellow(),
            t.loss.to_string().red().bold()
        ),
        (None, OutputFormat::Text) => "No loss-making buy/sell pair.".dimmed().to_string(),
        (trade, OutputFormat::Json) => serde_json::to_string(&trade)?,
    })
}
