use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "abacus",
    about = "Interval merging, Caesar cipher, Indian digit grouping and minimum-loss search",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge two JSON files of labeled intervals
    Merge(MergeArgs),
    /// Encode or decode text with a Caesar cipher
    Caesar(CaesarArgs),
    /// Group the digits of a number the Indian way
    Currency(CurrencyArgs),
    /// Find the buy/sell pair with the smallest loss
    Trade(TradeArgs),
}

#[derive(Args)]
pub struct MergeArgs {
    /// First interval collection (JSON array)
    #[arg(required_unless_present = "demo")]
    pub first: Option<PathBuf>,
    /// Second interval collection (JSON array)
    #[arg(required_unless_present = "demo")]
    pub second: Option<PathBuf>,
    /// TOML file with merge settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Reject malformed and zero-width intervals
    #[arg(long)]
    pub strict: bool,
    /// Override the overlap threshold
    #[arg(long)]
    pub threshold: Option<f64>,
    /// Merge the bundled sample collections
    #[arg(long, conflicts_with_all = ["first", "second"])]
    pub demo: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum CaesarMode {
    /// Encode, then decode again to show the round trip
    Roundtrip,
    Encode,
    Decode,
}

#[derive(Args)]
pub struct CaesarArgs {
    #[arg(value_enum, default_value = "roundtrip")]
    pub mode: CaesarMode,
    /// Text to transform; read from stdin when omitted
    pub text: Option<String>,
    #[arg(
        short,
        long,
        default_value_t = abacus_cipher::DEFAULT_SHIFT,
        allow_negative_numbers = true
    )]
    pub shift: i32,
}

#[derive(Args)]
pub struct CurrencyArgs {
    /// Decimal number, e.g. 123456.7891
    #[arg(allow_hyphen_values = true)]
    pub number: String,
}

#[derive(Args)]
pub struct TradeArgs {
    /// Prices in day order; read from stdin when omitted
    #[arg(allow_negative_numbers = true)]
    pub prices: Vec<i64>,
    /// Use the exhaustive pairwise scan
    #[arg(long)]
    pub exhaustive: bool,
}
