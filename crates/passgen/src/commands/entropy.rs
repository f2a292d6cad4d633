use clap::Args;
use passgen_password::{
    generator::parse_word_count, EntropyBreakdown, Recommendation, Strength,
    SYMBOLS,
};
use serde::Serialize;

use crate::{
    commands::{flag, Context},
    helpers::format_bits,
    Result,
};

#[derive(Args, Debug)]
pub struct EntropyArgs {
    /// Number of words, clamped to 1-12.
    #[clap(short, long, allow_hyphen_values = true)]
    words: Option<String>,

    /// Include symbol entropy.
    #[clap(long, overrides_with = "no_symbols")]
    symbols: bool,

    /// Exclude symbol entropy.
    #[clap(long, overrides_with = "symbols")]
    no_symbols: bool,

    /// Print JSON output.
    #[clap(long)]
    json: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EntropyOutput {
    word_count: usize,
    #[serde(flatten)]
    breakdown: EntropyBreakdown,
    strength: Strength,
    recommendation: Recommendation,
}

pub async fn run(context: &Context, args: EntropyArgs) -> Result<()> {
    let saved = context.settings().await.to_request();
    let word_count = args
        .words
        .as_deref()
        .map(parse_word_count)
        .unwrap_or(saved.word_count);
    let symbols = flag(args.symbols, args.no_symbols).unwrap_or(saved.symbols);

    let corpus = context.corpus().await;
    let breakdown = corpus.breakdown(word_count, symbols, SYMBOLS.len());
    let recommendation = Recommendation::new(&breakdown);

    if args.json {
        let output = EntropyOutput {
            word_count,
            breakdown,
            strength: breakdown.strength(),
            recommendation,
        };
        serde_json::to_writer_pretty(std::io::stdout(), &output)?;
        println!();
        return Ok(());
    }

    println!("{:<16}{:>12}", "Words", format_bits(breakdown.words_bits));
    println!("{:<16}{:>12}", "Capitals", format_bits(breakdown.cap_bits));
    println!("{:<16}{:>12}", "Digits", format_bits(breakdown.digits_bits));
    println!("{:<16}{:>12}", "Symbols", format_bits(breakdown.symbols_bits));
    println!(
        "{:<16}{:>12} ({})",
        "Total",
        format_bits(breakdown.total),
        breakdown.strength()
    );
    println!("{:<16}{:>12}", "Word list", breakdown.list_size);
    println!();
    println!("{}", recommendation);

    Ok(())
}
