use clap::Args;
use passgen_password::{
    generator::parse_word_count, EntropyBreakdown, GenerationRequest,
    GenerationResult, PassphraseGenerator, Recommendation, Strength,
};
use passgen_preferences::Settings;
use secrecy::ExposeSecret;
use serde::Serialize;

use crate::{
    commands::{flag, Context},
    helpers::{copy_to_clipboard, display_passphrase, messages},
    Result,
};

#[derive(Args, Debug)]
pub struct PhraseArgs {
    /// Number of words, clamped to 1-12.
    #[clap(short, long, allow_hyphen_values = true)]
    words: Option<String>,

    /// Separator between words.
    #[clap(short, long)]
    separator: Option<String>,

    /// Maximum length in characters, zero removes the limit.
    #[clap(short, long)]
    max_length: Option<usize>,

    /// Affix symbols to words.
    #[clap(long, overrides_with = "no_symbols")]
    symbols: bool,

    /// Do not affix symbols to words.
    #[clap(long, overrides_with = "symbols")]
    no_symbols: bool,

    /// Number of passphrases to generate.
    #[clap(short, long, default_value = "1")]
    count: usize,

    /// Copy the first passphrase to the clipboard.
    #[clap(long)]
    copy: bool,

    /// Print JSON output.
    #[clap(long)]
    json: bool,

    /// Remember these options for later runs.
    #[clap(long)]
    save: bool,
}

impl PhraseArgs {
    /// Request from the arguments falling back to saved settings.
    fn request(&self, settings: &Settings) -> GenerationRequest {
        let saved = settings.to_request();
        let word_count = self
            .words
            .as_deref()
            .map(parse_word_count)
            .unwrap_or(saved.word_count);
        GenerationRequest::new(word_count)
            .separator(self.separator.clone().unwrap_or(saved.separator))
            .max_length(self.max_length.or(saved.max_length))
            .symbols(flag(self.symbols, self.no_symbols).unwrap_or(saved.symbols))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PhraseOutput<'a> {
    passphrase: &'a str,
    length: usize,
    used_word_count: usize,
    requested_word_count: usize,
    within_limit: bool,
    strength: Strength,
    breakdown: EntropyBreakdown,
    recommendation: Recommendation,
}

impl<'a> From<&'a GenerationResult> for PhraseOutput<'a> {
    fn from(value: &'a GenerationResult) -> Self {
        let breakdown = value.breakdown();
        Self {
            passphrase: value.passphrase.expose_secret(),
            length: value.len(),
            used_word_count: value.used_word_count,
            requested_word_count: value.requested_word_count,
            within_limit: value.within_limit(),
            strength: breakdown.strength(),
            breakdown,
            recommendation: Recommendation::new(&breakdown),
        }
    }
}

async fn save_settings(
    context: &Context,
    request: &GenerationRequest,
) -> Result<()> {
    context
        .store()
        .await?
        .save(&Settings::from(request))
        .await?;
    tracing::debug!(
        path = %context.settings_path().await?.display(),
        "settings::save",
    );
    Ok(())
}

pub async fn run(context: &Context, args: PhraseArgs) -> Result<()> {
    let settings = context.settings().await;
    let request = args.request(&settings);

    if args.save {
        if let Err(e) = save_settings(context, &request).await {
            messages::warn(format!("could not save settings: {}", e));
        }
    }

    let corpus = context.corpus().await;
    let mut generator = PassphraseGenerator::new(corpus);
    let results: Vec<GenerationResult> = (0..args.count.max(1))
        .map(|_| generator.generate(&request))
        .collect();

    if args.json {
        let output: Vec<PhraseOutput<'_>> =
            results.iter().map(PhraseOutput::from).collect();
        serde_json::to_writer_pretty(std::io::stdout(), &output)?;
        println!();
    } else {
        for result in &results {
            if !result.within_limit() {
                if let Some(max_length) = result.max_length {
                    messages::warn(format!(
                        "no passphrase fits within {} characters",
                        max_length
                    ));
                }
            }
            display_passphrase(
                &result.summary(),
                result.passphrase.expose_secret(),
            );
        }
    }

    if args.copy {
        if let Some(result) = results.first() {
            copy_to_clipboard(result.passphrase.expose_secret())?;
        }
    }

    Ok(())
}
