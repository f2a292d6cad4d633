use clap::Args;
use passgen_password::{PasswordBuilder, PasswordResult, Strength};
use secrecy::ExposeSecret;
use serde::Serialize;

use crate::{
    helpers::{copy_to_clipboard, display_passphrase, format_bits},
    Result,
};

#[derive(Args, Debug)]
pub struct PasswordArgs {
    /// Number of characters.
    #[clap(short, long, default_value = "16")]
    length: usize,

    /// Exclude uppercase letters.
    #[clap(long)]
    no_upper: bool,

    /// Exclude lowercase letters.
    #[clap(long)]
    no_lower: bool,

    /// Exclude digits.
    #[clap(long)]
    no_digits: bool,

    /// Include symbols.
    #[clap(long)]
    symbols: bool,

    /// Number of passwords to generate.
    #[clap(short, long, default_value = "1")]
    count: usize,

    /// Copy the first password to the clipboard.
    #[clap(long)]
    copy: bool,

    /// Print JSON output.
    #[clap(long)]
    json: bool,
}

impl PasswordArgs {
    fn builder(&self) -> PasswordBuilder {
        let mut builder = PasswordBuilder::new(self.length);
        if !self.no_lower {
            builder = builder.lower();
        }
        if !self.no_upper {
            builder = builder.upper();
        }
        if !self.no_digits {
            builder = builder.numeric();
        }
        if self.symbols {
            builder = builder.symbols();
        }
        builder
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PasswordOutput<'a> {
    password: &'a str,
    bits: f64,
    strength: Strength,
    measured_bits: f64,
}

impl<'a> From<&'a PasswordResult> for PasswordOutput<'a> {
    fn from(value: &'a PasswordResult) -> Self {
        Self {
            password: value.password.expose_secret(),
            bits: value.bits,
            strength: Strength::from_bits(value.bits),
            measured_bits: value.measured_bits(),
        }
    }
}

pub async fn run(args: PasswordArgs) -> Result<()> {
    let builder = args.builder();
    let results = builder.many(args.count.max(1))?;

    if args.json {
        let output: Vec<PasswordOutput<'_>> =
            results.iter().map(PasswordOutput::from).collect();
        serde_json::to_writer_pretty(std::io::stdout(), &output)?;
        println!();
    } else {
        for result in &results {
            let heading = format!(
                "{} characters · {} ({}) · pattern estimate {}",
                builder.len(),
                format_bits(result.bits),
                Strength::from_bits(result.bits),
                format_bits(result.measured_bits()),
            );
            display_passphrase(&heading, result.password.expose_secret());
        }
    }

    if args.copy {
        if let Some(result) = results.first() {
            copy_to_clipboard(result.password.expose_secret())?;
        }
    }

    Ok(())
}
