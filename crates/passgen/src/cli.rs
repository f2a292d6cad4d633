use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use crate::{
    commands::{
        entropy, password, phrase, settings, Context, EntropyArgs,
        PasswordArgs, PhraseArgs, SettingsCommand,
    },
    CommandTree, Result,
};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Passgen {
    /// Settings file.
    #[clap(long, env = "PASSGEN_SETTINGS", hide_env_values = true)]
    settings: Option<PathBuf>,

    /// Word list file, the last token of each line is a word.
    #[clap(long, env = "PASSGEN_WORDLIST", hide_env_values = true)]
    wordlist: Option<PathBuf>,

    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate memorable passphrases.
    #[clap(alias = "gen")]
    Phrase(PhraseArgs),
    /// Generate random passwords.
    #[clap(alias = "pw")]
    Password(PasswordArgs),
    /// Print the entropy breakdown for a passphrase.
    Entropy(EntropyArgs),
    /// View and clear saved settings.
    #[clap(alias = "prefs")]
    Settings {
        #[clap(subcommand)]
        cmd: SettingsCommand,
    },
}

pub async fn run() -> Result<()> {
    // Support JSON output of command tree
    if std::env::var("PASSGEN_CLI_JSON").ok().is_some() {
        let cmd = Passgen::command();
        let tree: CommandTree = (&cmd).into();
        tree.write_json(std::io::stdout())?;
        std::process::exit(0);
    }

    let args = Passgen::parse();
    let context = Context::new(args.settings, args.wordlist);

    match args.cmd {
        Command::Phrase(args) => phrase::run(&context, args).await?,
        Command::Password(args) => password::run(args).await?,
        Command::Entropy(args) => entropy::run(&context, args).await?,
        Command::Settings { cmd } => settings::run(&context, cmd).await?,
    }

    Ok(())
}
