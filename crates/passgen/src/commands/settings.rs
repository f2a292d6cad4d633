use clap::Subcommand;

use crate::{commands::Context, helpers::messages::success, Result};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the saved settings.
    Show,
    /// Print the path to the settings file.
    Path,
    /// Remove the saved settings.
    Clear,
}

pub async fn run(context: &Context, cmd: Command) -> Result<()> {
    match cmd {
        Command::Show => match context.store().await?.load().await {
            Some(settings) => {
                serde_json::to_writer_pretty(std::io::stdout(), &settings)?;
                println!();
            }
            None => println!("No saved settings"),
        },
        Command::Path => {
            println!("{}", context.settings_path().await?.display());
        }
        Command::Clear => {
            context.store().await?.clear().await?;
            success("Settings cleared");
        }
    }
    Ok(())
}
