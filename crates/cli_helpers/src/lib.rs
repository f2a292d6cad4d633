//! Shared output helpers for the passgen executable.

pub mod messages;

use serde::{Deserialize, Serialize};
use std::io::Write;

/// Subcommand layout of the executable printed as JSON when
/// `PASSGEN_CLI_JSON` is set, for shell completion and docs.
#[derive(Debug, Serialize, Deserialize)]
pub struct CommandTree {
    /// Name of the command.
    pub name: String,
    /// Short description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    /// Alternative names accepted on the command line.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
    /// Subcommands.
    pub commands: Vec<CommandTree>,
}

impl CommandTree {
    /// Write the tree as pretty printed JSON followed by a newline.
    pub fn write_json<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)
    }
}

impl From<&clap::Command> for CommandTree {
    fn from(value: &clap::Command) -> Self {
        CommandTree {
            name: value.get_name().to_string(),
            about: value.get_about().map(|about| about.to_string()),
            aliases: value.get_all_aliases().map(String::from).collect(),
            commands: value.get_subcommands().map(|c| c.into()).collect(),
        }
    }
}
