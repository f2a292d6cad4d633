use crate::Result;
use arboard::Clipboard;
use parking_lot::Mutex;
use std::sync::LazyLock;
use terminal_banner::{Banner, Padding};

pub use passgen_cli_helpers::messages;

/// Global clipboard singleton.
pub(crate) static CLIPBOARD: LazyLock<Mutex<Option<Clipboard>>> =
    LazyLock::new(|| Mutex::new(Clipboard::new().ok()));

/// Place text on the clipboard.
///
/// Returns `false` when no clipboard is available.
pub(crate) fn set_clipboard_text(text: &str) -> Result<bool> {
    let mut clipboard = CLIPBOARD.lock();
    if let Some(clipboard) = clipboard.as_mut() {
        clipboard.set_text(text)?;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Copy text to the clipboard and report the outcome.
pub(crate) fn copy_to_clipboard(text: &str) -> Result<()> {
    if set_clipboard_text(text)? {
        messages::success("Copied to clipboard");
    } else {
        messages::warn("Clipboard is not available");
    }
    Ok(())
}

pub(crate) fn display_passphrase(heading: &str, passphrase: &str) {
    let banner = Banner::new()
        .padding(Padding::one())
        .text(heading.into())
        .text(passphrase.into())
        .render();
    println!("{}", banner);
}

/// Format a number of bits with one decimal place.
pub(crate) fn format_bits(bits: f64) -> String {
    format!("{:.1} bits", bits)
}
