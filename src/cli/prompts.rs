//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use super::quiet;

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Warning to stderr (yellow) - suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Error to stderr (red) - never suppressed.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Yes/no gate for `--clear`. `pre_confirmed` is the `-y` flag. A non-tty
/// stdin without `-y` declines: a wipe never happens silently.
pub fn confirm_clear(pre_confirmed: bool) -> bool {
    if pre_confirmed {
        return true;
    }
    if quiet::enabled() || !quiet::is_interactive() {
        return false;
    }

    eprint!("{YELLOW}Clear all saved passwords? [y/N]: {RESET}");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        return input == "y" || input == "yes";
    }
    false
}

/// Clipboard confirmation - suppressed in quiet mode.
pub fn clipboard_copied() {
    if !quiet::enabled() {
        println!("*** -COPIED TO CLIPBOARD- ***");
    }
}

/// Clipboard failure - surfaced, never fatal.
pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}

/// Saved-entry confirmation - suppressed in quiet mode.
pub fn entry_saved(label: &str) {
    if !quiet::enabled() {
        println!("Saved under \"{label}\"");
    }
}

pub fn entry_deleted(index: usize) {
    if !quiet::enabled() {
        println!("Deleted entry {index}");
    }
}

pub fn vault_cleared() {
    if !quiet::enabled() {
        println!("All saved passwords cleared");
    }
}
