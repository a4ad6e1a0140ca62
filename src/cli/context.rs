//! CLI context - bundles generation options, flags, and the vault.

use copypasta::{ClipboardContext, ClipboardProvider};
use rand::rngs::OsRng;
use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::pass::{self, GenerationOptions, strength};
use crate::store::{FileSlot, Vault};
use crate::terminal::RESET;
use crate::tui::print_help;

/// Early exit - not an error, just done.
pub struct Done;

/// Application context for CLI mode.
pub struct Context {
    options: GenerationOptions,
    flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    /// Returns Err with the error message if parsing fails.
    pub fn new(args: Vec<String>) -> Result<Self, String> {
        let flags = super::parse(&args).map_err(|e| e.to_string())?;

        let mut options = GenerationOptions {
            upper: !flags.no_upper,
            lower: !flags.no_lower,
            digits: !flags.no_digits,
            symbols: !flags.no_symbols,
            ..Default::default()
        };
        if let Some(len) = flags.length {
            options.length = len;
            options.clamp_length();
        }

        Ok(Self { options, flags })
    }

    /// Run CLI. Returns `Err(Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Done> {
        self.handle_info_flags()?;
        quiet::set(self.flags.quiet);
        self.handle_vault_ops()?;
        self.generate_output();
        Ok(())
    }

    fn handle_info_flags(&self) -> Result<(), Done> {
        if self.flags.help {
            print_help();
            return Err(Done);
        }
        if self.flags.version {
            println!("passkeep {}", env!("CARGO_PKG_VERSION"));
            return Err(Done);
        }
        Ok(())
    }

    /// List/delete/clear operate on the vault and exit without generating.
    fn handle_vault_ops(&mut self) -> Result<(), Done> {
        if !self.flags.is_vault_op() {
            return Ok(());
        }

        let mut vault = Vault::open(FileSlot::at_default());

        if self.flags.list {
            if vault.is_empty() {
                println!("No passwords saved yet.");
            }
            for (i, entry) in vault.entries().iter().enumerate() {
                println!("{}) {}: {}", i + 1, entry.label, entry.password);
            }
        }

        if let Some(n) = self.flags.delete {
            // 1-based on the command line, matching --list numbering
            let deleted = match n.checked_sub(1) {
                Some(i) => vault.delete_at(i).unwrap_or_else(|e| {
                    prompts::error(&e.to_string());
                    false
                }),
                None => false,
            };
            if deleted {
                prompts::entry_deleted(n);
            } else {
                prompts::warn(&format!("No saved entry {n}"));
            }
        }

        if self.flags.clear {
            match vault.clear(|| prompts::confirm_clear(self.flags.yes)) {
                Ok(true) => prompts::vault_cleared(),
                Ok(false) => prompts::warn("Aborted - nothing cleared"),
                Err(e) => prompts::error(&e.to_string()),
            }
        }

        Err(Done)
    }

    /// Generate one password, then print/copy/save per flags.
    fn generate_output(&mut self) {
        let mut password = match pass::generate(&self.options, &mut OsRng) {
            Ok(p) => p,
            Err(e) => {
                prompts::error(&e.to_string());
                std::process::exit(2);
            }
        };

        let tier = strength::rate(&password);

        if let Some(label) = self.flags.save.take() {
            let mut vault = Vault::open(FileSlot::at_default());
            match vault.save(&label, &password) {
                Ok(()) => prompts::entry_saved(label.trim()),
                Err(e) => prompts::error(&e.to_string()),
            }
        }

        if self.flags.clipboard {
            copy_to_clipboard(&password);
        } else {
            println!("{password}");
        }

        if !quiet::enabled() {
            println!("Strength: {}{}{RESET}", tier.ansi(), tier.label());
        }

        password.zeroize();
    }
}

/// Copy to the system clipboard. Failure is surfaced as a warning and falls
/// back to printing; it never aborts the run.
fn copy_to_clipboard(password: &str) {
    match ClipboardContext::new() {
        Ok(mut ctx) => match ctx.set_contents(password.to_string()) {
            Ok(_) => {
                if let Ok(mut retrieved) = ctx.get_contents() {
                    retrieved.zeroize();
                }
                prompts::clipboard_copied();
            }
            Err(e) => {
                prompts::clipboard_error(&e.to_string());
                println!("{password}");
            }
        },
        Err(e) => {
            prompts::clipboard_error(&e.to_string());
            println!("{password}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::charset::{MAX_LENGTH, MIN_LENGTH};

    fn context(args: &[&str]) -> Context {
        let args: Vec<String> = std::iter::once("passkeep")
            .chain(args.iter().copied())
            .map(String::from)
            .collect();
        Context::new(args).unwrap()
    }

    #[test]
    fn requested_length_is_clamped_at_the_boundary() {
        assert_eq!(context(&["-l", "1000"]).options.length, MAX_LENGTH);
        assert_eq!(context(&["-l", "1"]).options.length, MIN_LENGTH);
        assert_eq!(context(&["-l", "0"]).options.length, MIN_LENGTH);
        assert_eq!(context(&["-l", "20"]).options.length, 20);
    }

    #[test]
    fn category_flags_map_onto_options() {
        let ctx = context(&["--no-symbols", "--no-upper"]);
        assert!(!ctx.options.symbols);
        assert!(!ctx.options.upper);
        assert!(ctx.options.lower);
        assert!(ctx.options.digits);
        assert_eq!(ctx.options.length, 16);
    }
}
