//! Interactive menu loops.

use copypasta::{ClipboardContext, ClipboardProvider};
use rand::rngs::OsRng;
use zeroize::Zeroize;

use crate::pass::{self, GenerationOptions, strength};
use crate::store::{FileSlot, Vault};
use crate::terminal::{DIM, RED, RESET, clear, flush, print_error, reset_terminal};

use super::{get_editable_input, get_numeric_input};
use super::text::{enter_prompt, print_help, print_main_menu, print_saved_menu};

/// One-shot feedback line rendered under the menu box.
enum Status {
    Info(String),
    Error(String),
}

pub fn main_menu() {
    reset_terminal();
    clear();

    let mut options = GenerationOptions::default();
    let mut vault = Vault::open(FileSlot::at_default());
    let mut current: Option<String> = None;
    // InvalidOptions renders inline in the password slot, like the strength
    // line it replaces
    let mut inline_error: Option<String> = None;
    let mut status: Option<Status> = None;

    loop {
        render(&options, current.as_deref(), inline_error.as_deref(), status.take());

        let input = match get_editable_input(enter_prompt(), "") {
            Some(s) => s,
            None => {
                clear();
                continue;
            }
        };
        clear();

        match input.trim() {
            "" => {
                wipe(&mut current);
                match pass::generate(&options, &mut OsRng) {
                    Ok(p) => {
                        current = Some(p);
                        inline_error = None;
                    }
                    Err(e) => inline_error = Some(e.to_string()),
                }
            }
            "1" => {
                if let Some(len) = get_numeric_input("New password length", options.length) {
                    options.length = len;
                    options.clamp_length();
                }
                clear();
            }
            "2" => options.upper = !options.upper,
            "3" => options.lower = !options.lower,
            "4" => options.digits = !options.digits,
            "5" => options.symbols = !options.symbols,
            "c" => status = Some(copy_current(current.as_deref())),
            "s" => status = Some(save_current(&mut vault, current.as_deref())),
            "l" => {
                saved_menu(&mut vault);
                clear();
            }
            "h" => print_help(),
            "q" => break,
            _ => status = Some(Status::Error("Invalid option.".to_string())),
        }
    }

    wipe(&mut current);
}

fn render(
    options: &GenerationOptions,
    current: Option<&str>,
    inline_error: Option<&str>,
    status: Option<Status>,
) {
    let password_line = match (inline_error, current) {
        (Some(e), _) => format!("{RED}{e}{RESET}"),
        (None, Some(p)) => p.to_string(),
        (None, None) => format!("{DIM}(press Enter to generate){RESET}"),
    };
    let strength_line = match (inline_error, current) {
        (None, Some(p)) => {
            let tier = strength::rate(p);
            format!("{}{}{RESET}", tier.ansi(), tier.label())
        }
        _ => String::new(),
    };

    print_main_menu(options, &password_line, &strength_line);

    match status {
        Some(Status::Info(msg)) => println!("{msg}"),
        Some(Status::Error(msg)) => print_error(&msg),
        None => println!(),
    }
    flush();
}

fn copy_current(current: Option<&str>) -> Status {
    let Some(password) = current else {
        return Status::Error("Generate a password first.".to_string());
    };

    let result = ClipboardContext::new().and_then(|mut ctx| {
        ctx.set_contents(password.to_string())?;
        // Some clipboard backends only commit on a read-back; wipe the copy
        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        Ok(())
    });

    match result {
        Ok(()) => Status::Info("Copied to clipboard.".to_string()),
        Err(e) => Status::Error(format!("Clipboard error: {e}")),
    }
}

fn save_current(vault: &mut Vault<FileSlot>, current: Option<&str>) -> Status {
    let Some(password) = current else {
        return Status::Error("Generate a valid password first.".to_string());
    };

    let label = match get_editable_input("Label (e.g. Gmail, Twitter)", "") {
        Some(l) => l,
        None => return Status::Info("Save cancelled.".to_string()),
    };
    clear();

    match vault.save(&label, password) {
        Ok(()) => Status::Info(format!("Saved under \"{}\".", label.trim())),
        Err(e) => Status::Error(e.to_string()),
    }
}

fn saved_menu(vault: &mut Vault<FileSlot>) {
    let mut status: Option<Status> = None;

    loop {
        clear();
        print_saved_menu(vault.entries());
        match status.take() {
            Some(Status::Info(msg)) => println!("{msg}"),
            Some(Status::Error(msg)) => print_error(&msg),
            None => println!(),
        }
        flush();

        let input = match get_editable_input("Enter option", "") {
            Some(s) => s,
            None => break, // Esc - back to main menu
        };

        match input.trim() {
            "" => break,
            "x" => status = Some(clear_all(vault)),
            choice => match parse_delete(choice) {
                Some(n) => status = Some(delete_entry(vault, n)),
                None => status = Some(Status::Error("Invalid option.".to_string())),
            },
        }
    }
}

/// Parse "d <n>" (1-based entry number).
fn parse_delete(choice: &str) -> Option<usize> {
    let rest = choice.strip_prefix('d')?;
    rest.trim().parse().ok()
}

fn delete_entry(vault: &mut Vault<FileSlot>, n: usize) -> Status {
    let deleted = match n.checked_sub(1) {
        Some(i) => match vault.delete_at(i) {
            Ok(d) => d,
            Err(e) => return Status::Error(e.to_string()),
        },
        None => false,
    };

    if deleted {
        Status::Info(format!("Deleted entry {n}."))
    } else {
        Status::Error(format!("No saved entry {n}."))
    }
}

fn clear_all(vault: &mut Vault<FileSlot>) -> Status {
    let confirm = || {
        matches!(
            get_editable_input("Clear all saved passwords? (y/N)", "").as_deref(),
            Some("y") | Some("Y") | Some("yes")
        )
    };

    match vault.clear(confirm) {
        Ok(true) => Status::Info("All saved passwords cleared.".to_string()),
        Ok(false) => Status::Info("Nothing cleared.".to_string()),
        Err(e) => Status::Error(e.to_string()),
    }
}

fn wipe(current: &mut Option<String>) {
    if let Some(mut p) = current.take() {
        p.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::parse_delete;

    #[test]
    fn parse_delete_accepts_spaced_and_tight_forms() {
        assert_eq!(parse_delete("d 3"), Some(3));
        assert_eq!(parse_delete("d3"), Some(3));
        assert_eq!(parse_delete("d"), None);
        assert_eq!(parse_delete("x"), None);
        assert_eq!(parse_delete("delete"), None);
    }
}
