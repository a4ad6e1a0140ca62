//! Raw-mode line editing for menu prompts.

use crossterm::event::{Event, KeyCode, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Read a line with basic editing (arrows, Home/End, CTRL+U clear).
/// Returns `None` on Esc/CTRL+Q. CTRL+C exits the process.
pub fn get_editable_input(prompt: &str, initial: &str) -> Option<String> {
    let mut input: Vec<char> = initial.chars().collect();
    let mut cursor = input.len(); // 0-based insertion point

    let _guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(initial.to_string()),
    };

    redraw(prompt, &input, cursor);

    let cancelled = loop {
        match read() {
            Ok(Event::Key(key)) => {
                match key.code {
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        // process::exit skips destructors; restore the
                        // terminal before leaving
                        reset_terminal();
                        println!();
                        std::process::exit(0);
                    }
                    KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        break true;
                    }
                    KeyCode::Esc => break true,
                    KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        input.clear();
                        cursor = 0;
                    }
                    KeyCode::Enter => break false,
                    KeyCode::Backspace => {
                        if cursor > 0 {
                            cursor -= 1;
                            input.remove(cursor);
                        }
                    }
                    KeyCode::Delete => {
                        if cursor < input.len() {
                            input.remove(cursor);
                        }
                    }
                    KeyCode::Left => cursor = cursor.saturating_sub(1),
                    KeyCode::Right => {
                        if cursor < input.len() {
                            cursor += 1;
                        }
                    }
                    KeyCode::Home => cursor = 0,
                    KeyCode::End => cursor = input.len(),
                    KeyCode::Char(c) => {
                        input.insert(cursor, c);
                        cursor += 1;
                    }
                    _ => {}
                }
                redraw(prompt, &input, cursor);
            }
            Err(_) => break false,
            _ => {}
        }
    };

    // Drop the guard to leave raw mode BEFORE the newline
    drop(_guard);
    println!();

    if cancelled {
        None
    } else {
        Some(input.into_iter().collect())
    }
}

/// Numeric prompt: same editor, digits kept, anything unparsable cancels.
pub fn get_numeric_input(prompt: &str, initial: usize) -> Option<usize> {
    let raw = get_editable_input(prompt, &initial.to_string())?;
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

fn redraw(prompt: &str, input: &[char], cursor: usize) {
    let text: String = input.iter().collect();
    print!("\r\x1b[2K{}: {}", prompt, text);
    // 1-based column: prompt + ": " + cursor offset
    print!("\x1b[{}G", prompt.chars().count() + 3 + cursor);
    flush();
}
