//! Terminal output utilities: box drawing and ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

pub const RESET: &str = "\x1b[0m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[38;5;9m";

/// Clear screen and scrollback, cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to a sane state.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

/// Print error message in red.
pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

// Box drawing, fixed width. Content lines are padded by display width so
// ANSI-colored content still lines up.

pub const BOX_WIDTH: usize = 74;

pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let lead = format!("─ {} ", title);
        println!("┌{}{}┐", lead, "─".repeat(BOX_WIDTH - 2 - lead.chars().count()));
    }
}

pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

pub fn box_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

pub fn box_line(content: &str) {
    let inner = BOX_WIDTH - 4;
    let width = console_width(content);
    let pad = inner.saturating_sub(width);
    println!("│ {}{} │", content, " ".repeat(pad));
}

pub fn box_line_center(content: &str) {
    let inner = BOX_WIDTH - 4;
    let width = console_width(content);
    let pad = inner.saturating_sub(width);
    let left = pad / 2;
    println!("│ {}{}{} │", " ".repeat(left), content, " ".repeat(pad - left));
}

/// Help-style option line: flag column plus word-wrapped description.
pub fn box_opt(flag: &str, desc: &str) {
    let inner = BOX_WIDTH - 4;
    let flag_col = 26;
    let desc_col = inner - flag_col;

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in desc.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + 1 + word.len() <= desc_col {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }

    for (i, line) in lines.iter().enumerate() {
        let left = if i == 0 { flag } else { "" };
        box_line(&format!("{:flag_col$}{}", left, line));
    }
}

/// Display width ignoring ANSI escape sequences.
fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::console_width;

    #[test]
    fn console_width_skips_escape_sequences() {
        assert_eq!(console_width("plain"), 5);
        assert_eq!(console_width("\x1b[38;2;255;107;107mWeak\x1b[0m"), 4);
    }
}
