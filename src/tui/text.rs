//! Menu and help text rendering.

use crate::pass::GenerationOptions;
use crate::pass::charset::{MAX_LENGTH, MIN_LENGTH};
use crate::store::SavedEntry;
use crate::terminal::{
    RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_opt, box_rule, box_top, flush,
};

pub fn enter_prompt() -> &'static str {
    "Enter menu option (or press Enter to generate)"
}

pub fn print_main_menu(options: &GenerationOptions, password_line: &str, strength_line: &str) {
    box_top("Passkeep");
    box_line_center("Esc/CTRL+Q: cancel input | CTRL+U: clear input");
    box_line("");
    box_line(&format!("  Password: {password_line}"));
    box_line(&format!("  Strength: {strength_line}"));
    box_line("");
    box_line(&format!("{UNDERLINE}Options{RESET}:"));
    box_line(&format!(
        "  1) Length: {}  ({MIN_LENGTH}-{MAX_LENGTH})",
        options.length
    ));
    box_line(&format!("  2) Uppercase: {}", options.upper));
    box_line(&format!("  3) Lowercase: {}", options.lower));
    box_line(&format!("  4) Digits: {}", options.digits));
    box_line(&format!("  5) Symbols: {}", options.symbols));
    box_line("");
    box_rule();
    box_line("     c) copy  |  s) save with label  |  l) saved passwords");
    box_line("     h) help  |  q) quit");
    box_bottom();
}

pub fn print_saved_menu(entries: &[SavedEntry]) {
    box_top("Saved Passwords");
    box_line("");
    if entries.is_empty() {
        box_line("  No passwords saved yet.");
    }
    for (i, entry) in entries.iter().enumerate() {
        box_line(&format!("  {}) {}: {}", i + 1, entry.label, entry.password));
    }
    box_line("");
    box_rule();
    box_line("     d <n>) delete entry n  |  x) clear all  |  Enter) back");
    box_bottom();
}

pub fn print_help() {
    box_top("Passkeep");
    box_line_center("Password generator with a labeled local vault");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Opens a menu to set");
    box_line("     options, generate, and manage saved passwords.");
    box_line("  2) Client: Pass flags directly (e.g., -l 20 -b) to generate");
    box_line("     a password without the menu.");
    box_line("");
    box_line("USAGE:");
    box_line("  passkeep [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Password length, clamped to 4-64 (default: 16)");
    box_opt("      --no-upper", "Drop uppercase letters from the pool");
    box_opt("      --no-lower", "Drop lowercase letters from the pool");
    box_opt("      --no-digits", "Drop digits from the pool");
    box_opt("      --no-symbols", "Drop symbols from the pool");
    box_line("");
    box_line(" Output:");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Print only the password");
    box_line("");
    box_line(" Vault:");
    box_opt("  -s, --save <LABEL>", "Save the generated password under LABEL");
    box_opt("      --list", "List saved passwords");
    box_opt("      --delete <N>", "Delete saved entry N (as numbered by --list)");
    box_opt("      --clear", "Delete all saved passwords (asks first)");
    box_opt("  -y, --yes", "Answer yes to the --clear confirmation");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passkeep                    Interactive menu");
    box_line("  passkeep -l 20              One 20-character password");
    box_line("  passkeep --no-symbols -b    Alphanumeric, to clipboard");
    box_line("  passkeep -s Gmail           Generate and save as \"Gmail\"");
    box_line("  passkeep --delete 2         Remove the second saved entry");
    box_line("");
    box_bottom();
    println!();
    flush();
}
