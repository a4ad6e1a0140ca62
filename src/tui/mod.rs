//! Interactive TUI menus.

mod input;
mod menu;
mod text;

pub use input::*;
pub use text::print_help;

/// Run TUI interactive mode.
pub fn run() {
    menu::main_menu();
}
