mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use flags::CliFlags;
pub use parse::parse;

/// Run flag-driven CLI mode.
pub fn run(args: Vec<String>) {
    match context::Context::new(args) {
        Ok(mut ctx) => {
            let _ = ctx.run();
        }
        Err(e) => {
            prompts::error(&e);
            std::process::exit(2);
        }
    }
}
