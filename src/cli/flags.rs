#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub no_upper: bool,
    pub no_lower: bool,
    pub no_digits: bool,
    pub no_symbols: bool,
    pub list: bool,
    pub clear: bool,
    pub yes: bool,
    pub length: Option<usize>,
    pub save: Option<String>,
    pub delete: Option<usize>,
}

impl CliFlags {
    /// True if the invocation operates on the vault instead of generating.
    pub fn is_vault_op(&self) -> bool {
        self.list || self.clear || self.delete.is_some()
    }
}
