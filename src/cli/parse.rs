use thiserror::Error;

use super::CliFlags;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-y" | "--yes" => flags.yes = true,
            "--no-upper" => flags.no_upper = true,
            "--no-lower" => flags.no_lower = true,
            "--no-digits" => flags.no_digits = true,
            "--no-symbols" => flags.no_symbols = true,
            "--list" => flags.list = true,
            "--clear" => flags.clear = true,
            "-l" | "--length" => {
                i += 1;
                if i >= args.len() {
                    return Err(ParseError::MissingValue("--length".to_string()));
                }
                flags.length = Some(
                    args[i]
                        .parse()
                        .map_err(|_| ParseError::InvalidNumber(args[i].clone()))?,
                );
            }
            "-s" | "--save" => {
                i += 1;
                if i >= args.len() {
                    return Err(ParseError::MissingValue("--save".to_string()));
                }
                flags.save = Some(args[i].clone());
            }
            "--delete" => {
                i += 1;
                if i >= args.len() {
                    return Err(ParseError::MissingValue("--delete".to_string()));
                }
                flags.delete = Some(
                    args[i]
                        .parse()
                        .map_err(|_| ParseError::InvalidNumber(args[i].clone()))?,
                );
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &[&str]) -> Vec<String> {
        std::iter::once("passkeep")
            .chain(s.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn bare_invocation_parses_to_defaults() {
        assert_eq!(parse(&args(&[])).unwrap(), CliFlags::default());
    }

    #[test]
    fn length_and_category_flags() {
        let flags = parse(&args(&["-l", "20", "--no-symbols", "-b"])).unwrap();
        assert_eq!(flags.length, Some(20));
        assert!(flags.no_symbols);
        assert!(flags.clipboard);
        assert!(!flags.no_upper);
    }

    #[test]
    fn save_takes_the_label() {
        let flags = parse(&args(&["-s", "Gmail"])).unwrap();
        assert_eq!(flags.save.as_deref(), Some("Gmail"));
    }

    #[test]
    fn vault_ops_are_recognized() {
        assert!(parse(&args(&["--list"])).unwrap().is_vault_op());
        assert!(parse(&args(&["--delete", "2"])).unwrap().is_vault_op());
        assert!(parse(&args(&["--clear", "-y"])).unwrap().is_vault_op());
        assert!(!parse(&args(&["-l", "12"])).unwrap().is_vault_op());
    }

    #[test]
    fn bad_number_is_an_error() {
        assert_eq!(
            parse(&args(&["-l", "abc"])),
            Err(ParseError::InvalidNumber("abc".to_string()))
        );
    }

    #[test]
    fn missing_value_is_an_error() {
        assert_eq!(
            parse(&args(&["--save"])),
            Err(ParseError::MissingValue("--save".to_string()))
        );
    }

    #[test]
    fn unknown_argument_is_an_error() {
        assert_eq!(
            parse(&args(&["--frobnicate"])),
            Err(ParseError::UnknownArg("--frobnicate".to_string()))
        );
    }
}
