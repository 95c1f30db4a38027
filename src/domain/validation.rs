//! Field checks applied to raw step input before anything is assembled.
//!
//! Every check takes the raw string exactly as the user typed it and either
//! passes or returns a [`FieldError`] carrying the message shown to the user.

use crate::domain::error::FieldError;
use crate::domain::wildcard;
use crate::domain::Platform;

pub const MSG_REQUIRED: &str = "Please fill!";
pub const MSG_INVALID_PATH: &str = "Invalid path!";
pub const MSG_INVALID_EXPERIMENT: &str = "Invalid experiment's name!";
pub const MSG_NOT_A_NUMBER: &str = "Please enter a number!";
pub const MSG_NOT_POSITIVE: &str = "Must be positive!";
pub const MSG_SINGLE_CHAR: &str = "Must be a single character";

/// Reject an empty value.
pub fn check_required(field: &str, value: &str) -> Result<(), FieldError> {
    if value.is_empty() { Err(FieldError::new(field, MSG_REQUIRED)) } else { Ok(()) }
}

/// Reject strings that cannot name a path on the target platform.
pub fn check_path(field: &str, value: &str, platform: Platform) -> Result<(), FieldError> {
    if is_valid_path(value, platform) { Ok(()) } else { Err(FieldError::new(field, MSG_INVALID_PATH)) }
}

/// A required path: non-empty and syntactically valid.
pub fn check_required_path(field: &str, value: &str, platform: Platform) -> Result<(), FieldError> {
    check_required(field, value)?;
    check_path(field, value, platform)
}

/// An optional path: empty passes.
pub fn check_optional_path(field: &str, value: &str, platform: Platform) -> Result<(), FieldError> {
    if value.is_empty() { Ok(()) } else { check_path(field, value, platform) }
}

fn is_valid_path(value: &str, platform: Platform) -> bool {
    if value.contains('\0') {
        return false;
    }
    if !platform.is_windows() {
        return true;
    }

    let rest = match value.as_bytes() {
        [drive, b':', ..] if drive.is_ascii_alphabetic() => &value[2..],
        _ => value,
    };
    !rest.chars().any(|c| matches!(c, '<' | '>' | '"' | '|' | '?' | '*' | ':') || c.is_control())
}

/// Required, and every space-separated wildcard pattern must compile.
pub fn check_experiment_name(field: &str, value: &str) -> Result<(), FieldError> {
    check_required(field, value)?;
    wildcard::compile_all(value)
        .map(|_| ())
        .map_err(|_| FieldError::new(field, MSG_INVALID_EXPERIMENT))
}

/// Optional strictly positive integer. Returns the parsed value, 0 when empty.
pub fn check_positive_number(field: &str, value: &str) -> Result<i64, FieldError> {
    if value.is_empty() {
        return Ok(0);
    }
    let number: i64 =
        value.trim().parse().map_err(|_| FieldError::new(field, MSG_NOT_A_NUMBER))?;
    if number <= 0 {
        return Err(FieldError::new(field, MSG_NOT_POSITIVE));
    }
    Ok(number)
}

/// At most one character.
pub fn check_single_char(field: &str, value: &str) -> Result<(), FieldError> {
    if value.chars().count() > 1 { Err(FieldError::new(field, MSG_SINGLE_CHAR)) } else { Ok(()) }
}

/// Raw CSV export group as entered.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvGroupInput<'a> {
    pub directory: &'a str,
    pub reports: &'a str,
    pub separator: &'a str,
    pub quote: &'a str,
    pub no_quote: bool,
    pub decimal_separator: &'a str,
}

impl CsvGroupInput<'_> {
    fn has_sub_options(&self) -> bool {
        !self.reports.is_empty()
            || !self.separator.is_empty()
            || !self.quote.is_empty()
            || self.no_quote
            || !self.decimal_separator.is_empty()
    }
}

/// Sub-options need a directory; a directory must be a valid path.
pub fn check_csv_directory(
    field: &str,
    input: &CsvGroupInput<'_>,
    platform: Platform,
) -> Result<(), FieldError> {
    if input.directory.is_empty() {
        return if input.has_sub_options() {
            Err(FieldError::new(field, MSG_REQUIRED))
        } else {
            Ok(())
        };
    }
    check_path(field, input.directory, platform)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(result: Result<(), FieldError>) -> Option<String> {
        result.err().map(|e| e.message)
    }

    #[test]
    fn required_rejects_empty() {
        assert_eq!(message(check_required("project_path", "")).as_deref(), Some(MSG_REQUIRED));
        assert!(check_required("project_path", "proj").is_ok());
    }

    #[test]
    fn posix_paths_only_reject_nul() {
        assert!(check_path("p", "a b/c?*<>", Platform::Posix).is_ok());
        assert!(check_path("p", "a\0b", Platform::Posix).is_err());
    }

    #[test]
    fn windows_paths_reject_reserved_characters() {
        assert!(check_path("p", "C:\\Users\\ci\\test test", Platform::Windows).is_ok());
        assert!(check_path("p", "reports\\junit", Platform::Windows).is_ok());
        for bad in ["a<b", "a>b", "a|b", "a\"b", "a?b", "a*b", "dir\\a:b", "a\tb"] {
            assert_eq!(
                message(check_path("p", bad, Platform::Windows)).as_deref(),
                Some(MSG_INVALID_PATH),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn optional_path_accepts_empty() {
        assert!(check_optional_path("html", "", Platform::Windows).is_ok());
        assert!(check_optional_path("html", "a|b", Platform::Windows).is_err());
    }

    #[test]
    fn experiment_name_is_required_and_compiled() {
        assert_eq!(message(check_experiment_name("e", "")).as_deref(), Some(MSG_REQUIRED));
        assert!(check_experiment_name("e", "smoke* regression? [x]").is_ok());
    }

    #[test]
    fn numbers_must_be_positive_integers() {
        assert_eq!(check_positive_number("n", ""), Ok(0));
        assert_eq!(check_positive_number("n", "42"), Ok(42));
        assert_eq!(check_positive_number("n", "0").unwrap_err().message, MSG_NOT_POSITIVE);
        assert_eq!(check_positive_number("n", "-5").unwrap_err().message, MSG_NOT_POSITIVE);
        assert_eq!(check_positive_number("n", "ten").unwrap_err().message, MSG_NOT_A_NUMBER);
        assert_eq!(check_positive_number("n", "1.5").unwrap_err().message, MSG_NOT_A_NUMBER);
    }

    #[test]
    fn single_char_counts_characters_not_bytes() {
        assert!(check_single_char("sep", "").is_ok());
        assert!(check_single_char("sep", ";").is_ok());
        assert!(check_single_char("sep", "€").is_ok());
        assert_eq!(message(check_single_char("sep", ";;")).as_deref(), Some(MSG_SINGLE_CHAR));
    }

    #[test]
    fn csv_sub_options_require_directory() {
        let input = CsvGroupInput { separator: ";", ..Default::default() };
        assert_eq!(
            message(check_csv_directory("csv", &input, Platform::Posix)).as_deref(),
            Some(MSG_REQUIRED)
        );

        let flag_only = CsvGroupInput { no_quote: true, ..Default::default() };
        assert!(check_csv_directory("csv", &flag_only, Platform::Posix).is_err());

        assert!(check_csv_directory("csv", &CsvGroupInput::default(), Platform::Posix).is_ok());

        let with_dir = CsvGroupInput { directory: "out", separator: ";", ..Default::default() };
        assert!(check_csv_directory("csv", &with_dir, Platform::Posix).is_ok());
    }
}
