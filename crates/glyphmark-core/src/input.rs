//! Validation of the short/full app names an icon is generated from.

use thiserror::Error;

/// Maximum number of characters in a short name.
pub const MAX_SHORT_NAME_LEN: usize = 3;

/// Prefix of generated application identifiers.
pub const APP_ID_PREFIX: &str = "app.capgo.plugin";

/// Input validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required arguments")]
    MissingArguments,
    #[error("Short name cannot be empty")]
    EmptyShortName,
    #[error("Short name must be at most 3 characters")]
    ShortNameTooLong,
    #[error("Full name cannot be empty")]
    EmptyFullName,
}

/// A validated icon request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRequest {
    /// Upper-cased short name, 1 to 3 characters, no whitespace.
    pub short_name: String,
    /// Trimmed descriptive name.
    pub full_name: String,
}

impl IconRequest {
    /// Validate a short name and the words of a full name.
    pub fn new<S: AsRef<str>>(short_name: &str, full_name_parts: &[S]) -> Result<Self, ValidationError> {
        let short_name: String = short_name
            .to_uppercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        if short_name.is_empty() {
            return Err(ValidationError::EmptyShortName);
        }
        if short_name.chars().count() > MAX_SHORT_NAME_LEN {
            return Err(ValidationError::ShortNameTooLong);
        }

        let full_name = full_name_parts
            .iter()
            .map(|part| part.as_ref())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string();
        if full_name.is_empty() {
            return Err(ValidationError::EmptyFullName);
        }

        Ok(Self {
            short_name,
            full_name,
        })
    }

    /// Validate raw positional arguments: short name followed by full-name words.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self, ValidationError> {
        match args {
            [short_name, rest @ ..] if !rest.is_empty() => Self::new(short_name.as_ref(), rest),
            _ => Err(ValidationError::MissingArguments),
        }
    }

    /// Characters of the short name, in order.
    pub fn letters(&self) -> Vec<char> {
        self.short_name.chars().collect()
    }

    /// Full name in PascalCase, e.g. `"home indicator"` -> `"HomeIndicator"`.
    pub fn pascal_name(&self) -> String {
        pascal_case(&self.full_name)
    }

    /// Bundle/package identifier for the example app.
    pub fn app_id(&self) -> String {
        format!("{}.{}", APP_ID_PREFIX, self.pascal_name())
    }

    /// User-visible name of the example app.
    pub fn display_name(&self) -> String {
        format!("{} example app", self.full_name)
    }
}

/// Split on anything non-alphanumeric and capitalize each word.
pub fn pascal_case(value: &str) -> String {
    value
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => {
                    first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
                }
                None => String::new(),
            }
        })
        .collect()
}
