//! Presence and width checks shared by the CV commands.

pub(super) const NAME_MAX_LEN: usize = 150;
pub(super) const EMAIL_MAX_LEN: usize = 255;
pub(super) const TITLE_MAX_LEN: usize = 150;
pub(super) const SKILL_NAME_MAX_LEN: usize = 100;
pub(super) const SKILL_LEVEL_MAX_LEN: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TextFieldError {
    Empty,
    TooLong(usize),
}

/// Trims `value` and rejects it when blank or wider than the column.
pub(super) fn required(value: &str, max_len: usize) -> Result<String, TextFieldError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(TextFieldError::Empty);
    }

    if value.chars().count() > max_len {
        return Err(TextFieldError::TooLong(max_len));
    }

    Ok(value.to_string())
}

/// Blank optional text is stored as NULL.
pub(super) fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
