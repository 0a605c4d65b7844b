//! Shape checks for create submissions.
//!
//! Both create actions report failures as a field-keyed map; every failing
//! field is reported, not only the first.

use qrvault_domain::action::FieldErrors;
use qrvault_domain::color::HexColor;

use crate::domain::types::{
    CreateGeneratedSubmission, CreateScannedSubmission, NewGeneratedCode, NewScannedCode,
    normalize_text,
};

pub const DATA_REQUIRED: &str = "URL or text is required.";
pub const SCANNED_DATA_REQUIRED: &str = "Scanned data cannot be empty.";
pub const INVALID_COLOR: &str = "Invalid color format.";
pub const COLOR_REQUIRED: &str = "Color is required.";

pub fn validate_create_generated(
    submission: CreateGeneratedSubmission,
) -> Result<NewGeneratedCode, FieldErrors> {
    let mut errors = FieldErrors::new();

    let data = required_data(submission.data, "data", DATA_REQUIRED, &mut errors);
    let foreground_color = color(submission.foreground_color, "foregroundColor", &mut errors);
    let background_color = color(submission.background_color, "backgroundColor", &mut errors);

    match (data, foreground_color, background_color) {
        (Some(data), Some(foreground_color), Some(background_color)) if errors.is_empty() => {
            Ok(NewGeneratedCode {
                data,
                label: normalize_text(submission.label),
                foreground_color,
                background_color,
            })
        }
        _ => Err(errors),
    }
}

pub fn validate_create_scanned(
    submission: CreateScannedSubmission,
) -> Result<NewScannedCode, FieldErrors> {
    let mut errors = FieldErrors::new();
    match required_data(submission.data, "data", SCANNED_DATA_REQUIRED, &mut errors) {
        Some(data) => Ok(NewScannedCode {
            data,
            note: normalize_text(submission.note),
        }),
        None => Err(errors),
    }
}

/// `data` is kept byte-for-byte; only emptiness is checked.
fn required_data(
    data: Option<String>,
    field: &str,
    message: &str,
    errors: &mut FieldErrors,
) -> Option<String> {
    match data {
        Some(data) if !data.is_empty() => Some(data),
        _ => {
            push(errors, field, message);
            None
        }
    }
}

fn color(value: Option<String>, field: &str, errors: &mut FieldErrors) -> Option<HexColor> {
    match value.map(HexColor::try_from) {
        Some(Ok(color)) => Some(color),
        Some(Err(_)) => {
            push(errors, field, INVALID_COLOR);
            None
        }
        None => {
            push(errors, field, COLOR_REQUIRED);
            None
        }
    }
}

fn push(errors: &mut FieldErrors, field: &str, message: &str) {
    errors
        .entry(field.to_owned())
        .or_default()
        .push(message.to_owned());
}
