//! Stage identifiers of the form `"<major>-<minor>"`.

use std::num::IntErrorKind;

/// Major stage assumed when a stage identifier cannot be parsed.
pub const DEFAULT_MAJOR_STAGE: i32 = 2;

/// Parse the major component of a stage identifier such as `"3-2"`.
///
/// Only the text before the first `-` is considered. Numbers outside the
/// `i32` range saturate. Returns `None` when it is not an integer.
pub fn major_stage(stage: &str) -> Option<i32> {
    match stage.split('-').next()?.trim().parse::<i32>() {
        Ok(major) => Some(major),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i32::MAX),
            IntErrorKind::NegOverflow => Some(i32::MIN),
            _ => None,
        },
    }
}

/// Major stage, falling back to [`DEFAULT_MAJOR_STAGE`] for malformed input.
pub fn major_stage_or_default(stage: &str) -> i32 {
    major_stage(stage).unwrap_or(DEFAULT_MAJOR_STAGE)
}
