//! The skill entity and the validation rules applied by the HTTP controllers.
//!
//! Validation lives here (not in the storage layer) so both storage backends
//! stay dumb persistence: by the time `insert` runs, the record is already
//! known to be well-formed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Maximum accepted length for a skill name, in characters.
pub const MAX_NAME_LEN: usize = 255;

/// Inclusive rating bounds.
pub const MIN_RATE: i64 = 0;
pub const MAX_RATE: i64 = 10;

/// Largest id the delete endpoint accepts (2^53 - 1, the biggest integer a
/// JSON client can represent exactly; ids above it never exist anyway).
pub const MAX_SAFE_ID: i64 = 9_007_199_254_740_991;

/// A single managed skill record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    /// Assigned by the storage layer at insert time; never caller-supplied,
    /// never reused within a storage instance's lifetime.
    pub skill_id: i64,
    pub name: String,
    pub rate: i32,
    pub updated_at: DateTime<Utc>,
}

/// Why a candidate `{name, rate}` was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillValidationError {
    NameMissing,
    NameEmpty,
    NameTooLong { len: usize },
    RateMissing,
    RateNotAnInteger,
    RateOutOfRange { rate: i64 },
}

impl std::fmt::Display for SkillValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkillValidationError::NameMissing => write!(f, "name is required"),
            SkillValidationError::NameEmpty => write!(f, "name must not be empty"),
            SkillValidationError::NameTooLong { len } => {
                write!(f, "name exceeds {} characters (got {})", MAX_NAME_LEN, len)
            }
            SkillValidationError::RateMissing => write!(f, "rate is required"),
            SkillValidationError::RateNotAnInteger => write!(f, "rate must be an integer"),
            SkillValidationError::RateOutOfRange { rate } => {
                write!(f, "rate must be between {} and {} (got {})", MIN_RATE, MAX_RATE, rate)
            }
        }
    }
}

impl std::error::Error for SkillValidationError {}

/// Validates a candidate name.
///
/// Length is counted in characters, not bytes, so 255 multibyte characters
/// pass. Content is otherwise unrestricted: whitespace-only names,
/// punctuation, and Unicode are all accepted.
pub fn validate_name(name: Option<&str>) -> Result<&str, SkillValidationError> {
    let name = name.ok_or(SkillValidationError::NameMissing)?;
    if name.is_empty() {
        return Err(SkillValidationError::NameEmpty);
    }
    let len = name.chars().count();
    if len > MAX_NAME_LEN {
        return Err(SkillValidationError::NameTooLong { len });
    }
    Ok(name)
}

/// Validates a candidate rate.
///
/// The wire value arrives as a JSON number; fractional values are rejected
/// rather than truncated.
pub fn validate_rate(rate: Option<f64>) -> Result<i32, SkillValidationError> {
    let rate = rate.ok_or(SkillValidationError::RateMissing)?;
    if !rate.is_finite() || rate.fract() != 0.0 {
        return Err(SkillValidationError::RateNotAnInteger);
    }
    let rate = rate as i64;
    if !(MIN_RATE..=MAX_RATE).contains(&rate) {
        return Err(SkillValidationError::RateOutOfRange { rate });
    }
    Ok(rate as i32)
}

/// Parses a path-supplied skill id.
///
/// Two-step pipeline: the string must be decimal digits only (no sign, no
/// dot, no whitespace), then the parsed value must be positive and within
/// the safe-integer bound. Both failures collapse to the same user-visible
/// "invalid id" outcome.
pub fn parse_skill_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Overflow of i64 counts as out of range.
    let id = raw.parse::<i64>().ok()?;
    if id <= 0 || id > MAX_SAFE_ID {
        return None;
    }
    Some(id)
}
