use std::time::Duration;

use crate::foundation::error::{ModelError, ModelResult};

/// Parse a playlist interval expression such as `"5m"`, `"30s"` or `"1h 30m"`.
///
/// Units follow `humantime`: `ms`, `s`, `m`, `h`, `d`, `w`, `M` (months) and `y`.
/// A zero-length interval is rejected since a playlist could never advance.
pub fn parse_interval(expr: &str) -> ModelResult<Duration> {
    let trimmed = expr.trim();
    if trimmed.is_empty() {
        return Err(ModelError::validation("interval must be non-empty"));
    }
    let d = humantime::parse_duration(trimmed)
        .map_err(|e| ModelError::validation(format!("invalid interval '{trimmed}': {e}")))?;
    if d.is_zero() {
        return Err(ModelError::validation(format!(
            "interval '{trimmed}' must be > 0"
        )));
    }
    Ok(d)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/duration.rs"]
mod tests;
