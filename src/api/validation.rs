use crate::error::{SlugError, SlugResult};

pub(super) fn require_non_empty(value: &str, field: &str) -> SlugResult<()> {
    if value.is_empty() {
        return Err(SlugError::InvalidArgument(format!(
            "{field} must be non-empty"
        )));
    }
    Ok(())
}

pub(super) fn validate_base(base: i64) -> SlugResult<i64> {
    if base < 1 {
        return Err(SlugError::InvalidArgument(format!(
            "y-axis base must be >= 1, got {base}"
        )));
    }
    Ok(base)
}
