//! Validation helpers that produce consistent errors

use super::types::{Error, Result};

/// Check that `actual` equals `expected`
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Check that `actual` is a non-zero multiple of `block`
pub fn block_multiple(context: &'static str, actual: usize, block: usize) -> Result<()> {
    if actual == 0 || actual % block != 0 {
        let expected = (actual / block + 1) * block;
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Check an arbitrary parameter condition
pub fn parameter(condition: bool, context: &'static str, message: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidParameter {
            context,
            message: message.to_string(),
        });
    }
    Ok(())
}
