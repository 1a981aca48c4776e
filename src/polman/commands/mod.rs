//! Business logic for each admin operation: validate inputs, build the
//! invocation, run it, decode what comes back.
//!
//! Every function takes the runner and session explicitly and returns plain
//! data. Nothing in here prints, prompts, or touches global state.

pub mod catalogs;
pub mod principal_roles;
pub mod principals;

use crate::error::{PolmanError, Result};

/// Uniform pre-flight check for user-supplied names. Runs before any process
/// is spawned, for every mutating action.
pub(crate) fn require(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PolmanError::Validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}
