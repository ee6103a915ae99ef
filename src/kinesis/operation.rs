use crate::error::ErrorCode;

use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

/// A remote operation: its input shape, its output shape, and the error codes
/// it maps to typed failures.
pub trait Operation: Serialize + Validate + Send + Sync {
    const NAME: &'static str;
    const ERRORS: &'static [ErrorCode];

    type Output: DeserializeOwned;

    /// Region requested for this call only.
    fn region(&self) -> Option<&str>;
}
