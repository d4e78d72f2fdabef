use crate::error::Result;

/// Check an input against its contract before any computation runs.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
