//! Confirmation seam for destructive actions.
//!
//! Every delete goes through a blocking yes/no prompt before any backend call.

pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

/// Fixed answer, for callers that already asked the user
impl Confirm for bool {
    fn confirm(&self, _message: &str) -> bool {
        *self
    }
}
