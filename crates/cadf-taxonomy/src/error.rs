// error.rs — Error types for taxonomy decoding.

use thiserror::Error;

/// Errors raised when an input string falls outside a closed taxonomy.
///
/// Both variants carry the offending input for diagnostics. These are
/// input errors, not transient failures — there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaxonomyError {
    /// The string is not a known action path.
    #[error("unsupported action path: '{0}'")]
    UnsupportedAction(String),

    /// The string is not a known resource type path.
    #[error("unsupported resource type path: '{0}'")]
    UnsupportedResourceType(String),
}
