//! Error types for event searches.

use almanac_core::ConfigError;
use thiserror::Error;

/// Errors from rise/set, eclipse and apsis searches.
///
/// A body that never rises, or an eclipse that is not visible, is not an
/// error; those outcomes are part of the result types.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// The scan was stopped through its cancellation token.
    #[error("search cancelled")]
    Cancelled,
    #[error(transparent)]
    Config(#[from] ConfigError),
}
