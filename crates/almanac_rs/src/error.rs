//! Error type for the almanac API.

use almanac_core::ConfigError;
use almanac_search::SearchError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum AlmanacError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Search(#[from] SearchError),
    /// UTC offset that is not finite or not strictly within ±24 hours.
    #[error("invalid UTC offset: {0} hours")]
    InvalidOffset(f64),
}
