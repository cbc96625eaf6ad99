//! Common imports for feature slices.

pub use crate::config::{ConfigError, load_config};
pub use plist_domain::config::ApiConfig;
pub use plist_domain::registry::{FeatureSlice, InitializedSlice};

#[cfg(feature = "server")]
pub use crate::server::{ApiState, ApiStateError};
