//! Kernel utilities shared across slices.
//! Keep this crate lightweight: layered config loading and, behind the `server`
//! feature, the shared API state plus the system router.
//!
//! ## Config loading
//! ```rust,no_run
//! use plist_kernel::config::load_config;
//! use plist_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("server")).unwrap();
//! ```
pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

pub use plist_domain as domain;
