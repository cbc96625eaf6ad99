//! Facade crate for the publishers catalog and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `plist` with the `server` feature to get the HTTP routers.
//! - Call `plist::init` to build every feature slice from the loaded config.

pub use plist_domain as domain;
use plist_domain::config::ApiConfig;
use plist_domain::registry::InitializedSlice;
pub use plist_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        use plist_kernel::server::ApiState;
        pub use plist_kernel::server::router::system_router;
        use utoipa_axum::router::OpenApiRouter;

        /// System routes plus every feature's routes.
        pub fn api_router() -> OpenApiRouter<ApiState> {
            system_router().merge(crate::features::publishers::api::router())
        }
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use plist_publishers as publishers;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        "publishers",
        #[cfg(feature = "server")]
        "server",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize every feature slice.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(config: &ApiConfig) -> Result<Vec<InitializedSlice>, Box<dyn std::error::Error + Send + Sync>> {
    let slices = vec![features::publishers::init(config)?];

    Ok(slices)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publishers_is_always_enabled() {
        assert!(features::is_enabled("publishers"));
        assert!(!features::is_enabled("billing"));
    }

    #[test]
    fn init_registers_publishers_slice() {
        let slices = init(&ApiConfig::default()).unwrap();
        assert_eq!(slices.len(), 1);
        assert!(slices[0].downcast_ref::<features::publishers::Publishers>().is_some());
    }
}
