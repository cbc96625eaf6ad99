//! HTTP surface of the publishers slice.

mod extract;
mod handlers;

pub use extract::ApiJson;

use plist_kernel::server::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Publishers routes, resolved against the slice registered in [`ApiState`].
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::list_handler))
        .routes(routes!(handlers::add_publisher_handler))
        .routes(routes!(handlers::add_domain_handler))
        .routes(routes!(handlers::update_domain_handler))
}
