#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros for the infrastructure.
//! This crate removes the boilerplate around the async runtime bootstrap,
//! API data models, `OpenAPI`-documented handlers, error enums and feature slices.
//!
//! Examples below are `ignore`d to avoid compiling in this crate; the `tests/ui`
//! fixtures show complete, compiling usages.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Attribute macro to bootstrap the specialized Tokio runtime.
///
/// Transforms an `async fn main` into a standard `fn main` that builds a
/// pre-configured runtime for the selected profile.
///
/// # Arguments
///
/// * `high_performance` - Optimized for server environments.
/// * `memory_efficient` - Optimized for low-footprint environments.
/// * `default` - Worker threads auto-detected from available parallelism.
///
/// # Examples
///
/// ```rust,ignore
/// #[plist_runtime::main(high_performance)]
/// async fn main() -> anyhow::Result<()> {
///     Ok(())
/// }
/// ```
#[proc_macro_attribute]
pub fn main(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::runtime::expand_main(args.into(), input).into()
}

/// Attribute macro defining a standard API data model.
///
/// # Injected Behaviors
///
/// * **Derives**: `Debug`, `Serialize` and `Deserialize` when missing.
/// * **`OpenAPI`**: `utoipa::ToSchema` when the consuming crate enables `server`.
/// * **Serde Policy**: `rename_all = "camelCase"` and, unless disabled with
///   `deny_unknown_fields = false`, `deny_unknown_fields`.
///
/// # Example
///
/// ```rust,ignore
/// use plist_derive::api_model;
///
/// #[api_model(deny_unknown_fields = false)]
/// pub struct Domain {
///     pub domain: String,
///     pub desktop_ads: serde_json::Value,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Attribute macro to bridge Axum handlers with `OpenAPI` documentation.
///
/// Accepts standard `utoipa::path` arguments (`get`, `post`, `path = "..."`,
/// `request_body = ...`, `responses(...)`, `tag = ...`). The `utoipa::path`
/// attribute is only emitted when the consuming crate enables `server`.
///
/// # Example
///
/// ```rust,ignore
/// #[api_handler(
///     get,
///     path = "/api/data",
///     responses((status = OK, body = Vec<Publisher>)),
///     tag = PUBLISHERS_TAG
/// )]
/// pub async fn list_handler(State(state): State<ApiState>) -> impl IntoResponse {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Attribute macro for domain-specific error enums.
///
/// # Generated Items
///
/// * `#[derive(Debug, thiserror::Error)]` when missing.
/// * `<ErrorName>Ext` trait with `.context(...)` for `Result<T, ErrorName>` and,
///   for every variant with a source field, `Result<T, SourceError>`.
/// * `From<SourceError>` for variants with a source field.
/// * `From<&'static str>` and `From<String>` when an `Internal` variant is present.
/// * A private `format_context` helper for the `#[error(...)]` strings.
///
/// # Requirements
///
/// Variants must use named fields. Variants carrying a source must also carry
/// `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[plist_derive::plist_error]
/// pub enum SeedError {
///     #[error("Seed I/O error{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal fault{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &Path) -> Result<String, SeedError> {
///     std::fs::read_to_string(path).context("Reading seed file")
/// }
/// ```
#[proc_macro_attribute]
pub fn plist_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_derive(input).into()
}

/// Attribute macro to define a feature slice handle.
///
/// The annotated struct becomes `<Name>Inner`; `<Name>` is generated as a cheap
/// `Arc` handle that derefs to the inner state and implements `FeatureSlice`
/// for registration in the API state.
///
/// # Example
/// ```rust,ignore
/// #[plist_derive::plist_slice]
/// pub struct Publishers {
///     catalog: parking_lot::RwLock<Catalog>,
/// }
///
/// let slice = Publishers::new(PublishersInner { catalog: RwLock::new(catalog) });
/// ```
#[proc_macro_attribute]
pub fn plist_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
