use super::derived_trait_names;
use proc_macro2::TokenStream;
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ExprLit, ItemFn, ItemStruct, Lit, Meta, MetaNameValue, Token};

/// Expands the `#[api_model]` attribute macro.
pub fn expand_api_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    let deny_unknown = match parse_deny_unknown(args) {
        Ok(value) => value.unwrap_or(true),
        Err(err) => return err.to_compile_error(),
    };

    let derives = derived_trait_names(&input.attrs);
    let missing: Vec<TokenStream> = [
        (!derives.contains("Debug")).then(|| quote! { Debug }),
        (!derives.contains("Serialize")).then(|| quote! { ::serde::Serialize }),
        (!derives.contains("Deserialize")).then(|| quote! { ::serde::Deserialize }),
    ]
    .into_iter()
    .flatten()
    .collect();
    let derive_attr =
        if missing.is_empty() { quote! {} } else { quote! { #[derive(#(#missing),*)] } };

    let to_schema_attr = if derives.contains("ToSchema") {
        quote! {}
    } else {
        quote! { #[cfg_attr(feature = "server", derive(::utoipa::ToSchema))] }
    };

    let (has_rename, has_deny) = existing_serde_flags(&input.attrs);
    let rename_attr =
        if has_rename { quote! {} } else { quote! { #[serde(rename_all = "camelCase")] } };
    let deny_attr = if deny_unknown && !has_deny {
        quote! { #[serde(deny_unknown_fields)] }
    } else {
        quote! {}
    };

    quote! {
        #derive_attr
        #to_schema_attr
        #rename_attr
        #deny_attr
        #input
    }
}

/// Expands the `#[api_handler]` attribute macro.
pub fn expand_api_handler(args: TokenStream, input: ItemFn) -> TokenStream {
    let ItemFn { attrs, vis, sig, block } = input;

    quote! {
        #(#attrs)*
        #[allow(clippy::unused_async)]
        #[cfg_attr(feature = "server", ::utoipa::path(#args))]
        #vis #sig #block
    }
}

fn parse_deny_unknown(args: TokenStream) -> syn::Result<Option<bool>> {
    let metas = Punctuated::<Meta, Token![,]>::parse_terminated.parse2(args)?;
    let mut deny_unknown = None;

    for meta in metas {
        let MetaNameValue { path, value, .. } = match meta {
            Meta::NameValue(name_value) => name_value,
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "Expected `deny_unknown_fields = true|false`",
                ));
            },
        };
        if !path.is_ident("deny_unknown_fields") {
            return Err(syn::Error::new_spanned(
                path,
                "Unsupported argument; expected deny_unknown_fields",
            ));
        }
        if deny_unknown.is_some() {
            return Err(syn::Error::new_spanned(path, "Duplicate argument"));
        }
        match value {
            Expr::Lit(ExprLit { lit: Lit::Bool(lit), .. }) => deny_unknown = Some(lit.value),
            other => {
                return Err(syn::Error::new_spanned(
                    other,
                    "deny_unknown_fields must be a boolean literal",
                ));
            },
        }
    }

    Ok(deny_unknown)
}

/// Reports whether `rename_all` / `deny_unknown_fields` are already set via `#[serde]`.
fn existing_serde_flags(attrs: &[Attribute]) -> (bool, bool) {
    let mut rename_all = false;
    let mut deny_unknown = false;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                rename_all = true;
                let _ = meta.value()?.parse::<Lit>()?;
            } else if meta.path.is_ident("deny_unknown_fields") {
                deny_unknown = true;
            }
            Ok(())
        });
    }

    (rename_all, deny_unknown)
}
