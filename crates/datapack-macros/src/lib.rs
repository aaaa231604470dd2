//! datapack-macros - Procedural macros for datapack payload types
//!
//! This crate provides:
//! - `#[derive(Payload)]` - Classify a type for envelope shape tagging

use darling::FromDeriveInput;
use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

/// Options for the Payload derive macro
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(payload), supports(struct_any, enum_any))]
struct PayloadOpts {
    ident: syn::Ident,
    generics: syn::Generics,

    /// Tag the type as a scalar value instead of an object
    #[darling(default)]
    value: bool,

    /// Path to the crate exporting `PayloadShape` (default: `::datapack`)
    #[darling(default, rename = "crate")]
    krate: Option<syn::Path>,
}

/// Derive macro for payload types
///
/// Implements `PayloadShape` so the packager tags the type as `AsObject`.
/// Newtypes around scalars can opt into `AsValue` with `#[payload(value)]`.
///
/// # Example
///
/// ```ignore
/// #[derive(Payload, Serialize, Deserialize)]
/// struct User {
///     pub id: u64,
///     pub name: String,
/// }
///
/// #[derive(Payload, Serialize, Deserialize)]
/// #[payload(value)]
/// struct UserId(u64);
/// ```
///
/// When depending on `datapack-core` directly instead of the `datapack`
/// facade, point the macro at it with `#[payload(crate = "datapack_core")]`.
#[proc_macro_derive(Payload, attributes(payload))]
pub fn derive_payload(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let opts = match PayloadOpts::from_derive_input(&input) {
        Ok(opts) => opts,
        Err(e) => return TokenStream::from(e.write_errors()),
    };

    let name = &opts.ident;
    let (impl_generics, ty_generics, where_clause) = opts.generics.split_for_impl();
    let krate = opts.krate.unwrap_or_else(default_crate_path);
    let body = shape_body(opts.value, &krate);

    let expanded = quote! {
        impl #impl_generics #krate::PayloadShape for #name #ty_generics #where_clause {
            #body
        }
    };

    TokenStream::from(expanded)
}

fn default_crate_path() -> syn::Path {
    syn::parse_quote!(::datapack)
}

/// Body of the generated impl; objects keep the trait's default tag
fn shape_body(value: bool, krate: &syn::Path) -> proc_macro2::TokenStream {
    if value {
        quote! {
            const DATA_TYPE: #krate::DataType = #krate::DataType::AsValue;
        }
    } else {
        proc_macro2::TokenStream::new()
    }
}
