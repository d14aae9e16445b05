//! Procedural macros for `configurator`.
//!
//! The [`Schema`](macro@Schema) derive records a static description of a
//! struct's fields so templates can be checked against it, instantiated into
//! it, and serialized from it without runtime reflection.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `configurator::Schema`.
///
/// The struct must have named fields, no generic parameters, and also
/// derive `serde::Deserialize`. Supported attributes:
///
/// - `#[configurator(format = "dict" | "json" | "properties")]` on the struct
///   selects the bound serializer (default `"dict"`).
/// - `#[configurator(crate = "path")]` on the struct overrides the path used
///   to reach the `configurator` crate.
/// - `#[configurator(nested)]` on a field declares that it holds another
///   schema (`T` or `Option<T>`), so a nested template may populate it.
///
/// Field names follow `#[serde(rename = "...")]` and
/// `#[serde(rename_all = "...")]` so templates use the same keys serde
/// expects.
#[proc_macro_derive(Schema, attributes(configurator))]
pub fn derive_schema(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::derive_schema(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
