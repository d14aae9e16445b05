//! Implementation of `#[derive(Schema)]`.

mod crate_path;
mod generate;
mod parse;
#[cfg(test)]
mod tests;

use proc_macro2::TokenStream;
use syn::DeriveInput;

/// Parse `input` and generate the `Schema` and `ToFieldValue` impls.
pub(crate) fn derive_schema(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_input(input)?;
    Ok(generate::schema_impls(&parsed))
}
