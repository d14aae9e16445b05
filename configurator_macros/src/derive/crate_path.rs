//! Crate path resolution for dependency aliasing support.
//!
//! Converts the optional `#[configurator(crate = "...")]` attribute value
//! into a `TokenStream` that prefixes every path in generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolve the crate path from the parsed struct attribute.
///
/// Defaults to `::configurator` when no override is present.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { ::configurator }, |path| quote! { #path })
}

#[cfg(test)]
mod tests {
    //! Unit tests for crate path resolution with default and custom paths.
    #![expect(
        clippy::expect_used,
        reason = "tests panic to surface malformed path literals"
    )]

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::default(None, ":: configurator")]
    #[case::custom(Some("my_alias"), "my_alias")]
    #[case::nested(Some("my_ns::configurator"), "my_ns :: configurator")]
    fn resolve_produces_expected_tokens(#[case] input: Option<&str>, #[case] expected: &str) {
        let parsed = input.map(|s| syn::parse_str::<syn::Path>(s).expect("valid path"));
        let tokens = resolve(parsed.as_ref());
        assert_eq!(tokens.to_string(), expected);
    }
}
