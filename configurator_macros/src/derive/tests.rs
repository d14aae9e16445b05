//! Tests for the generated `Schema` impls.

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;
use syn::{DeriveInput, parse_quote};

use super::derive_schema;

fn expand(input: &DeriveInput) -> Result<String> {
    derive_schema(input)
        .map(|tokens| tokens.to_string())
        .map_err(|err| anyhow!(err))
}

#[test]
fn generates_descriptor_and_record() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        #[configurator(format = "json")]
        struct ClusterConfig {
            label: String,
            #[configurator(nested)]
            engine_config: Option<EngineConfig>,
        }
    };
    let code = expand(&input)?;

    for fragment in [
        "impl :: configurator :: schema :: Schema for ClusterConfig",
        "\"ClusterConfig\"",
        ":: configurator :: Format :: Json",
        ":: configurator :: FieldDescriptor :: value (\"label\")",
        "< EngineConfig as :: configurator :: schema :: Schema > :: descriptor",
        "(\"engine_config\" , :: configurator :: ToFieldValue :: to_field_value (& self . engine_config))",
        "impl :: configurator :: ToFieldValue for ClusterConfig",
    ] {
        ensure!(code.contains(fragment), "missing `{fragment}` in {code}");
    }
    Ok(())
}

#[rstest]
#[case::default_crate(parse_quote! { struct Demo { a: u8 } }, ":: configurator :: Record")]
#[case::aliased_crate(
    parse_quote! { #[configurator(crate = "cfg")] struct Demo { a: u8 } },
    "cfg :: Record",
)]
fn generated_paths_use_crate_path(#[case] input: DeriveInput, #[case] expected: &str) -> Result<()> {
    let code = expand(&input)?;
    ensure!(code.contains(expected), "missing `{expected}` in {code}");
    Ok(())
}

#[test]
fn raw_identifiers_keep_member_access() -> Result<()> {
    let input: DeriveInput = parse_quote! {
        struct EngineConfig {
            r#type: String,
        }
    };
    let code = expand(&input)?;
    ensure!(code.contains("(\"type\" ,"), "field key not unrawed: {code}");
    ensure!(code.contains("self . r#type"), "member access lost raw ident: {code}");
    Ok(())
}
