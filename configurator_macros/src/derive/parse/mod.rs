//! Parsing utilities for the `Schema` derive macro.
//!
//! The input struct is read in one pass: struct-level attributes, then each
//! named field with its `#[configurator(...)]` and serde metadata. Invalid
//! input fails fast with a spanned error.

use syn::ext::IdentExt as _;
use syn::meta::ParseNestedMeta;
use syn::parenthesized;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, LitStr, Token, Type};

mod serde_attrs;
mod type_utils;

use serde_attrs::{SerdeRenameAll, serde_field_rename, serde_rename_all};
use type_utils::option_inner;

/// Serializer a schema is bound to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum FormatAttr {
    #[default]
    Dict,
    Json,
    Properties,
}

impl FormatAttr {
    fn parse(value: &LitStr) -> syn::Result<Self> {
        match value.value().as_str() {
            "dict" => Ok(Self::Dict),
            "json" => Ok(Self::Json),
            "properties" => Ok(Self::Properties),
            other => Err(syn::Error::new(
                value.span(),
                format!(
                    "unknown format '{other}'; expected one of \"dict\", \"json\", or \"properties\""
                ),
            )),
        }
    }
}

/// Struct-level `#[configurator(...)]` attributes.
#[derive(Default, Clone)]
pub(crate) struct StructAttrs {
    pub format: FormatAttr,
    /// Overrides the generated crate path for dependency aliasing.
    pub crate_path: Option<syn::Path>,
}

/// Field-level `#[configurator(...)]` attributes.
#[derive(Default, Clone, Copy)]
pub(crate) struct FieldAttrs {
    pub nested: bool,
}

/// One declared field of the schema.
pub(crate) struct SchemaField {
    /// Rust identifier used to read the field.
    pub ident: Ident,
    /// Key used by templates and serde.
    pub name: String,
    /// Schema type of a nested field, with any `Option` stripped.
    pub nested: Option<Type>,
}

/// Everything the generator needs about the input struct.
pub(crate) struct SchemaInput {
    pub ident: Ident,
    pub attrs: StructAttrs,
    pub fields: Vec<SchemaField>,
}

/// Iterate all `#[configurator(...)]` attributes once and apply a callback.
fn parse_configurator<F>(attrs: &[Attribute], mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident("configurator")) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

/// Consumes an unrecognised key-value or list without recording it.
fn discard_unknown(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<proc_macro2::TokenStream>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        parenthesized!(content in meta.input);
        content.parse::<proc_macro2::TokenStream>()?;
    }
    Ok(())
}

fn unknown_key(meta: &ParseNestedMeta) -> syn::Error {
    let key = meta
        .path
        .get_ident()
        .map_or_else(|| String::from("?"), ToString::to_string);
    meta.error(format!("unknown configurator attribute `{key}`"))
}

/// Extracts `#[configurator(...)]` metadata applied to a struct.
///
/// Recognised keys are `format` and `crate`; anything else is rejected.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> syn::Result<StructAttrs> {
    let mut out = StructAttrs::default();
    parse_configurator(attrs, |meta| {
        if meta.path.is_ident("format") {
            out.format = FormatAttr::parse(&meta.value()?.parse::<LitStr>()?)?;
            return Ok(());
        }
        if meta.path.is_ident("crate") {
            let s = meta.value()?.parse::<LitStr>()?;
            let path: syn::Path =
                syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))?;
            out.crate_path = Some(path);
            return Ok(());
        }
        Err(unknown_key(meta))
    })?;
    Ok(out)
}

/// Parses field-level `#[configurator(...)]` attributes.
///
/// The only recognised key is the `nested` flag.
pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
    let mut out = FieldAttrs::default();
    parse_configurator(attrs, |meta| {
        if meta.path.is_ident("nested") {
            out.nested = true;
            return Ok(());
        }
        Err(unknown_key(meta))
    })?;
    Ok(out)
}

fn parse_field(field: &syn::Field, rename_all: Option<SerdeRenameAll>) -> syn::Result<SchemaField> {
    let Some(ident) = field.ident.clone() else {
        return Err(syn::Error::new_spanned(field, "unnamed fields are not supported"));
    };
    let attrs = parse_field_attrs(&field.attrs)?;
    let name = match serde_field_rename(&field.attrs)? {
        Some(rename) => rename,
        None => {
            let plain = ident.unraw().to_string();
            match rename_all {
                Some(rule) => rule.apply(&plain),
                None => plain,
            }
        }
    };
    let nested = attrs
        .nested
        .then(|| option_inner(&field.ty).unwrap_or(&field.ty).clone());
    Ok(SchemaField {
        ident,
        name,
        nested,
    })
}

/// Gathers information from the user-provided struct.
///
/// Only non-generic structs with named fields are accepted.
pub(crate) fn parse_input(input: &DeriveInput) -> syn::Result<SchemaInput> {
    let ident = input.ident.clone();
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &ident,
            "Schema can only be derived for structs",
        ));
    };
    let Fields::Named(named) = &data.fields else {
        return Err(syn::Error::new_spanned(
            data.struct_token,
            "Schema requires named fields",
        ));
    };
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Schema cannot be derived for generic structs",
        ));
    }
    let attrs = parse_struct_attrs(&input.attrs)?;
    let rename_all = serde_rename_all(&input.attrs)?;
    let fields = named
        .named
        .iter()
        .map(|field| parse_field(field, rename_all))
        .collect::<syn::Result<Vec<_>>>()?;
    Ok(SchemaInput {
        ident,
        attrs,
        fields,
    })
}
