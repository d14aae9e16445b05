//! Code generation for `#[derive(Schema)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt as _;

use super::crate_path;
use super::parse::{FormatAttr, SchemaField, SchemaInput};

/// Generate the `Schema` and `ToFieldValue` impls for `input`.
pub(crate) fn schema_impls(input: &SchemaInput) -> TokenStream {
    let krate = crate_path::resolve(input.attrs.crate_path.as_ref());
    let ident = &input.ident;
    let schema_name = ident.unraw().to_string();
    let format = format_tokens(&krate, input.attrs.format);
    let descriptors = input.fields.iter().map(|field| field_descriptor(&krate, field));
    let record_fields = input.fields.iter().map(|field| {
        let name = &field.name;
        let member = &field.ident;
        quote! {
            (#name, #krate::ToFieldValue::to_field_value(&self.#member))
        }
    });

    quote! {
        impl #krate::schema::Schema for #ident {
            fn descriptor() -> &'static #krate::SchemaDescriptor {
                static DESCRIPTOR: #krate::SchemaDescriptor = #krate::SchemaDescriptor::new(
                    #schema_name,
                    #format,
                    &[#(#descriptors),*],
                );
                &DESCRIPTOR
            }

            fn record(&self) -> #krate::Record {
                #krate::Record::new(
                    <Self as #krate::schema::Schema>::descriptor(),
                    ::std::vec![#(#record_fields),*],
                )
            }
        }

        impl #krate::ToFieldValue for #ident {
            fn to_field_value(&self) -> #krate::FieldValue {
                #krate::FieldValue::Schema(#krate::schema::Schema::record(self))
            }
        }
    }
}

fn format_tokens(krate: &TokenStream, format: FormatAttr) -> TokenStream {
    match format {
        FormatAttr::Dict => quote! { #krate::Format::Dict },
        FormatAttr::Json => quote! { #krate::Format::Json },
        FormatAttr::Properties => quote! { #krate::Format::Properties },
    }
}

fn field_descriptor(krate: &TokenStream, field: &SchemaField) -> TokenStream {
    let name = &field.name;
    match &field.nested {
        Some(ty) => quote! {
            #krate::FieldDescriptor::nested(
                #name,
                <#ty as #krate::schema::Schema>::descriptor,
            )
        },
        None => quote! { #krate::FieldDescriptor::value(#name) },
    }
}
