//! The `#[derive(Props)]` macro implementation.
//!
//! Generates a builder type for the annotated struct so that it can be constructed
//! incrementally inside the `view!` macro, e.g. `MyProps::builder().name("foo").build()`.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Ident, Type};

struct PropField {
    ident: Ident,
    ty: Type,
    /// `#[prop(default)]`: field is optional and falls back to `Default::default()`.
    default: bool,
    /// `#[prop(setter(skip))]`: no setter is generated; the field must be `Default`.
    skip_setter: bool,
}

fn parse_prop_attrs(field: &syn::Field) -> syn::Result<(bool, bool)> {
    let mut default = false;
    let mut skip_setter = false;
    for attr in &field.attrs {
        if !attr.path().is_ident("prop") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("default") {
                default = true;
            } else if meta.path.is_ident("setter") {
                meta.parse_nested_meta(|inner| {
                    if inner.path.is_ident("skip") {
                        skip_setter = true;
                        default = true;
                    }
                    Ok(())
                })?;
            }
            Ok(())
        })?;
    }
    Ok((default, skip_setter))
}

pub fn impl_derive_props(input: &DeriveInput) -> syn::Result<TokenStream> {
    let struct_ident = &input.ident;
    let builder_ident = format_ident!("{}Builder", struct_ident);
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "`Props` can only be derived for structs",
        ));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(syn::Error::new_spanned(
            input,
            "`Props` can only be derived for structs with named fields",
        ));
    };

    let props = fields
        .named
        .iter()
        .map(|field| {
            let (default, skip_setter) = parse_prop_attrs(field)?;
            Ok(PropField {
                ident: field.ident.clone().unwrap(),
                ty: field.ty.clone(),
                default,
                skip_setter,
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    let builder_fields = props.iter().map(|prop| {
        let ident = &prop.ident;
        let ty = &prop.ty;
        quote! { #ident: ::std::option::Option<#ty> }
    });

    let setters = props.iter().filter(|prop| !prop.skip_setter).map(|prop| {
        let ident = &prop.ident;
        let ty = &prop.ty;
        quote! {
            #[allow(missing_docs)]
            pub fn #ident(mut self, #ident: impl ::std::convert::Into<#ty>) -> Self {
                self.#ident = ::std::option::Option::Some(::std::convert::Into::into(#ident));
                self
            }
        }
    });

    let build_fields = props.iter().map(|prop| {
        let ident = &prop.ident;
        if prop.default {
            quote! { #ident: self.#ident.unwrap_or_default() }
        } else {
            let message = format!("missing required prop `{}`", ident);
            quote! { #ident: self.#ident.expect(#message) }
        }
    });

    Ok(quote! {
        #[doc(hidden)]
        #[derive(::std::fmt::Debug, ::std::default::Default)]
        #[allow(non_camel_case_types, missing_docs)]
        pub struct #builder_ident #impl_generics #where_clause {
            #(#builder_fields,)*
        }

        #[allow(missing_docs)]
        impl #impl_generics #builder_ident #ty_generics #where_clause {
            #(#setters)*

            pub fn build(self) -> #struct_ident #ty_generics {
                #struct_ident {
                    #(#build_fields,)*
                }
            }
        }

        impl #impl_generics ::philjs::rt::Props for #struct_ident #ty_generics #where_clause {
            type Builder = #builder_ident #ty_generics;

            fn builder() -> Self::Builder {
                ::std::default::Default::default()
            }
        }
    })
}
