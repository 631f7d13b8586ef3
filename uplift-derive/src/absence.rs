//! Implementation of the `#[derive(Absence)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Attribute, Data, DataEnum, DataStruct, DeriveInput, Fields, Index, parse_macro_input,
    parse_quote,
};

pub fn derive_absence_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match expand(&input) {
        Ok(tokens) => tokens,
        Err(error) => error.to_compile_error(),
    };

    TokenStream::from(expanded)
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let transparent = is_transparent(&input.attrs)?;
    let mut generics = input.generics.clone();

    let body = match &input.data {
        Data::Struct(data) if transparent => {
            let (access, field_type) = single_field(input, data)?;
            generics
                .make_where_clause()
                .predicates
                .push(parse_quote!(#field_type: ::uplift::algebra::Absence));
            quote! { ::uplift::algebra::Absence::is_absent(&self.#access) }
        }
        Data::Struct(_) => quote! { false },
        Data::Enum(_) if transparent => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "#[absence(transparent)] is only supported on structs with exactly one field",
            ));
        }
        Data::Enum(data) => enum_body(data),
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "Absence cannot be derived for unions",
            ));
        }
    };

    let name = &input.ident;
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::uplift::algebra::Absence for #name #type_generics #where_clause {
            #[inline]
            fn is_absent(&self) -> bool {
                #body
            }
        }
    })
}

fn is_transparent(attributes: &[Attribute]) -> syn::Result<bool> {
    let mut transparent = false;
    for attribute in attributes.iter().filter(|a| a.path().is_ident("absence")) {
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("transparent") {
                transparent = true;
                Ok(())
            } else {
                Err(meta.error("unsupported absence option, expected `transparent`"))
            }
        })?;
    }
    Ok(transparent)
}

fn single_field<'a>(
    input: &DeriveInput,
    data: &'a DataStruct,
) -> syn::Result<(TokenStream2, &'a syn::Type)> {
    let mut fields = data.fields.iter();
    match (fields.next(), fields.next()) {
        (Some(field), None) => {
            let access = field.ident.as_ref().map_or_else(
                || {
                    let index = Index::from(0);
                    quote! { #index }
                },
                |ident| quote! { #ident },
            );
            Ok((access, &field.ty))
        }
        _ => Err(syn::Error::new_spanned(
            &input.ident,
            "#[absence(transparent)] requires exactly one field",
        )),
    }
}

fn enum_body(data: &DataEnum) -> TokenStream2 {
    let absent: Vec<TokenStream2> = data
        .variants
        .iter()
        .filter(|variant| variant.attrs.iter().any(|a| a.path().is_ident("absent")))
        .map(|variant| {
            let ident = &variant.ident;
            match variant.fields {
                Fields::Unit => quote! { Self::#ident },
                Fields::Named(_) | Fields::Unnamed(_) => quote! { Self::#ident { .. } },
            }
        })
        .collect();

    if absent.is_empty() {
        quote! { false }
    } else {
        quote! { ::core::matches!(self, #(#absent)|*) }
    }
}
