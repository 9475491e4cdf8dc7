use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr, parse_macro_input, spanned::Spanned};

use crate::utils;

/// Derives `parse` and `Display` for a unit-variant enum used as a CLI
/// option value. Variant names are matched in kebab-case; extra spellings
/// come from `#[cli(alias = "...")]`.
pub fn derive_cli_value_inner(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    let enum_ident = input.ident.clone();

    let mut option_name = utils::kebab_case(&enum_ident.to_string());
    for attr in &input.attrs {
        if !attr.path().is_ident("cli_value") {
            continue;
        }
        let parse_result = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("option") {
                let lit: LitStr = meta.value()?.parse()?;
                option_name = lit.value();
                return Ok(());
            }
            Err(meta.error("unsupported cli_value attribute; expected option"))
        });
        if let Err(err) = parse_result {
            return err.to_compile_error().into();
        }
    }

    let Data::Enum(data) = &input.data else {
        return syn::Error::new(input.span(), "CliValue can only be derived for enums")
            .to_compile_error()
            .into();
    };

    let mut parse_arms = Vec::new();
    let mut display_arms = Vec::new();
    let mut expected = Vec::new();

    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return syn::Error::new(variant.span(), "CliValue variants must be unit-like")
                .to_compile_error()
                .into();
        }
        let variant_ident = &variant.ident;
        let canonical = utils::kebab_case(&variant_ident.to_string());
        let mut spellings = vec![canonical.clone()];

        for attr in &variant.attrs {
            if !attr.path().is_ident("cli") {
                continue;
            }
            let parse_result = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("alias") {
                    let lit: LitStr = meta.value()?.parse()?;
                    spellings.push(lit.value());
                    return Ok(());
                }
                Err(meta.error("unsupported cli attribute; expected alias"))
            });
            if let Err(err) = parse_result {
                return err.to_compile_error().into();
            }
        }

        parse_arms.push(quote! { #(#spellings)|* => Ok(Self::#variant_ident), });
        display_arms.push(quote! { Self::#variant_ident => #canonical, });
        expected.push(canonical);
    }

    let expected_list = expected.join("|");

    let expanded = quote! {
        impl #enum_ident {
            pub fn parse(value: &str) -> crate::Result<Self> {
                match value {
                    #(#parse_arms)*
                    other => Err(crate::Error::invalid_input(format!(
                        "Invalid value for --{}: {other} (expected {})",
                        #option_name, #expected_list
                    ))),
                }
            }
        }

        impl std::fmt::Display for #enum_ident {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(match self { #(#display_arms)* })
            }
        }
    };

    TokenStream::from(expanded)
}
