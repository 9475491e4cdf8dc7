use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr, parse_macro_input, spanned::Spanned};

/// Generates `apply_cli_option` plus the `split_arg` helper for an options
/// struct. Only fields carrying `#[cli(long = "...")]` get a match arm;
/// everything else stays with the hand-written fallback loop. Values go
/// through `FromStr` unless `parse_with` names a custom parser.
pub fn derive_cli_options_inner(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    let struct_ident = input.ident.clone();

    let Data::Struct(data_struct) = &input.data else {
        return syn::Error::new(input.span(), "CliOptions can only be derived for structs")
            .to_compile_error()
            .into();
    };
    let Fields::Named(fields) = &data_struct.fields else {
        return syn::Error::new(input.span(), "CliOptions requires named fields")
            .to_compile_error()
            .into();
    };

    let mut arms = Vec::new();

    for field in &fields.named {
        let Some(field_ident) = &field.ident else {
            continue;
        };
        let mut long: Option<String> = None;
        let mut parse_with: Option<String> = None;

        for attr in &field.attrs {
            if !attr.path().is_ident("cli") {
                continue;
            }
            let parse_result = attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("long") {
                    let lit: LitStr = meta.value()?.parse()?;
                    long = Some(lit.value());
                    return Ok(());
                }
                if meta.path.is_ident("parse_with") {
                    let lit: LitStr = meta.value()?.parse()?;
                    parse_with = Some(lit.value());
                    return Ok(());
                }
                Err(meta.error("unsupported cli attribute; expected long/parse_with"))
            });
            if let Err(err) = parse_result {
                return err.to_compile_error().into();
            }
        }

        let Some(long) = long else {
            continue;
        };

        let assign = if let Some(parse_with) = parse_with {
            let parser: syn::Path = match syn::parse_str(&parse_with) {
                Ok(path) => path,
                Err(err) => return err.to_compile_error().into(),
            };
            quote! { self.#field_ident = #parser(&value)?; }
        } else {
            let ty = &field.ty;
            quote! {
                self.#field_ident = value.parse::<#ty>().map_err(|_| {
                    crate::Error::invalid_input(format!("Invalid value for --{}: {value}", #long))
                })?;
            }
        };

        arms.push(quote! {
            #long => {
                let value = Self::require_cli_value(name, value)?;
                #assign
                Ok(true)
            }
        });
    }

    let expanded = quote! {
        impl #struct_ident {
            /// Applies one `--name value` pair. Returns Ok(false) for names
            /// this struct does not know about.
            pub(crate) fn apply_cli_option(
                &mut self,
                name: &str,
                value: Option<String>,
            ) -> crate::Result<bool> {
                match name {
                    #(#arms)*
                    _ => Ok(false),
                }
            }

            fn require_cli_value(name: &str, value: Option<String>) -> crate::Result<String> {
                value.ok_or_else(|| {
                    crate::Error::invalid_input(format!("Missing value for --{name}"))
                })
            }

            /// Splits `name=value` or pulls the value from the next argument
            /// when it is not itself an option.
            pub(crate) fn split_arg<I>(
                raw_name: &str,
                args: &mut std::iter::Peekable<I>,
            ) -> (String, Option<String>)
            where
                I: Iterator<Item = String>,
            {
                match raw_name.split_once('=') {
                    Some((name, value)) => (name.to_owned(), Some(value.to_owned())),
                    None => {
                        let value = match args.peek() {
                            Some(next) if !next.starts_with("--") => args.next(),
                            _ => None,
                        };
                        (raw_name.to_owned(), value)
                    }
                }
            }
        }
    };

    TokenStream::from(expanded)
}
