use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemFn, LitStr, parse_macro_input};

/// Wraps a function so its elapsed wall time is logged on completion.
/// `#[timer("label")]` overrides the default label (the function name).
pub fn timer_inner(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);

    let label = if attr.is_empty() {
        input.sig.ident.to_string()
    } else {
        let lit = parse_macro_input!(attr as LitStr);
        lit.value()
    };

    let attrs = &input.attrs;
    let vis = &input.vis;
    let sig = &input.sig;
    let block = &input.block;

    let expanded = quote! {
        #(#attrs)*
        #vis #sig {
            let __timer_started = std::time::Instant::now();
            let __timer_result = (move || #block)();
            ::log::info!(
                "{}: elapsed_s={:.2}",
                #label,
                __timer_started.elapsed().as_secs_f32()
            );
            __timer_result
        }
    };

    TokenStream::from(expanded)
}
