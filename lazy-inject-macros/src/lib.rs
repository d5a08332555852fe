use proc_macro::TokenStream;
use std::env::var_os;
use syn::{parse_macro_input, DeriveInput};

mod inject_id;

/// Implements `lazy_inject::InjectId` for an enum with unit variants.
///
/// Each variant projects to its own name, `#[inject_id(rename = "...")]` overrides the label of a variant.
/// Rejected inputs are listed on the `InjectId` trait of `lazy-inject`.
/// Set `MACROS_DEBUG` to print the generated impl while building.
#[proc_macro_derive(InjectId, attributes(inject_id))]
pub fn derive_inject_id(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);

    match inject_id::expand(input) {
        Ok(item_impl) => {
            if var_os("MACROS_DEBUG").is_some() {
                eprintln!("{}", prettyplease::unparse(&syn::File {
                    shebang: None,
                    attrs: Vec::new(),
                    items: vec![item_impl.clone().into()],
                }));
            }
            quote::ToTokens::into_token_stream(item_impl).into()
        }
        Err(err) => err.into_compile_error().into(),
    }
}
