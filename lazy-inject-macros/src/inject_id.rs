use quote::quote;
use syn::{parse_quote, Data, DataEnum, DeriveInput, Fields, ItemImpl, LitStr};

use crate::inject_id::attr::parse_rename;

mod attr;

pub(crate) fn expand(input: DeriveInput) -> syn::Result<ItemImpl> {
    let DeriveInput {
        ident, generics, data, ..
    } = input;

    let Data::Enum(DataEnum { variants, .. }) = data else {
        return Err(syn::Error::new_spanned(ident, "`InjectId` can only be derived for enums"));
    };

    let mut arms = Vec::with_capacity(variants.len());
    for variant in variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "`InjectId` can only be derived for enums with unit variants",
            ));
        }

        let label = match parse_rename(&variant.attrs)? {
            Some(label) => label,
            None => LitStr::new(&variant.ident.to_string(), variant.ident.span()),
        };
        let variant_ident = variant.ident;

        arms.push(quote! { Self::#variant_ident => #label, });
    }

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(parse_quote! {
        impl #impl_generics ::lazy_inject::InjectId for #ident #ty_generics #where_clause {
            #[inline]
            fn inject_id(&self) -> &str {
                match *self {
                    #(#arms)*
                }
            }
        }
    })
}
