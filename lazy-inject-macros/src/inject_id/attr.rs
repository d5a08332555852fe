use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Attribute, LitStr, Token,
};

mod kw {
    syn::custom_keyword!(rename);
}

struct Rename {
    kw: kw::rename,
    label: LitStr,
}

impl Parse for Rename {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let kw = input.parse()?;
        input.parse::<Token![=]>()?;
        let label = input.parse()?;

        Ok(Self { kw, label })
    }
}

/// Label from `#[inject_id(rename = "...")]`, the key may be given once per variant
pub(super) fn parse_rename(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
    let mut rename = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("inject_id")) {
        for Rename { kw, label } in attr.parse_args_with(Punctuated::<Rename, Token![,]>::parse_terminated)? {
            if rename.is_some() {
                return Err(syn::Error::new(kw.span, "`rename` specified more than once"));
            }
            rename = Some(label);
        }
    }

    Ok(rename)
}
