use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Expr, ExprLit, Fields, Lit, parse_macro_input, spanned::Spanned};

/// Variant attribute: #[name = "<display name>"]
///
/// Emits `clogluck::NamedEnum` with one `(variant, name)` entry per variant, in
/// declaration order.
#[proc_macro_derive(NamedEnum, attributes(name))]
pub fn derive_named_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let enum_ident = &input.ident;

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new(input.ident.span(), "NamedEnum can only be derived for enums")
            .to_compile_error()
            .into();
    };

    let mut entries = Vec::new();
    let mut seen: Vec<String> = Vec::new();

    for variant in &data_enum.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return syn::Error::new(variant.span(), "NamedEnum only supports fieldless variants")
                .to_compile_error()
                .into();
        }

        let name = match find_name(&variant.attrs) {
            Ok(Some(name)) => name,
            Ok(None) => {
                return syn::Error::new(variant.span(), "missing #[name = \"...\"] on variant")
                    .to_compile_error()
                    .into();
            }
            Err(err) => return err.to_compile_error().into(),
        };

        // names are looked up case-insensitively, so they must be unique that way too
        let folded = name.to_lowercase();
        if seen.contains(&folded) {
            return syn::Error::new(variant.span(), format!("duplicate name \"{name}\""))
                .to_compile_error()
                .into();
        }
        seen.push(folded);

        let ident = &variant.ident;
        entries.push(quote! { (Self::#ident, #name) });
    }

    let expanded = quote! {
        impl clogluck::NamedEnum for #enum_ident {
            const ENTRIES: &'static [(Self, &'static str)] = &[
                #(#entries),*
            ];
        }

        impl ::core::fmt::Display for #enum_ident {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(<Self as clogluck::NamedEnum>::name(*self))
            }
        }
    };

    expanded.into()
}

/// Pull the string out of `#[name = "..."]`, if present.
fn find_name(attrs: &[Attribute]) -> syn::Result<Option<String>> {
    for Attribute { meta, .. } in attrs {
        if !meta.path().is_ident("name") {
            continue;
        }
        let syn::Meta::NameValue(nv) = meta else {
            return Err(syn::Error::new(meta.span(), "use #[name = \"...\"]"));
        };
        match &nv.value {
            Expr::Lit(ExprLit { lit: Lit::Str(s), .. }) => {
                let value = s.value();
                if value.trim().is_empty() {
                    return Err(syn::Error::new(s.span(), "name must not be empty"));
                }
                return Ok(Some(value));
            }
            other => return Err(syn::Error::new(other.span(), "name must be a string literal")),
        }
    }
    Ok(None)
}
