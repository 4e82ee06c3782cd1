use proc_macro::TokenStream;
use syn::{parse_macro_input, Ident, ItemEnum};
use quote::{quote, format_ident};

fn snake_case(ident: &Ident) -> String {
    let mut out = String::new();
    for (i, ch) in ident.to_string().chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Derives a fieldless tag enum from an enum of palette variants.
///
/// `#[palette_kind(PaletteKind)]` on `enum PaletteVariant` generates `enum PaletteKind`
/// with one unit variant per palette variant, plus `PaletteKind::ALL`, `name`, `Display`,
/// `FromStr`, serde support (snake_case names) and `PaletteVariant::kind`. Without an
/// argument the tag enum is named `<Enum>Kind`.
#[proc_macro_attribute]
pub fn palette_kind(argument: TokenStream, input: TokenStream) -> TokenStream {
    let kind_ident = if argument.is_empty() {
        None
    } else {
        Some(parse_macro_input!(argument as Ident))
    };
    let input = parse_macro_input!(input as ItemEnum);

    let ident = input.ident.clone();
    let kind_ident = kind_ident.unwrap_or_else(|| format_ident!("{}Kind", ident));

    let variant_idents: Vec<_> = input.variants.iter()
        .map(|v| v.ident.clone())
        .collect();
    let variant_names: Vec<_> = variant_idents.iter()
        .map(snake_case)
        .collect();
    let num_variants = variant_idents.len();

    let kind = quote! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub enum #kind_ident {
            #( #[serde(rename = #variant_names)] #variant_idents ),*
        }
    };

    let blank_fields: Vec<_> = input.variants.iter()
        .map(|v| match &v.fields {
            syn::Fields::Unit => quote!(),
            syn::Fields::Unnamed(_) => quote! { (..) },
            syn::Fields::Named(_) => quote! { { .. } },
        })
        .collect();

    let from_impl = quote! {
        impl ::std::convert::From<&#ident> for #kind_ident {
            fn from(val: &#ident) -> Self {
                match val {
                    #( #ident::#variant_idents #blank_fields => Self::#variant_idents ),*
                }
            }
        }
    };

    let kind_impl = quote! {
        impl #kind_ident {
            pub const ALL: [#kind_ident; #num_variants] = [
                #( #kind_ident::#variant_idents ),*
            ];

            pub fn name(self) -> &'static str {
                match self {
                    #( Self::#variant_idents => #variant_names ),*
                }
            }
        }

        impl ::std::fmt::Display for #kind_ident {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.pad(self.name())
            }
        }

        impl ::std::str::FromStr for #kind_ident {
            type Err = ::std::string::String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s {
                    #( #variant_names => Ok(Self::#variant_idents), )*
                    _ => Err(format!(
                        "unknown palette `{}` (expected one of: {})",
                        s,
                        [#( #variant_names ),*].join(", ")
                    )),
                }
            }
        }
    };

    quote! {
        #input

        #kind

        #from_impl

        #kind_impl

        impl #ident {
            pub fn kind(&self) -> #kind_ident {
                self.into()
            }
        }
    }.into()
}
