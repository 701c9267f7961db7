use crate::model::DeriveParser;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

impl From<DeriveParser> for TokenStream2 {
    fn from(value: DeriveParser) -> Self {
        let DeriveParser {
            struct_name,
            program,
            pre,
            post,
            reject_repeats,
            fields,
        } = value;
        let bindings: Vec<TokenStream2> = fields.into_iter().map(TokenStream2::from).collect();

        let usage = if program.is_none() && pre.is_none() && post.is_none() {
            TokenStream2::new()
        } else {
            let mut usage = match program {
                Some(program) => {
                    let program = program.tokens;
                    quote! { ::optbind::Usage::new(#program) }
                }
                None => quote! { ::optbind::Usage::default() },
            };

            if let Some(pre) = pre {
                let pre = pre.tokens;
                usage = quote! { #usage.pre(#pre) };
            }

            if let Some(post) = post {
                let post = post.tokens;
                usage = quote! { #usage.post(#post) };
            }

            quote! {
                fn usage() -> ::optbind::Usage {
                    #usage
                }
            }
        };

        let repeats = if reject_repeats {
            quote! {
                fn repeats() -> ::optbind::Repeats {
                    ::optbind::Repeats::Reject
                }
            }
        } else {
            TokenStream2::new()
        };

        quote! {
            impl ::optbind::prelude::Bindable for #struct_name {
                fn bindings() -> ::std::vec::Vec<::optbind::Binding<Self>> {
                    ::std::vec![#( #bindings ),*]
                }
                #usage
                #repeats
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::simple_format;
    use crate::model::{DeriveField, DeriveValue, Placement};
    use proc_macro2::{Literal, Span};
    use quote::ToTokens;

    #[test]
    fn render_derive_parser_empty() {
        // Setup
        let parser = DeriveParser {
            struct_name: ident("Settings"),
            program: None,
            pre: None,
            post: None,
            reject_repeats: false,
            fields: vec![],
        };

        // Execute
        let token_stream = TokenStream2::from(parser);

        // Verify
        assert_eq!(
            simple_format(token_stream.to_string()),
            r#"impl :: optbind :: prelude :: Bindable for Settings {
 fn bindings () -> :: std :: vec :: Vec < :: optbind :: Binding < Self >> {
 :: std :: vec ! [] }
 }
"#,
        );
    }

    #[test]
    fn render_derive_parser() {
        // Setup
        let parser = DeriveParser {
            struct_name: ident("Settings"),
            program: Some(DeriveValue {
                tokens: Literal::string("abc").into_token_stream(),
            }),
            pre: None,
            post: Some(DeriveValue {
                tokens: Literal::string("The end.").into_token_stream(),
            }),
            reject_repeats: true,
            fields: vec![DeriveField {
                field_name: ident("path"),
                placement: Placement::Target,
                required: false,
                initial: None,
                help: None,
                validator: None,
            }],
        };

        // Execute
        let token_stream = TokenStream2::from(parser);

        // Verify
        assert_eq!(
            simple_format(token_stream.to_string()),
            r#"impl :: optbind :: prelude :: Bindable for Settings {
 fn bindings () -> :: std :: vec :: Vec < :: optbind :: Binding < Self >> {
 :: std :: vec ! [:: optbind :: Binding :: new (:: optbind :: OptionDescriptor :: target ("") , :: optbind :: Field :: new (| target : & mut Self | & mut target . path))] }
 fn usage () -> :: optbind :: Usage {
 :: optbind :: Usage :: new ("abc") . post ("The end.") }
 fn repeats () -> :: optbind :: Repeats {
 :: optbind :: Repeats :: Reject }
 }
"#,
        );
    }

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }
}
