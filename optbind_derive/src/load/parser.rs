use crate::model::{DeriveField, DeriveParser, IntermediateAttributes};

const SINGLETONS: [&str; 1] = ["reject_repeats"];
const PAIRS: [&str; 3] = ["post", "pre", "program"];

impl TryFrom<syn::DeriveInput> for DeriveParser {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let mut attributes =
            IntermediateAttributes::load(&value.attrs, &SINGLETONS, &PAIRS)?.unwrap_or_default();

        if !value.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &value.generics,
                "Invalid - cannot derive `CommandLine` for a generic struct.",
            ));
        }

        let fields = match &value.data {
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Named(fields),
                ..
            }) => fields
                .named
                .iter()
                .filter_map(|field| DeriveField::load(field).transpose())
                .collect::<Result<Vec<_>, _>>()?,
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Unit,
                ..
            }) => Vec::default(),
            syn::Data::Struct(_) => {
                return Err(syn::Error::new(
                    value.ident.span(),
                    "Invalid - cannot derive `CommandLine` for a tuple struct.",
                ));
            }
            _ => {
                return Err(syn::Error::new(
                    value.ident.span(),
                    "Invalid - `CommandLine` may only be derived for a struct.",
                ));
            }
        };

        Ok(DeriveParser {
            struct_name: value.ident,
            program: attributes.pairs.remove("program"),
            pre: attributes.pairs.remove("pre"),
            post: attributes.pairs.remove("post"),
            reject_repeats: attributes.singletons.contains("reject_repeats"),
            fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DeriveValue, Placement};
    use proc_macro2::{Literal, Span};
    use quote::ToTokens;

    #[test]
    fn construct_derive_parser_empty() {
        // Setup
        let input: syn::DeriveInput = syn::parse_str(
            r#"
                #[derive(Default, CommandLine)]
                struct Settings { }
            "#,
        )
        .unwrap();

        // Execute
        let derive_parser = DeriveParser::try_from(input).unwrap();

        // Verify
        assert_eq!(
            derive_parser,
            DeriveParser {
                struct_name: ident("Settings"),
                program: None,
                pre: None,
                post: None,
                reject_repeats: false,
                fields: Vec::default(),
            }
        );
    }

    #[test]
    fn construct_derive_parser() {
        // Setup
        let input: syn::DeriveInput = syn::parse_str(
            r#"
                #[derive(Default, CommandLine)]
                #[optbind(program = "abc", post = "The end.", reject_repeats)]
                struct Settings {
                    #[optbind(target)]
                    apple: String,
                    banana: usize,
                }
            "#,
        )
        .unwrap();

        // Execute
        let derive_parser = DeriveParser::try_from(input).unwrap();

        // Verify
        assert_eq!(
            derive_parser,
            DeriveParser {
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
                    field_name: ident("apple"),
                    placement: Placement::Target,
                    required: false,
                    initial: None,
                    help: None,
                    validator: None,
                }],
            }
        );
    }

    #[test]
    fn construct_derive_parser_invalid() {
        let cases = [
            (
                "struct Settings<T> { value: T }",
                "Invalid - cannot derive `CommandLine` for a generic struct.",
            ),
            (
                "struct Settings(usize);",
                "Invalid - cannot derive `CommandLine` for a tuple struct.",
            ),
            (
                "enum Settings { A, B }",
                "Invalid - `CommandLine` may only be derived for a struct.",
            ),
            (
                "#[optbind(target)] struct Settings { }",
                "Invalid - unknown attribute `target`.",
            ),
        ];

        for (source, expected) in cases {
            // Setup
            let input: syn::DeriveInput = syn::parse_str(source).unwrap();

            // Execute
            let error = DeriveParser::try_from(input).unwrap_err();

            // Verify
            assert_eq!(error.to_string(), expected);
        }
    }

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }
}
