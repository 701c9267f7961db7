use crate::load::incompatible_error;
use crate::model::{DeriveField, IntermediateAttributes, Placement};

const SINGLETONS: [&str; 2] = ["required", "target"];
const PAIRS: [&str; 5] = ["default", "help", "long", "short", "validate"];

impl DeriveField {
    /// Load the field, or `None` when it carries no `#[optbind(..)]` attribute.
    pub(crate) fn load(value: &syn::Field) -> Result<Option<Self>, syn::Error> {
        let field_name = match &value.ident {
            Some(ident) => ident.clone(),
            None => {
                return Err(syn::Error::new_spanned(
                    value,
                    "Invalid - cannot bind an unnamed field.",
                ))
            }
        };
        let mut attributes = match IntermediateAttributes::load(&value.attrs, &SINGLETONS, &PAIRS)?
        {
            Some(attributes) => attributes,
            None => return Ok(None),
        };
        let target = attributes.singletons.contains("target");
        let required = attributes.singletons.contains("required");
        let short = attributes.pairs.remove("short");
        let long = attributes.pairs.remove("long");
        let initial = attributes.pairs.remove("default");

        if required && initial.is_some() {
            return Err(incompatible_error(&field_name, "required", "default = .."));
        }

        let placement = match (target, short) {
            (true, Some(_)) => {
                return Err(incompatible_error(&field_name, "target", "short = .."));
            }
            (true, None) => {
                if long.is_some() {
                    return Err(incompatible_error(&field_name, "target", "long = .."));
                }

                Placement::Target
            }
            (false, Some(short)) => {
                if syn::parse2::<syn::LitChar>(short.tokens.clone()).is_err() {
                    return Err(syn::Error::new(
                        field_name.span(),
                        format!(
                            "Invalid - field `{field_name}` expects a char literal for `short`, found `{}`.",
                            short.tokens
                        ),
                    ));
                }

                Placement::Flagged { short, long }
            }
            (false, None) => {
                return Err(syn::Error::new(
                    field_name.span(),
                    format!("Invalid - field `{field_name}` must be either `target` or have a `short = ..`."),
                ));
            }
        };

        Ok(Some(DeriveField {
            field_name,
            placement,
            required,
            initial,
            help: attributes.pairs.remove("help"),
            validator: attributes.pairs.remove("validate"),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DeriveValue;
    use proc_macro2::{Literal, Span};
    use quote::{quote, ToTokens};
    use syn::parse_quote;

    fn load(tokens: proc_macro2::TokenStream) -> Result<Option<DeriveField>, syn::Error> {
        let fields: syn::FieldsNamed = parse_quote! { { #tokens } };
        let field = fields.named.first().unwrap();
        DeriveField::load(field)
    }

    #[test]
    fn load_unbound() {
        // Execute
        let field = load(quote! { apple: usize }).unwrap();

        // Verify
        assert_eq!(field, None);
    }

    #[test]
    fn load_flagged() {
        // Execute
        let field = load(quote! {
            #[optbind(short = 'a', long = "apple", default = 3, help = "The apples.")]
            apple: usize
        })
        .unwrap();

        // Verify
        assert_eq!(
            field,
            Some(DeriveField {
                field_name: ident("apple"),
                placement: Placement::Flagged {
                    short: DeriveValue {
                        tokens: Literal::character('a').into_token_stream(),
                    },
                    long: Some(DeriveValue {
                        tokens: Literal::string("apple").into_token_stream(),
                    }),
                },
                required: false,
                initial: Some(DeriveValue {
                    tokens: quote! { 3 },
                }),
                help: Some(DeriveValue {
                    tokens: Literal::string("The apples.").into_token_stream(),
                }),
                validator: None,
            })
        );
    }

    #[test]
    fn load_target() {
        // Execute
        let field = load(quote! {
            #[optbind(target, required, validate = checks::non_empty)]
            path: String
        })
        .unwrap();

        // Verify
        assert_eq!(
            field,
            Some(DeriveField {
                field_name: ident("path"),
                placement: Placement::Target,
                required: true,
                initial: None,
                help: None,
                validator: Some(DeriveValue {
                    tokens: quote! { checks::non_empty },
                }),
            })
        );
    }

    #[test]
    fn load_invalid() {
        let cases = [
            (
                quote! { #[optbind(target, short = 'p')] path: String },
                "Invalid - field `path` cannot be both `target` and `short = ..`.",
            ),
            (
                quote! { #[optbind(target, long = "path")] path: String },
                "Invalid - field `path` cannot be both `target` and `long = ..`.",
            ),
            (
                quote! { #[optbind(short = 'p', required, default = "x")] path: String },
                "Invalid - field `path` cannot be both `required` and `default = ..`.",
            ),
            (
                quote! { #[optbind(long = "path")] path: String },
                "Invalid - field `path` must be either `target` or have a `short = ..`.",
            ),
            (
                quote! { #[optbind(short = "p")] path: String },
                "Invalid - field `path` expects a char literal for `short`, found `\"p\"`.",
            ),
            (
                quote! { #[optbind(short = 'p', hidden)] path: String },
                "Invalid - unknown attribute `hidden`.",
            ),
        ];

        for (tokens, expected) in cases {
            // Execute
            let error = load(tokens).unwrap_err();

            // Verify
            assert_eq!(error.to_string(), expected);
        }
    }

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }
}
