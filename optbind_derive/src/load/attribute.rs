use crate::model::{DeriveValue, IntermediateAttributes};
use quote::ToTokens;
use std::collections::{HashMap, HashSet};

const ATTRIBUTE: &str = "optbind";

impl TryFrom<&syn::Attribute> for IntermediateAttributes {
    type Error = syn::Error;

    fn try_from(value: &syn::Attribute) -> Result<Self, Self::Error> {
        let attributes_parser =
            syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated;
        let mut singletons = HashSet::default();
        let mut pairs = HashMap::default();

        for expression in value.parse_args_with(attributes_parser)? {
            match expression {
                syn::Expr::Assign(assignment) => {
                    let left = assignment.left.to_token_stream().to_string();
                    let previous = pairs.insert(
                        left.clone(),
                        DeriveValue {
                            tokens: assignment.right.to_token_stream(),
                        },
                    );

                    if previous.is_some() {
                        return Err(repeated_error(&assignment.left, &left));
                    }
                }
                syn::Expr::Path(path) if path.path.get_ident().is_some() => {
                    let ident = path.to_token_stream().to_string();

                    if !singletons.insert(ident.clone()) {
                        return Err(repeated_error(&path, &ident));
                    }
                }
                _ => {
                    return Err(syn::Error::new_spanned(
                        &expression,
                        format!(
                            "Invalid - unparseable attribute `{}`.",
                            expression.to_token_stream()
                        ),
                    ));
                }
            };
        }

        Ok(Self { singletons, pairs })
    }
}

impl IntermediateAttributes {
    /// Merge every `#[optbind(..)]` attribute, restricted to the `allowed_singletons` and `allowed_pairs`.
    /// Returns `None` when there is no `#[optbind(..)]` attribute at all.
    pub(crate) fn load(
        attributes: &[syn::Attribute],
        allowed_singletons: &[&str],
        allowed_pairs: &[&str],
    ) -> Result<Option<Self>, syn::Error> {
        let mut merged: Option<Self> = None;

        for attribute in attributes {
            if !attribute.path().is_ident(ATTRIBUTE) {
                continue;
            }

            let loaded = Self::try_from(attribute)?;
            let mut unknown: Vec<&String> = loaded
                .singletons
                .iter()
                .filter(|singleton| !allowed_singletons.contains(&singleton.as_str()))
                .chain(
                    loaded
                        .pairs
                        .keys()
                        .filter(|key| !allowed_pairs.contains(&key.as_str())),
                )
                .collect();
            unknown.sort();

            if let Some(name) = unknown.first() {
                return Err(syn::Error::new_spanned(
                    attribute,
                    format!("Invalid - unknown attribute `{name}`."),
                ));
            }

            match merged.as_mut() {
                Some(existing) => {
                    for singleton in loaded.singletons {
                        if !existing.singletons.insert(singleton.clone()) {
                            return Err(repeated_error(attribute, &singleton));
                        }
                    }

                    for (key, value) in loaded.pairs {
                        if existing.pairs.contains_key(&key) {
                            return Err(repeated_error(attribute, &key));
                        }

                        existing.pairs.insert(key, value);
                    }
                }
                None => {
                    merged.replace(loaded);
                }
            }
        }

        Ok(merged)
    }
}

fn repeated_error(tokens: impl ToTokens, name: &str) -> syn::Error {
    syn::Error::new_spanned(
        tokens,
        format!("Invalid - attribute `{name}` cannot be specified more than once."),
    )
}
