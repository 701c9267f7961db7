use proc_macro2::TokenStream as TokenStream2;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct DeriveValue {
    pub tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        self.tokens.to_string() == other.tokens.to_string()
    }
}

impl Eq for DeriveValue {}

/// The raw contents of the `#[optbind(..)]` attributes on one item.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct IntermediateAttributes {
    pub singletons: HashSet<String>,
    pub pairs: HashMap<String, DeriveValue>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Placement {
    Flagged {
        short: DeriveValue,
        long: Option<DeriveValue>,
    },
    Target,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveField {
    pub field_name: syn::Ident,
    pub placement: Placement,
    pub required: bool,
    pub initial: Option<DeriveValue>,
    pub help: Option<DeriveValue>,
    pub validator: Option<DeriveValue>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveParser {
    pub struct_name: syn::Ident,
    pub program: Option<DeriveValue>,
    pub pre: Option<DeriveValue>,
    pub post: Option<DeriveValue>,
    pub reject_repeats: bool,
    pub fields: Vec<DeriveField>,
}
