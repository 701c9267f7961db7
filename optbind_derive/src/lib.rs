extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::DeriveParser;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

/// Generate the `optbind::prelude::Bindable` implementation for a struct.
/// See the `optbind::derive` module for the attribute grammar.
#[proc_macro_derive(CommandLine, attributes(optbind))]
pub fn command_line(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);

    match DeriveParser::try_from(derive_input) {
        Ok(derive_parser) => TokenStream2::from(derive_parser).into(),
        Err(error) => error.to_compile_error().into(),
    }
}
