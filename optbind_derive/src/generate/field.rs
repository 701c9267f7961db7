use crate::model::{DeriveField, Placement};
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

impl From<DeriveField> for TokenStream2 {
    fn from(value: DeriveField) -> Self {
        let DeriveField {
            field_name,
            placement,
            required,
            initial,
            help,
            validator,
        } = value;
        let help = match help {
            Some(help) => help.tokens,
            None => quote! { "" },
        };

        let mut descriptor = match placement {
            Placement::Flagged { short, long } => {
                let short = short.tokens;

                match long {
                    Some(long) => {
                        let long = long.tokens;
                        quote! { ::optbind::OptionDescriptor::option(#short, #help).long(#long) }
                    }
                    None => quote! { ::optbind::OptionDescriptor::option(#short, #help) },
                }
            }
            Placement::Target => quote! { ::optbind::OptionDescriptor::target(#help) },
        };

        if required {
            descriptor = quote! { #descriptor.required() };
        }

        if let Some(initial) = initial {
            let initial = initial.tokens;
            descriptor = quote! { #descriptor.initial(#initial) };
        }

        let mut field = quote! { ::optbind::Field::new(|target: &mut Self| &mut target.#field_name) };

        if let Some(validator) = validator {
            let validator = validator.tokens;
            field = quote! { #field.validate(#validator) };
        }

        quote! {
            ::optbind::Binding::new(#descriptor, #field)
        }
    }
}
