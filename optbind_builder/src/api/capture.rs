use std::any::{Any, TypeId};
use thiserror::Error;

use crate::api::Rejection;
use crate::model::OptionType;

/// Behaviour to capture a token onto one field of the target `T`.
///
/// We use this to erase the field type `V` so that differently typed fields sit in a single binding table.
pub(crate) trait GenericCapturable<T> {
    /// The kind of the bound field, or `None` when the field type cannot be bound.
    fn option_type(&self) -> Option<OptionType>;

    /// The name of the bound field type.
    fn type_name(&self) -> &'static str;

    /// Convert, validate, and assign a token onto the field.
    fn capture(&self, target: &mut T, token: &str) -> Result<(), InvalidCapture>;

    /// Convert and assign a token onto the field, without validation.
    fn initialize(&self, target: &mut T, token: &str) -> Result<(), InvalidCapture>;
}

#[derive(Debug, Error)]
pub(crate) enum InvalidCapture {
    #[error("cannot convert '{token}' to {type_name}.")]
    InvalidConversion {
        token: String,
        type_name: &'static str,
    },
    #[error("'{token}' was rejected: {source}")]
    Rejected {
        token: String,
        #[source]
        source: Rejection,
    },
}

macro_rules! convert_integer {
    ($type_id:expr, $token:expr, $($t:ty),+) => {
        $(
            if $type_id == TypeId::of::<$t>() {
                return $token
                    .parse::<$t>()
                    .map(|value| Box::new(value) as Box<dyn Any>)
                    .map_err(|_| InvalidCapture::InvalidConversion {
                        token: $token.to_string(),
                        type_name: std::any::type_name::<$t>(),
                    });
            }
        )+
    };
}

fn integer(type_id: TypeId, token: &str) -> Result<Box<dyn Any>, InvalidCapture> {
    convert_integer!(type_id, token, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
    unreachable!("internal error - unsupported field types must be rejected by the registry")
}

fn boolean(token: &str) -> Result<bool, InvalidCapture> {
    if token.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if token.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(InvalidCapture::InvalidConversion {
            token: token.to_string(),
            type_name: std::any::type_name::<bool>(),
        })
    }
}

/// Convert the token into `V`, which must be one of the types classified by [`OptionType::of`].
pub(crate) fn convert<V: Any>(token: &str) -> Result<V, InvalidCapture> {
    let value: Box<dyn Any> = match OptionType::of::<V>() {
        Some(OptionType::Text) => Box::new(token.to_string()),
        Some(OptionType::Boolean) => Box::new(boolean(token)?),
        Some(OptionType::Integer) => integer(TypeId::of::<V>(), token)?,
        None => {
            unreachable!("internal error - unsupported field types must be rejected by the registry")
        }
    };

    match value.downcast::<V>() {
        Ok(value) => Ok(*value),
        Err(_) => unreachable!("internal error - converted value must match the field type"),
    }
}
