use std::any::Any;

use crate::api::capture::*;
use crate::api::OptionDescriptor;
use crate::model::OptionType;

/// The reason a validator rejected a value.
pub type Rejection = Box<dyn std::error::Error + Send + Sync>;

type Accessor<T, V> = Box<dyn Fn(&mut T) -> &mut V>;
type Validator<V> = Box<dyn Fn(&V) -> Result<(), Rejection>>;

/// A field of type `V` on the target `T`, with an optional validator.
///
/// The value type `V` must be one of the types classified by [`OptionType::of`].
/// Any other type is rejected when the parser is built.
///
/// ### Example
/// ```
/// # use optbind_builder as optbind;
/// use optbind::Field;
///
/// #[derive(Default)]
/// struct Settings {
///     name: String,
/// }
///
/// let field = Field::new(|settings: &mut Settings| &mut settings.name)
///     .validate(|name: &String| {
///         if name.is_empty() {
///             Err("name must not be empty".into())
///         } else {
///             Ok(())
///         }
///     });
/// ```
pub struct Field<T, V> {
    accessor: Accessor<T, V>,
    validator: Option<Validator<V>>,
}

impl<T, V: Any> Field<T, V> {
    /// Create a field from its accessor.
    pub fn new(accessor: impl Fn(&mut T) -> &mut V + 'static) -> Self {
        Self {
            accessor: Box::new(accessor),
            validator: None,
        }
    }

    /// Validate each converted value before it is assigned.
    /// A rejection stops the parse with [`ParseError::ValidationFailed`](crate::ParseError::ValidationFailed).
    /// A declared [`initial`](crate::OptionDescriptor::initial) value is validated too, but the type's zero value is not.
    /// If repeated, only the final validator will apply.
    pub fn validate(
        mut self,
        validator: impl Fn(&V) -> Result<(), Rejection> + 'static,
    ) -> Self {
        self.validator.replace(Box::new(validator));
        self
    }
}

impl<T, V: Any> GenericCapturable<T> for Field<T, V> {
    fn option_type(&self) -> Option<OptionType> {
        OptionType::of::<V>()
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<V>()
    }

    fn capture(&self, target: &mut T, token: &str) -> Result<(), InvalidCapture> {
        let value: V = convert(token)?;

        if let Some(validator) = &self.validator {
            validator(&value).map_err(|source| InvalidCapture::Rejected {
                token: token.to_string(),
                source,
            })?;
        }

        *(self.accessor)(target) = value;
        Ok(())
    }

    fn initialize(&self, target: &mut T, token: &str) -> Result<(), InvalidCapture> {
        *(self.accessor)(target) = convert(token)?;
        Ok(())
    }
}

/// One entry of a binding table: the descriptor paired with its field.
///
/// ### Example
/// ```
/// # use optbind_builder as optbind;
/// use optbind::{Binding, Field, OptionDescriptor};
///
/// #[derive(Default)]
/// struct Settings {
///     verbose: bool,
/// }
///
/// let binding = Binding::new(
///     OptionDescriptor::option('v', "Print more.").long("verbose"),
///     Field::new(|settings: &mut Settings| &mut settings.verbose),
/// );
/// assert_eq!(binding.descriptor().short_symbol(), 'v');
/// ```
pub struct Binding<T> {
    descriptor: OptionDescriptor,
    field: Box<dyn GenericCapturable<T>>,
}

impl<T: 'static> Binding<T> {
    /// Bind the descriptor onto the field.
    pub fn new<V: Any>(descriptor: OptionDescriptor, field: Field<T, V>) -> Self {
        Self {
            descriptor,
            field: Box::new(field),
        }
    }
}

impl<T> Binding<T> {
    /// The descriptor of this binding.
    pub fn descriptor(&self) -> &OptionDescriptor {
        &self.descriptor
    }

    pub(crate) fn consume(self) -> (OptionDescriptor, Box<dyn GenericCapturable<T>>) {
        (self.descriptor, self.field)
    }
}

impl<T> std::fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("descriptor", &self.descriptor)
            .field("type", &self.field.type_name())
            .finish()
    }
}
