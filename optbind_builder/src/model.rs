use std::any::{Any, TypeId};

/// The kind of value a bound field holds.
///
/// Fields are limited to text (`String`), integers (the standard signed and unsigned widths), and booleans (`bool`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionType {
    /// A `String` field, assigned verbatim.
    Text,
    /// An integer field, parsed in base-10 for the field's width.
    Integer,
    /// A `bool` field; matched as a switch when flagged.
    Boolean,
}

impl OptionType {
    /// Classify the type `V`, returning `None` when `V` cannot be bound.
    ///
    /// ### Example
    /// ```
    /// # use optbind_builder as optbind;
    /// use optbind::OptionType;
    ///
    /// assert_eq!(OptionType::of::<String>(), Some(OptionType::Text));
    /// assert_eq!(OptionType::of::<u16>(), Some(OptionType::Integer));
    /// assert_eq!(OptionType::of::<f64>(), None);
    /// ```
    pub fn of<V: Any>() -> Option<Self> {
        let type_id = TypeId::of::<V>();

        if type_id == TypeId::of::<String>() {
            Some(OptionType::Text)
        } else if type_id == TypeId::of::<bool>() {
            Some(OptionType::Boolean)
        } else if integer_type_ids().contains(&type_id) {
            Some(OptionType::Integer)
        } else {
            None
        }
    }

    /// The literal bound onto an optional field that declares no initial value.
    pub fn zero(&self) -> &'static str {
        match self {
            OptionType::Text => "",
            OptionType::Integer => "0",
            OptionType::Boolean => "false",
        }
    }

    pub(crate) fn placeholder(&self) -> &'static str {
        match self {
            OptionType::Text => "TEXT",
            OptionType::Integer => "INT",
            OptionType::Boolean => "BOOL",
        }
    }
}

fn integer_type_ids() -> [TypeId; 10] {
    [
        TypeId::of::<i8>(),
        TypeId::of::<i16>(),
        TypeId::of::<i32>(),
        TypeId::of::<i64>(),
        TypeId::of::<isize>(),
        TypeId::of::<u8>(),
        TypeId::of::<u16>(),
        TypeId::of::<u32>(),
        TypeId::of::<u64>(),
        TypeId::of::<usize>(),
    ]
}

/// How to treat a flag which appears more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeats {
    /// The last occurrence wins.
    #[default]
    Overwrite,
    /// A second occurrence of an already satisfied option is a parse error.
    Reject,
}
