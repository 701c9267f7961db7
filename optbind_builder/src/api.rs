mod capture;
mod core;
mod descriptor;
mod field;

pub use self::core::*;
pub(crate) use capture::*;
pub use descriptor::*;
pub use field::*;
