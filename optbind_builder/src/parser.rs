mod base;
mod interface;
mod middleware;
mod printer;

pub(crate) use base::*;
pub use base::{CommandLineError, ConfigError, ParseError};
pub(crate) use interface::*;
pub use middleware::BindingParser;
pub(crate) use printer::*;

#[cfg(test)]
pub(crate) use interface::util;
