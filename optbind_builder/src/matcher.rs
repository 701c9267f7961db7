mod core;
mod model;
mod registry;
mod requirement;
mod tokenizer;

pub(crate) use self::core::*;
pub(crate) use model::*;
pub(crate) use registry::*;
pub(crate) use requirement::*;
pub(crate) use tokenizer::*;
