//! Derive Api for `optbind` configuration.
//!
//! ### Getting Started
//! Use the derive Api by instrumenting a struct `S` with `#[derive(Default, CommandLine)]`.
//! This generates the [`Bindable`](../prelude/trait.Bindable.html) implementation for `S`, so that `S::parse()` and `S::parse_tokens(..)` are available via `use optbind::prelude::*`.
//!
//! ```no_run
#![doc = include_str!("../demos/sample.rs")]
//! ```
//!
//! ### Struct Configuration
//! * `#[optbind(program = "..")]` names the program in the usage message.
//! When absent, the executable file name is used.
//! * `#[optbind(pre = "..")]` and `#[optbind(post = "..")]` add text before and after the options table, respectively.
//! * `#[optbind(reject_repeats)]` makes a repeated flag a parse error, rather than overwriting the earlier value.
//!
//! ### Field Configuration
//! Only fields instrumented with `#[optbind(..)]` are bound; the remainder keep their `Default` value.
//! * `#[optbind(short = C)]` binds a flagged option, where `C` is a char literal (ex: `'c'`).
//! * `#[optbind(long = "..")]` additionally matches the flagged option by `--..`.
//! * `#[optbind(target)]` binds the positional option instead.
//! A field must be either `target` or have a `short`.
//! * `#[optbind(required)]` marks the option as required.
//! * `#[optbind(default = V)]` declares the initial value, applied when the option is absent.
//! Only one of `required` and `default` may be used on the same field.
//! * `#[optbind(help = "..")]` describes the option in the usage message.
//! * `#[optbind(validate = F)]` checks each converted value with `F`, of the signature `fn(&T) -> Result<(), Rejection>`.
//!
//! A partial example of these rules is provided as follows:
//! ```ignore
//! #[derive(Default, CommandLine)]
//! struct Settings {
//!     #[optbind(short = 'v', long = "verbose")]
//!     verbose: bool,
//!     // the above generates:
//!     //  Binding::new(OptionDescriptor::option('v', "").long("verbose"), Field::new(|target: &mut Self| &mut target.verbose))
//!
//!     #[optbind(short = 'n', default = 3, help = "How many.")]
//!     number: u8,
//!     // the above generates:
//!     //  Binding::new(OptionDescriptor::option('n', "How many.").initial(3), Field::new(|target: &mut Self| &mut target.number))
//!
//!     #[optbind(target, required, validate = exists)]
//!     path: String,
//!     // the above generates:
//!     //  Binding::new(OptionDescriptor::target("").required(), Field::new(|target: &mut Self| &mut target.path).validate(exists))
//!
//!     scratch: Vec<String>,
//!     // the above is not bound
//! }
//! ```

pub use optbind_derive::*;
