//! `optbind` binds command line options onto the typed fields of a struct.
//!
//! A struct declares which of its fields are options, and `optbind` does the rest: tokenizing the Cli, matching flags, converting text to the field types, and reporting what is missing.
//! The design concerns are deliberately narrow:
//! * *Typed binding*:
//! Each option targets one field of a supported type (`String`, `bool`, or a primitive integer).
//! The user never converts `&str -> T` by hand.
//! * *Flags and a target*:
//! Options are matched by `-s` or `--long` symbols, plus at most one positional *target* option.
//! * *Reported, not raised*:
//! Missing required options and the usage flag (`-?`) are reported on the bound [`CommandLine`].
//! Genuine mistakes on the Cli (unknown options, unconvertible values, rejected values) are a [`ParseError`].
//! * *Detailed yet basic UX*:
//! The usage message is a plain options table, wrapped to the terminal width.
//!
//! # Usage
//! via [derive Api](./derive/index.html):
//! ```no_run
#![doc = include_str!("../demos/sample.rs")]
//! ```
//!
//! This generates the following Cli program:
//! ```console
//! $ sample -?
//! usage: sample [-?] [-c COUNT] [-l] [-s TEXT] TARGET
//!
//! Greets somebody, some number of times.
//!
//! options:
//!  TARGET                    Who to greet. (required)
//!  -?                        Show this usage message.
//!  -c COUNT, --count COUNT   How many times to greet. (default: 1)
//!  -l, --loud                Shout the greeting.
//!  -s TEXT                   The salutation.
//!
//! $ sample -c 2 -s "Good day" Rust
//! Good day, Rust!
//! Good day, Rust!
//!
//! $ sample --count many Rust
//! Option -c/--count cannot convert 'many' to u32.
//! --count many Rust
//!         ^^^^
//! ```
//!
//! or via builder Api (this page):
//! ```no_run
#![doc = include_str!("../demos/builder.rs")]
//! ```
//!
//! # Builder Api
//! Configure `optbind` by starting with a [`CommandLineParser`] and `add`ing [`Binding`]s.
//! Each binding pairs an [`OptionDescriptor`] with a [`Field`]:
//! * [`OptionDescriptor::option`] declares a flagged option by its short symbol, optionally with a [`long`](OptionDescriptor::long) symbol.
//! * [`OptionDescriptor::target`] declares the positional option; there may be at most one.
//! * [`required`](OptionDescriptor::required) marks the option as required, and [`initial`](OptionDescriptor::initial) declares the value applied when the option is absent.
//! * [`Field::new`] takes the accessor for the struct field, and [`Field::validate`] adds a domain check on each converted value.
//!
//! The parser is checked when built.
//! An unsupported field type, a second target option, or a duplicated symbol is a [`ConfigError`].
//!
//! Alternatively, implement [`prelude::Bindable`] by hand to return the bindings for a struct, and then call `parse` or `parse_tokens` on the struct itself.
//!
//! # Cli Semantics
//! `optbind` binds the Cli tokens according to the following rules.
//! * A token beginning with `-` is always a flag: `-s` by short symbol or `--long` by long symbol.
//! The usage flag `-?` is reserved.
//! * A boolean option is a switch, and never takes a value.
//! Any other flagged option takes the next token as its value.
//! * A token which is not a flag goes to the option awaiting a value, or else to the target option.
//! Once the target option is bound, further positional tokens are ignored.
//! * A flag immediately followed by another flag is dropped.
//! * A single token `-s "value"` is the same as the two tokens `-s` and `value`.
//! * Repeating a flag overwrites the earlier value, unless [`Repeats::Reject`] is configured.
//!
//! # Features
//! * `unit_test`: For features that help with unit testing.
//! * `tracing_debug`: Emit `tracing` debug events while matching and binding.
pub mod derive;
pub use optbind_builder::*;
