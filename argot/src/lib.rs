/*!
A declarative, self-consistent model of command-line arguments.

`argot` describes a single command-line argument with an [`Argument`]: its
name, its `--long` and `-s` tags, its [`Arity`], its [`ValueType`], its
default, its allowed [`Choices`], and a handful of flags. You describe only
what you care about, and `argot` derives the rest; a `--jobs` option with a
default of `4` is an optional, single-valued `int` argument named `JOBS`,
without any further configuration.

The model is kept consistent at all times, not just at construction. Every
change goes through a setter that re-derives the dependent fields, and a
change that would leave the argument inconsistent (a default that doesn't
fit the arity, a short option that's two characters long) is rejected with
a [`ConfigError`] without modifying the argument.

Once an argument is configured, [`coerce`] turns the raw words that a
tokenizer matched to it into typed [`Values`], enforcing its choices.
Tokenizing the command line itself, resolving subcommands, and printing help
are left to the caller; the [`ArgHelper`] hook is where a help renderer
plugs in.

```
use argot::{ArgumentConfig, RawInput, ValueType, Values};

let size = ArgumentConfig::new()
    .name("SIZE")
    .value_type(ValueType::Int)
    .arity(2)
    .default([640, 480])
    .build()
    .unwrap();

assert!(size.is_positional() && size.required());
assert_eq!(
    size.coerce(RawInput::Multiple(Some(&["800", "600"]))).unwrap(),
    Values::many([800, 600]),
);
```
*/

mod argument;
pub mod arity;
pub mod choices;
pub mod coerce;
pub mod errors;
pub mod help;
pub mod value;

pub use argument::{Argument, ArgumentConfig};
pub use arity::Arity;
pub use choices::{Choices, Completer};
pub use coerce::{RawInput, coerce};
pub use errors::{CallError, CoerceError, ConfigError, Field};
pub use help::{ArgHelper, SynopsisHelper};
pub use value::{ConversionError, Converter, Value, ValueType, Values};
