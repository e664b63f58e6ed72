/*!
Coercion of raw command-line input into typed [`Values`].

By the time input reaches this module, something else (a tokenizer, a
subcommand resolver) has already decided which words on the command line
belong to which [`Argument`], and split them into the shape the argument's
arity calls for. [`coerce`] is only responsible for the last step: checking
the words against the argument's choices and running them through its type.
*/

use joinery::JoinableIterator;
use tracing::{debug, trace};

use crate::{
    Argument,
    arity::Arity,
    errors::{CallError, CoerceError},
    value::{Value, Values},
};

/**
The raw input for a single argument.

Which shape is expected depends on the argument:

| argument                       | input                                 |
|--------------------------------|---------------------------------------|
| flag                           | [`Presence`][RawInput::Presence]      |
| flag with `append`             | [`Count`][RawInput::Count]            |
| single-valued                  | [`Single`][RawInput::Single]          |
| single-valued with `append`    | [`Multiple`][RawInput::Multiple] or [`Occurrences`][RawInput::Occurrences], one entry per occurrence |
| multi-valued                   | [`Multiple`][RawInput::Multiple]      |

Flags accept either of `Presence` or `Count`. An outer `None` means the
argument didn't appear on the command line. A `None` entry in
`Occurrences` is an occurrence that came without a value (as an appending
`?` option may); it stands for the argument's default.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawInput<'a> {
    Presence(bool),
    Count(u32),
    Single(Option<&'a str>),
    Multiple(Option<&'a [&'a str]>),
    Occurrences(Option<&'a [Option<&'a str>]>),
}

impl RawInput<'_> {
    const fn shape(&self) -> &'static str {
        match self {
            Self::Presence(_) => "presence",
            Self::Count(_) => "count",
            Self::Single(_) => "single",
            Self::Multiple(_) => "multiple",
            Self::Occurrences(_) => "occurrences",
        }
    }
}

/**
Turn raw input into the typed value for `argument`.

Absent input produces the argument's default. Flags produce `!default` when
present, or the number of times they appeared if they `append`. Everything
else is checked against the argument's choices (when `restrict` is set) and
converted with its type, producing a scalar for single-valued arguments and
a sequence for multi-valued and appending ones.

Input of the wrong shape for the argument's arity, including a sequence of
the wrong length for a multi-valued arity, is a [`CoerceError::Shape`].
Occurrences without a value take the argument's default, and are dropped if
it has none.

The only [`CallError`] produced here is for a value outside of the
argument's choices; failures from the type's own conversion are returned
as [`CoerceError::Conversion`], carrying the type's own error.
*/
pub fn coerce(argument: &Argument, input: RawInput<'_>) -> Result<Values, CoerceError> {
    trace!(argument = %argument.display_form(), ?input, "coercing input");

    let result = dispatch(argument, input);

    if let Err(ref error) = result {
        debug!(argument = %argument.display_form(), %error, "coercion failed");
    }

    result
}

fn dispatch(argument: &Argument, input: RawInput<'_>) -> Result<Values, CoerceError> {
    if argument.is_flag() {
        let count = match input {
            RawInput::Presence(present) => u32::from(present),
            RawInput::Count(count) => count,
            input => return Err(shape_error(argument, "presence or count", input)),
        };

        if argument.append() {
            return Ok(Values::One(Value::Int(count.into())));
        }

        let default = matches!(argument.default(), Values::One(Value::Bool(true)));
        return Ok(Values::One(Value::Bool(if count > 0 { !default } else { default })));
    }

    let sequence = argument.is_multiple() || argument.append();

    match input {
        RawInput::Single(None) if !sequence => Ok(argument.default().clone()),
        RawInput::Single(Some(raw)) if !sequence => {
            check_choices(argument, [raw])?;
            convert(argument, raw).map(Values::One)
        }
        RawInput::Multiple(None) if sequence => Ok(argument.default().clone()),
        RawInput::Multiple(Some(raw)) if sequence => {
            let arity = argument.arity();

            if arity.is_multiple() && !arity.accepts_len(raw.len()) {
                return Err(CoerceError::Shape {
                    argument: argument.display_form().to_string(),
                    expected: expected_len(arity),
                    found: count_of(raw.len()),
                });
            }

            check_choices(argument, raw.iter().copied())?;
            raw.iter()
                .map(|raw| convert(argument, raw))
                .collect::<Result<_, _>>()
                .map(Values::Many)
        }
        RawInput::Occurrences(None) if argument.append() => Ok(argument.default().clone()),
        RawInput::Occurrences(Some(raw)) if argument.append() => {
            check_choices(argument, raw.iter().flatten().copied())?;

            let default = argument.default().as_one();

            raw.iter()
                .filter_map(|raw| match *raw {
                    Some(raw) => Some(convert(argument, raw)),
                    None => default.cloned().map(Ok),
                })
                .collect::<Result<_, _>>()
                .map(Values::Many)
        }
        input => Err(shape_error(
            argument,
            if sequence { "multiple" } else { "single" },
            input,
        )),
    }
}

fn expected_len(arity: Arity) -> String {
    match arity {
        Arity::Count(count) => format!("exactly {count} values"),
        Arity::OneOrMore => "at least 1 value".to_owned(),
        arity => format!("a number of values allowed by arity {arity}"),
    }
}

fn count_of(len: usize) -> String {
    match len {
        1 => "1 value".to_owned(),
        len => format!("{len} values"),
    }
}

/// Reject the first word that isn't one of the argument's choices, if the
/// argument is restricted to them.
fn check_choices<'a>(
    argument: &Argument,
    raw: impl IntoIterator<Item = &'a str>,
) -> Result<(), CallError> {
    let choices = argument.choices();

    if !argument.restrict() || choices.is_empty() {
        return Ok(());
    }

    match raw.into_iter().find(|raw| !choices.contains(raw)) {
        None => Ok(()),
        Some(raw) => Err(CallError::new(
            format!(
                "argument {}: invalid choice {raw:?} (choose from {})",
                argument.display_form(),
                choices.keys().join_with(", "),
            ),
            CallError::INVALID_CHOICE,
        )),
    }
}

fn convert(argument: &Argument, raw: &str) -> Result<Value, CoerceError> {
    argument
        .value_type()
        .convert(raw)
        .map_err(|source| CoerceError::Conversion {
            argument: argument.display_form().to_string(),
            input: raw.to_owned(),
            source,
        })
}

fn shape_error(argument: &Argument, expected: &str, input: RawInput<'_>) -> CoerceError {
    CoerceError::Shape {
        argument: argument.display_form().to_string(),
        expected: format!("{expected} input"),
        found: format!("{} input", input.shape()),
    }
}
