/*!
Error types for configuring arguments and for coercing command-line input.

There are two very different kinds of failure here. [`ConfigError`] is a
programming error: an [`Argument`][crate::Argument] was configured with an
inconsistent combination of fields. [`CoerceError`] is (usually) a user
error: something on the command line couldn't be turned into a value.
*/

use core::fmt::{self, Display};

use thiserror::Error;

use crate::value::ConversionError;

/// The configurable fields of an [`Argument`][crate::Argument]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Long,
    Short,
    Help,
    Helper,
    Type,
    Arity,
    Default,
    Choices,
    Restrict,
    Suppress,
    Required,
    Append,
    Completer,
}

impl Field {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Long => "long option",
            Field::Short => "short option",
            Field::Help => "help",
            Field::Helper => "helper",
            Field::Type => "type",
            Field::Arity => "arity",
            Field::Default => "default",
            Field::Choices => "choices",
            Field::Restrict => "restrict",
            Field::Suppress => "suppress",
            Field::Required => "required",
            Field::Append => "append",
            Field::Completer => "completer",
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/**
An argument was configured inconsistently. The configuration change that
caused this error was not applied.
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The field was given the wrong kind of value entirely, such as a
    /// number as the default of a flag.
    #[error("{field} must be a {expected}, got a {found}: {value}")]
    Type {
        field: Field,
        value: String,
        expected: &'static str,
        found: &'static str,
    },

    /// The value was the right kind, but conflicts with a domain or with
    /// another field.
    #[error("{field} {value} is invalid: {constraint}")]
    Value {
        field: Field,
        value: String,
        constraint: String,
    },
}

impl ConfigError {
    pub(crate) fn value(field: Field, value: impl Display, constraint: impl Display) -> Self {
        Self::Value {
            field,
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    pub(crate) fn kind(
        field: Field,
        value: impl Display,
        expected: &'static str,
        found: &'static str,
    ) -> Self {
        Self::Type {
            field,
            value: value.to_string(),
            expected,
            found,
        }
    }

    /// The field that was rejected
    #[must_use]
    pub const fn field(&self) -> Field {
        match *self {
            Self::Type { field, .. } | Self::Value { field, .. } => field,
        }
    }

    #[must_use]
    pub const fn is_type_error(&self) -> bool {
        matches!(self, Self::Type { .. })
    }
}

/**
A user-facing failure, intended to be caught at the process boundary and
turned into an exit with [`code`][CallError::code].
*/
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{text}")]
pub struct CallError {
    pub text: String,
    pub code: i32,
}

impl CallError {
    /// The exit code for command-line values that aren't allowed
    pub const INVALID_CHOICE: i32 = 1;

    pub fn new(text: impl Into<String>, code: i32) -> Self {
        Self {
            text: text.into(),
            code,
        }
    }
}

/// Errors from turning raw command-line input into typed values
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CoerceError {
    /// The input was rejected in a way that should be reported to the user
    /// and turned into an exit code
    #[error(transparent)]
    Call(#[from] CallError),

    /// The argument's type couldn't be constructed from the input. `source`
    /// is the type's own conversion error, unchanged.
    #[error("{argument}: failed to convert {input:?}: {source}")]
    Conversion {
        argument: String,
        input: String,
        source: ConversionError,
    },

    /// The caller passed input in a shape that doesn't fit the argument's
    /// arity, like a sequence for a single-valued argument or a sequence of
    /// the wrong length
    #[error("{argument} expects {expected}, got {found}")]
    Shape {
        argument: String,
        expected: String,
        found: String,
    },
}

impl CoerceError {
    /// The exit code suggested for this error
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Call(error) => error.code,
            Self::Conversion { .. } | Self::Shape { .. } => 2,
        }
    }

    /// The underlying conversion failure, if this is one
    #[must_use]
    pub fn conversion_error(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        match self {
            Self::Conversion { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}
