/*!
Typed values, and the [`ValueType`] tags that produce them from raw strings.
*/

use core::{
    fmt::{self, Debug, Display},
    slice,
};
use std::{error::Error as StdError, path::PathBuf, sync::Arc};

use joinery::JoinableIterator;
use thiserror::Error;

/// The error produced by a failed conversion. For the built-in types this is
/// the standard library's own parse error, unmodified.
pub type ConversionError = Box<dyn StdError + Send + Sync + 'static>;

/// A single typed value, either parsed from the command line or given as a
/// default.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Path(PathBuf),
}

impl Value {
    /// The name of this value's kind, as used in error messages
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Path(_) => "path",
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(value) => write!(f, "{value}"),
            Value::Int(value) => write!(f, "{value}"),
            Value::Float(value) => write!(f, "{value}"),
            Value::Str(value) => write!(f, "{value:?}"),
            Value::Path(value) => write!(f, "{:?}", value.display().to_string()),
        }
    }
}

macro_rules! value_from {
    ($($type:ty => |$value:ident| $convert:expr,)*) => {
        $(
            impl From<$type> for Value {
                #[inline]
                fn from($value: $type) -> Self {
                    $convert
                }
            }

            impl From<$type> for Values {
                #[inline]
                fn from(value: $type) -> Self {
                    Values::One(value.into())
                }
            }
        )*
    };
}

value_from! {
    bool => |value| Value::Bool(value),
    i64 => |value| Value::Int(value),
    i32 => |value| Value::Int(value.into()),
    u32 => |value| Value::Int(value.into()),
    f64 => |value| Value::Float(value),
    String => |value| Value::Str(value),
    &str => |value| Value::Str(value.to_owned()),
    PathBuf => |value| Value::Path(value),
}

/**
Either a default value or the result of coercing command-line input.

The shape mirrors the argument's arity: flags and single-valued arguments
produce [`One`][Values::One], multi-valued arguments produce
[`Many`][Values::Many], and an argument with no default produces
[`Absent`][Values::Absent] when it didn't appear.
*/
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Values {
    #[default]
    Absent,
    One(Value),
    Many(Vec<Value>),
}

impl Values {
    /// Build a scalar value
    #[inline]
    #[must_use]
    pub fn one(value: impl Into<Value>) -> Self {
        Self::One(value.into())
    }

    /// Build a sequence of values
    #[must_use]
    pub fn many<T: Into<Value>>(values: impl IntoIterator<Item = T>) -> Self {
        Self::Many(values.into_iter().map(Into::into).collect())
    }

    #[inline]
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    #[inline]
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Many(_))
    }

    /// Iterate over every contained value; a scalar yields one item.
    pub fn iter(&self) -> slice::Iter<'_, Value> {
        match self {
            Self::Absent => [].iter(),
            Self::One(value) => slice::from_ref(value).iter(),
            Self::Many(values) => values.iter(),
        }
    }

    /// The first contained value, if any
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&Value> {
        self.iter().next()
    }

    #[inline]
    #[must_use]
    pub fn as_one(&self) -> Option<&Value> {
        match self {
            Self::One(value) => Some(value),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_many(&self) -> Option<&[Value]> {
        match self {
            Self::Many(values) => Some(values),
            _ => None,
        }
    }

    /// A short description of the shape, for error messages
    pub(crate) const fn shape(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::One(_) => "scalar",
            Self::Many(_) => "sequence",
        }
    }
}

impl From<Value> for Values {
    #[inline]
    fn from(value: Value) -> Self {
        Self::One(value)
    }
}

impl From<Vec<Value>> for Values {
    #[inline]
    fn from(values: Vec<Value>) -> Self {
        Self::Many(values)
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Values {
    #[inline]
    fn from(values: [T; N]) -> Self {
        Self::many(values)
    }
}

impl Display for Values {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => f.write_str("<absent>"),
            Self::One(value) => write!(f, "{value}"),
            Self::Many(values) => write!(f, "[{}]", values.iter().join_with(", ")),
        }
    }
}

/// A bool argument got something other than one of the recognized spellings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected a boolean (true/false, yes/no, on/off, 1/0), got {input:?}")]
pub struct InvalidBool {
    pub input: String,
}

/// An enum argument got a string that isn't one of its variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant {
    pub input: String,
    pub variants: Arc<[String]>,
}

impl Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} isn't one of {}",
            self.input,
            self.variants.iter().join_with(", ")
        )
    }
}

impl StdError for UnknownVariant {}

type ParseFn = dyn Fn(&str) -> Result<Value, ConversionError> + Send + Sync;
type AcceptFn = dyn Fn(&Value) -> bool + Send + Sync;

/**
A user-supplied value type, for anything outside of the built-in set.

A converter has a name, which identifies it (two converters with the same
name are considered the same type), a parse function, and optionally a
predicate that decides which [`Value`]s belong to the type. Without a
predicate, every value is accepted as a default.
*/
#[derive(Clone)]
pub struct Converter {
    name: Arc<str>,
    parse: Arc<ParseFn>,
    accepts: Option<Arc<AcceptFn>>,
}

impl Converter {
    pub fn new(
        name: impl Into<Arc<str>>,
        parse: impl Fn(&str) -> Result<Value, ConversionError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            parse: Arc::new(parse),
            accepts: None,
        }
    }

    /// Restrict the values (such as defaults) that belong to this type.
    #[must_use]
    pub fn accepting(mut self, accepts: impl Fn(&Value) -> bool + Send + Sync + 'static) -> Self {
        self.accepts = Some(Arc::new(accepts));
        self
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/**
The type of an argument's values.

This is the closed set of kinds that `argot` knows how to parse, plus an
escape hatch in [`Custom`][ValueType::Custom] for anything else.
[`Enum`][ValueType::Enum] is a string type that only accepts one of a fixed
set of variant names.
*/
#[derive(Debug, Clone, Default)]
pub enum ValueType {
    #[default]
    Str,
    Path,
    Int,
    Float,
    Bool,
    Enum(Arc<[String]>),
    Custom(Converter),
}

impl ValueType {
    /// Build an enum type from its variant names
    pub fn enumeration<S: Into<String>>(variants: impl IntoIterator<Item = S>) -> Self {
        Self::Enum(variants.into_iter().map(Into::into).collect())
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Str => "str",
            Self::Path => "path",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Enum(_) => "enum",
            Self::Custom(converter) => converter.name(),
        }
    }

    /// The type a default value implies when no type is given explicitly
    #[must_use]
    pub const fn infer(value: &Value) -> Self {
        match value {
            Value::Bool(_) => Self::Bool,
            Value::Int(_) => Self::Int,
            Value::Float(_) => Self::Float,
            Value::Str(_) => Self::Str,
            Value::Path(_) => Self::Path,
        }
    }

    /// Values of this type are free-form strings, which are usually paths
    /// when it comes to shell completion.
    #[inline]
    #[must_use]
    pub const fn is_string_like(&self) -> bool {
        matches!(self, Self::Str | Self::Path)
    }

    /// The variant names, if this is an enum type
    #[must_use]
    pub fn variants(&self) -> Option<&[String]> {
        match self {
            Self::Enum(variants) => Some(variants),
            _ => None,
        }
    }

    /// Check that `value` is an instance of this type.
    #[must_use]
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Str, Value::Str(_))
            | (Self::Path, Value::Path(_))
            | (Self::Int, Value::Int(_))
            | (Self::Float, Value::Float(_))
            | (Self::Bool, Value::Bool(_)) => true,
            (Self::Enum(variants), Value::Str(value)) => variants.contains(value),
            (Self::Custom(converter), value) => converter
                .accepts
                .as_ref()
                .is_none_or(|accepts| accepts(value)),
            _ => false,
        }
    }

    /**
    Construct a value of this type from a raw command-line string.

    Numeric failures are the standard library's `ParseIntError` and
    `ParseFloatError`, boxed but otherwise untouched.
    */
    pub fn convert(&self, raw: &str) -> Result<Value, ConversionError> {
        match self {
            Self::Str => Ok(Value::Str(raw.to_owned())),
            Self::Path => Ok(Value::Path(PathBuf::from(raw))),
            Self::Int => Ok(Value::Int(raw.parse()?)),
            Self::Float => Ok(Value::Float(raw.parse()?)),
            Self::Bool => parse_bool(raw).map(Value::Bool).ok_or_else(|| {
                InvalidBool {
                    input: raw.to_owned(),
                }
                .into()
            }),
            Self::Enum(variants) if variants.iter().any(|variant| variant == raw) => {
                Ok(Value::Str(raw.to_owned()))
            }
            Self::Enum(variants) => Err(UnknownVariant {
                input: raw.to_owned(),
                variants: variants.clone(),
            }
            .into()),
            Self::Custom(converter) => (converter.parse)(raw),
        }
    }
}

impl PartialEq for ValueType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Enum(lhs), Self::Enum(rhs)) => lhs == rhs,
            (Self::Custom(lhs), Self::Custom(rhs)) => lhs.name == rhs.name,
            (lhs, rhs) => core::mem::discriminant(lhs) == core::mem::discriminant(rhs),
        }
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    const TRUE: [&str; 4] = ["true", "yes", "on", "1"];
    const FALSE: [&str; 4] = ["false", "no", "off", "0"];

    if TRUE.iter().any(|word| word.eq_ignore_ascii_case(raw)) {
        Some(true)
    } else if FALSE.iter().any(|word| word.eq_ignore_ascii_case(raw)) {
        Some(false)
    } else {
        None
    }
}
