/*!
The [`Arity`] of an argument: how many command-line values it consumes.
*/

use core::{
    fmt::{self, Display, Write as _},
    str::FromStr,
};

use thiserror::Error;

/**
The declared cardinality of an argument.

An arity is either a fixed count or one of the four symbolic arities. The
symbolic arities are written the way they appear in usage strings: `?`, `*`,
`+`, and `~`.

Which arities are legal depends on the argument. Optional arguments (those
with a `--long` or `-s` tag) may have a count of `0`, which makes them flags,
but may not use [`RestAll`][Arity::RestAll]. Positional arguments need at
least one value, so `0` is rejected for them, but they may consume the rest
of the command line.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// Exactly this many values. `Count(0)` is a flag.
    Count(u32),

    /// `?`: zero or one value
    Optional,

    /// `*`: any number of values, including none
    ZeroOrMore,

    /// `+`: at least one value
    OneOrMore,

    /// `~`: every remaining argument on the command line
    RestAll,
}

impl Arity {
    /// The arity of a flag, which takes no values
    pub const FLAG: Self = Self::Count(0);

    /// The arity of an ordinary argument, which takes one value
    pub const ONE: Self = Self::Count(1);

    /// This arity takes no values at all.
    #[inline]
    #[must_use]
    pub const fn is_flag(self) -> bool {
        matches!(self, Self::Count(0))
    }

    /// This arity takes at most one value, and produces a scalar.
    #[inline]
    #[must_use]
    pub const fn is_single(self) -> bool {
        matches!(self, Self::Count(1) | Self::Optional)
    }

    /// This arity produces a sequence of values.
    #[inline]
    #[must_use]
    pub const fn is_multiple(self) -> bool {
        !self.is_flag() && !self.is_single()
    }

    /// The symbol for this arity, if it isn't a fixed count
    #[must_use]
    pub const fn symbol(self) -> Option<char> {
        match self {
            Self::Count(_) => None,
            Self::Optional => Some('?'),
            Self::ZeroOrMore => Some('*'),
            Self::OneOrMore => Some('+'),
            Self::RestAll => Some('~'),
        }
    }

    /// Check if a sequence of `len` values satisfies this arity.
    #[must_use]
    pub const fn accepts_len(self, len: usize) -> bool {
        match self {
            Self::Count(count) => len == count as usize,
            Self::Optional => len <= 1,
            Self::OneOrMore => len >= 1,
            Self::ZeroOrMore | Self::RestAll => true,
        }
    }
}

impl Default for Arity {
    #[inline]
    fn default() -> Self {
        Self::ONE
    }
}

impl From<u32> for Arity {
    #[inline]
    fn from(count: u32) -> Self {
        Self::Count(count)
    }
}

impl Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Count(count) => write!(f, "{count}"),
            _ => self.symbol().map_or(Ok(()), |symbol| f.write_char(symbol)),
        }
    }
}

/// An arity string was neither a non-negative integer nor one of `?*+~`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid arity {input:?}: expected a non-negative integer or one of `?`, `*`, `+`, `~`")]
pub struct ParseArityError {
    pub input: String,
}

impl FromStr for Arity {
    type Err = ParseArityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim() {
            "?" => Ok(Self::Optional),
            "*" => Ok(Self::ZeroOrMore),
            "+" => Ok(Self::OneOrMore),
            "~" => Ok(Self::RestAll),
            count => count.parse().map(Self::Count).map_err(|_| ParseArityError {
                input: input.to_owned(),
            }),
        }
    }
}
