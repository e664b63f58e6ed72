/*!
[`Argument`], the self-consistent description of a single command-line
argument, and [`ArgumentConfig`], the declarative way to build one.
*/

use core::fmt::{self, Display};
use std::sync::Arc;

use lazy_format::{lazy_format, make_lazy_format};
use tracing::{debug, trace};

use crate::{
    arity::Arity,
    choices::{Choices, Completer},
    coerce::{self, RawInput},
    errors::{CoerceError, ConfigError, Field},
    help::{ArgHelper, SynopsisHelper},
    value::{Value, ValueType, Values},
};

static DEFAULT_HELPER: SynopsisHelper = SynopsisHelper;

/// A field that can be given explicitly, or else is derived from the rest
/// of the argument. The explicit value is kept around so that it survives
/// changes to the fields it would otherwise be derived from.
#[derive(Debug, Clone, PartialEq)]
struct Derived<T> {
    explicit: Option<T>,
    effective: T,
}

impl<T: Clone> Derived<T> {
    fn new(effective: T) -> Self {
        Self {
            explicit: None,
            effective,
        }
    }

    fn resolve(&mut self, implied: T) {
        self.effective = match self.explicit {
            Some(ref explicit) => explicit.clone(),
            None => implied,
        };
    }

    fn is_explicit(&self) -> bool {
        self.explicit.is_some()
    }
}

/**
The description of a single command-line argument.

An [`Argument`] is always internally consistent. Every setter validates the
change against the rest of the argument and then re-derives every field that
depends on it; if anything is inconsistent, the setter returns a
[`ConfigError`] and the argument is left exactly as it was.

Every field except `long` and `short` remembers whether it was given
explicitly: an explicit value always wins, and an unset field falls back to
its neutral value or is re-derived whenever the fields it depends on change.
Passing `None` (or [`Values::Absent`] for the default) to a setter forgets
the explicit value. `long` and `short` have no separate notion of "unset";
an empty option is the same as no option.

Derivations, in order:

- `name` is the uppercased long option, or else the uppercased short option.
- `suppress`, `required`, and `append` are forced to `false`, `true`, and
  `false` for positional arguments.
- `arity` is `*` when the default is a sequence, and `1` otherwise.
- `default` is `false` for flags, an empty sequence for `*` and `~`, and
  absent otherwise.
- `type` is `bool` for flags, or else the type of the default, or else `str`.
- `completer` lists the choices if there are any, or else completes paths
  for string types.
*/
#[derive(Debug, Clone)]
pub struct Argument {
    name: Derived<String>,
    long: String,
    short: Option<char>,
    help: Derived<String>,
    helper: Option<Arc<dyn ArgHelper>>,
    value_type: Derived<ValueType>,
    arity: Derived<Arity>,
    default: Derived<Values>,
    choices: Derived<Choices>,
    restrict: Derived<bool>,
    suppress: Derived<bool>,
    required: Derived<bool>,
    append: Derived<bool>,
    completer: Derived<Completer>,
}

impl Default for Argument {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl Argument {
    /// An argument with nothing configured: an unnamed positional, with
    /// every field at its neutral value.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            name: Derived::new(String::new()),
            long: String::new(),
            short: None,
            help: Derived::new(String::new()),
            helper: None,
            value_type: Derived::new(ValueType::Str),
            arity: Derived::new(Arity::ONE),
            default: Derived::new(Values::Absent),
            choices: Derived::new(Choices::new()),
            restrict: Derived::new(true),
            suppress: Derived::new(false),
            required: Derived::new(true),
            append: Derived::new(false),
            completer: Derived::new(Completer::Path),
        }
    }

    /**
    Build an argument from a configuration.

    Each configured field is applied through its setter, in a fixed order:
    name, long, short, help, helper, type, arity, default, choices,
    restrict, suppress, required, append, completer. Setting the type and
    arity before the default means that the default is checked against the
    type and arity that were asked for, rather than derived ones.
    */
    pub fn new(config: ArgumentConfig) -> Result<Self, ConfigError> {
        let ArgumentConfig {
            name,
            long,
            short,
            help,
            helper,
            value_type,
            arity,
            default,
            choices,
            restrict,
            suppress,
            required,
            append,
            completer,
        } = config;

        let mut argument = Self::empty();

        argument.set_name(name.as_deref())?;
        argument.set_long(long.as_deref())?;
        argument.set_short(short.as_deref())?;
        argument.set_help(help.as_deref());
        argument.set_helper(helper);
        argument.set_type(value_type)?;
        argument.set_arity(arity)?;
        argument.set_default(default)?;
        argument.set_choices(choices)?;
        argument.set_restrict(restrict);
        argument.set_suppress(suppress)?;
        argument.set_required(required)?;
        argument.set_append(append)?;
        argument.set_completer(completer)?;

        Ok(argument)
    }

    /// Apply a change to a copy of this argument, re-derive everything, and
    /// commit the copy only if the whole thing is consistent.
    fn update(
        &mut self,
        field: Field,
        change: impl FnOnce(&mut Self) -> Result<(), ConfigError>,
    ) -> Result<(), ConfigError> {
        let mut next = self.clone();
        let result = change(&mut next).and_then(|()| next.derive());

        match result {
            Ok(()) => {
                trace!(%field, argument = %next.display_form(), "updated argument");
                *self = next;
                Ok(())
            }
            Err(error) => {
                debug!(%field, %error, "rejected argument configuration");
                Err(error)
            }
        }
    }

    /// Recompute every derived field from the explicit ones, in dependency
    /// order.
    fn derive(&mut self) -> Result<(), ConfigError> {
        let positional = self.is_positional();

        let name = match self.short {
            _ if !self.long.is_empty() => self.long.to_uppercase(),
            Some(short) => short.to_uppercase().collect(),
            None => String::new(),
        };
        self.name.resolve(name);

        self.suppress.effective = !positional && self.suppress.explicit.unwrap_or(false);
        self.required.effective = positional || self.required.explicit.unwrap_or(false);
        self.append.effective = !positional && self.append.explicit.unwrap_or(false);

        if let Some(arity) = self.arity.explicit {
            check_arity_domain(arity, positional)?;
        }

        let arity = match self.default.explicit {
            Some(Values::Many(_)) => Arity::ZeroOrMore,
            _ => Arity::ONE,
        };
        self.arity.resolve(arity);
        let arity = self.arity.effective;

        if let Some(ref default) = self.default.explicit {
            check_default_shape(arity, default)?;
        }
        self.default.resolve(implied_default(arity));

        if let Some(ref value_type) = self.value_type.explicit
            && arity.is_flag()
            && *value_type != ValueType::Bool
        {
            return Err(ConfigError::value(
                Field::Type,
                value_type,
                "flags are always of type bool",
            ));
        }

        let value_type = match self.default.effective.first() {
            _ if arity.is_flag() => ValueType::Bool,
            Some(value) => ValueType::infer(value),
            None => ValueType::Str,
        };
        self.value_type.resolve(value_type);
        let value_type = &self.value_type.effective;

        if let Some(value) = self
            .default
            .effective
            .iter()
            .find(|value| !value_type.accepts(value))
        {
            return Err(ConfigError::value(
                Field::Default,
                value,
                lazy_format!("not a value of type {value_type}"),
            ));
        }

        if self.append.effective && arity.is_multiple() {
            return Err(ConfigError::value(
                Field::Append,
                true,
                lazy_format!("append can't be combined with the multi-valued arity {arity}"),
            ));
        }

        self.completer
            .resolve(Completer::derive(&self.choices.effective, value_type));

        trace!(
            name = %self.name.effective,
            %arity,
            value_type = %self.value_type.effective,
            "derived argument fields"
        );

        Ok(())
    }

    pub fn set_name(&mut self, name: Option<&str>) -> Result<(), ConfigError> {
        self.update(Field::Name, |argument| {
            argument.name.explicit = name.filter(|name| !name.is_empty()).map(str::to_owned);
            Ok(())
        })
    }

    /// Set the long option, without its leading `--`. An empty string is the
    /// same as `None`.
    pub fn set_long(&mut self, long: Option<&str>) -> Result<(), ConfigError> {
        let long = long.unwrap_or("");

        self.update(Field::Long, |argument| {
            if let Some(problem) = long_option_problem(long) {
                return Err(ConfigError::value(
                    Field::Long,
                    lazy_format!("{long:?}"),
                    problem,
                ));
            }

            argument.long = long.to_owned();
            Ok(())
        })
    }

    /// Set the short option, without its leading `-`. It must be a single
    /// character; an empty string is the same as `None`.
    pub fn set_short(&mut self, short: Option<&str>) -> Result<(), ConfigError> {
        let raw = short.unwrap_or("");

        self.update(Field::Short, |argument| {
            argument.short = parse_short_option(raw)?;
            Ok(())
        })
    }

    pub fn set_help(&mut self, help: Option<&str>) {
        self.help.explicit = help.map(str::to_owned);
        self.help.resolve(String::new());
    }

    pub fn set_helper(&mut self, helper: Option<Arc<dyn ArgHelper>>) {
        self.helper = helper;
    }

    pub fn set_type(&mut self, value_type: Option<ValueType>) -> Result<(), ConfigError> {
        self.update(Field::Type, |argument| {
            argument.value_type.explicit = value_type;
            Ok(())
        })
    }

    pub fn set_arity(&mut self, arity: Option<Arity>) -> Result<(), ConfigError> {
        self.update(Field::Arity, |argument| {
            argument.arity.explicit = arity;
            Ok(())
        })
    }

    /// Set the default value. [`Values::Absent`] forgets any explicit
    /// default, so that it's derived from the arity again.
    pub fn set_default(&mut self, default: impl Into<Values>) -> Result<(), ConfigError> {
        let default = default.into();

        self.update(Field::Default, |argument| {
            argument.default.explicit = match default {
                Values::Absent => None,
                default => Some(default),
            };
            Ok(())
        })
    }

    pub fn set_choices(&mut self, choices: Option<Choices>) -> Result<(), ConfigError> {
        self.update(Field::Choices, |argument| {
            argument.choices.explicit = choices;
            argument.choices.resolve(Choices::new());
            Ok(())
        })
    }

    /// Set whether values outside of the choices are rejected. `None` resets
    /// it to `true`.
    pub fn set_restrict(&mut self, restrict: Option<bool>) {
        self.restrict.explicit = restrict;
        self.restrict.resolve(true);
    }

    pub fn set_suppress(&mut self, suppress: Option<bool>) -> Result<(), ConfigError> {
        self.update(Field::Suppress, |argument| {
            argument.suppress.explicit = suppress;
            Ok(())
        })
    }

    pub fn set_required(&mut self, required: Option<bool>) -> Result<(), ConfigError> {
        self.update(Field::Required, |argument| {
            argument.required.explicit = required;
            Ok(())
        })
    }

    pub fn set_append(&mut self, append: Option<bool>) -> Result<(), ConfigError> {
        self.update(Field::Append, |argument| {
            argument.append.explicit = append;
            Ok(())
        })
    }

    pub fn set_completer(&mut self, completer: Option<Completer>) -> Result<(), ConfigError> {
        self.update(Field::Completer, |argument| {
            argument.completer.explicit = completer;
            Ok(())
        })
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name.effective
    }

    #[inline]
    #[must_use]
    pub fn long(&self) -> &str {
        &self.long
    }

    #[inline]
    #[must_use]
    pub fn short(&self) -> Option<char> {
        self.short
    }

    #[inline]
    #[must_use]
    pub fn help(&self) -> &str {
        &self.help.effective
    }

    /// The helper for this argument; [`SynopsisHelper`] unless another one
    /// was given.
    #[must_use]
    pub fn helper(&self) -> &dyn ArgHelper {
        match self.helper {
            Some(ref helper) => helper.as_ref(),
            None => &DEFAULT_HELPER,
        }
    }

    #[inline]
    #[must_use]
    pub fn value_type(&self) -> &ValueType {
        &self.value_type.effective
    }

    #[inline]
    #[must_use]
    pub fn arity(&self) -> Arity {
        self.arity.effective
    }

    #[inline]
    #[must_use]
    pub fn default(&self) -> &Values {
        &self.default.effective
    }

    #[inline]
    #[must_use]
    pub fn choices(&self) -> &Choices {
        &self.choices.effective
    }

    #[inline]
    #[must_use]
    pub fn restrict(&self) -> bool {
        self.restrict.effective
    }

    #[inline]
    #[must_use]
    pub fn suppress(&self) -> bool {
        self.suppress.effective
    }

    #[inline]
    #[must_use]
    pub fn required(&self) -> bool {
        self.required.effective
    }

    #[inline]
    #[must_use]
    pub fn append(&self) -> bool {
        self.append.effective
    }

    #[inline]
    #[must_use]
    pub fn completer(&self) -> &Completer {
        &self.completer.effective
    }

    /// Check if a field currently holds a value the caller gave it, as
    /// opposed to a derived or neutral one. For `long` and `short`, which
    /// have no separate unset state, this is whether the option is present.
    #[must_use]
    pub fn is_explicit(&self, field: Field) -> bool {
        match field {
            Field::Name => self.name.is_explicit(),
            Field::Long => !self.long.is_empty(),
            Field::Short => self.short.is_some(),
            Field::Help => self.help.is_explicit(),
            Field::Helper => self.helper.is_some(),
            Field::Type => self.value_type.is_explicit(),
            Field::Arity => self.arity.is_explicit(),
            Field::Default => self.default.is_explicit(),
            Field::Choices => self.choices.is_explicit(),
            Field::Restrict => self.restrict.is_explicit(),
            Field::Suppress => self.suppress.is_explicit(),
            Field::Required => self.required.is_explicit(),
            Field::Append => self.append.is_explicit(),
            Field::Completer => self.completer.is_explicit(),
        }
    }

    /// This argument is identified by a `--long` or `-s` tag
    #[inline]
    #[must_use]
    pub fn is_optional(&self) -> bool {
        !self.long.is_empty() || self.short.is_some()
    }

    /// This argument is identified by its position
    #[inline]
    #[must_use]
    pub fn is_positional(&self) -> bool {
        !self.is_optional()
    }

    #[inline]
    #[must_use]
    pub fn is_flag(&self) -> bool {
        self.arity().is_flag()
    }

    #[inline]
    #[must_use]
    pub fn is_single(&self) -> bool {
        self.arity().is_single()
    }

    #[inline]
    #[must_use]
    pub fn is_multiple(&self) -> bool {
        self.arity().is_multiple()
    }

    /// How this argument is referred to in messages: `--long`, or `-s`, or
    /// its name.
    pub fn display_form(&self) -> impl Display + '_ {
        let long = self.long.as_str();
        let name = self.name();

        lazy_format!(match ((long, self.short)) {
            ("", Some(short)) => "-{short}",
            ("", None) => "{name}",
            (long, _) => "--{long}",
        })
    }

    /// This argument's fragment of a usage line, as written by its helper
    pub fn synopsis(&self) -> impl Display + '_ {
        make_lazy_format!(|f| self.helper().synopsis(self, f))
    }

    /// Coerce raw command-line input into this argument's typed value. See
    /// [`coerce`][crate::coerce()].
    #[inline]
    pub fn coerce(&self, input: RawInput<'_>) -> Result<Values, CoerceError> {
        coerce::coerce(self, input)
    }
}

impl PartialEq for Argument {
    fn eq(&self, other: &Self) -> bool {
        let helpers = match (&self.helper, &other.helper) {
            (None, None) => true,
            (Some(lhs), Some(rhs)) => Arc::ptr_eq(lhs, rhs),
            _ => false,
        };

        helpers
            && self.name == other.name
            && self.long == other.long
            && self.short == other.short
            && self.help == other.help
            && self.value_type == other.value_type
            && self.arity == other.arity
            && self.default == other.default
            && self.choices == other.choices
            && self.restrict == other.restrict
            && self.suppress == other.suppress
            && self.required == other.required
            && self.append == other.append
            && self.completer == other.completer
    }
}

impl TryFrom<ArgumentConfig> for Argument {
    type Error = ConfigError;

    #[inline]
    fn try_from(config: ArgumentConfig) -> Result<Self, ConfigError> {
        Self::new(config)
    }
}

fn long_option_problem(long: &str) -> Option<&'static str> {
    if long.starts_with('-') {
        Some("must not include the leading dashes")
    } else if long.contains('=') {
        Some("must not contain '='")
    } else if long.contains(char::is_whitespace) {
        Some("must not contain whitespace")
    } else {
        None
    }
}

fn parse_short_option(raw: &str) -> Result<Option<char>, ConfigError> {
    let mut chars = raw.chars();

    match (chars.next(), chars.next()) {
        (None, _) => Ok(None),
        (Some(c), None) if c != '-' && c != '=' && !c.is_whitespace() => Ok(Some(c)),
        (Some(_), None) => Err(ConfigError::value(
            Field::Short,
            lazy_format!("{raw:?}"),
            "not usable as an option character",
        )),
        (Some(_), Some(_)) => Err(ConfigError::value(
            Field::Short,
            lazy_format!("{raw:?}"),
            "must be a single character",
        )),
    }
}

fn check_arity_domain(arity: Arity, positional: bool) -> Result<(), ConfigError> {
    match arity {
        Arity::Count(0) if positional => Err(ConfigError::value(
            Field::Arity,
            arity,
            "positional arguments take at least one value",
        )),
        Arity::RestAll if !positional => Err(ConfigError::value(
            Field::Arity,
            arity,
            "only positional arguments can take the rest of the command line",
        )),
        _ => Ok(()),
    }
}

fn check_default_shape(arity: Arity, default: &Values) -> Result<(), ConfigError> {
    if arity.is_flag() {
        return match default {
            Values::Absent | Values::One(Value::Bool(_)) => Ok(()),
            Values::One(value) => Err(ConfigError::kind(
                Field::Default,
                value,
                "bool",
                value.kind(),
            )),
            Values::Many(_) => Err(ConfigError::kind(
                Field::Default,
                default,
                "bool",
                default.shape(),
            )),
        };
    }

    match default {
        Values::Many(_) if arity.is_single() => Err(ConfigError::value(
            Field::Default,
            default,
            lazy_format!("arity {arity} takes a single value, not a sequence"),
        )),
        Values::One(_) if arity.is_multiple() => Err(ConfigError::value(
            Field::Default,
            default,
            lazy_format!("arity {arity} needs a sequence as its default"),
        )),
        Values::Many(values) if !arity.accepts_len(values.len()) => Err(ConfigError::value(
            Field::Default,
            default,
            lazy_format!(
                "arity {arity} doesn't accept a sequence of {len} values",
                len = values.len()
            ),
        )),
        _ => Ok(()),
    }
}

fn implied_default(arity: Arity) -> Values {
    match arity {
        Arity::Count(0) => Values::One(Value::Bool(false)),
        Arity::ZeroOrMore | Arity::RestAll => Values::Many(Vec::new()),
        _ => Values::Absent,
    }
}

/**
A declarative description of an [`Argument`]. Every field is optional;
anything left out is derived.

```
use argot::{ArgumentConfig, Arity, ValueType};

let jobs = ArgumentConfig::new()
    .long("jobs")
    .short("j")
    .value_type(ValueType::Int)
    .default(4)
    .build()
    .unwrap();

assert_eq!(jobs.name(), "JOBS");
assert_eq!(jobs.arity(), Arity::ONE);
assert!(!jobs.required());
```
*/
#[derive(Debug, Clone, Default)]
pub struct ArgumentConfig {
    pub name: Option<String>,
    pub long: Option<String>,
    pub short: Option<String>,
    pub help: Option<String>,
    pub helper: Option<Arc<dyn ArgHelper>>,
    pub value_type: Option<ValueType>,
    pub arity: Option<Arity>,
    pub default: Values,
    pub choices: Option<Choices>,
    pub restrict: Option<bool>,
    pub suppress: Option<bool>,
    pub required: Option<bool>,
    pub append: Option<bool>,
    pub completer: Option<Completer>,
}

impl ArgumentConfig {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        <Self as Default>::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn long(mut self, long: impl Into<String>) -> Self {
        self.long = Some(long.into());
        self
    }

    #[must_use]
    pub fn short(mut self, short: impl Into<String>) -> Self {
        self.short = Some(short.into());
        self
    }

    #[must_use]
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    #[must_use]
    pub fn helper(mut self, helper: impl ArgHelper + 'static) -> Self {
        self.helper = Some(Arc::new(helper));
        self
    }

    #[must_use]
    pub fn value_type(mut self, value_type: ValueType) -> Self {
        self.value_type = Some(value_type);
        self
    }

    #[must_use]
    pub fn arity(mut self, arity: impl Into<Arity>) -> Self {
        self.arity = Some(arity.into());
        self
    }

    #[must_use]
    pub fn default(mut self, default: impl Into<Values>) -> Self {
        self.default = default.into();
        self
    }

    #[must_use]
    pub fn choices(mut self, choices: impl Into<Choices>) -> Self {
        self.choices = Some(choices.into());
        self
    }

    #[must_use]
    pub fn restrict(mut self, restrict: bool) -> Self {
        self.restrict = Some(restrict);
        self
    }

    #[must_use]
    pub fn suppress(mut self, suppress: bool) -> Self {
        self.suppress = Some(suppress);
        self
    }

    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    #[must_use]
    pub fn append(mut self, append: bool) -> Self {
        self.append = Some(append);
        self
    }

    #[must_use]
    pub fn completer(mut self, completer: Completer) -> Self {
        self.completer = Some(completer);
        self
    }

    /// Build the [`Argument`] described by this configuration
    #[inline]
    pub fn build(self) -> Result<Argument, ConfigError> {
        Argument::new(self)
    }
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_form())
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use super::*;

    /// A log sink that keeps everything written to it
    #[derive(Debug, Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn logs_of(body: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();

        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, body);

        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn name_follows_long_then_short() {
        let mut argument = Argument::empty();
        argument.set_short(Some("o")).unwrap();
        assert_eq!(argument.name(), "O");

        argument.set_long(Some("output")).unwrap();
        assert_eq!(argument.name(), "OUTPUT");

        argument.set_name(Some("FILE")).unwrap();
        argument.set_long(None).unwrap();
        assert_eq!(argument.name(), "FILE");

        argument.set_name(None).unwrap();
        assert_eq!(argument.name(), "O");
    }

    #[test]
    fn failed_update_leaves_argument_untouched() {
        let mut argument = ArgumentConfig::new()
            .long("pair")
            .arity(2)
            .default([1, 2])
            .build()
            .unwrap();
        let before = argument.clone();

        let error = argument.set_arity(Some(Arity::Count(3))).unwrap_err();
        assert_eq!(error.field(), Field::Default);
        assert_eq!(argument, before);
    }

    #[test]
    fn long_option_validation() {
        let mut argument = Argument::empty();

        for bad in ["--output", "out put", "out=put"] {
            let error = argument.set_long(Some(bad)).unwrap_err();
            assert_eq!(error.field(), Field::Long);
            assert!(!error.is_type_error());
        }

        assert!(argument.is_positional());
    }

    #[test]
    fn short_option_validation() {
        let mut argument = Argument::empty();

        let error = argument.set_short(Some("ab")).unwrap_err();
        assert!(matches!(error, ConfigError::Value { field: Field::Short, .. }));
        assert!(argument.set_short(Some("-")).is_err());

        argument.set_short(Some("x")).unwrap();
        assert_eq!(argument.short(), Some('x'));

        argument.set_short(Some("")).unwrap();
        assert_eq!(argument.short(), None);
    }

    #[test]
    fn flags_are_bool() {
        let mut argument = ArgumentConfig::new().long("quiet").arity(0).build().unwrap();

        assert_eq!(argument.value_type(), &ValueType::Bool);
        assert_eq!(argument.default(), &Values::one(false));

        let error = argument.set_type(Some(ValueType::Int)).unwrap_err();
        assert_eq!(error.field(), Field::Type);

        let error = argument.set_default(3).unwrap_err();
        assert_eq!(
            error,
            ConfigError::Type {
                field: Field::Default,
                value: "3".to_owned(),
                expected: "bool",
                found: "int",
            }
        );
    }

    #[test]
    fn explicit_completer_is_sticky() {
        let mut argument = ArgumentConfig::new()
            .long("color")
            .completer(Completer::None)
            .build()
            .unwrap();

        argument
            .set_choices(Some(Choices::from([("auto", ""), ("never", "")])))
            .unwrap();
        argument.set_type(Some(ValueType::Path)).unwrap();
        assert_eq!(argument.completer(), &Completer::None);

        argument.set_completer(None).unwrap();
        assert_eq!(
            argument.completer(),
            &Completer::List(vec!["auto".to_owned(), "never".to_owned()])
        );
    }

    #[test]
    fn explicit_fields_are_tracked() {
        let argument = ArgumentConfig::new()
            .long("size")
            .default(Values::many([1, 2, 3]))
            .build()
            .unwrap();

        assert!(argument.is_explicit(Field::Default));
        assert!(!argument.is_explicit(Field::Arity));
        assert!(!argument.is_explicit(Field::Type));
        assert_eq!(argument.value_type(), &ValueType::Int);
    }

    #[test]
    fn rejected_options_are_logged() {
        let logs = logs_of(|| {
            let mut argument = Argument::empty();
            assert!(argument.set_long(Some("--output")).is_err());
            assert!(argument.set_short(Some("ab")).is_err());
        });

        let rejections: Vec<&str> = logs
            .lines()
            .filter(|line| line.contains("rejected argument configuration"))
            .collect();

        assert_eq!(rejections.len(), 2, "{logs}");
        assert!(rejections[0].contains("long option"));
        assert!(rejections[1].contains("short option"));
    }

    #[test]
    fn neutral_values_given_explicitly_are_still_explicit() {
        let mut argument = ArgumentConfig::new()
            .long("mode")
            .help("")
            .choices(Choices::new())
            .restrict(true)
            .build()
            .unwrap();

        assert!(argument.is_explicit(Field::Help));
        assert!(argument.is_explicit(Field::Choices));
        assert!(argument.is_explicit(Field::Restrict));
        assert_eq!(argument.help(), "");
        assert!(argument.restrict());

        argument.set_help(None);
        argument.set_choices(None).unwrap();
        argument.set_restrict(None);

        assert!(!argument.is_explicit(Field::Help));
        assert!(!argument.is_explicit(Field::Choices));
        assert!(!argument.is_explicit(Field::Restrict));
        assert!(argument.choices().is_empty());
    }

    #[test]
    fn display_form() {
        let long = ArgumentConfig::new().long("out").short("o").build().unwrap();
        let short = ArgumentConfig::new().short("o").build().unwrap();
        let positional = ArgumentConfig::new().name("INPUT").build().unwrap();

        assert_eq!(long.display_form().to_string(), "--out");
        assert_eq!(short.display_form().to_string(), "-o");
        assert_eq!(positional.to_string(), "INPUT");
    }
}
