/*!
The hook that connects an [`Argument`] to an external help renderer.

Help layout isn't `argot`'s business, but every argument carries an
[`ArgHelper`] so that renderers can ask it for its piece of a usage line.
*/

use core::fmt::{self, Debug};

use lazy_format::lazy_format;

use crate::{Argument, arity::Arity};

/// Produces the pieces of usage text that belong to a single argument.
pub trait ArgHelper: Debug + Send + Sync {
    /// Write this argument's fragment of a synopsis line, like
    /// `--output <OUTPUT>` or `[INPUT...]`
    fn synopsis(&self, argument: &Argument, out: &mut dyn fmt::Write) -> fmt::Result;
}

/**
The default [`ArgHelper`].

Options are written with their preferred tag (the long one, if any),
followed by a placeholder for each value; optional options are wrapped in
brackets. Positionals are written as `<NAME>` when mandatory and `[NAME]`
otherwise, with a trailing `...` when they take more than one value.
*/
#[derive(Debug, Clone, Copy, Default)]
pub struct SynopsisHelper;

impl ArgHelper for SynopsisHelper {
    fn synopsis(&self, argument: &Argument, out: &mut dyn fmt::Write) -> fmt::Result {
        let placeholder = argument.name();

        if argument.is_positional() {
            let fragment = lazy_format!(match (argument.arity()) {
                Arity::Count(1) => "<{placeholder}>",
                Arity::Optional => "[{placeholder}]",
                Arity::ZeroOrMore | Arity::RestAll => "[{placeholder}...]",
                Arity::OneOrMore | Arity::Count(_) => "<{placeholder}>...",
            });

            return write!(out, "{fragment}");
        }

        let tag = argument.display_form();

        let option = lazy_format!(match (argument.arity()) {
            Arity::Count(0) => "{tag}",
            Arity::Count(1) => "{tag} <{placeholder}>",
            Arity::Optional => "{tag} [{placeholder}]",
            Arity::ZeroOrMore => "{tag} [{placeholder}...]",
            Arity::OneOrMore | Arity::Count(_) | Arity::RestAll => "{tag} <{placeholder}>...",
        });

        if argument.required() {
            write!(out, "{option}")
        } else {
            write!(out, "[{option}]")
        }
    }
}
