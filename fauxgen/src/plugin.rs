//! The mark resolver: the glue between a host framework's collection hook
//! and the mark handlers.
//!
//! The host presents each candidate test function as a [`Metafunc`]. The
//! resolver takes the first attached mark, resolves argument names,
//! dispatches to the kind's handler, materializes the produced sequence, and
//! registers it with the host in a single `parametrize` call.

use crate::error::UsageResult;
use crate::handlers;
use crate::helpers;
use crate::marks::{Mark, MarkKind};
use crate::value::Value;

/// The argument name values bind to when no `argnames` option is given.
pub const DEFAULT_ARGNAME: &str = "value";

/// Name of the keyword option, recognized on every mark kind, that renames
/// the bound argument(s).
pub const ARGNAMES_OPTION: &str = "argnames";

/// Resolved argument-name binding for the parametrized invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgNames {
    /// Each produced value binds to one argument.
    Single(String),
    /// Each produced value is unpacked positionally into several arguments.
    Multiple(Vec<String>),
}

impl ArgNames {
    pub fn names(&self) -> Vec<&str> {
        match self {
            ArgNames::Single(name) => vec![name.as_str()],
            ArgNames::Multiple(names) => names.iter().map(String::as_str).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ArgNames::Single(_) => 1,
            ArgNames::Multiple(names) => names.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ArgNames {
    fn default() -> Self {
        ArgNames::Single(DEFAULT_ARGNAME.to_string())
    }
}

impl std::fmt::Display for ArgNames {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.names().join(", "))
    }
}

/// What the resolver needs from the host framework's collection hook.
///
/// The host calls [`generate_tests`] once per candidate test function,
/// handing it an implementation of this trait.
pub trait Metafunc {
    /// Name of the test function under collection, used in diagnostics.
    fn function_name(&self) -> &str;

    /// Detach the marks in attachment order. Only the first one is honored;
    /// attaching several marks to one test function is not a supported
    /// combination and the rest are dropped.
    fn take_marks(&mut self) -> Vec<Mark>;

    /// Expand the test function into one invocation per value, binding
    /// `argnames` to each value (unpacking lists when several names are
    /// given). The host may reject argument names the test function does
    /// not declare.
    fn parametrize(
        &mut self,
        argnames: &ArgNames,
        values: Vec<Value>,
        ids: Option<Vec<String>>,
    ) -> UsageResult<()>;
}

/// Collection-time entry point. Resolves the mark attached to `metafunc`,
/// if any, and registers the produced values with the host.
///
/// A test function without a recognized mark is left alone. An empty value
/// sequence registers nothing. Any validation failure aborts collection of
/// this test function only.
pub fn generate_tests<M: Metafunc>(metafunc: &mut M) -> UsageResult<()> {
    let Some(mark) = metafunc.take_marks().into_iter().next() else {
        return Ok(());
    };

    let (argnames, kind, values) = resolve_mark(mark)?;
    if values.is_empty() {
        return Ok(());
    }

    let ids = helpers::generate_ids(values.len(), kind.as_str());
    metafunc.parametrize(&argnames, values, Some(ids))
}

/// Materialize a mark's value sequence without involving a host.
pub fn resolve(mark: Mark) -> UsageResult<Vec<Value>> {
    let (_, _, values) = resolve_mark(mark)?;
    Ok(values)
}

fn resolve_mark(mut mark: Mark) -> UsageResult<(ArgNames, MarkKind, Vec<Value>)> {
    let argnames = match mark.kwargs.remove(ARGNAMES_OPTION) {
        Some(value) => helpers::parse_argnames(value)?,
        None => ArgNames::default(),
    };
    let kind = mark.kind;
    let values: Vec<Value> = handlers::dispatch(mark)?.collect();
    Ok((argnames, kind, values))
}
