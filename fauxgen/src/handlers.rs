//! Validation and dispatch, one handler per mark kind.
//!
//! Handlers take a mark's raw arguments, apply the kind's validation and
//! defaulting rules, and hand the normalized request to the matching
//! producer. Every failure is fatal to the affected test function's
//! collection: either all requested values are produced, or none.

use std::sync::Arc;

use crate::constants::StringKind;
use crate::error::{UsageError, UsageResult};
use crate::marks::{self, Mark, MarkKind, StringRequest};
use crate::strings::{StringOptions, Validator};
use crate::value::{Kwargs, Value, ValueFn, ValueStream};

pub const CALLABLE_USAGE: &str = "usage: faux_callable(items, callable, ..args)";
pub const GENERATOR_USAGE: &str = "usage: faux_generator(generator, ..)";

/// Validate a mark's raw arguments and produce its lazy value sequence.
pub fn dispatch(mark: Mark) -> UsageResult<ValueStream> {
    let Mark { kind, args, kwargs } = mark;
    match kind {
        MarkKind::Callable => callable_mark_handler(args, kwargs),
        MarkKind::Generator => generator_mark_handler(args),
        MarkKind::String => string_mark_handler(args, kwargs),
    }
}

/// `faux_callable(items, callable, ..args)` handler.
///
/// Remaining positional arguments and all keyword options are forwarded
/// unchanged to every invocation of the callable.
fn callable_mark_handler(args: Vec<Value>, kwargs: Kwargs) -> UsageResult<ValueStream> {
    let mut args = args.into_iter();
    let (Some(items_arg), Some(callable_arg)) = (args.next(), args.next()) else {
        return Err(UsageError::missing_arguments(CALLABLE_USAGE));
    };

    let items = match items_arg {
        Value::Int(items) => items,
        other => return Err(UsageError::expected_integer(&other)),
    };
    if items < 1 {
        return Err(UsageError::non_positive_count(items));
    }
    let func = match callable_arg {
        Value::Callable(func) => func,
        other => return Err(UsageError::expected_callable(&other)),
    };

    let extra: Vec<Value> = args.collect();
    Ok(ValueStream::new(marks::faux_callable(
        items as usize,
        func,
        extra,
        kwargs,
    )))
}

/// `faux_generator(generator, ..)` handler.
///
/// Every positional argument must be a value stream; a plain list or scalar
/// does not qualify. There is no item count: the output is as long as the
/// concatenated inputs.
fn generator_mark_handler(args: Vec<Value>) -> UsageResult<ValueStream> {
    if args.is_empty() {
        return Err(UsageError::missing_arguments(GENERATOR_USAGE));
    }

    let mut streams = Vec::with_capacity(args.len());
    for (index, arg) in args.into_iter().enumerate() {
        match arg {
            Value::Stream(stream) => streams.push(stream),
            _ => return Err(UsageError::not_a_generator(index, GENERATOR_USAGE)),
        }
    }
    Ok(ValueStream::new(marks::faux_generator(streams)))
}

/// `faux_string(items, category, ..)` handler.
fn string_mark_handler(args: Vec<Value>, kwargs: Kwargs) -> UsageResult<ValueStream> {
    let request = normalize_string_mark(args, kwargs)?;
    Ok(ValueStream::new(marks::faux_string(request)))
}

/// Normalize the argument shapes a string mark accepts into a
/// [`StringRequest`], rejecting anything outside them.
fn normalize_string_mark(args: Vec<Value>, mut kwargs: Kwargs) -> UsageResult<StringRequest> {
    let mut args = args.into_iter();
    let (items, kinds) = match (args.next(), args.next()) {
        // No positional arguments: one value of an unspecified category.
        (None, _) => (1, Vec::new()),
        // A lone string names a category.
        (Some(Value::Str(name)), None) => {
            let kind = StringKind::from_name(&name)
                .ok_or_else(|| UsageError::unsupported_string_kind(&name))?;
            (1, vec![kind])
        }
        (Some(Value::Int(items)), category) => {
            if items < 1 {
                return Err(UsageError::non_positive_count(items));
            }
            (items, parse_kinds(category)?)
        }
        (Some(other), _) => return Err(UsageError::expected_integer(&other)),
    };

    let extras: Vec<Value> = args.collect();

    let length_option = kwargs.remove("length");
    let had_length_option = length_option.is_some();
    let mut lengths = match length_option {
        Some(value) => parse_lengths(value)?,
        None => Vec::new(),
    };

    // One trailing positional is accepted and forwarded to the generator as
    // the length.
    if !extras.is_empty() {
        if extras.len() > 1 {
            return Err(UsageError::unexpected_argument(3, &extras[1]));
        }
        if had_length_option {
            return Err(UsageError::invalid_option(
                "length",
                "length was also given as a positional argument",
            ));
        }
        match &extras[0] {
            Value::Int(length) => lengths = vec![Some(check_length(*length)?)],
            other => return Err(UsageError::expected_integer(other)),
        }
    }

    let mut options = StringOptions::new();

    if let Some(value) = kwargs.remove("tries") {
        match value {
            Value::Int(tries) if tries >= 1 => options.tries = tries as usize,
            Value::Int(tries) => {
                return Err(UsageError::invalid_option(
                    "tries",
                    format!("expected an integer greater than 0, got {}", tries),
                ));
            }
            other => return Err(UsageError::expected_integer(&other)),
        }
    }

    if let Some(value) = kwargs.remove("default") {
        match value {
            Value::Str(text) => options.default = Some(text),
            other => {
                return Err(UsageError::invalid_option(
                    "default",
                    format!("expected a string, got a {}: {}", other.type_name(), other),
                ));
            }
        }
    }

    if let Some(value) = kwargs.remove("validator") {
        let func = match value {
            Value::Callable(func) => func,
            other => return Err(UsageError::expected_callable(&other)),
        };
        if options.default.is_none() {
            return Err(UsageError::invalid_option(
                "validator",
                "requires the 'default' option",
            ));
        }
        options.validator = Some(wrap_validator(func));
    }

    let seed = match kwargs.remove("seed") {
        Some(Value::Int(seed)) if seed >= 0 => Some(seed as u64),
        Some(Value::Int(seed)) => {
            return Err(UsageError::invalid_option(
                "seed",
                format!("expected a non-negative integer, got {}", seed),
            ));
        }
        Some(other) => return Err(UsageError::expected_integer(&other)),
        None => None,
    };

    // Anything left over would silently change meaning downstream; reject it
    // before generation starts.
    if !kwargs.is_empty() {
        let mut names: Vec<String> = kwargs.into_keys().collect();
        names.sort();
        return Err(UsageError::invalid_option(
            names.remove(0),
            "not a recognized option of faux_string",
        ));
    }

    Ok(StringRequest {
        items: items as usize,
        kinds,
        lengths,
        options,
        seed,
    })
}

fn parse_kinds(category: Option<Value>) -> UsageResult<Vec<StringKind>> {
    match category {
        // Absent or explicit None: unspecified, drawn at random later.
        None | Some(Value::None) => Ok(Vec::new()),
        Some(Value::Str(name)) => {
            let kind = StringKind::from_name(&name)
                .ok_or_else(|| UsageError::unsupported_string_kind(&name))?;
            Ok(vec![kind])
        }
        // An empty list is unspecified as well.
        Some(Value::List(entries)) => {
            let mut kinds = Vec::with_capacity(entries.len());
            for entry in entries {
                match entry {
                    Value::Str(name) => kinds.push(
                        StringKind::from_name(&name)
                            .ok_or_else(|| UsageError::unsupported_string_kind(&name))?,
                    ),
                    other => return Err(UsageError::unsupported_string_kind(other)),
                }
            }
            Ok(kinds)
        }
        Some(other) => Err(UsageError::unsupported_string_kind(other)),
    }
}

fn parse_lengths(value: Value) -> UsageResult<Vec<Option<usize>>> {
    match value {
        Value::Int(length) => Ok(vec![Some(check_length(length)?)]),
        // An empty list falls back to the generator default.
        Value::List(entries) => {
            let mut lengths = Vec::with_capacity(entries.len());
            for entry in entries {
                match entry {
                    Value::Int(length) => lengths.push(Some(check_length(length)?)),
                    other => return Err(UsageError::expected_integer(&other)),
                }
            }
            Ok(lengths)
        }
        other => Err(UsageError::expected_integer(&other)),
    }
}

fn check_length(length: i64) -> UsageResult<usize> {
    if length < 1 {
        return Err(UsageError::invalid_option(
            "length",
            format!("expected an integer greater than 0, got {}", length),
        ));
    }
    Ok(length as usize)
}

fn wrap_validator(func: ValueFn) -> Validator {
    let no_kwargs = Kwargs::new();
    Arc::new(move |candidate: &str| {
        let args = [Value::Str(candidate.to_string())];
        matches!(func(&args, &no_kwargs), Value::Bool(true))
    })
}
