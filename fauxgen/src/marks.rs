//! Mark descriptors and the value-sequence producers behind them.
//!
//! A [`Mark`] carries the raw, still-unvalidated arguments a test author
//! attached to a test function. The producers in this module are the other
//! end of the pipeline: given validated inputs, each yields the finite value
//! sequence its mark kind promises.

use crate::constants::{STRING_KINDS, StringKind};
use crate::rng;
use crate::strings::{self, StringOptions};
use crate::value::{Kwargs, Value, ValueFn, ValueStream};

/// The three recognized mark kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkKind {
    Callable,
    Generator,
    String,
}

impl MarkKind {
    /// The mark's name as written by test authors, also used in test ids.
    pub fn as_str(&self) -> &'static str {
        match self {
            MarkKind::Callable => "faux_callable",
            MarkKind::Generator => "faux_generator",
            MarkKind::String => "faux_string",
        }
    }
}

impl std::fmt::Display for MarkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A data-generation annotation attached to a test function.
///
/// Arguments are kept raw here; validation and normalization belong to the
/// handler for the mark's kind. A mark is consumed when resolved and nothing
/// of it survives the collection pass.
#[derive(Debug)]
pub struct Mark {
    pub kind: MarkKind,
    pub args: Vec<Value>,
    pub kwargs: Kwargs,
}

impl Mark {
    pub fn new(kind: MarkKind, args: impl Into<Vec<Value>>) -> Mark {
        Mark {
            kind,
            args: args.into(),
            kwargs: Kwargs::new(),
        }
    }

    /// A `faux_callable(items, callable, ..args)` mark.
    pub fn callable(args: impl Into<Vec<Value>>) -> Mark {
        Mark::new(MarkKind::Callable, args)
    }

    /// A `faux_generator(generator, ..)` mark.
    pub fn generator(args: impl Into<Vec<Value>>) -> Mark {
        Mark::new(MarkKind::Generator, args)
    }

    /// A `faux_string(items, category, ..)` mark.
    pub fn string(args: impl Into<Vec<Value>>) -> Mark {
        Mark::new(MarkKind::String, args)
    }

    /// Attach a keyword option.
    pub fn with_option(mut self, name: impl Into<String>, value: Value) -> Mark {
        self.kwargs.insert(name.into(), value);
        self
    }
}

/// The normalized form of a string mark, ready for generation.
#[derive(Debug)]
pub struct StringRequest {
    /// Number of strings to produce. Always at least one.
    pub items: usize,
    /// Categories to cycle through. Empty means unspecified: one category is
    /// drawn at random and reused for the whole request.
    pub kinds: Vec<StringKind>,
    /// Lengths to cycle through, `None` entries meaning the generator
    /// default. Empty behaves like a single default entry.
    pub lengths: Vec<Option<usize>>,
    pub options: StringOptions,
    /// Seed for reproducible output; entropy-seeded when absent.
    pub seed: Option<u64>,
}

/// Invoke `func` once per requested value, passing the same extra arguments
/// on every call, and yield each return value unmodified.
pub fn faux_callable(
    items: usize,
    func: ValueFn,
    args: Vec<Value>,
    kwargs: Kwargs,
) -> impl Iterator<Item = Value> {
    (0..items).map(move |_| func(&args, &kwargs))
}

/// Concatenate the supplied streams into one flat sequence, preserving
/// relative order within and across arguments.
pub fn faux_generator(streams: Vec<ValueStream>) -> impl Iterator<Item = Value> {
    streams.into_iter().flatten()
}

/// Yield exactly `request.items` strings, cycling categories and lengths in
/// lock-step: item `i` uses `kinds[i % kinds.len()]` and
/// `lengths[i % lengths.len()]`.
pub fn faux_string(request: StringRequest) -> impl Iterator<Item = Value> {
    let StringRequest {
        items,
        kinds,
        lengths,
        options,
        seed,
    } = request;

    let mut rng = match seed {
        Some(seed) => rng::create_seeded_rng(seed),
        None => rng::create_rng(),
    };
    let kinds = if kinds.is_empty() {
        vec![strings::gen_choice(&STRING_KINDS, &mut rng)]
    } else {
        kinds
    };
    let lengths = if lengths.is_empty() { vec![None] } else { lengths };

    (0..items).map(move |item| {
        let kind = kinds[item % kinds.len()];
        let length = lengths[item % lengths.len()];
        Value::Str(strings::gen_string(kind, length, &options, &mut rng))
    })
}
