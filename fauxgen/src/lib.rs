//! # Fauxgen - randomized test data through marks
//!
//! Fauxgen lets test authors declaratively request randomized or
//! programmatically generated input values via marks attached to a test
//! function, instead of hand-writing data-generation and parametrization
//! boilerplate. A mark is resolved at collection time into a finite value
//! sequence, and the host framework registers one test invocation per value.
//!
//! Three mark kinds are recognized:
//!
//! - `faux_callable(items, callable, ..args)` - call a value factory `items`
//!   times and use each return value;
//! - `faux_generator(generator, ..)` - concatenate caller-supplied value
//!   streams;
//! - `faux_string(items, category, ..)` - generate `items` random strings,
//!   cycling through the requested categories and lengths.
//!
//! ## Quick Start
//!
//! ```rust
//! use fauxgen::{Mark, Value};
//!
//! // Four alphabetic strings, twelve characters each.
//! let mark = Mark::string([Value::from(4), Value::from("alpha")])
//!     .with_option("length", Value::from(12));
//!
//! let values = fauxgen::resolve(mark).unwrap();
//! assert_eq!(values.len(), 4);
//! assert!(values.iter().all(|v| v.as_str().unwrap().len() == 12));
//! ```
//!
//! Hosts integrate through the [`Metafunc`] trait and call
//! [`generate_tests`] once per candidate test function during collection.

// Public modules
pub mod constants;
pub mod error;
pub mod handlers;
pub mod helpers;
pub mod marks;
pub mod plugin;
pub mod rng;
pub mod strings;
pub mod value;

// Re-export the main public API
pub use constants::{STRING_KINDS, StringKind};
pub use error::{UsageError, UsageErrorKind, UsageResult};
pub use handlers::dispatch;
pub use marks::{Mark, MarkKind, StringRequest, faux_callable, faux_generator, faux_string};
pub use plugin::{ARGNAMES_OPTION, ArgNames, DEFAULT_ARGNAME, Metafunc, generate_tests, resolve};
pub use rng::{create_rng, create_seeded_rng};
pub use strings::{DEFAULT_LENGTH, StringOptions, Validator, gen_choice, gen_string};
pub use value::{Kwargs, Value, ValueFn, ValueStream};
