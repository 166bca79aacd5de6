//! Error types for mark validation and test registration.
//!
//! Every variant is a user/configuration error raised at collection time,
//! never from the body of a generated test. An error aborts collection of the
//! affected test function only; nothing is retried, downgraded, or partially
//! registered.

use std::fmt;

use crate::value::Value;

/// Result alias used throughout the crate.
pub type UsageResult<T> = Result<T, UsageError>;

/// A mark was misused: wrong arity, wrong type, or an out-of-range value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// Required positional arguments are absent.
    MissingArguments { usage: &'static str },

    /// An argument that must be an integer is something else.
    ExpectedInteger {
        type_name: &'static str,
        value: String,
    },

    /// An item count was an integer, but not a positive one.
    NonPositiveCount { value: i64 },

    /// An argument that must be a callable is something else.
    ExpectedCallable {
        type_name: &'static str,
        value: String,
    },

    /// A positional argument of a generator mark is not a value stream.
    NotAGenerator { index: usize, usage: &'static str },

    /// A category name outside the string-kind registry.
    UnsupportedStringKind { value: String },

    /// A positional argument beyond the ones a mark accepts.
    UnexpectedArgument { index: usize, value: String },

    /// A keyword option carried an unusable value, or is not recognized.
    InvalidOption { option: String, message: String },

    /// The resolved argument names are not declared by the test function.
    /// Produced by the host's `parametrize` implementation, not by the core.
    BindingMismatch { function: String, argname: String },
}

/// The coarse taxonomy a [`UsageError`] falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageErrorKind {
    MissingArguments,
    InvalidType,
    InvalidValue,
    BindingMismatch,
}

impl UsageError {
    /// Classify this error within the taxonomy.
    pub fn kind(&self) -> UsageErrorKind {
        match self {
            UsageError::MissingArguments { .. } => UsageErrorKind::MissingArguments,
            UsageError::ExpectedInteger { .. }
            | UsageError::ExpectedCallable { .. }
            | UsageError::NotAGenerator { .. } => UsageErrorKind::InvalidType,
            UsageError::NonPositiveCount { .. }
            | UsageError::UnsupportedStringKind { .. }
            | UsageError::UnexpectedArgument { .. }
            | UsageError::InvalidOption { .. } => UsageErrorKind::InvalidValue,
            UsageError::BindingMismatch { .. } => UsageErrorKind::BindingMismatch,
        }
    }

    pub fn missing_arguments(usage: &'static str) -> Self {
        Self::MissingArguments { usage }
    }

    /// Integer type error carrying the offending value and its type name.
    pub fn expected_integer(value: &Value) -> Self {
        Self::ExpectedInteger {
            type_name: value.type_name(),
            value: value.to_string(),
        }
    }

    pub fn non_positive_count(value: i64) -> Self {
        Self::NonPositiveCount { value }
    }

    pub fn expected_callable(value: &Value) -> Self {
        Self::ExpectedCallable {
            type_name: value.type_name(),
            value: value.to_string(),
        }
    }

    pub fn not_a_generator(index: usize, usage: &'static str) -> Self {
        Self::NotAGenerator { index, usage }
    }

    pub fn unsupported_string_kind(value: impl fmt::Display) -> Self {
        Self::UnsupportedStringKind {
            value: value.to_string(),
        }
    }

    pub fn unexpected_argument(index: usize, value: &Value) -> Self {
        Self::UnexpectedArgument {
            index,
            value: value.to_string(),
        }
    }

    pub fn invalid_option(option: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidOption {
            option: option.into(),
            message: message.into(),
        }
    }

    pub fn binding_mismatch(function: impl Into<String>, argname: impl Into<String>) -> Self {
        Self::BindingMismatch {
            function: function.into(),
            argname: argname.into(),
        }
    }
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::MissingArguments { usage } => {
                write!(f, "Missing arguments: {}", usage)
            }
            UsageError::ExpectedInteger { type_name, value } => {
                write!(f, "Mark expected an integer, got a {}: {}", type_name, value)
            }
            UsageError::NonPositiveCount { value } => {
                write!(f, "Mark expected an integer greater than 0, got {}", value)
            }
            UsageError::ExpectedCallable { type_name, value } => {
                write!(
                    f,
                    "Mark expected a callable function, got a {}: {}",
                    type_name, value
                )
            }
            UsageError::NotAGenerator { index, usage } => {
                write!(f, "Argument with index {} is not a generator, {}", index, usage)
            }
            UsageError::UnsupportedStringKind { value } => {
                write!(f, "String type {} is not supported", value)
            }
            UsageError::UnexpectedArgument { index, value } => {
                write!(f, "Unexpected argument with index {}: {}", index, value)
            }
            UsageError::InvalidOption { option, message } => {
                write!(f, "Invalid option '{}': {}", option, message)
            }
            UsageError::BindingMismatch { function, argname } => {
                write!(f, "{} uses no argument '{}'", function, argname)
            }
        }
    }
}

impl std::error::Error for UsageError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = UsageError::expected_integer(&Value::Str("1".to_string()));
        assert_eq!(error.to_string(), "Mark expected an integer, got a str: 1");

        let error = UsageError::non_positive_count(0);
        assert_eq!(
            error.to_string(),
            "Mark expected an integer greater than 0, got 0"
        );

        let error = UsageError::unsupported_string_kind("alphabet");
        assert_eq!(error.to_string(), "String type alphabet is not supported");

        let error = UsageError::binding_mismatch("test_something", "value");
        assert_eq!(error.to_string(), "test_something uses no argument 'value'");
    }

    #[test]
    fn test_taxonomy_classification() {
        assert_eq!(
            UsageError::missing_arguments("usage").kind(),
            UsageErrorKind::MissingArguments
        );
        assert_eq!(
            UsageError::expected_integer(&Value::Bool(true)).kind(),
            UsageErrorKind::InvalidType
        );
        assert_eq!(
            UsageError::not_a_generator(1, "usage").kind(),
            UsageErrorKind::InvalidType
        );
        assert_eq!(
            UsageError::non_positive_count(-3).kind(),
            UsageErrorKind::InvalidValue
        );
        assert_eq!(
            UsageError::unsupported_string_kind("x").kind(),
            UsageErrorKind::InvalidValue
        );
        assert_eq!(
            UsageError::binding_mismatch("f", "value").kind(),
            UsageErrorKind::BindingMismatch
        );
    }
}
