//! Small helpers shared by the resolver.

use crate::error::{UsageError, UsageResult};
use crate::plugin::ArgNames;
use crate::value::Value;

/// One stable identifier per produced value, `"<mark_name>_<index>"`.
pub fn generate_ids(count: usize, mark_name: &str) -> Vec<String> {
    (0..count)
        .map(|idx| format!("{}_{}", mark_name, idx))
        .collect()
}

/// Parse the `argnames` option: a single name, a comma-separated string of
/// names, or a list of name strings.
pub fn parse_argnames(value: Value) -> UsageResult<ArgNames> {
    let mut names = match value {
        Value::Str(text) => text
            .split(',')
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect::<Vec<_>>(),
        Value::List(entries) => {
            let mut names = Vec::with_capacity(entries.len());
            for entry in entries {
                match entry {
                    Value::Str(name) => names.push(name),
                    other => {
                        return Err(UsageError::invalid_option(
                            "argnames",
                            format!(
                                "expected a string, got a {}: {}",
                                other.type_name(),
                                other
                            ),
                        ));
                    }
                }
            }
            names
        }
        other => {
            return Err(UsageError::invalid_option(
                "argnames",
                format!(
                    "expected a string or a list of strings, got a {}: {}",
                    other.type_name(),
                    other
                ),
            ));
        }
    };

    match names.len() {
        0 => Err(UsageError::invalid_option(
            "argnames",
            "expected at least one argument name",
        )),
        1 => Ok(ArgNames::Single(names.remove(0))),
        _ => Ok(ArgNames::Multiple(names)),
    }
}
