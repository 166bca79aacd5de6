//! The heterogeneous value type flowing through marks, producers, and
//! parametrized test invocations.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Keyword options attached to a mark, or forwarded to a user callable.
pub type Kwargs = HashMap<String, Value>;

/// A user-supplied value factory invoked by the callable mark.
///
/// The factory receives the mark's extra positional and keyword arguments,
/// identical on every call; randomizing its output is its own business.
pub type ValueFn = Arc<dyn Fn(&[Value], &Kwargs) -> Value>;

/// A finite, lazily produced sequence of values.
///
/// Streams are drained exactly once, fully, before registration. Nothing
/// bounds the length of a caller-supplied stream: an unbounded stream means
/// unbounded test expansion, and staying finite is the caller's
/// responsibility.
pub struct ValueStream(Box<dyn Iterator<Item = Value>>);

impl ValueStream {
    /// Wrap any finite iterator of values.
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: 'static,
    {
        ValueStream(Box::new(values.into_iter()))
    }
}

impl Iterator for ValueStream {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        self.0.next()
    }
}

impl fmt::Debug for ValueStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<generator>")
    }
}

/// A mark argument or a produced test value.
///
/// `List` doubles as the tuple form: when a mark resolves to multiple
/// argument names, each produced `List` is unpacked positionally by the host.
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Map(HashMap<String, Value>),
    Callable(ValueFn),
    Stream(ValueStream),
}

impl Value {
    /// Wrap a value factory for a callable mark.
    pub fn callable<F>(func: F) -> Value
    where
        F: Fn(&[Value], &Kwargs) -> Value + 'static,
    {
        Value::Callable(Arc::new(func))
    }

    /// Wrap a finite iterator for a generator mark.
    pub fn stream<I>(values: I) -> Value
    where
        I: IntoIterator<Item = Value>,
        I::IntoIter: 'static,
    {
        Value::Stream(ValueStream::new(values))
    }

    /// The type name used in validation messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "none",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::List(_) => "list",
            Value::Map(_) => "map",
            Value::Callable(_) => "callable",
            Value::Stream(_) => "generator",
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Clone the value if it is data. Streams are single-use and return
    /// `None`; callables share their underlying factory.
    pub fn try_clone(&self) -> Option<Value> {
        match self {
            Value::None => Some(Value::None),
            Value::Bool(b) => Some(Value::Bool(*b)),
            Value::Int(n) => Some(Value::Int(*n)),
            Value::Float(x) => Some(Value::Float(*x)),
            Value::Str(s) => Some(Value::Str(s.clone())),
            Value::List(items) => items
                .iter()
                .map(Value::try_clone)
                .collect::<Option<Vec<_>>>()
                .map(Value::List),
            Value::Map(entries) => entries
                .iter()
                .map(|(key, value)| value.try_clone().map(|value| (key.clone(), value)))
                .collect::<Option<HashMap<_, _>>>()
                .map(Value::Map),
            Value::Callable(func) => Some(Value::Callable(Arc::clone(func))),
            Value::Stream(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => f.write_str("None"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => f.write_str(s),
            Value::List(items) => {
                f.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Map(entries) => {
                let mut keys: Vec<&String> = entries.keys().collect();
                keys.sort();
                f.write_str("{")?;
                for (index, key) in keys.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, entries[*key])?;
                }
                f.write_str("}")
            }
            Value::Callable(_) => f.write_str("<callable>"),
            Value::Stream(_) => f.write_str("<generator>"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "Str({:?})", s),
            Value::Callable(_) => f.write_str("Callable(<callable>)"),
            Value::Stream(_) => f.write_str("Stream(<generator>)"),
            other => write!(f, "{}({})", other.type_name(), other),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            // Callables and streams have no meaningful equality.
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Value {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Value {
        Value::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Value {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Value {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Value {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Value {
        Value::Str(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Value {
        Value::List(values)
    }
}
