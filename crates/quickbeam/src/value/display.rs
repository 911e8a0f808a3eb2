//! Debug implementation for Value
//!
//! Composites are printed as a header only, never recursively, so
//! formatting a cyclic graph always terminates.

use std::fmt;

use super::*;

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{:?}", n),
            Value::Str(s) => write!(f, "{:?}", s.as_ref()),
            Value::Bytes(b) => write!(f, "b\"{}\"", b.escape_ascii()),

            composite => {
                write!(f, "{}", type_name(composite))?;
                if let Some(identity) = composite.identity() {
                    write!(f, "@{}", identity)?;
                }
                match composite.len() {
                    Some(len) => write!(f, "[{}]", len),
                    None => write!(f, "[?]"),
                }
            }
        }
    }
}
