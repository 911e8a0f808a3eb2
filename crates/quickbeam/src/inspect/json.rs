//! Reflection over parsed JSON documents

use serde_json::Value as Json;

use super::{Field, Identity, Kind, Reflect};
use crate::error::{FieldAccessError, ReflectionError};

impl<'a> Reflect for &'a Json {
    fn type_name(&self) -> String {
        match *self {
            Json::Null => "null",
            Json::Bool(_) => "bool",
            Json::Number(_) => "number",
            Json::String(_) => "string",
            Json::Array(_) => "array",
            Json::Object(_) => "object",
        }
        .to_string()
    }

    fn classify(&self) -> Result<Kind, ReflectionError> {
        Ok(match *self {
            Json::Array(_) | Json::Object(_) => Kind::Composite {
                identity: Identity::of(*self as *const Json),
            },
            scalar => Kind::Primitive {
                repr: scalar.to_string(),
            },
        })
    }

    fn children(&self) -> Result<Vec<Field<Self>>, FieldAccessError> {
        Ok(match *self {
            Json::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| Field::new(index.to_string(), item))
                .collect(),
            Json::Object(entries) => entries
                .iter()
                .map(|(key, item)| Field::new(key.clone(), item))
                .collect(),
            _ => Vec::new(),
        })
    }
}
