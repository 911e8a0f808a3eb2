//! Structural reflection for the dynamic value graph

use super::impls::try_read;
use super::*;
use crate::error::{FieldAccessError, ReflectionError};
use crate::inspect::{Field, Kind, Reflect};

impl Reflect for Value {
    fn type_name(&self) -> String {
        type_name(self).to_string()
    }

    fn classify(&self) -> Result<Kind, ReflectionError> {
        Ok(match self.identity() {
            Some(identity) => Kind::Composite { identity },
            None => Kind::Primitive {
                repr: format!("{:?}", self),
            },
        })
    }

    fn children(&self) -> Result<Vec<Field<Self>>, FieldAccessError> {
        let fields = match self {
            Value::List(items) => try_read(items, "list")?
                .iter()
                .enumerate()
                .map(|(index, item)| Field::new(index.to_string(), item.clone()))
                .collect(),
            Value::Map(entries) => named_fields(&*try_read(entries, "map")?),
            Value::Object(object) => named_fields(&*try_read(&object.fields, object.type_name())?),
            _ => Vec::new(),
        };
        Ok(fields)
    }
}

fn named_fields(entries: &IndexMap<String, Value>) -> Vec<Field<Value>> {
    entries
        .iter()
        .map(|(name, value)| Field::new(name.clone(), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_classification() {
        assert_eq!(
            Value::Int(42).classify(),
            Ok(Kind::Primitive {
                repr: "42".to_string()
            })
        );
        assert_eq!(
            Value::string("hi").classify(),
            Ok(Kind::Primitive {
                repr: "\"hi\"".to_string()
            })
        );
        assert!(Value::None.children().expect("primitive").is_empty());
    }

    #[test]
    fn test_handles_share_identity() {
        let list = Value::empty_list();
        let alias = list.clone();
        let other = Value::empty_list();

        assert_eq!(list.classify(), alias.classify());
        assert_ne!(list.classify(), other.classify());
    }

    #[test]
    fn test_children_in_order() {
        let object = Value::object(
            ObjectValue::new("Point")
                .with_field("x", Value::Int(1))
                .with_field("y", Value::Int(2)),
        );
        let names: Vec<String> = object
            .children()
            .expect("readable")
            .into_iter()
            .map(|field| field.name)
            .collect();
        assert_eq!(names, vec!["x", "y"]);
        assert_eq!(Reflect::type_name(&object), "Point");
    }

    #[test]
    fn test_map_children_are_handles() {
        let inner = Value::empty_list();
        let map = Value::map([("n", Value::Int(1)), ("items", inner.clone())]);

        let fields = map.children().expect("readable");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, "n");
        assert_eq!(fields[0].value, Ok(Value::Int(1)));
        assert!(fields[1].value.as_ref().is_ok_and(|item| item.same_as(&inner)));
    }

    #[test]
    fn test_write_locked_composite_is_unreadable() {
        let map = Value::empty_map();
        let Value::Map(entries) = &map else {
            unreachable!()
        };
        let _guard = entries.write().expect("fresh lock");

        let err = map.children().expect_err("write lock held");
        assert_eq!(err, FieldAccessError::enumeration("map", "locked for writing"));
    }
}
