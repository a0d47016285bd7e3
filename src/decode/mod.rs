//! Untyped document -> [`Screen`].
//!
//! Decoding is hand-written and field-by-field so every validation rule is
//! visible here. It is fail-fast: the first malformed node anywhere in the
//! tree aborts the whole decode, including a malformed `action` on a single
//! item.
//!
//! ```text
//! { "components": [ { "type": "carousel" | "list", ... }, ... ] }
//! ```

mod error;
mod path;

pub use error::{DecodeError, Expected};
pub use path::FieldPath;

use serde_json::{Map, Value};

use crate::model::{
    Action, Carousel, CarouselLayout, Component, Item, ListComponent, ListItem, Screen,
};

const DISCRIMINATOR: &str = "type";

/// Decodes a whole screen document.
pub fn decode(raw: &Value) -> Result<Screen, DecodeError> {
    let root = Node::object(raw, FieldPath::root())?;
    let (path, nodes) = root.required_array("components")?;
    let components = decode_each(nodes, &path, decode_component)?;

    tracing::debug!(components = components.len(), "Decoded screen document");
    Ok(Screen { components })
}

fn decode_component(value: &Value, path: FieldPath) -> Result<Component, DecodeError> {
    let node = Node::object(value, path)?;

    match node.discriminator()? {
        "carousel" => {
            let layout = CarouselLayout::from_tag(node.required_str("layout")?);
            let (path, nodes) = node.required_array("items")?;
            let items = decode_each(nodes, &path, decode_item)?;
            Ok(Component::Carousel(Carousel { layout, items }))
        }
        "list" => {
            let (path, nodes) = node.required_array("items")?;
            let items = decode_each(nodes, &path, decode_list_item)?;
            Ok(Component::List(ListComponent { items }))
        }
        other => Err(DecodeError::UnknownVariant {
            path: node.path.key(DISCRIMINATOR),
            value: other.to_string(),
        }),
    }
}

fn decode_item(value: &Value, path: FieldPath) -> Result<Item, DecodeError> {
    let node = Node::object(value, path)?;
    Ok(Item {
        kind: node.required_str(DISCRIMINATOR)?.to_string(),
        url: node.optional_str("url")?.map(str::to_string),
        description: node.optional_str("description")?.map(str::to_string),
        content: node.optional_str("content")?.map(str::to_string),
        action: decode_action(&node)?,
    })
}

fn decode_list_item(value: &Value, path: FieldPath) -> Result<ListItem, DecodeError> {
    let node = Node::object(value, path)?;
    Ok(ListItem {
        kind: node.required_str(DISCRIMINATOR)?.to_string(),
        title: node.required_str("title")?.to_string(),
        subtitle: node.required_str("subtitle")?.to_string(),
        icon: node.optional_str("icon")?.map(str::to_string),
        action: decode_action(&node)?,
    })
}

fn decode_action(parent: &Node<'_>) -> Result<Option<Action>, DecodeError> {
    let Some(node) = parent.optional_object("action")? else {
        return Ok(None);
    };
    Ok(Some(Action {
        kind: node.required_str(DISCRIMINATOR)?.to_string(),
        url: node.required_str("url")?.to_string(),
    }))
}

fn decode_each<T>(
    values: &[Value],
    path: &FieldPath,
    decode_one: impl Fn(&Value, FieldPath) -> Result<T, DecodeError>,
) -> Result<Vec<T>, DecodeError> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| decode_one(value, path.index(index)))
        .collect()
}

/// A JSON object together with its location in the document.
struct Node<'a> {
    map: &'a Map<String, Value>,
    path: FieldPath,
}

impl<'a> Node<'a> {
    fn object(value: &'a Value, path: FieldPath) -> Result<Self, DecodeError> {
        match value {
            Value::Object(map) => Ok(Self { map, path }),
            other => Err(DecodeError::wrong_type(path, Expected::Object, other)),
        }
    }

    /// Present and non-null value of `key`.
    fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.get(key).filter(|value| !value.is_null())
    }

    fn discriminator(&self) -> Result<&'a str, DecodeError> {
        match self.get(DISCRIMINATOR) {
            Some(Value::String(tag)) => Ok(tag.as_str()),
            _ => Err(DecodeError::MissingDiscriminator {
                path: self.path.key(DISCRIMINATOR),
            }),
        }
    }

    fn required_str(&self, key: &str) -> Result<&'a str, DecodeError> {
        self.optional_str(key)?
            .ok_or_else(|| DecodeError::MissingField {
                path: self.path.key(key),
            })
    }

    fn optional_str(&self, key: &str) -> Result<Option<&'a str>, DecodeError> {
        match self.get(key) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.as_str())),
            Some(other) => Err(DecodeError::wrong_type(
                self.path.key(key),
                Expected::String,
                other,
            )),
        }
    }

    fn required_array(&self, key: &str) -> Result<(FieldPath, &'a [Value]), DecodeError> {
        let path = self.path.key(key);
        match self.get(key) {
            None => Err(DecodeError::MissingField { path }),
            Some(Value::Array(values)) => Ok((path, values.as_slice())),
            Some(other) => Err(DecodeError::wrong_type(path, Expected::Array, other)),
        }
    }

    fn optional_object(&self, key: &str) -> Result<Option<Node<'a>>, DecodeError> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => Node::object(value, self.path.key(key)).map(Some),
        }
    }
}
