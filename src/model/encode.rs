//! Screen -> document form. Inverse of `crate::decode`.

use serde_json::{json, Map, Value};

use super::{Action, Component, Item, ListItem, Screen};

impl Screen {
    /// Encodes the screen back into the untyped document shape.
    ///
    /// Absent optional fields are omitted rather than written as `null`,
    /// so decoding the result yields an equal screen.
    pub fn to_document(&self) -> Value {
        let components: Vec<Value> = self.components.iter().map(encode_component).collect();
        json!({ "components": components })
    }
}

fn encode_component(component: &Component) -> Value {
    match component {
        Component::Carousel(carousel) => {
            let items: Vec<Value> = carousel.items.iter().map(encode_item).collect();
            json!({
                "type": component.kind(),
                "layout": carousel.layout.as_tag(),
                "items": items,
            })
        }
        Component::List(list) => {
            let items: Vec<Value> = list.items.iter().map(encode_list_item).collect();
            json!({
                "type": component.kind(),
                "items": items,
            })
        }
    }
}

fn encode_item(item: &Item) -> Value {
    let mut map = Map::new();
    map.insert("type".to_string(), Value::from(item.kind.as_str()));
    insert_opt(&mut map, "url", item.url.as_deref());
    insert_opt(&mut map, "description", item.description.as_deref());
    insert_opt(&mut map, "content", item.content.as_deref());
    if let Some(action) = &item.action {
        map.insert("action".to_string(), encode_action(action));
    }
    Value::Object(map)
}

fn encode_list_item(item: &ListItem) -> Value {
    let mut map = Map::new();
    map.insert("type".to_string(), Value::from(item.kind.as_str()));
    map.insert("title".to_string(), Value::from(item.title.as_str()));
    map.insert("subtitle".to_string(), Value::from(item.subtitle.as_str()));
    insert_opt(&mut map, "icon", item.icon.as_deref());
    if let Some(action) = &item.action {
        map.insert("action".to_string(), encode_action(action));
    }
    Value::Object(map)
}

fn encode_action(action: &Action) -> Value {
    json!({ "type": action.kind, "url": action.url })
}

fn insert_opt(map: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        map.insert(key.to_string(), Value::from(value));
    }
}
