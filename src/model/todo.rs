use crate::record::Record;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub name: String,
}

impl Todo {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl Record for Todo {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn to_value(&self) -> Value {
        json!({ "id": self.id, "name": self.name })
    }

    fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value(value.clone()).ok()
    }

    fn field_names() -> &'static [&'static str] {
        &["id", "name"]
    }

    fn to_line(&self, separator: char) -> String {
        format!("{}{}{}", self.id, separator, self.name)
    }

    fn from_line(line: &str, separator: char) -> Option<Self> {
        let mut parts = line.split(separator);
        let id = parts.next()?.trim().parse().ok()?;
        let name = parts.next()?.to_string();
        // A name containing the separator produces extra fields; the line
        // is treated as malformed rather than guessing a split point.
        if parts.next().is_some() {
            return None;
        }
        Some(Self { id, name })
    }
}
