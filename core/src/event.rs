use std::borrow::Cow;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::config::HandlerConfig;
use crate::display::display_text;
use crate::errors::EventError;

/// Read-only view over one invocation event.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    fields: &'a Map<String, Value>,
}

/// The `numbers` an invocation sums and echoes back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numbers<'a> {
    Items(&'a [Value]),
    /// An empty string or object: sums to zero, echoed as sent.
    EmptyIterable(&'a Value),
}

impl<'a> Numbers<'a> {
    pub fn items(&self) -> &'a [Value] {
        match *self {
            Numbers::Items(items) => items,
            Numbers::EmptyIterable(_) => &[],
        }
    }
}

impl Serialize for Numbers<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Numbers::Items(items) => items.serialize(serializer),
            Numbers::EmptyIterable(value) => value.serialize(serializer),
        }
    }
}

impl<'a> Event<'a> {
    pub fn parse(event: &'a Value) -> Result<Self, EventError> {
        match event {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(EventError::EventNotAnObject {
                found: kind_of(other).to_string(),
            }),
        }
    }

    /// The name to greet. Strings are taken as is; other values use the
    /// runtime spelling from [`display_text`].
    pub fn name(&self, config: &'a HandlerConfig) -> Cow<'a, str> {
        match self.fields.get("name") {
            None => Cow::Borrowed(config.default_name.as_str()),
            Some(value) => display_text(value),
        }
    }

    /// Arrays are summed element by element. Strings and objects iterate
    /// their characters and keys, so they only succeed when empty.
    pub fn numbers(&self, config: &'a HandlerConfig) -> Result<Numbers<'a>, EventError> {
        let Some(value) = self.fields.get("numbers") else {
            return Ok(Numbers::Items(config.default_numbers.as_slice()));
        };
        match value {
            Value::Array(numbers) => Ok(Numbers::Items(numbers.as_slice())),
            Value::String(s) => match s.chars().next() {
                None => Ok(Numbers::EmptyIterable(value)),
                Some(first) => Err(non_numeric_head(first.to_string())),
            },
            Value::Object(fields) => match fields.keys().next() {
                None => Ok(Numbers::EmptyIterable(value)),
                Some(first) => Err(non_numeric_head(first.clone())),
            },
            other => Err(EventError::NotASequence {
                found: kind_of(other).to_string(),
            }),
        }
    }
}

fn non_numeric_head(text: String) -> EventError {
    EventError::NonNumericElement {
        index: 0,
        found: Value::String(text).to_string(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_fall_back_to_config() {
        let config = HandlerConfig::default();
        let raw = json!({});
        let event = Event::parse(&raw).unwrap();
        assert_eq!(event.name(&config), "World");
        assert_eq!(
            event.numbers(&config).unwrap().items(),
            &config.default_numbers[..]
        );
    }

    #[test]
    fn non_string_names_use_runtime_spelling() {
        let config = HandlerConfig::default();
        for (raw, expected) in [
            (json!({"name": 7}), "7"),
            (json!({"name": true}), "True"),
            (json!({"name": null}), "None"),
            (json!({"name": ["a"]}), "['a']"),
            (json!({"name": {"a": 1}}), "{'a': 1}"),
        ] {
            let event = Event::parse(&raw).unwrap();
            assert_eq!(event.name(&config), expected);
        }
    }

    #[test]
    fn non_object_events_are_rejected() {
        let raw = json!([1, 2, 3]);
        assert_eq!(
            Event::parse(&raw).unwrap_err(),
            EventError::EventNotAnObject {
                found: "an array".to_string()
            }
        );
    }

    #[test]
    fn scalar_numbers_are_not_a_sequence() {
        let config = HandlerConfig::default();
        for (raw, kind) in [
            (json!({"numbers": 5}), "a number"),
            (json!({"numbers": null}), "null"),
            (json!({"numbers": false}), "a boolean"),
        ] {
            let event = Event::parse(&raw).unwrap();
            assert_eq!(
                event.numbers(&config).unwrap_err(),
                EventError::NotASequence {
                    found: kind.to_string()
                }
            );
        }
    }

    #[test]
    fn empty_string_and_object_are_empty_iterables() {
        let config = HandlerConfig::default();
        for raw in [json!({"numbers": ""}), json!({"numbers": {}})] {
            let event = Event::parse(&raw).unwrap();
            let numbers = event.numbers(&config).unwrap();
            assert_eq!(numbers, Numbers::EmptyIterable(&raw["numbers"]));
            assert!(numbers.items().is_empty());
        }
    }

    #[test]
    fn non_empty_string_and_object_fail_on_first_item() {
        let config = HandlerConfig::default();
        for (raw, found) in [
            (json!({"numbers": "1,2"}), "\"1\""),
            (json!({"numbers": {"k": 1}}), "\"k\""),
        ] {
            let event = Event::parse(&raw).unwrap();
            assert_eq!(
                event.numbers(&config).unwrap_err(),
                EventError::NonNumericElement {
                    index: 0,
                    found: found.to_string()
                }
            );
        }
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let config = HandlerConfig::default();
        let raw = json!({"name": "Ada", "extra": {"nested": 1}});
        let event = Event::parse(&raw).unwrap();
        assert_eq!(event.name(&config), "Ada");
    }
}
