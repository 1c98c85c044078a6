//! Flattening of JSON translation documents.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde_json::{Map, Value};

use super::DictionaryError;

pub(super) fn flatten(value: Value) -> Result<BTreeMap<String, String>, DictionaryError> {
    let Value::Object(object) = value else {
        return Err(DictionaryError::NotAnObject {
            found: kind_of(&value),
        });
    };

    let mut entries = BTreeMap::new();
    flatten_into(&mut entries, None, object)?;
    Ok(entries)
}

fn flatten_into(
    entries: &mut BTreeMap<String, String>,
    prefix: Option<&str>,
    object: Map<String, Value>,
) -> Result<(), DictionaryError> {
    for (segment, value) in object {
        let key = match prefix {
            Some(parent) => format!("{parent}.{segment}"),
            None => segment,
        };

        match value {
            Value::String(text) => insert_unique(entries, key, text)?,
            Value::Object(nested) => flatten_into(entries, Some(&key), nested)?,
            other => {
                return Err(DictionaryError::NonStringValue {
                    key,
                    found: kind_of(&other),
                });
            }
        }
    }

    Ok(())
}

fn insert_unique(
    entries: &mut BTreeMap<String, String>,
    key: String,
    text: String,
) -> Result<(), DictionaryError> {
    match entries.entry(key) {
        Entry::Vacant(slot) => {
            slot.insert(text);
            Ok(())
        }
        Entry::Occupied(slot) => Err(DictionaryError::DuplicateKey {
            key: slot.key().clone(),
        }),
    }
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
