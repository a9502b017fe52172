//! JavaScript values into JSON
//!
//! `serde-wasm-bindgen` rejects a whole value when any part of it is a
//! function, symbol or bigint. Host objects may carry such fields next to the
//! lyric data, so conversion falls back to walking the value and dropping
//! only the parts that cannot be represented, the way `JSON.stringify` does.

use js_sys::{Array, Object, Reflect};
use serde_json::{Map, Value};
use wasm_bindgen::{JsCast, JsValue};

/// Nesting beyond this is read as `null` (guards against cyclic objects)
const MAX_DEPTH: usize = 32;

/// Convert `value`, dropping whatever has no JSON form
///
/// `undefined`, `null` and values with no JSON form read as `Value::Null`.
pub fn to_json_lossy(value: &JsValue, context: &str) -> Value {
    convert(value, context, 0)
}

fn convert(value: &JsValue, context: &str, depth: usize) -> Value {
    if value.is_undefined() || value.is_null() {
        return Value::Null;
    }
    if let Ok(json) = serde_wasm_bindgen::from_value::<Value>(value.clone()) {
        return json;
    }
    if depth >= MAX_DEPTH {
        log::warn!("{} is nested too deeply, ignoring it", context);
        return Value::Null;
    }

    if Array::is_array(value) {
        let items = Array::from(value);
        return Value::Array(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| convert(&item, &format!("{}[{}]", context, i), depth + 1))
                .collect(),
        );
    }

    if value.is_object() {
        // plain check rather than instanceof, so null-prototype objects pass
        let object: &Object = value.unchecked_ref();
        let mut map = Map::new();
        for key in Object::keys(object).iter() {
            let Some(name) = key.as_string() else {
                continue;
            };
            let Ok(field) = Reflect::get(object, &key) else {
                continue;
            };
            if field.is_undefined() || field.is_function() || field.is_symbol() {
                log::warn!("{}.{} is not plain data, ignoring it", context, name);
                continue;
            }
            let path = format!("{}.{}", context, name);
            map.insert(name, convert(&field, &path, depth + 1));
        }
        return Value::Object(map);
    }

    log::warn!("{} is not plain data, ignoring it", context);
    Value::Null
}
