//! Canonical JSON + hash helpers.
//!
//! El fingerprint del registro y el hash del registry se calculan sobre una
//! serialización JSON canónica (claves de objeto ordenadas, sin espacios)
//! para que la identidad sea reproducible entre ejecuciones. La función de
//! hash queda abstraída aquí para poder cambiar de algoritmo sin tocar el
//! resto del core.

use blake3::Hasher;
use serde_json::Value;

/// Serializa un `Value` a JSON canónico: claves ordenadas, sin whitespace.
pub fn to_canonical_json(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => out.push_str(&serde_json::to_string(s).unwrap_or_default()),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            out.push('{');
            for (i, k) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&serde_json::to_string(k).unwrap_or_default());
                out.push(':');
                write_canonical(&map[k], out);
            }
            out.push('}');
        }
    }
}

/// Hashea un string y devuelve hex.
pub fn hash_str(input: &str) -> String {
    let mut h = Hasher::new();
    h.update(input.as_bytes());
    h.finalize().to_hex().to_string()
}

/// Hashea la forma canónica de un `Value`.
pub fn hash_value(value: &Value) -> String {
    hash_str(&to_canonical_json(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn canonical_orders_object_keys() {
        let a = json!({"b": 1, "a": [true, null]});
        assert_eq!(to_canonical_json(&a), r#"{"a":[true,null],"b":1}"#);
    }

    #[test]
    fn hash_is_stable_under_key_order() {
        let a = json!({"x": 1, "y": "z"});
        let b = json!({"y": "z", "x": 1});
        assert_eq!(hash_value(&a), hash_value(&b));
    }
}
