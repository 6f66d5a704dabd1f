//! Dotted-path addressing into a configuration document.
//!
//! A path like `network.timeout` descends the document one mapping level per
//! `.`-separated segment. Lookups stop at anything that cannot be descended
//! into; assignments create the missing structure instead.

use serde_yaml::{Mapping, Value};

/// Resolve a dotted path against a document.
///
/// Returns `None` when a segment is absent from its mapping or an
/// intermediate value is not a mapping. A full descent returns whatever is
/// stored there, nested mappings and sequences included.
///
/// # Example
/// ```
/// use config_store::path::lookup;
/// use serde_yaml::Value;
///
/// let doc: Value = serde_yaml::from_str("network:\n  timeout: 30").unwrap();
/// assert_eq!(lookup(&doc, "network.timeout"), Some(&Value::from(30)));
/// assert_eq!(lookup(&doc, "network.retries"), None);
/// ```
pub fn lookup<'a>(document: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = document;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    Some(current)
}

/// Assign `value` at a dotted path, creating an empty mapping at every
/// absent intermediate segment.
///
/// A non-mapping value in the way, the root included, is replaced by a fresh
/// mapping, so assignment is total: the last segment always ends up holding
/// `value`. Existing sibling keys and their order are untouched.
pub fn assign(document: &mut Value, path: &str, value: Value) {
    let segments: Vec<&str> = path.split('.').collect();
    let Some((&last, parents)) = segments.split_last() else {
        // split('.') always yields at least one segment, even for "".
        return;
    };

    let mut current = document;
    for &segment in parents {
        let map = ensure_mapping(current);
        let key = Value::from(segment);
        if !matches!(map.get(&key), Some(Value::Mapping(_))) {
            map.insert(key.clone(), Value::Mapping(Mapping::new()));
        }
        match map.get_mut(&key) {
            Some(next) => current = next,
            // The entry was inserted just above.
            None => return,
        }
    }

    ensure_mapping(current).insert(Value::from(last), value);
}

/// Replace a non-mapping value with an empty mapping and hand the mapping
/// back.
fn ensure_mapping(value: &mut Value) -> &mut Mapping {
    if !value.is_mapping() {
        *value = Value::Mapping(Mapping::new());
    }
    match value {
        Value::Mapping(map) => map,
        _ => unreachable!("value was just replaced with a mapping"),
    }
}
