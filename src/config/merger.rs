//! Deep merge algorithm for configuration values.
//!
//! User configuration overrides the built-in defaults leaf-by-leaf rather
//! than replacing whole subtrees. This module implements the merge
//! semantics over generic JSON values.
//!
//! # Merge Rules
//!
//! - Objects are merged recursively
//! - Arrays are replaced entirely (case-convention rules are arrays)
//! - Null values in overlay delete the corresponding key from base
//! - Scalars in overlay replace scalars in base

use serde_json::Value;

/// Deep merge two configuration values.
///
/// Later values override earlier values at the point of conflict.
/// Objects are merged recursively. Arrays are replaced entirely.
/// Null values in overlay delete the corresponding key from base.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                } else if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Object(result)
        }

        (_, overlay) => overlay.clone(),
    }
}
