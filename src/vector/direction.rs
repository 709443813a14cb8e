//! Named unit directions and dynamic type checks.
//!
//! Screen coordinates: `up` points towards negative y.

use super::packed::PackedVector2D;
use super::plain::PlainVector2D;
use super::Vector;
use crate::capability;
use once_cell::sync::Lazy;
use std::any::Any;
use std::collections::{BTreeMap, HashMap};

pub static DIRECTIONS: Lazy<HashMap<&'static str, (f64, f64)>> = Lazy::new(|| {
    HashMap::from([
        ("up", (0.0, -1.0)),
        ("down", (0.0, 1.0)),
        ("left", (-1.0, 0.0)),
        ("right", (1.0, 0.0)),
        ("top", (0.0, -1.0)),
        ("bottom", (0.0, 1.0)),
        ("zero", (0.0, 0.0)),
    ])
});

/// A fresh vector for a known name.
pub fn lookup<V: Vector>(name: &str) -> Option<V> {
    DIRECTIONS.get(name).map(|&(x, y)| V::new(x, y))
}

/// Unit direction by name, or a zero vector for an unknown name.
pub fn dir<V: Vector>(name: &str) -> V {
    lookup(name).unwrap_or_else(|| V::new(0.0, 0.0))
}

fn components(value: &dyn Any) -> Option<(f64, f64)> {
    if let Some(v) = value.downcast_ref::<PackedVector2D>() {
        return Some((v.x, v.y));
    }
    if let Some(v) = value.downcast_ref::<PlainVector2D>() {
        return Some((v.x, v.y));
    }
    if !capability::ACTIVE.allows_duck_typing() {
        return None;
    }
    if let Some(map) = value.downcast_ref::<HashMap<String, f64>>() {
        return Some((*map.get("x")?, *map.get("y")?));
    }
    if let Some(map) = value.downcast_ref::<BTreeMap<String, f64>>() {
        return Some((*map.get("x")?, *map.get("y")?));
    }
    None
}

/// Whether `value` is a vector. Records with `x` and `y` entries only
/// qualify under the plain representation.
pub fn is_vector(value: &dyn Any) -> bool {
    components(value).is_some()
}

/// Structural equality against an arbitrary value. Non-vectors compare
/// unequal.
pub fn equals<V: Vector>(v: &V, other: &dyn Any) -> bool {
    match components(other) {
        Some((x, y)) => v.x() == x && v.y() == y,
        None => false,
    }
}
