//! Name-based property access.
//!
//! `x` and `y` are read straight from storage. Derived properties are found
//! in [`DERIVED`]; any other name falls through to the static direction
//! table, so `v.get("up")` yields the shared `up` direction.

use super::direction;
use super::Vector;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Result of a name-based read.
#[derive(Debug, Clone, PartialEq)]
pub enum Property<V> {
    Scalar(f64),
    Vector(V),
}

impl<V> Property<V> {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Self::Scalar(n) => Some(*n),
            Self::Vector(_) => None,
        }
    }

    pub fn into_vector(self) -> Option<V> {
        match self {
            Self::Vector(v) => Some(v),
            Self::Scalar(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Derived {
    Length,
    LengthSquared,
    Angle,
    Normalized,
    Inverse,
    Copy,
    Floor,
    Ceil,
}

impl Derived {
    pub fn compute<V: Vector>(self, v: &V) -> Property<V> {
        match self {
            Self::Length => Property::Scalar(v.length()),
            Self::LengthSquared => Property::Scalar(v.length_squared()),
            Self::Angle => Property::Scalar(v.angle()),
            Self::Normalized => Property::Vector(v.normalized()),
            Self::Inverse => Property::Vector(v.inverse()),
            Self::Copy => Property::Vector(v.copy()),
            Self::Floor => Property::Vector(v.floor()),
            Self::Ceil => Property::Vector(v.ceil()),
        }
    }
}

pub static DERIVED: Lazy<HashMap<&'static str, Derived>> = Lazy::new(|| {
    HashMap::from([
        ("length", Derived::Length),
        ("length2", Derived::LengthSquared),
        ("angle", Derived::Angle),
        ("normalized", Derived::Normalized),
        ("inverse", Derived::Inverse),
        ("copy", Derived::Copy),
        ("floor", Derived::Floor),
        ("ceil", Derived::Ceil),
    ])
});

pub fn lookup<V: Vector>(v: &V, name: &str) -> Option<Property<V>> {
    match name {
        "x" => Some(Property::Scalar(v.x())),
        "y" => Some(Property::Scalar(v.y())),
        _ => match DERIVED.get(name) {
            Some(derived) => Some(derived.compute(v)),
            None => direction::lookup::<V>(name).map(Property::Vector),
        },
    }
}
