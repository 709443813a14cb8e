use super::Vector;
use crate::error::Result;
use std::collections::BTreeMap;

/// Plain two-field record used when the packed representation is disabled.
///
/// Unknown field names are accepted and kept in a side table. They take no
/// part in arithmetic, equality or `copy`.
#[derive(Debug, Clone, Default)]
pub struct PlainVector2D {
    pub x: f64,
    pub y: f64,
    extra: BTreeMap<String, f64>,
}

impl PlainVector2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            extra: BTreeMap::new(),
        }
    }

    /// Value of a field stored through [`Vector::set`] under a non-standard name.
    pub fn extra(&self, name: &str) -> Option<f64> {
        self.extra.get(name).copied()
    }
}

impl PartialEq for PlainVector2D {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Vector for PlainVector2D {
    fn new(x: f64, y: f64) -> Self {
        PlainVector2D::new(x, y)
    }

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    fn set_extra(&mut self, name: &str, value: f64) -> Result<()> {
        log::trace!("Storing extra field `{}` = {}", name, value);
        self.extra.insert(name.to_string(), value);
        Ok(())
    }
}

super::ops::impl_vector_ops!(PlainVector2D);
