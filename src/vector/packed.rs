use super::Vector;
use crate::error::{Result, VectorError};
use bytemuck::{Pod, Zeroable};

/// Two `f64` components laid out as a C struct.
///
/// The field set is closed: naming anything other than `x`, `y`, `length`
/// or `angle` through [`Vector::set`] fails with
/// [`VectorError::InvalidField`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
#[repr(C)]
pub struct PackedVector2D {
    pub x: f64,
    pub y: f64,
}

impl PackedVector2D {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Views the components as `[x, y]` without copying.
    pub fn as_array(&self) -> &[f64; 2] {
        bytemuck::cast_ref(self)
    }

    pub fn as_array_mut(&mut self) -> &mut [f64; 2] {
        bytemuck::cast_mut(self)
    }
}

impl Vector for PackedVector2D {
    fn new(x: f64, y: f64) -> Self {
        Self { x, y }
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

    fn set_extra(&mut self, name: &str, _value: f64) -> Result<()> {
        log::debug!("Rejected assignment to unknown field `{}`", name);
        Err(VectorError::InvalidField(name.to_string()))
    }
}

super::ops::impl_vector_ops!(PackedVector2D);
