//! The Vector2D contract shared by both storage representations.
//!
//! Implementors only provide storage (`new`, component accessors and the
//! hook for unknown field names). Every derived property, setter and
//! transform is a provided method, so both representations behave
//! identically.

pub mod direction;
pub mod iter;
mod ops;
pub mod packed;
pub mod plain;
pub mod property;

use crate::error::{Result, VectorError};
use iter::{Axis, Pairs};
use property::Property;

pub trait Vector: Sized {
    fn new(x: f64, y: f64) -> Self;

    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn set_x(&mut self, x: f64);
    fn set_y(&mut self, y: f64);

    /// Called by [`Vector::set`] for names other than `x`, `y`, `length`
    /// and `angle`.
    fn set_extra(&mut self, name: &str, value: f64) -> Result<()>;

    /// Builds a vector, defaulting missing components to zero.
    fn from_parts(x: Option<f64>, y: Option<f64>) -> Self {
        Self::new(x.unwrap_or(0.0), y.unwrap_or(0.0))
    }

    fn axis(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x(),
            Axis::Y => self.y(),
        }
    }

    fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Alias of [`Vector::length`].
    fn size(&self) -> f64 {
        self.length()
    }

    fn length_squared(&self) -> f64 {
        self.x() * self.x() + self.y() * self.y()
    }

    /// Angle in radians in (-π, π].
    fn angle(&self) -> f64 {
        self.y().atan2(self.x())
    }

    /// Unit vector in the same direction, or the zero vector for a zero input.
    fn normalized(&self) -> Self {
        let len = self.length();
        if len == 0.0 {
            Self::new(0.0, 0.0)
        } else {
            Self::new(self.x() / len, self.y() / len)
        }
    }

    /// Componentwise reciprocal. Zero components become infinite.
    fn inverse(&self) -> Self {
        Self::new(1.0 / self.x(), 1.0 / self.y())
    }

    fn copy(&self) -> Self {
        Self::new(self.x(), self.y())
    }

    fn floor(&self) -> Self {
        Self::new(self.x().floor(), self.y().floor())
    }

    fn ceil(&self) -> Self {
        Self::new(self.x().ceil(), self.y().ceil())
    }

    /// Rescales in place to `length`. A zero vector stays zero.
    fn set_length(&mut self, length: f64) {
        if self.length_squared() == 0.0 {
            log::debug!("Setting length {} on a zero vector, result stays zero", length);
        }
        let n = self.normalized();
        self.replace(n.x() * length, n.y() * length);
    }

    /// Points the vector at `angle` radians, keeping its length.
    fn set_angle(&mut self, angle: f64) {
        let v = self.angled(angle);
        self.replace(v.x(), v.y());
    }

    /// Overwrites both components.
    fn replace(&mut self, x: f64, y: f64) {
        self.set_x(x);
        self.set_y(y);
    }

    /// Same length, absolute angle `angle`.
    fn angled(&self, angle: f64) -> Self {
        let len = self.length();
        Self::new(angle.cos() * len, angle.sin() * len)
    }

    /// Rotates by `angle` radians using the rotation matrix directly.
    fn rotated(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(
            self.x() * cos - self.y() * sin,
            self.x() * sin + self.y() * cos,
        )
    }

    /// Caps the length at `max_length`.
    fn trim(&self, max_length: f64) -> Self {
        if self.length() < max_length {
            self.copy()
        } else {
            let n = self.normalized();
            Self::new(n.x() * max_length, n.y() * max_length)
        }
    }

    /// Componentwise clamp. When `lo > hi` on an axis, `hi` wins.
    fn clamp(&self, lo: &Self, hi: &Self) -> Self {
        Self::new(
            clamp_component(self.x(), lo.x(), hi.x()),
            clamp_component(self.y(), lo.y(), hi.y()),
        )
    }

    fn split(&self) -> (f64, f64) {
        (self.x(), self.y())
    }

    /// Componentwise product.
    fn hadamard(&self, other: &Self) -> Self {
        Self::new(self.x() * other.x(), self.y() * other.y())
    }

    fn dot(&self, other: &Self) -> f64 {
        self.x() * other.x() + self.y() * other.y()
    }

    fn scale(&self, factor: f64) -> Self {
        Self::new(self.x() * factor, self.y() * factor)
    }

    fn checked_div_scalar(&self, divisor: f64) -> Result<Self> {
        if divisor == 0.0 {
            log::trace!("Rejected division of ({}, {}) by zero", self.x(), self.y());
            return Err(VectorError::Division);
        }
        Ok(Self::new(self.x() / divisor, self.y() / divisor))
    }

    /// Componentwise quotient. Fails when any divisor component is zero.
    fn checked_div(&self, divisor: &Self) -> Result<Self> {
        if divisor.x() == 0.0 || divisor.y() == 0.0 {
            log::trace!(
                "Rejected division of ({}, {}) by ({}, {})",
                self.x(),
                self.y(),
                divisor.x(),
                divisor.y()
            );
            return Err(VectorError::Division);
        }
        Ok(Self::new(self.x() / divisor.x(), self.y() / divisor.y()))
    }

    fn pairs(&self) -> Pairs {
        Pairs::new(self.x(), self.y())
    }

    /// Reads a component, derived property or static entry by name.
    fn get(&self, name: &str) -> Option<Property<Self>> {
        property::lookup(self, name)
    }

    /// Writes `x`, `y` or one of the virtual properties `length` and
    /// `angle` by name. Other names go to [`Vector::set_extra`].
    fn set(&mut self, name: &str, value: f64) -> Result<()> {
        match name {
            "x" => self.set_x(value),
            "y" => self.set_y(value),
            "length" => self.set_length(value),
            "angle" => self.set_angle(value),
            _ => return self.set_extra(name, value),
        }
        Ok(())
    }
}

fn clamp_component(n: f64, lo: f64, hi: f64) -> f64 {
    lo.max(n).min(hi)
}

pub fn angled<V: Vector>(v: &V, angle: f64) -> V {
    v.angled(angle)
}

pub fn rotated<V: Vector>(v: &V, angle: f64) -> V {
    v.rotated(angle)
}

pub fn trim<V: Vector>(v: &V, max_length: f64) -> V {
    v.trim(max_length)
}

pub fn clamp<V: Vector>(v: &V, lo: &V, hi: &V) -> V {
    v.clamp(lo, hi)
}

pub fn split<V: Vector>(v: &V) -> (f64, f64) {
    v.split()
}

pub fn hadamard<V: Vector>(a: &V, b: &V) -> V {
    a.hadamard(b)
}

pub fn dot<V: Vector>(a: &V, b: &V) -> f64 {
    a.dot(b)
}
