//! A 2D vector value type for games.
//!
//! [`Vector2D`] is the representation selected at build time: the packed
//! `#[repr(C)]` struct by default, or the plain record when the `packed`
//! feature is disabled. Both implement [`Vector`] and the same operators.
//!
//! ```
//! use vector2d::{Vector, Vector2D};
//!
//! let mut v = Vector2D::new(0.6, 0.8);
//! v.set_length(5.0);
//! assert!((v.x - 3.0).abs() < 1e-9);
//! assert_eq!(Vector2D::new(3.0, 4.0) * Vector2D::new(6.0, 3.0), 30.0);
//! ```

pub mod capability;
pub mod error;
pub mod vector;

pub use capability::Representation;
pub use error::{Result, VectorError};
pub use vector::direction::{equals, is_vector};
pub use vector::iter::{axes, Axes, Axis, AxisOrder, Pairs};
pub use vector::packed::PackedVector2D;
pub use vector::plain::PlainVector2D;
pub use vector::property::Property;
pub use vector::{angled, clamp, dot, hadamard, rotated, split, trim, Vector};

#[cfg(feature = "packed")]
pub type Vector2D = PackedVector2D;

#[cfg(not(feature = "packed"))]
pub type Vector2D = PlainVector2D;

/// Named unit direction (`up`, `down`, `left`, `right`, `top`, `bottom`)
/// as a fresh [`Vector2D`]. Unknown names give the zero vector.
pub fn dir(name: &str) -> Vector2D {
    vector::direction::dir(name)
}
