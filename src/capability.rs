//! Storage representation selection.
//!
//! The packed `#[repr(C)]` struct is used when the `packed` feature is
//! enabled (the default). Otherwise every `Vector2D` is a plain record that
//! tolerates extra named fields.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    Packed,
    Plain,
}

#[cfg(feature = "packed")]
pub const ACTIVE: Representation = Representation::Packed;

#[cfg(not(feature = "packed"))]
pub const ACTIVE: Representation = Representation::Plain;

impl Representation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Packed => "packed",
            Self::Plain => "plain",
        }
    }

    /// Whether structurally similar foreign values count as vectors.
    pub fn allows_duck_typing(&self) -> bool {
        matches!(self, Self::Plain)
    }
}

impl Default for Representation {
    fn default() -> Self {
        ACTIVE
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
