use crate::error::VectorError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub fn name(&self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Traversal order for [`axes`]. Defaults to `YX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisOrder {
    XY,
    #[default]
    YX,
}

impl AxisOrder {
    fn axes(&self) -> [Axis; 2] {
        match self {
            Self::XY => [Axis::X, Axis::Y],
            Self::YX => [Axis::Y, Axis::X],
        }
    }
}

impl FromStr for AxisOrder {
    type Err = VectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xy" => Ok(Self::XY),
            "yx" => Ok(Self::YX),
            _ => Err(VectorError::InvalidAxisOrder(s.to_string())),
        }
    }
}

/// Iterator over `(index, axis)` pairs.
#[derive(Debug, Clone)]
pub struct Axes {
    order: [Axis; 2],
    next: usize,
}

impl Iterator for Axes {
    type Item = (usize, Axis);

    fn next(&mut self) -> Option<Self::Item> {
        let axis = *self.order.get(self.next)?;
        let index = self.next;
        self.next += 1;
        Some((index, axis))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.order.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Axes {}

pub fn axes(order: AxisOrder) -> Axes {
    Axes {
        order: order.axes(),
        next: 0,
    }
}

/// Iterator over `("x", x)` then `("y", y)`.
#[derive(Debug, Clone)]
pub struct Pairs {
    values: [f64; 2],
    next: usize,
}

impl Pairs {
    pub(crate) fn new(x: f64, y: f64) -> Self {
        Self {
            values: [x, y],
            next: 0,
        }
    }
}

impl Iterator for Pairs {
    type Item = (&'static str, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let value = *self.values.get(self.next)?;
        let name = if self.next == 0 { "x" } else { "y" };
        self.next += 1;
        Some((name, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.values.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Pairs {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::packed::PackedVector2D;
    use crate::vector::Vector;

    #[test]
    fn test_axes_order() {
        let default: Vec<_> = axes(AxisOrder::default()).collect();
        assert_eq!(default, vec![(0, Axis::Y), (1, Axis::X)]);

        let xy: Vec<_> = axes(AxisOrder::XY).collect();
        assert_eq!(xy, vec![(0, Axis::X), (1, Axis::Y)]);
    }

    #[test]
    fn test_axes_restart() {
        let it = axes(AxisOrder::XY);
        assert_eq!(it.clone().count(), 2);
        assert_eq!(it.len(), 2);
        assert_eq!(it.map(|(_, a)| a.name()).collect::<String>(), "xy");
    }

    #[test]
    fn test_axis_order_parse() {
        assert_eq!("xy".parse::<AxisOrder>(), Ok(AxisOrder::XY));
        assert_eq!("yx".parse::<AxisOrder>(), Ok(AxisOrder::YX));
        assert_eq!(
            "zx".parse::<AxisOrder>(),
            Err(VectorError::InvalidAxisOrder("zx".to_string()))
        );
    }

    #[test]
    fn test_pairs() {
        let v = PackedVector2D::new(1.0, -2.0);
        let pairs: Vec<_> = v.pairs().collect();
        assert_eq!(pairs, vec![("x", 1.0), ("y", -2.0)]);
        // a fresh iterator starts over
        assert_eq!(v.pairs().next(), Some(("x", 1.0)));

        for (i, axis) in axes(AxisOrder::YX) {
            let expected = if i == 0 { -2.0 } else { 1.0 };
            assert_eq!(v.axis(axis), expected);
        }
    }
}
