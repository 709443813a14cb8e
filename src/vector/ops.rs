//! Operator overloads shared by both representations.
//!
//! One symbol carries different meanings depending on the operand types:
//!
//! | expression      | meaning                                  |
//! |-----------------|------------------------------------------|
//! | `v * s`, `s * v`| scale                                    |
//! | `v * w`         | dot product (`f64`)                      |
//! | `v / s`, `v / w`| checked division, returns `Result`       |
//! | `v % s`         | scale (not a remainder)                  |
//! | `v % w`         | componentwise product (not a remainder)  |
//!
//! `%` is a componentwise product kept for compatibility with existing
//! callers. There is no `s % v`; the scalar may only appear on the right.

macro_rules! impl_vector_ops {
    ($t:ident) => {
        // Addition
        impl ::std::ops::Add for $t {
            type Output = $t;

            fn add(self, other: $t) -> $t {
                <$t>::new(self.x + other.x, self.y + other.y)
            }
        }

        impl<'a> ::std::ops::Add<&'a $t> for &'a $t {
            type Output = $t;

            fn add(self, other: &'a $t) -> $t {
                <$t>::new(self.x + other.x, self.y + other.y)
            }
        }

        impl ::std::ops::AddAssign for $t {
            fn add_assign(&mut self, other: $t) {
                self.x += other.x;
                self.y += other.y;
            }
        }

        // Subtraction
        impl ::std::ops::Sub for $t {
            type Output = $t;

            fn sub(self, other: $t) -> $t {
                <$t>::new(self.x - other.x, self.y - other.y)
            }
        }

        impl<'a> ::std::ops::Sub<&'a $t> for &'a $t {
            type Output = $t;

            fn sub(self, other: &'a $t) -> $t {
                <$t>::new(self.x - other.x, self.y - other.y)
            }
        }

        impl ::std::ops::SubAssign for $t {
            fn sub_assign(&mut self, other: $t) {
                self.x -= other.x;
                self.y -= other.y;
            }
        }

        impl ::std::ops::Neg for $t {
            type Output = $t;

            fn neg(self) -> $t {
                <$t>::new(-self.x, -self.y)
            }
        }

        impl<'a> ::std::ops::Neg for &'a $t {
            type Output = $t;

            fn neg(self) -> $t {
                <$t>::new(-self.x, -self.y)
            }
        }

        // Multiplication: scalar on either side, dot product between vectors
        impl ::std::ops::Mul<f64> for $t {
            type Output = $t;

            fn mul(self, scalar: f64) -> $t {
                $crate::vector::Vector::scale(&self, scalar)
            }
        }

        impl<'a> ::std::ops::Mul<f64> for &'a $t {
            type Output = $t;

            fn mul(self, scalar: f64) -> $t {
                $crate::vector::Vector::scale(self, scalar)
            }
        }

        impl ::std::ops::Mul<$t> for f64 {
            type Output = $t;

            fn mul(self, v: $t) -> $t {
                $crate::vector::Vector::scale(&v, self)
            }
        }

        impl<'a> ::std::ops::Mul<&'a $t> for f64 {
            type Output = $t;

            fn mul(self, v: &'a $t) -> $t {
                $crate::vector::Vector::scale(v, self)
            }
        }

        impl ::std::ops::Mul<$t> for $t {
            type Output = f64;

            fn mul(self, other: $t) -> f64 {
                self.x * other.x + self.y * other.y
            }
        }

        impl<'a> ::std::ops::Mul<&'a $t> for &'a $t {
            type Output = f64;

            fn mul(self, other: &'a $t) -> f64 {
                self.x * other.x + self.y * other.y
            }
        }

        impl ::std::ops::MulAssign<f64> for $t {
            fn mul_assign(&mut self, scalar: f64) {
                self.x *= scalar;
                self.y *= scalar;
            }
        }

        // Division, guarded against zero divisors
        impl ::std::ops::Div<f64> for $t {
            type Output = $crate::error::Result<$t>;

            fn div(self, scalar: f64) -> Self::Output {
                $crate::vector::Vector::checked_div_scalar(&self, scalar)
            }
        }

        impl<'a> ::std::ops::Div<f64> for &'a $t {
            type Output = $crate::error::Result<$t>;

            fn div(self, scalar: f64) -> Self::Output {
                $crate::vector::Vector::checked_div_scalar(self, scalar)
            }
        }

        impl ::std::ops::Div<$t> for $t {
            type Output = $crate::error::Result<$t>;

            fn div(self, other: $t) -> Self::Output {
                $crate::vector::Vector::checked_div(&self, &other)
            }
        }

        impl<'a> ::std::ops::Div<&'a $t> for &'a $t {
            type Output = $crate::error::Result<$t>;

            fn div(self, other: &'a $t) -> Self::Output {
                $crate::vector::Vector::checked_div(self, other)
            }
        }

        // "Modulo" is a componentwise product
        impl ::std::ops::Rem<f64> for $t {
            type Output = $t;

            fn rem(self, scalar: f64) -> $t {
                $crate::vector::Vector::scale(&self, scalar)
            }
        }

        impl ::std::ops::Rem<$t> for $t {
            type Output = $t;

            fn rem(self, other: $t) -> $t {
                $crate::vector::Vector::hadamard(&self, &other)
            }
        }

        impl<'a> ::std::ops::Rem<&'a $t> for &'a $t {
            type Output = $t;

            fn rem(self, other: &'a $t) -> $t {
                $crate::vector::Vector::hadamard(self, other)
            }
        }

        impl ::std::fmt::Display for $t {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "Vector{{{:.4}, {:.4}}}", self.x, self.y)
            }
        }

        // String concatenation through the Display form. `String` gets no
        // extra `Add` impls so that `String + &String` keeps coercing.
        impl<'a> ::std::ops::Add<$t> for &'a str {
            type Output = String;

            fn add(self, v: $t) -> String {
                format!("{}{}", self, v)
            }
        }

        // Conversions
        impl From<(f64, f64)> for $t {
            fn from((x, y): (f64, f64)) -> Self {
                <$t>::new(x, y)
            }
        }

        impl From<(i32, i32)> for $t {
            fn from((x, y): (i32, i32)) -> Self {
                <$t>::new(x as f64, y as f64)
            }
        }

        impl From<$t> for (f64, f64) {
            fn from(v: $t) -> Self {
                (v.x, v.y)
            }
        }
    };
}

pub(crate) use impl_vector_ops;

#[cfg(test)]
mod tests {
    use crate::error::VectorError;
    use crate::vector::packed::PackedVector2D as P;
    use crate::vector::plain::PlainVector2D;

    #[test]
    fn test_vector_operations() {
        let v1 = P::new(3.0, 4.0);
        let v2 = P::new(1.0, 2.0);

        assert_eq!(v1 + v2, P::new(4.0, 6.0));
        assert_eq!(v1 - v2, P::new(2.0, 2.0));
        assert_eq!(-v1, P::new(-3.0, -4.0));
        assert_eq!(-v1, v1 * -1.0);
        assert_eq!(v1 * 2.0, P::new(6.0, 8.0));
        assert_eq!(2.0 * v1, P::new(6.0, 8.0));
        assert_eq!(v1 / 2.0, Ok(P::new(1.5, 2.0)));
    }

    #[test]
    fn test_vector_times_vector_is_dot() {
        let dot: f64 = P::new(3.0, 4.0) * P::new(6.0, 3.0);
        assert_eq!(dot, 30.0);
        assert_eq!(&P::new(1.0, 0.0) * &P::new(0.0, 1.0), 0.0);
    }

    #[test]
    fn test_division_guards() {
        assert_eq!(P::new(1.0, 1.0) / P::new(0.0, 5.0), Err(VectorError::Division));
        assert_eq!(P::new(1.0, 1.0) / P::new(5.0, 0.0), Err(VectorError::Division));
        assert_eq!(P::new(1.0, 1.0) / 0.0, Err(VectorError::Division));
        assert_eq!(P::new(6.0, 8.0) / P::new(2.0, 4.0), Ok(P::new(3.0, 2.0)));
        assert_eq!(&P::new(6.0, 8.0) / 2.0, Ok(P::new(3.0, 4.0)));
    }

    #[test]
    fn test_rem_is_componentwise_product() {
        // Not a remainder: the scalar or vector multiplies each component.
        assert_eq!(P::new(10.0, 4.0) % 3.0, P::new(30.0, 12.0));
        assert_eq!(P::new(10.0, 4.0) % P::new(2.0, 0.5), P::new(20.0, 2.0));
    }

    #[test]
    fn test_compound_assignment() {
        let mut v = P::new(1.0, 1.0);
        v += P::new(2.0, 3.0);
        assert_eq!(v, P::new(3.0, 4.0));
        v -= P::new(1.0, 1.0);
        assert_eq!(v, P::new(2.0, 3.0));
        v *= 2.0;
        assert_eq!(v, P::new(4.0, 6.0));
    }

    #[test]
    fn test_display_and_concat() {
        let v = P::new(1.123456, -3.141592);
        assert_eq!(v.to_string(), "Vector{1.1235, -3.1416}");
        assert_eq!("pos: " + v, "pos: Vector{1.1235, -3.1416}");
        assert_eq!(&*String::from("at ") + v, "at Vector{1.1235, -3.1416}");
        assert_eq!(PlainVector2D::new(0.0, 2.5).to_string(), "Vector{0.0000, 2.5000}");
    }

    #[test]
    fn test_string_plus_string_ref_still_coerces() {
        let a = String::from("a");
        let b = String::from("b");
        let c = a + &b;
        assert_eq!(c, "ab");
        assert_eq!(c + &P::new(1.0, 2.0).to_string(), "abVector{1.0000, 2.0000}");
    }

    #[test]
    fn test_plain_operators_match_packed() {
        let a = PlainVector2D::new(3.0, 4.0);
        let b = PlainVector2D::new(1.0, 2.0);
        assert_eq!(&a + &b, PlainVector2D::new(4.0, 6.0));
        assert_eq!(&a - &b, PlainVector2D::new(2.0, 2.0));
        assert_eq!(&a * &b, 11.0);
        assert_eq!(-&a, PlainVector2D::new(-3.0, -4.0));
        assert_eq!(a.clone() % 3.0, PlainVector2D::new(9.0, 12.0));
        assert_eq!(&a / &PlainVector2D::new(0.0, 1.0), Err(VectorError::Division));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(P::from((1.5, 2.5)), P::new(1.5, 2.5));
        assert_eq!(P::from((3, -4)), P::new(3.0, -4.0));
        let pair: (f64, f64) = P::new(7.0, 8.0).into();
        assert_eq!(pair, (7.0, 8.0));
    }
}
