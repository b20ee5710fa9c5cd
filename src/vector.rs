//! Two-dimensional vector value type.

use core::fmt;
use core::ops::{Add, Mul};

#[cfg(feature = "std")]
fn hypot(x: f64, y: f64) -> f64 {
    x.hypot(y)
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn hypot(x: f64, y: f64) -> f64 {
    libm::hypot(x, y)
}

/// A two-dimensional vector.
///
/// Every operation returns a new vector; the operands are never modified.
/// Only vectors can be added to a vector:
///
/// ```compile_fail
/// use deckvec::Vector2D;
///
/// let v = Vector2D::new(1.0, 2.0) + 3.0;
/// ```
///
/// `PartialEq` compares coordinates exactly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    x: f64,
    y: f64,
}

impl Vector2D {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a new vector.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x coordinate.
    #[must_use]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns the y coordinate.
    #[must_use]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns the Euclidean length of the vector.
    ///
    /// Computed with `hypot`, so very large coordinates do not overflow.
    ///
    /// # Example
    ///
    /// ```
    /// use deckvec::Vector2D;
    ///
    /// assert_eq!(Vector2D::new(3.0, 4.0).magnitude(), 5.0);
    /// ```
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        hypot(self.x, self.y)
    }

    /// Returns whether the vector has a nonzero magnitude.
    #[must_use]
    pub fn is_nonzero(&self) -> bool {
        self.magnitude() != 0.0
    }

    /// Returns the vector with both coordinates multiplied by `scalar`.
    ///
    /// # Example
    ///
    /// ```
    /// use deckvec::Vector2D;
    ///
    /// let v = Vector2D::new(3.0, 4.0);
    /// assert_eq!(v.scale(3.0), Vector2D::new(9.0, 12.0));
    /// assert_eq!(v * 3.0, v.scale(3.0));
    /// ```
    #[must_use]
    pub fn scale(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Vector2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2D> for (f64, f64) {
    fn from(v: Vector2D) -> Self {
        (v.x, v.y)
    }
}
