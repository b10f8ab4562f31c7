#[allow(unused_imports)]
use crate::core::prelude::*;

use crate::util::vec_float;
use crate::util::vec_float::AlmostEq;
use num_traits::Zero;
use std::any::Any;
use std::f64::consts::PI;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// An immutable 2D vector with 64-bit floating point coordinates.
///
/// [`Vector2D`] is a plain value: every operation returns a new vector and the components can
/// only be read, never written. Operations that have no defined result for some inputs (division
/// by zero, the direction of the zero vector) return a [`VectorError`] instead of panicking.
///
/// # Examples
///
/// ```
/// use vector2d::util::linalg::Vector2D;
///
/// let v1 = Vector2D::new(3.0, 4.0);
/// let v2 = Vector2D::new(1.0, 2.0);
///
/// assert_eq!(v1 + v2, Vector2D::new(4.0, 6.0));
/// assert_eq!(v1.magnitude(), 5.0);
/// assert_eq!(v1.cross(v2), 2.0);
/// ```
///
/// # Equality and hashing
/// Two finite vectors are equal if each pair of components is within
/// [`REL_TOLERANCE`](crate::core::config::REL_TOLERANCE) relative, or
/// [`ABS_TOLERANCE`](crate::core::config::ABS_TOLERANCE) absolute, of each other. If either
/// vector has an infinite or `NaN` component, the comparison is exact instead, so `NaN` never
/// equals anything.
///
/// Hashing first collapses each component onto a grid coarser than those tolerances (see
/// [`vec_float::hash_key`]): [`HASH_SIGNIFICANT_DIGITS`](crate::core::config::HASH_SIGNIFICANT_DIGITS)
/// significant digits for ordinary values, multiples of
/// [`HASH_ABS_GRID`](crate::core::config::HASH_ABS_GRID) near zero. Vectors that differ only by
/// floating point noise therefore land in the same bucket of a
/// [`HashMap`](std::collections::HashMap) or [`HashSet`](std::collections::HashSet), whatever
/// their magnitude.
///
/// Note: approximate equality is not transitive, so no grid can agree with it everywhere. Two
/// equal vectors whose components sit on either side of a grid line still hash differently.
#[derive(Default, Debug, Copy, Clone)]
pub struct Vector2D {
    x: f64,
    y: f64,
}

impl PartialEq for Vector2D {
    fn eq(&self, other: &Self) -> bool {
        self.equals(*other)
    }
}
impl Eq for Vector2D {}

impl Hash for Vector2D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if !self.is_finite() {
            warn!("Vector2D: hashing non-finite vector {}", self);
        }
        vec_float::hash_key(self.x).to_bits().hash(state);
        vec_float::hash_key(self.y).to_bits().hash(state);
    }
}

#[allow(clippy::should_implement_trait)]
impl Vector2D {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Vector2D {
        Vector2D { x, y }
    }

    /// Creates a vector from polar form: a magnitude and an angle in radians, measured
    /// anticlockwise from the positive x-axis.
    ///
    /// # Examples
    ///
    /// ```
    /// use vector2d::util::linalg::Vector2D;
    /// let v = Vector2D::euler(2.0, std::f64::consts::FRAC_PI_2);
    /// assert_eq!(v, Vector2D::new(0.0, 2.0));
    /// ```
    #[must_use]
    pub fn euler(magnitude: f64, angle: f64) -> Vector2D {
        Vector2D {
            x: magnitude * angle.cos(),
            y: magnitude * angle.sin(),
        }
    }

    /// Returns a vector with both components set to 0.0.
    #[must_use]
    pub fn zero() -> Vector2D {
        Vector2D { x: 0.0, y: 0.0 }
    }

    pub fn x(&self) -> f64 {
        self.x
    }
    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[must_use]
    pub fn add(&self, other: Vector2D) -> Vector2D {
        Vector2D {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    #[must_use]
    pub fn subtract(&self, other: Vector2D) -> Vector2D {
        Vector2D {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Multiplies both components by `k`. Also available as `v * k` and `k * v`.
    #[must_use]
    pub fn scale(&self, k: f64) -> Vector2D {
        Vector2D {
            x: self.x * k,
            y: self.y * k,
        }
    }

    /// Divides both components by `k`.
    ///
    /// # Errors
    /// Returns [`VectorError::DivisionByZero`] if `k` is zero (of either sign).
    ///
    /// # Examples
    ///
    /// ```
    /// use vector2d::core::prelude::*;
    /// let v = Vector2D::new(3.0, 4.0);
    /// assert_eq!(v.divide(2.0), Ok(Vector2D::new(1.5, 2.0)));
    /// assert_eq!(v.divide(0.0), Err(VectorError::DivisionByZero));
    /// ```
    pub fn divide(&self, k: f64) -> Result<Vector2D, VectorError> {
        if k == 0.0 {
            return Err(VectorError::DivisionByZero);
        }
        Ok(Vector2D {
            x: self.x / k,
            y: self.y / k,
        })
    }

    #[must_use]
    pub fn negate(&self) -> Vector2D {
        Vector2D {
            x: -self.x,
            y: -self.y,
        }
    }

    /// Reflects the vector in the x-axis, i.e. the complex conjugate of `x + iy`.
    #[must_use]
    pub fn conjugate(&self) -> Vector2D {
        Vector2D {
            x: self.x,
            y: -self.y,
        }
    }

    /// Returns the squared Euclidean length of the vector.
    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.dot(*self)
    }

    /// Returns the Euclidean length of the vector.
    ///
    /// Computed with [`f64::hypot`], which neither overflows for very large components nor
    /// underflows for very small ones.
    ///
    /// # Examples
    ///
    /// ```
    /// use vector2d::util::linalg::Vector2D;
    /// use vector2d::util::vec_float::is_close;
    /// assert!(is_close(Vector2D::new(3e200, 4e200).magnitude(), 5e200));
    /// ```
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Alias for [`magnitude`](Vector2D::magnitude).
    #[must_use]
    pub fn abs(&self) -> f64 {
        self.magnitude()
    }

    /// Returns the angle of the vector from the positive x-axis in radians, in the range
    /// `(-π, π]`.
    ///
    /// # Errors
    /// Returns [`VectorError::UndefinedOperation`] for the zero vector, which has no direction.
    pub fn argument(&self) -> Result<f64, VectorError> {
        if self.x == 0.0 && self.y == 0.0 {
            return Err(VectorError::UndefinedOperation { operation: "argument" });
        }
        // atan2(-0.0, x < 0) gives -π, which lies outside the half-open range.
        let angle = self.y.atan2(self.x);
        Ok(if angle == -PI { PI } else { angle })
    }

    /// Returns the unit vector pointing in the same direction as this vector.
    ///
    /// Negative zero components in the result are replaced by positive zero.
    ///
    /// # Errors
    /// Returns [`VectorError::UndefinedOperation`] if the magnitude is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use vector2d::core::prelude::*;
    /// let unit = Vector2D::new(3.0, 4.0).normalize()?;
    /// assert_eq!(unit, Vector2D::new(0.6, 0.8));
    /// assert!(Vector2D::zero().normalize().is_err());
    /// # Ok::<(), VectorError>(())
    /// ```
    pub fn normalize(&self) -> Result<Vector2D, VectorError> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(VectorError::UndefinedOperation { operation: "normalize" });
        }
        Ok(Vector2D {
            x: vec_float::force_positive_zero(self.x / magnitude),
            y: vec_float::force_positive_zero(self.y / magnitude),
        })
    }

    #[must_use]
    pub fn dot(&self, other: Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Computes the 2D cross product of two vectors: the z-component of the 3D cross product of
    /// the two vectors embedded in the plane `z = 0`.
    ///
    /// It is positive if `other` is anticlockwise from `self`, and negative if clockwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use vector2d::util::linalg::Vector2D;
    /// let v1 = Vector2D::new(2.0, 0.0);
    /// let v2 = Vector2D::new(0.0, 3.0);
    /// assert_eq!(v1.cross(v2), 6.0);
    /// assert_eq!(v2.cross(v1), -6.0);
    /// ```
    #[must_use]
    pub fn cross(&self, other: Vector2D) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Approximate equality; the same relation as `==`.
    pub fn equals(&self, other: Vector2D) -> bool {
        if self.is_finite() && other.is_finite() {
            vec_float::is_close(self.x, other.x) && vec_float::is_close(self.y, other.y)
        } else {
            self.x == other.x && self.y == other.y
        }
    }

    /// Compares against a value of any type. Values that are not a [`Vector2D`] are never equal.
    ///
    /// # Examples
    ///
    /// ```
    /// use vector2d::util::linalg::Vector2D;
    /// let v = Vector2D::new(1.0, 2.0);
    /// assert!(v.equals_any(&Vector2D::new(1.0, 2.0)));
    /// assert!(!v.equals_any(&(1.0_f64, 2.0_f64)));
    /// assert!(!v.equals_any(&"Vector2D(x=1.0, y=2.0)"));
    /// ```
    pub fn equals_any(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Vector2D>()
            .is_some_and(|other| self.equals(*other))
    }
}

impl AlmostEq for Vector2D {
    fn almost_eq(&self, rhs: Self) -> bool {
        self.equals(rhs)
    }
}

impl Zero for Vector2D {
    fn zero() -> Self {
        Vector2D::zero()
    }

    fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }
}

impl From<[f64; 2]> for Vector2D {
    fn from(value: [f64; 2]) -> Self {
        Vector2D {
            x: value[0],
            y: value[1],
        }
    }
}
impl From<(f64, f64)> for Vector2D {
    fn from(value: (f64, f64)) -> Self {
        Vector2D {
            x: value.0,
            y: value.1,
        }
    }
}

impl From<Vector2D> for [f64; 2] {
    fn from(value: Vector2D) -> Self {
        [value.x, value.y]
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision();

        write!(f, "Vector2D(")?;
        if let Some(p) = precision {
            write!(f, "x={0:.1$}", self.x, p)?;
            write!(f, ", y={0:.1$}", self.y, p)?;
        } else {
            write!(f, "x={:?}, y={:?}", self.x, self.y)?;
        }
        write!(f, ")")
    }
}

impl Add<Vector2D> for Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: Vector2D) -> Self::Output {
        Vector2D::add(&self, rhs)
    }
}
impl Add<&Vector2D> for &Vector2D {
    type Output = Vector2D;

    fn add(self, rhs: &Vector2D) -> Self::Output {
        Vector2D::add(self, *rhs)
    }
}

impl Sub<Vector2D> for Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: Vector2D) -> Self::Output {
        self.subtract(rhs)
    }
}
impl Sub<&Vector2D> for &Vector2D {
    type Output = Vector2D;

    fn sub(self, rhs: &Vector2D) -> Self::Output {
        self.subtract(*rhs)
    }
}

impl Sum<Vector2D> for Vector2D {
    fn sum<I: Iterator<Item = Vector2D>>(iter: I) -> Self {
        iter.fold(Vector2D::zero(), |acc, v| acc + v)
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}
impl Mul<Vector2D> for f64 {
    type Output = Vector2D;

    fn mul(self, rhs: Vector2D) -> Self::Output {
        rhs.scale(self)
    }
}
impl Mul<&Vector2D> for f64 {
    type Output = Vector2D;

    fn mul(self, rhs: &Vector2D) -> Self::Output {
        rhs.scale(self)
    }
}

/// Division can fail, so the operator yields a [`Result`] rather than a bare vector.
///
/// ```
/// use vector2d::core::prelude::*;
/// let half = (Vector2D::new(3.0, 4.0) / 2.0)?;
/// assert_eq!(half, Vector2D::new(1.5, 2.0));
/// # Ok::<(), VectorError>(())
/// ```
impl Div<f64> for Vector2D {
    type Output = Result<Vector2D, VectorError>;

    fn div(self, rhs: f64) -> Self::Output {
        self.divide(rhs)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}
impl Neg for &Vector2D {
    type Output = Vector2D;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}
