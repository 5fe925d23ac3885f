use core::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D vector used for position and velocity
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

/// `sqrt(x*x + y*y)` without overflow or underflow in the squares.
#[inline]
fn hypot(x: f32, y: f32) -> f32 {
    #[cfg(feature = "std")]
    {
        x.hypot(y)
    }
    #[cfg(not(feature = "std"))]
    {
        libm::hypotf(x, y)
    }
}

impl Vector2D {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn length(&self) -> f32 {
        hypot(self.x, self.y)
    }

    /// Unit vector in the same direction. The zero vector normalizes to itself.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            *self / len
        } else {
            Self::zero()
        }
    }

    /// Rescales to `max` when longer than `max`, otherwise unchanged.
    pub fn limit(&self, max: f32) -> Self {
        if self.length() > max {
            self.normalize() * max
        } else {
            *self
        }
    }

    pub fn distance(&self, other: &Vector2D) -> f32 {
        (*self - *other).length()
    }

    /// Direction in radians, `atan2(y, x)`.
    pub fn heading(&self) -> f32 {
        #[cfg(feature = "std")]
        {
            self.y.atan2(self.x)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::atan2f(self.y, self.x)
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f32> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f32) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl Div<f32> for Vector2D {
    type Output = Self;

    fn div(self, scalar: f32) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl Neg for Vector2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl SubAssign for Vector2D {
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector2d_length() {
        let v = Vector2D::new(3.0, 4.0);
        assert_eq!(v.length(), 5.0);
    }

    #[test]
    fn test_vector2d_normalize() {
        let v = Vector2D::new(3.0, 4.0);
        let normalized = v.normalize();
        assert!((normalized.length() - 1.0).abs() < 0.0001);
        assert!((normalized.x - 0.6).abs() < 0.0001);
    }

    #[test]
    fn test_normalize_zero_is_zero() {
        assert_eq!(Vector2D::zero().normalize(), Vector2D::zero());
    }

    #[test]
    fn test_normalize_extreme_magnitudes() {
        for v in [
            Vector2D::new(1e20, 0.0),
            Vector2D::new(-3e30, 4e30),
            Vector2D::new(1e-30, 0.0),
            Vector2D::new(0.0, -2e-40),
            Vector2D::new(f32::MAX / 2.0, f32::MAX / 4.0),
        ] {
            let normalized = v.normalize();
            assert!((normalized.length() - 1.0).abs() < 0.0001, "{v:?} -> {normalized:?}");
            assert_eq!(normalized.x.signum(), v.x.signum());
            assert_eq!(normalized.y.signum(), v.y.signum());
        }
    }

    #[test]
    fn test_length_of_extreme_components() {
        assert_eq!(Vector2D::new(1e20, 0.0).length(), 1e20);
        assert_eq!(Vector2D::new(0.0, 1e-30).length(), 1e-30);
        assert!(Vector2D::new(f32::MAX / 2.0, f32::MAX / 4.0).length().is_finite());
    }

    #[test]
    fn test_limit_huge_vector() {
        let limited = Vector2D::new(0.0, -1e25).limit(2.0);
        assert!((limited.y + 2.0).abs() < 0.0001);
        assert_eq!(limited.x, 0.0);
    }

    #[test]
    fn test_vector2d_operations() {
        let v1 = Vector2D::new(1.0, 2.0);
        let v2 = Vector2D::new(3.0, 4.0);

        assert_eq!(v1 + v2, Vector2D::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vector2D::new(2.0, 2.0));
        assert_eq!(v1 * 2.0, Vector2D::new(2.0, 4.0));
        assert_eq!(v2 / 2.0, Vector2D::new(1.5, 2.0));
        assert_eq!(-v1, Vector2D::new(-1.0, -2.0));

        let mut acc = v1;
        acc += v2;
        acc -= v1;
        assert_eq!(acc, v2);
    }

    #[test]
    fn test_operations_leave_operands_untouched() {
        let v = Vector2D::new(1.0, 1.0);
        let _ = v * 5.0;
        let _ = v.normalize();
        assert_eq!(v, Vector2D::new(1.0, 1.0));
    }

    #[test]
    fn test_distance() {
        let a = Vector2D::new(0.0, 0.0);
        let b = Vector2D::new(6.0, 8.0);
        assert_eq!(a.distance(&b), 10.0);
        assert_eq!(b.distance(&a), 10.0);
        assert_eq!(a.distance(&a), 0.0);
    }

    #[test]
    fn test_limit() {
        let v = Vector2D::new(30.0, 40.0);
        let limited = v.limit(5.0);
        assert!((limited.length() - 5.0).abs() < 0.0001);

        let short = Vector2D::new(1.0, 0.0);
        assert_eq!(short.limit(5.0), short);
    }

    #[test]
    fn test_heading() {
        assert_eq!(Vector2D::new(1.0, 0.0).heading(), 0.0);
        let up = Vector2D::new(0.0, 1.0).heading();
        assert!((up - core::f32::consts::FRAC_PI_2).abs() < 0.0001);
    }
}
