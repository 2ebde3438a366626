use std::ops::{Add, Div, Mul, Neg, Sub};

// implement Complex instead of using the num-complex trait for learning
/// A point in the plane, treated as `real + i·imag` so curve motifs can be
/// expressed as rotations and translations.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

pub const I: Complex = Complex { real: 0.0, imag: 1.0 };

impl Complex {
    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    /// Unit-length complex number at `angle` radians, scaled by `radius`.
    #[must_use]
    pub fn from_polar(radius: f64, angle: f64) -> Self {
        Self {
            real: radius * angle.cos(),
            imag: radius * angle.sin(),
        }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    #[must_use]
    pub fn conj(&self) -> Self {
        Self {
            real: self.real,
            imag: -self.imag,
        }
    }

    #[must_use]
    pub fn as_pair(&self) -> (f64, f64) {
        (self.real, self.imag)
    }
}

impl From<(f64, f64)> for Complex {
    fn from((real, imag): (f64, f64)) -> Self {
        Self { real, imag }
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Add<f64> for Complex {
    type Output = Self;

    fn add(self, other: f64) -> Self {
        Self {
            real: self.real + other,
            imag: self.imag,
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            real: self.real - other.real,
            imag: self.imag - other.imag,
        }
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            real: -self.real,
            imag: -self.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

impl Mul<f64> for Complex {
    type Output = Self;

    fn mul(self, scale: f64) -> Self {
        Self {
            real: self.real * scale,
            imag: self.imag * scale,
        }
    }
}

impl Div<f64> for Complex {
    type Output = Self;

    fn div(self, scale: f64) -> Self {
        Self {
            real: self.real / scale,
            imag: self.imag / scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_magnitude_squared() {
        let c = Complex::new(3.0, 4.0);
        assert_eq!(c.magnitude_squared(), 25.0); // 3² + 4² = 25
        assert_eq!(c.magnitude(), 5.0);
    }

    #[test]
    fn test_magnitude_squared_negative_real_and_imag() {
        let c = Complex::new(-3.0, -4.0);
        assert_eq!(c.magnitude_squared(), 25.0);
    }

    #[test]
    fn test_add_and_sub() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, 4.0);

        assert_eq!(a + b, Complex::new(4.0, 6.0));
        assert_eq!(b - a, Complex::new(2.0, 2.0));
        assert_eq!(a + 1.5, Complex::new(2.5, 2.0));
        assert_eq!(-a, Complex::new(-1.0, -2.0));
    }

    #[test]
    fn test_mul() {
        // (1 + 2i) * (3 + 4i) = 3 + 4i + 6i + 8i² = 3 + 10i - 8 = -5 + 10i
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, 4.0);

        assert_eq!(a * b, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn test_scalar_mul_and_div() {
        let a = Complex::new(3.0, -6.0);

        assert_eq!(a * 2.0, Complex::new(6.0, -12.0));
        assert_eq!(a / 3.0, Complex::new(1.0, -2.0));
    }

    #[test]
    fn test_multiplying_by_i_rotates_a_quarter_turn() {
        let a = Complex::new(1.0, 0.0);

        assert_eq!(a * I, Complex::new(0.0, 1.0));
        assert_eq!(a * I * I, Complex::new(-1.0, 0.0));
    }

    #[test]
    fn test_from_polar() {
        let c = Complex::from_polar(2.0, PI / 2.0);

        assert!(c.real.abs() < EPSILON);
        assert!((c.imag - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_conj() {
        assert_eq!(Complex::new(1.0, 2.0).conj(), Complex::new(1.0, -2.0));
    }

    #[test]
    fn test_square() {
        // (2 + 3i)² = 4 + 12i + 9i² = 4 + 12i - 9 = -5 + 12i
        let c = Complex::new(2.0, 3.0);
        assert_eq!(c * c, Complex::new(-5.0, 12.0));
    }
}
