//! The 2-component parameter vector `(intercept, slope)` of the linear model.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Parameter vector of `y = w0 + w1 * x`.
///
/// Arithmetic is element-wise, except `Mul<f64>` / `Div<f64>` which scale
/// both components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Params(pub [f64; 2]);

impl Params {
    pub const ZERO: Params = Params([0.0, 0.0]);

    pub fn new(intercept: f64, slope: f64) -> Self {
        Params([intercept, slope])
    }

    pub fn intercept(&self) -> f64 {
        self.0[0]
    }

    pub fn slope(&self) -> f64 {
        self.0[1]
    }

    /// Applies `f` to both components.
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Params([f(self.0[0]), f(self.0[1])])
    }

    /// Combines both vectors component by component.
    pub fn zip_with(self, other: Params, f: impl Fn(f64, f64) -> f64) -> Self {
        Params([f(self.0[0], other.0[0]), f(self.0[1], other.0[1])])
    }

    pub fn square(self) -> Self {
        self.map(|v| v * v)
    }

    pub fn sqrt(self) -> Self {
        self.map(f64::sqrt)
    }

    pub fn dot(self, other: Params) -> f64 {
        self.0[0] * other.0[0] + self.0[1] * other.0[1]
    }

    pub fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|v| v.is_finite())
    }
}

impl From<[f64; 2]> for Params {
    fn from(values: [f64; 2]) -> Self {
        Params(values)
    }
}

impl From<Params> for [f64; 2] {
    fn from(params: Params) -> Self {
        params.0
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.6}, {:.6}]", self.0[0], self.0[1])
    }
}

impl Add for Params {
    type Output = Params;
    fn add(self, rhs: Params) -> Params {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl Sub for Params {
    type Output = Params;
    fn sub(self, rhs: Params) -> Params {
        self.zip_with(rhs, |a, b| a - b)
    }
}

/// Element-wise product.
impl Mul for Params {
    type Output = Params;
    fn mul(self, rhs: Params) -> Params {
        self.zip_with(rhs, |a, b| a * b)
    }
}

/// Element-wise quotient.
impl Div for Params {
    type Output = Params;
    fn div(self, rhs: Params) -> Params {
        self.zip_with(rhs, |a, b| a / b)
    }
}

impl Mul<f64> for Params {
    type Output = Params;
    fn mul(self, rhs: f64) -> Params {
        self.map(|v| v * rhs)
    }
}

impl Mul<Params> for f64 {
    type Output = Params;
    fn mul(self, rhs: Params) -> Params {
        rhs * self
    }
}

impl Div<f64> for Params {
    type Output = Params;
    fn div(self, rhs: f64) -> Params {
        self.map(|v| v / rhs)
    }
}

impl Add<f64> for Params {
    type Output = Params;
    fn add(self, rhs: f64) -> Params {
        self.map(|v| v + rhs)
    }
}

impl Neg for Params {
    type Output = Params;
    fn neg(self) -> Params {
        self.map(|v| -v)
    }
}

impl AddAssign for Params {
    fn add_assign(&mut self, rhs: Params) {
        *self = *self + rhs;
    }
}

impl SubAssign for Params {
    fn sub_assign(&mut self, rhs: Params) {
        *self = *self - rhs;
    }
}
