//! Numeric results of `sum`.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::Serialize;

/// An integer or floating point number
///
/// Integer addition stays integral until it overflows, at which point the
/// result widens to a float. Any float operand makes the result a float.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub const ZERO: Number = Number::Int(0);

    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(value) => value as f64,
            Number::Float(value) => value,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::Int(value) => Some(value),
            Number::Float(_) => None,
        }
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::ZERO
    }
}

impl Add for Number {
    type Output = Number;

    fn add(self, rhs: Number) -> Number {
        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => match a.checked_add(b) {
                Some(sum) => Number::Int(sum),
                None => Number::Float(a as f64 + b as f64),
            },
            (a, b) => Number::Float(a.as_f64() + b.as_f64()),
        }
    }
}

impl Sum for Number {
    fn sum<I: Iterator<Item = Number>>(iter: I) -> Number {
        iter.fold(Number::ZERO, Add::add)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(value) => write!(f, "{value}"),
            Number::Float(value) => write!(f, "{value}"),
        }
    }
}

impl PartialEq<i64> for Number {
    fn eq(&self, other: &i64) -> bool {
        match *self {
            Number::Int(value) => value == *other,
            Number::Float(value) => value == *other as f64,
        }
    }
}

impl PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool {
        self.as_f64() == *other
    }
}

/// Conversion of an item into a number for summing
pub trait AsNumber {
    fn as_number(&self) -> Number;
}

impl AsNumber for Number {
    fn as_number(&self) -> Number {
        *self
    }
}

impl AsNumber for bool {
    fn as_number(&self) -> Number {
        Number::Int(i64::from(*self))
    }
}

impl AsNumber for f32 {
    fn as_number(&self) -> Number {
        Number::Float(f64::from(*self))
    }
}

impl AsNumber for f64 {
    fn as_number(&self) -> Number {
        Number::Float(*self)
    }
}

macro_rules! impl_as_number_lossless {
    ($($ty:ty),*) => {
        $(
            impl AsNumber for $ty {
                fn as_number(&self) -> Number {
                    Number::Int(i64::from(*self))
                }
            }
        )*
    };
}

macro_rules! impl_as_number_wide {
    ($($ty:ty),*) => {
        $(
            impl AsNumber for $ty {
                fn as_number(&self) -> Number {
                    match i64::try_from(*self) {
                        Ok(value) => Number::Int(value),
                        Err(_) => Number::Float(*self as f64),
                    }
                }
            }
        )*
    };
}

impl_as_number_lossless!(i8, i16, i32, i64, u8, u16, u32);
impl_as_number_wide!(isize, usize, u64, i128, u128);

impl<T: AsNumber + ?Sized> AsNumber for &T {
    fn as_number(&self) -> Number {
        (**self).as_number()
    }
}

impl<T: AsNumber> AsNumber for Option<T> {
    fn as_number(&self) -> Number {
        self.as_ref().map_or(Number::ZERO, AsNumber::as_number)
    }
}
