use serde::Serialize;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

/// Arithmetic coordinate types a `Point` can be built from.
pub trait Coord:
    Copy
    + Default
    + PartialEq
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + AddAssign
{
    fn to_f64(self) -> f64;

    /// `None` when the result does not fit in `Self`.
    fn checked_add(self, rhs: Self) -> Option<Self>;
    fn checked_sub(self, rhs: Self) -> Option<Self>;
    fn checked_mul(self, rhs: Self) -> Option<Self>;
}

/// Macro to implement `Coord` for primitive numeric types.
macro_rules! impl_coord {
    (int: $($ty:ty),*) => {
        $(
            impl Coord for $ty {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }
                #[inline]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_sub(self, rhs)
                }
                #[inline]
                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_mul(self, rhs)
                }
            }
        )*
    };
    // floats saturate to infinity instead of overflowing
    (float: $($ty:ty),*) => {
        $(
            impl Coord for $ty {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }
                #[inline]
                fn checked_add(self, rhs: Self) -> Option<Self> {
                    Some(self + rhs)
                }
                #[inline]
                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    Some(self - rhs)
                }
                #[inline]
                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    Some(self * rhs)
                }
            }
        )*
    };
}

impl_coord!(int: i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_coord!(float: f32, f64);

/// A point in the plane, generic over its coordinate type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point<T: Coord> {
    pub x: T,
    pub y: T,
}

impl<T: Coord> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Translate the point in place.
    pub fn move_by(&mut self, dx: T, dy: T) {
        self.x += dx;
        self.y += dy;
    }

    /// Translated copy, or `None` if a coordinate overflows.
    pub fn checked_moved(self, dx: T, dy: T) -> Option<Self> {
        Some(Point::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.checked_moved(rhs.x, rhs.y)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        Some(Point::new(self.x.checked_sub(rhs.x)?, self.y.checked_sub(rhs.y)?))
    }

    pub fn checked_mul(self, rhs: T) -> Option<Self> {
        Some(Point::new(self.x.checked_mul(rhs)?, self.y.checked_mul(rhs)?))
    }

    /// Euclidean distance, computed in `f64` so integer coordinates cannot
    /// overflow on subtraction.
    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x.to_f64() - other.x.to_f64();
        let dy = self.y.to_f64() - other.y.to_f64();
        dx.hypot(dy)
    }

    /// Scale by a floating-point factor, promoting the coordinates to `f64`.
    pub fn scale(self, factor: f64) -> Point<f64> {
        Point::new(self.x.to_f64() * factor, self.y.to_f64() * factor)
    }
}

impl<T: Coord> Add for Point<T> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Coord> Sub for Point<T> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Coord> Mul<T> for Point<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: Coord> fmt::Display for Point<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
