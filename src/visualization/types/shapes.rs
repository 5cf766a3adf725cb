/*
    ChronoFox
    https://github.com/dbalsom/chronofox

    Copyright 2025 Daniel Balsom

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.

    --------------------------------------------------------------------------
*/

//! Geometric primitives used by the display list. These are deliberately backend-neutral;
//! rendering crates convert them to their own point types at the paint boundary.

use std::{
    fmt::{self, Display, Formatter},
    ops::{Add, Sub},
};

use bitflags::bitflags;
use num_traits::Num;

bitflags! {
    /// Display flags attached to a blip sprite.
    #[derive (Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct BlipFlags: u32 {
        const NONE = 0b0000_0000;
        /// The item is a fixed calendar event (rendered filled rather than outlined).
        const FIXED = 0b0000_0001;
        /// The pointer is currently over this blip.
        const HOVERED = 0b0000_0010;
        /// This blip is the current selection.
        const SELECTED = 0b0000_0100;
        /// A task with no future slot, pinned to the unscheduled perimeter.
        const UNSCHEDULED = 0b0000_1000;
        /// A fixed event whose slot has already passed (collapsed to the center).
        const OVERDUE = 0b0001_0000;
    }
}

/// A point in 2D space, generic across numeric types via `num_traits`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadarPoint<T> {
    pub x: T,
    pub y: T,
}

impl<T: Num + Copy + Default + Display> Display for RadarPoint<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T: Num + Copy + Default> Default for RadarPoint<T> {
    fn default() -> Self {
        RadarPoint {
            x: T::default(),
            y: T::default(),
        }
    }
}

impl<T: Num + Copy + Default> From<(T, T)> for RadarPoint<T> {
    fn from(tuple: (T, T)) -> Self {
        RadarPoint { x: tuple.0, y: tuple.1 }
    }
}

impl<T: Num + Copy + Default> RadarPoint<T> {
    pub fn new(x: T, y: T) -> Self {
        RadarPoint { x, y }
    }

    pub fn to_tuple(&self) -> (T, T) {
        (self.x, self.y)
    }

    pub fn scale(&self, factor: T) -> RadarPoint<T> {
        RadarPoint {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

impl<T: Num + Copy + Default> Add for RadarPoint<T> {
    type Output = RadarPoint<T>;
    fn add(self, rhs: RadarPoint<T>) -> RadarPoint<T> {
        RadarPoint {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<T: Num + Copy + Default> Sub for RadarPoint<T> {
    type Output = RadarPoint<T>;
    fn sub(self, rhs: RadarPoint<T>) -> RadarPoint<T> {
        RadarPoint {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl RadarPoint<f32> {
    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &RadarPoint<f32>) -> f32 {
        self.distance_sq(other).sqrt()
    }

    /// Squared distance - preferred for hit-testing comparisons.
    pub fn distance_sq(&self, other: &RadarPoint<f32>) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }
}

/// A circle in 2D space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RadarCircle {
    pub center: RadarPoint<f32>,
    pub radius: f32,
}

impl RadarCircle {
    pub fn new(center: RadarPoint<f32>, radius: f32) -> RadarCircle {
        RadarCircle { center, radius }
    }

    pub fn contains(&self, point: &RadarPoint<f32>) -> bool {
        self.center.distance_sq(point) <= self.radius * self.radius
    }
}

/// A line segment in 2D space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RadarLine<T: Num + Copy + Default> {
    pub start: RadarPoint<T>,
    pub end:   RadarPoint<T>,
}

impl<T: Num + Copy + Default> RadarLine<T>
where
    f64: From<T>,
{
    pub fn new(start: RadarPoint<T>, end: RadarPoint<T>) -> RadarLine<T> {
        RadarLine { start, end }
    }

    pub fn length(&self) -> f64 {
        let dx = f64::from(self.end.x - self.start.x);
        let dy = f64::from(self.end.y - self.start.y);
        (dx * dx + dy * dy).sqrt()
    }
}

impl<T: Num + Copy + Default> From<(T, T, T, T)> for RadarLine<T>
where
    f64: From<T>,
{
    fn from(tuple: (T, T, T, T)) -> Self {
        RadarLine {
            start: RadarPoint::from((tuple.0, tuple.1)),
            end:   RadarPoint::from((tuple.2, tuple.3)),
        }
    }
}
