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

//! The continuous view transform: zoom scale and pan offset.
//!
//! The scene is laid out in an untransformed "canvas frame" (what you would see at scale
//! 1.0 with no pan). [ViewState] maps canvas-frame points into device pixels by scaling
//! about the canvas origin and then translating by the pan offset, and provides the exact
//! inverse for pointer hit-testing. Keeping the transform this simple means a pointer
//! position round-trips through it without accumulating error.

use crate::visualization::{polar::PolarCoordinate, types::shapes::RadarPoint, RadarGeometry};

pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 3.0;

/// Scale step applied by the zoom buttons.
pub const ZOOM_BUTTON_STEP: f32 = 0.1;

/// Multiplicative factors applied per wheel notch.
pub const WHEEL_ZOOM_IN_FACTOR: f32 = 1.05;
pub const WHEEL_ZOOM_OUT_FACTOR: f32 = 0.95;

/// The pan/zoom state of the radar surface. Owned exclusively by the interaction
/// controller; everything else reads it.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewState {
    pub scale: f32,
    pub offset: RadarPoint<f32>,
}

impl Default for ViewState {
    fn default() -> ViewState {
        ViewState {
            scale: 1.0,
            offset: RadarPoint::default(),
        }
    }
}

impl ViewState {
    /// Additive zoom step. The clamp is applied after every delta, never before, so
    /// repeated small steps cannot overshoot the `[MIN_ZOOM, MAX_ZOOM]` range.
    pub fn zoom_by(&mut self, delta: f32) {
        self.scale = (self.scale + delta).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Wheel zoom about the pointer: the canvas-frame point under the pointer keeps its
    /// device pixel position across the scale change. Positive `delta_y` (scroll up)
    /// zooms in.
    pub fn wheel_zoom(&mut self, delta_y: f32, pointer: RadarPoint<f32>) {
        if delta_y == 0.0 {
            return;
        }
        let factor = if delta_y > 0.0 {
            WHEEL_ZOOM_IN_FACTOR
        }
        else {
            WHEEL_ZOOM_OUT_FACTOR
        };
        let new_scale = (self.scale * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        let anchor = self.to_canvas(pointer);
        self.scale = new_scale;
        self.offset = RadarPoint::new(pointer.x - anchor.x * new_scale, pointer.y - anchor.y * new_scale);
    }

    /// Rigid translation of the whole scene by a device-pixel delta.
    pub fn pan_by(&mut self, delta: RadarPoint<f32>) {
        self.offset = self.offset + delta;
    }

    /// Unconditional return to `scale = 1`, `offset = (0, 0)`.
    pub fn reset(&mut self) {
        *self = ViewState::default();
    }

    /// Canvas frame -> device pixels.
    pub fn to_device(&self, canvas: RadarPoint<f32>) -> RadarPoint<f32> {
        canvas.scale(self.scale) + self.offset
    }

    /// Device pixels -> canvas frame. Exact inverse of [ViewState::to_device].
    pub fn to_canvas(&self, device: RadarPoint<f32>) -> RadarPoint<f32> {
        (device - self.offset).scale(1.0 / self.scale)
    }
}

/// Plot a polar coordinate into the untransformed canvas frame.
pub fn polar_to_canvas(polar: &PolarCoordinate, geometry: &RadarGeometry) -> RadarPoint<f32> {
    let radians = polar.angle_deg.to_radians();
    let r = polar.radius * geometry.base_max_radius;
    RadarPoint::new(
        geometry.center.x + r * radians.cos(),
        geometry.center.y + r * radians.sin(),
    )
}
