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

//! # ChronoFox Visualization
//! The `visualization` module maps items onto the unit circle and produces display lists.
//!
//! The general principle is that the radar is laid out on the unit circle: an item's
//! category selects the angle (the midpoint of its sector wedge), and the hour offset of
//! its start time from "now" selects a normalized radius through the nonlinear
//! time-banding function in [polar]. A [view::ViewState] (zoom scale plus pan offset)
//! then carries normalized coordinates into device pixels.
//!
//! Angle 0° sits at the 3 o'clock position and angles increase clockwise in screen space
//! (the y axis points down), matching the usual canvas convention.
//!
//! ## Frames
//!
//! [frame::build_frame] is a pure function of `(items, now, view, animation phase,
//! selection, geometry)` and emits a [types::display_list::RadarFrame]: background rings,
//! sector spokes and glyphs, the decorative sweep line, and one blip sprite per visible
//! item, in back-to-front paint order. Because "now" advances continuously, frames must be
//! rebuilt every tick and never cached against item identity alone.
//!
//! Rendering backends consume frames however they like; the `chronofox_egui` crate paints
//! them with an egui `Painter`. Hit-testing does not depend on any backend picking
//! machinery: [types::display_list::RadarFrame::hit_test] inverts the view transform and
//! compares squared distances against each blip's rendered radius.

pub mod frame;
pub mod polar;
pub mod prelude;
pub mod types;
pub mod view;

use crate::visualization::types::shapes::RadarPoint;

/// Fraction of the half-extent of the canvas used for the rim (normalized radius 1.0) at
/// zoom scale 1.0. Leaves a margin for sector labels around the plot.
pub const BASE_RADIUS_RATIO: f32 = 0.85;

/// Canvas geometry the radar is plotted into: the center point and the pixel length of
/// normalized radius 1.0 before zoom is applied.
#[derive(Copy, Clone, Debug)]
pub struct RadarGeometry {
    pub center: RadarPoint<f32>,
    pub base_max_radius: f32,
}

impl RadarGeometry {
    pub fn new(center: RadarPoint<f32>, base_max_radius: f32) -> RadarGeometry {
        RadarGeometry { center, base_max_radius }
    }

    /// Geometry for a canvas of the given pixel dimensions: centered, with the rim at
    /// [BASE_RADIUS_RATIO] of the smaller half-extent.
    pub fn from_canvas(width: f32, height: f32) -> RadarGeometry {
        let center = RadarPoint::new(width / 2.0, height / 2.0);
        RadarGeometry {
            center,
            base_max_radius: center.x.min(center.y) * BASE_RADIUS_RATIO,
        }
    }
}
