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

//! The static ring table: five concentric time bands, monotonically increasing in both
//! radius and hour range. The table is a process-wide constant; the time-banding function
//! in [crate::visualization::polar] interpolates within it.

/// One concentric time band of the radar.
#[derive(Copy, Clone, Debug)]
pub struct RingBand {
    pub index: usize,
    /// Normalized outer radius of the band, in `(0, 1]`.
    pub outer_radius: f32,
    /// Start of the band's hour range (inclusive).
    pub hours_start: f32,
    /// End of the band's hour range (exclusive). The outermost band treats this as the
    /// point at which the saturation curve reaches the rim, not as a cutoff.
    pub hours_end: f32,
    pub label: &'static str,
}

pub const RING_COUNT: usize = 5;

pub const RINGS: [RingBand; RING_COUNT] = [
    RingBand { index: 0, outer_radius: 0.2, hours_start: 0.0, hours_end: 8.0, label: "0-8h" },
    RingBand { index: 1, outer_radius: 0.4, hours_start: 8.0, hours_end: 16.0, label: "8-16h" },
    RingBand { index: 2, outer_radius: 0.6, hours_start: 16.0, hours_end: 24.0, label: "16-24h" },
    RingBand { index: 3, outer_radius: 0.8, hours_start: 24.0, hours_end: 48.0, label: "Tomorrow" },
    RingBand { index: 4, outer_radius: 1.0, hours_start: 48.0, hours_end: 168.0, label: "Week" },
];

impl RingBand {
    /// Normalized inner radius of the band (the previous band's outer radius).
    pub fn inner_radius(&self) -> f32 {
        if self.index == 0 {
            0.0
        }
        else {
            RINGS[self.index - 1].outer_radius
        }
    }

    /// The outermost band covers `[48h, ∞)` and is rendered dashed at reduced opacity to
    /// mark it as open-ended.
    pub fn is_open_ended(&self) -> bool {
        self.index == RING_COUNT - 1
    }

    pub fn contains_hours(&self, hours: f32) -> bool {
        hours >= self.hours_start && (hours < self.hours_end || self.is_open_ended())
    }
}

/// Look up the band whose hour range contains `hours`. Returns `None` for offsets at or
/// before "now" - those collapse to the radar center and belong to no band.
pub fn band_for_hours(hours: f32) -> Option<&'static RingBand> {
    if hours <= 0.0 {
        return None;
    }
    RINGS.iter().find(|band| band.contains_hours(hours))
}
