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

//! egui widgets for ChronoFox. The main entry point is
//! [controls::radar_display::RadarDisplay], which paints radar frames, adapts egui pointer
//! input into the interaction controller, and hands the controller's notifications back to
//! the host each frame. The `widgets` module holds the small supporting widgets (zoom
//! controls, item info pane).

#[cfg(feature = "egui")]
pub mod controls;
#[cfg(feature = "egui")]
pub mod visualization;
#[cfg(feature = "egui")]
pub mod widgets;

#[cfg(feature = "egui")]
pub use crate::controls::radar_display::RadarDisplay;

/// Humanize a signed hour offset as a countdown string: "in 2h 15m", "45m ago", "now".
/// Offsets under a minute in either direction read as "now".
pub fn countdown_string(hours_from_now: f32) -> String {
    let total_minutes = (hours_from_now * 60.0).round() as i64;
    if total_minutes == 0 {
        return "now".to_string();
    }
    let (magnitude, past) = if total_minutes < 0 {
        (-total_minutes, true)
    }
    else {
        (total_minutes, false)
    };

    let days = magnitude / (24 * 60);
    let hours = (magnitude % (24 * 60)) / 60;
    let minutes = magnitude % 60;

    let body = if days > 0 {
        format!("{}d {}h", days, hours)
    }
    else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    }
    else {
        format!("{}m", minutes)
    };

    if past {
        format!("{} ago", body)
    }
    else {
        format!("in {}", body)
    }
}
