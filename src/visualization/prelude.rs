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

//! Common imports for consumers of the visualization module.

pub use crate::visualization::{
    frame::{build_frame, FrameParams},
    polar::{radius_for_hours, to_polar, PolarCoordinate, UNSCHEDULED_PERIMETER_RADIUS},
    types::{
        display_list::{BlipSprite, BlipStyle, FrameElement, RadarFrame},
        shapes::{BlipFlags, RadarCircle, RadarLine, RadarPoint},
    },
    view::{polar_to_canvas, ViewState, MAX_ZOOM, MIN_ZOOM, ZOOM_BUTTON_STEP},
    RadarGeometry,
    BASE_RADIUS_RATIO,
};
