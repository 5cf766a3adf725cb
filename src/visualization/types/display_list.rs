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

//! A [RadarFrame] is the display list produced once per animation tick: every element the
//! rendering surface needs to paint, in back-to-front order. Frames also answer pointer
//! hit-tests, so hosts don't need any native picking machinery.

use crate::{
    item::{Category, ItemId, Priority},
    visualization::{
        polar::PolarCoordinate,
        types::shapes::{BlipFlags, RadarCircle, RadarLine, RadarPoint},
        view::ViewState,
    },
};

/// Fill/outline treatment of a blip.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BlipStyle {
    /// Fixed calendar events render as solid discs.
    Filled,
    /// Tasks render as outlined circles with a priority doodle inside.
    Outlined {
        stroke_width: f32,
        glyph: char,
        glyph_size: f32,
    },
}

/// Everything the renderer needs to paint one blip, plus everything the interaction layer
/// needs to hit-test it.
#[derive(Clone, Debug)]
pub struct BlipSprite {
    pub id: ItemId,
    pub title: String,
    pub category: Category,
    pub priority: Priority,
    /// Polar position this sprite was derived from.
    pub polar: PolarCoordinate,
    /// Signed hour offset from "now" at build time, for tooltips and countdowns.
    pub hours_from_now: f32,
    /// Position in the untransformed canvas frame - the hit-test space.
    pub canvas_pos: RadarPoint<f32>,
    /// Rendered radius in the canvas frame, including pulse or hover scaling. The hit
    /// radius equals this, so hit area grows with priority size and hover growth.
    pub canvas_radius: f32,
    /// Position in device pixels, after the view transform.
    pub pos: RadarPoint<f32>,
    /// Rendered radius in device pixels.
    pub radius: f32,
    pub style: BlipStyle,
    /// Device-pixel radius of the secondary inner marker (fixed critical items only).
    pub inner_marker: Option<f32>,
    pub flags: BlipFlags,
}

impl BlipSprite {
    /// Hit-test a device-pixel pointer position against this blip. The pointer is
    /// inverted into the canvas frame and compared against the rendered radius.
    pub fn hit_by(&self, view: &ViewState, pointer: RadarPoint<f32>) -> bool {
        let canvas = view.to_canvas(pointer);
        self.canvas_pos.distance_sq(&canvas) <= self.canvas_radius * self.canvas_radius
    }
}

/// One paintable element of a frame. Variants appear in the list in back-to-front order:
/// center dot, rings, spokes and glyphs, sweep line, then blips.
#[derive(Clone, Debug)]
pub enum FrameElement {
    CenterDot {
        circle: RadarCircle,
        opacity: f32,
    },
    Ring {
        circle: RadarCircle,
        band: usize,
        /// The open-ended outermost band renders dashed.
        dashed: bool,
        opacity: f32,
    },
    Spoke {
        line: RadarLine<f32>,
    },
    SectorGlyph {
        pos: RadarPoint<f32>,
        category: Category,
        glyph: char,
        label: &'static str,
    },
    Sweep {
        line: RadarLine<f32>,
        opacity: f32,
    },
    Blip(BlipSprite),
}

/// The display list for one tick. Pure output of
/// [build_frame](crate::visualization::frame::build_frame); consumed by the rendering
/// surface and by pointer hit-testing.
#[derive(Clone, Debug, Default)]
pub struct RadarFrame {
    pub elements: Vec<FrameElement>,
}

impl RadarFrame {
    pub fn new() -> RadarFrame {
        RadarFrame { elements: Vec::new() }
    }

    pub fn push(&mut self, element: FrameElement) {
        self.elements.push(element);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FrameElement> {
        self.elements.iter()
    }

    /// Iterate the blip sprites in draw order.
    pub fn blips(&self) -> impl Iterator<Item = &BlipSprite> {
        self.elements.iter().filter_map(|e| match e {
            FrameElement::Blip(sprite) => Some(sprite),
            _ => None,
        })
    }

    /// Find the sprite for a given item id, if the item made it into this frame.
    pub fn blip_for(&self, id: &ItemId) -> Option<&BlipSprite> {
        self.blips().find(|sprite| sprite.id == *id)
    }

    /// Hit-test a device-pixel pointer position against the frame's blips. Blips are
    /// tested in reverse draw order so the topmost of an overlapping stack wins.
    pub fn hit_test(&self, view: &ViewState, pointer: RadarPoint<f32>) -> Option<&BlipSprite> {
        self.elements
            .iter()
            .rev()
            .filter_map(|e| match e {
                FrameElement::Blip(sprite) => Some(sprite),
                _ => None,
            })
            .find(|sprite| sprite.hit_by(view, pointer))
    }
}

impl<'a> IntoIterator for &'a RadarFrame {
    type Item = &'a FrameElement;
    type IntoIter = std::slice::Iter<'a, FrameElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
