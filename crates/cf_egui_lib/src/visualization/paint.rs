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

//! Painting of [RadarFrame] display lists with an egui `Painter`. Frame coordinates are
//! local to the widget rect; `origin` carries them into screen space.

use std::collections::HashMap;

use chronofox::{
    item::Category,
    visualization::prelude::{BlipFlags, BlipSprite, BlipStyle, FrameElement, RadarFrame, RadarPoint},
};
use egui::{Align2, Color32, FontId, Painter, Pos2, Shape, Stroke, Vec2};

use crate::visualization::palette::category_color;

const RING_SEGMENTS: usize = 128;
const RING_DASH_LENGTH: f32 = 4.0;
const RING_GAP_LENGTH: f32 = 4.0;
const SWEEP_DASH_LENGTH: f32 = 2.0;
const SWEEP_GAP_LENGTH: f32 = 4.0;
const GLYPH_FONT_SIZE: f32 = 16.0;
const LABEL_FONT_SIZE: f32 = 11.0;

/// Width of the highlight ring drawn around the selected blip.
const SELECTION_RING_GAP: f32 = 3.0;

#[inline]
fn to_pos2(pt: &RadarPoint<f32>, origin: Vec2) -> Pos2 {
    Pos2::new(pt.x, pt.y) + origin
}

/// Paint a complete frame. Elements are painted in list order, which the frame builder
/// guarantees is back-to-front.
pub fn paint_frame(
    painter: &Painter,
    origin: Vec2,
    frame: &RadarFrame,
    palette: &HashMap<Category, Color32>,
    visuals: &egui::Visuals,
) {
    let line_color = visuals.text_color().gamma_multiply(0.2);
    let text_color = visuals.text_color();

    for element in frame.iter() {
        match element {
            FrameElement::CenterDot { circle, opacity } => {
                painter.circle_filled(
                    to_pos2(&circle.center, origin),
                    circle.radius,
                    text_color.gamma_multiply(*opacity),
                );
            }
            FrameElement::Ring { circle, dashed, opacity, .. } => {
                let stroke = Stroke::new(1.0, line_color.gamma_multiply(*opacity));
                if *dashed {
                    paint_dashed_circle(painter, to_pos2(&circle.center, origin), circle.radius, stroke);
                }
                else {
                    painter.circle_stroke(to_pos2(&circle.center, origin), circle.radius, stroke);
                }
            }
            FrameElement::Spoke { line } => {
                painter.line_segment(
                    [to_pos2(&line.start, origin), to_pos2(&line.end, origin)],
                    Stroke::new(1.0, line_color),
                );
            }
            FrameElement::SectorGlyph { pos, category, glyph, label } => {
                let color = category_color(palette, *category, text_color);
                let anchor = to_pos2(pos, origin);
                painter.text(
                    anchor,
                    Align2::CENTER_BOTTOM,
                    glyph,
                    FontId::proportional(GLYPH_FONT_SIZE),
                    color.gamma_multiply(0.6),
                );
                painter.text(
                    anchor + Vec2::new(0.0, 4.0),
                    Align2::CENTER_TOP,
                    label,
                    FontId::proportional(LABEL_FONT_SIZE),
                    text_color.gamma_multiply(0.5),
                );
            }
            FrameElement::Sweep { line, opacity } => {
                let stroke = Stroke::new(1.0, text_color.gamma_multiply(*opacity));
                painter.extend(Shape::dashed_line(
                    &[to_pos2(&line.start, origin), to_pos2(&line.end, origin)],
                    stroke,
                    SWEEP_DASH_LENGTH,
                    SWEEP_GAP_LENGTH,
                ));
            }
            FrameElement::Blip(sprite) => {
                paint_blip(painter, origin, sprite, palette, visuals);
            }
        }
    }
}

fn paint_blip(
    painter: &Painter,
    origin: Vec2,
    sprite: &BlipSprite,
    palette: &HashMap<Category, Color32>,
    visuals: &egui::Visuals,
) {
    let center = to_pos2(&sprite.pos, origin);
    let base_color = category_color(palette, sprite.category, visuals.text_color());
    let opacity = if sprite.flags.contains(BlipFlags::HOVERED) { 1.0 } else { 0.8 };
    let color = base_color.gamma_multiply(opacity);

    match sprite.style {
        BlipStyle::Filled => {
            painter.circle_filled(center, sprite.radius, color);
        }
        BlipStyle::Outlined { stroke_width, glyph, glyph_size } => {
            painter.circle_stroke(center, sprite.radius, Stroke::new(stroke_width, color));
            painter.text(
                center,
                Align2::CENTER_CENTER,
                glyph,
                FontId::proportional(glyph_size),
                base_color.gamma_multiply(0.7),
            );
        }
    }

    if let Some(marker_radius) = sprite.inner_marker {
        painter.circle_filled(center, marker_radius, visuals.text_color().gamma_multiply(0.5));
    }

    if sprite.flags.contains(BlipFlags::SELECTED) {
        painter.circle_stroke(
            center,
            sprite.radius + SELECTION_RING_GAP,
            Stroke::new(1.5, base_color.gamma_multiply(0.9)),
        );
    }
}

/// egui has no dashed circle stroke, so sample the circle into a closed polyline and dash
/// that instead.
fn paint_dashed_circle(painter: &Painter, center: Pos2, radius: f32, stroke: Stroke) {
    let mut points = Vec::with_capacity(RING_SEGMENTS + 1);
    for i in 0..=RING_SEGMENTS {
        let theta = i as f32 / RING_SEGMENTS as f32 * std::f32::consts::TAU;
        points.push(Pos2::new(
            center.x + radius * theta.cos(),
            center.y + radius * theta.sin(),
        ));
    }
    painter.extend(Shape::dashed_line(&points, stroke, RING_DASH_LENGTH, RING_GAP_LENGTH));
}
