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

//! Zoom button cluster: in, out, reset, and a percentage readout of the current scale.

use egui::{Response, Ui};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ZoomAction {
    In,
    Out,
    Reset,
}

#[derive(Default)]
pub struct ZoomControls {
    scale: f32,
}

impl ZoomControls {
    pub fn new(scale: f32) -> ZoomControls {
        ZoomControls { scale }
    }

    pub fn show(&self, ui: &mut Ui) -> Option<ZoomAction> {
        let mut action = None;
        ui.horizontal(|ui| {
            if zoom_button(ui, "+", "Zoom In").clicked() {
                action = Some(ZoomAction::In);
            }
            if zoom_button(ui, "−", "Zoom Out").clicked() {
                action = Some(ZoomAction::Out);
            }
            if zoom_button(ui, "↻", "Reset View").clicked() {
                action = Some(ZoomAction::Reset);
            }
            ui.label(format!("{}%", (self.scale * 100.0).round() as i32));
        });
        action
    }
}

fn zoom_button(ui: &mut Ui, glyph: &str, hover_text: &str) -> Response {
    ui.button(glyph).on_hover_text(hover_text)
}
