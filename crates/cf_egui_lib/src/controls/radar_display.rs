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

//! The radar display control.
//!
//! Owns the interaction controller and the animation scheduler, and runs the per-frame
//! loop: tick the animation, reconcile selection against the current items, hit-test the
//! pointer, feed input into the controller, build the frame with the updated state, paint
//! it, and hand the controller's notifications back to the host. Everything runs
//! synchronously inside `show()`; dropping the control tears the loop down with it.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use chronofox::{
    animation::{AnimationPhase, AnimationScheduler},
    interaction::{InteractionController, RadarNotification},
    item::{Category, ItemId, RadarItem},
    visualization::{
        frame::{build_frame, FrameParams},
        prelude::{RadarFrame, RadarPoint},
        view::ZOOM_BUTTON_STEP,
        RadarGeometry,
    },
};
use egui::{Color32, Sense, Vec2};

use crate::{
    countdown_string,
    visualization::{paint::paint_frame, palette::default_palette},
};

/// Minimum square side of the radar canvas in points.
const MIN_CANVAS_SIDE: f32 = 400.0;

pub struct RadarDisplay {
    controller: InteractionController,
    scheduler: AnimationScheduler,
    palette: HashMap<Category, Color32>,
}

impl Default for RadarDisplay {
    fn default() -> Self {
        RadarDisplay::new()
    }
}

impl RadarDisplay {
    pub fn new() -> RadarDisplay {
        log::debug!("Creating radar display state...");
        RadarDisplay {
            controller: InteractionController::new(),
            scheduler: AnimationScheduler::new(),
            palette: default_palette(),
        }
    }

    pub fn with_palette(mut self, palette: HashMap<Category, Color32>) -> RadarDisplay {
        self.palette = palette;
        self
    }

    pub fn controller(&self) -> &InteractionController {
        &self.controller
    }

    pub fn scale(&self) -> f32 {
        self.controller.view().scale
    }

    pub fn zoom_in(&mut self) {
        self.controller.zoom_step(ZOOM_BUTTON_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.controller.zoom_step(-ZOOM_BUTTON_STEP);
    }

    pub fn reset_view(&mut self) {
        self.controller.reset_view();
    }

    pub fn deselect(&mut self) {
        self.controller.deselect();
    }

    /// Forward a completion request for the given item to the host's store.
    pub fn request_complete(&mut self, id: &ItemId) {
        self.controller.request_complete(id);
    }

    /// Forward a deletion request for the given item to the host's store.
    pub fn request_delete(&mut self, id: &ItemId) {
        self.controller.request_delete(id);
    }

    /// Run one frame of the radar. Returns the notifications queued by this frame's input
    /// for the host to dispatch.
    pub fn show(&mut self, ui: &mut egui::Ui, items: &[RadarItem], now: DateTime<Utc>) -> Vec<RadarNotification> {
        let side = ui.available_width().min(ui.available_height()).max(MIN_CANVAS_SIDE);
        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click_and_drag());
        let rect = response.rect;
        let origin = rect.min.to_vec2();

        // Items may have been added or removed since the last tick.
        self.controller.sync_items(items);

        let phase = self.scheduler.tick();
        let geometry = RadarGeometry::from_canvas(rect.width(), rect.height());

        // Lay out the frame with the pre-input state; pointer events hit-test against the
        // positions the user is actually seeing.
        let frame = self.build(items, now, phase, geometry);
        self.handle_input(ui, &response, &frame, origin);

        // Rebuild with the post-input view and selection, then paint.
        let frame = self.build(items, now, self.scheduler.phase(), geometry);
        paint_frame(&painter, origin, &frame, &self.palette, ui.visuals());
        self.show_hover_tooltip(ui, &response, &frame);

        // The sweep and pulse never rest; keep frames coming.
        ui.ctx().request_repaint();

        self.controller.take_notifications()
    }

    fn handle_input(&mut self, ui: &egui::Ui, response: &egui::Response, frame: &RadarFrame, origin: Vec2) {
        let pointer_local = response
            .hover_pos()
            .map(|p| RadarPoint::new(p.x - origin.x, p.y - origin.y));

        if let Some(pointer) = pointer_local {
            let hit = frame.hit_test(self.controller.view(), pointer).map(|b| b.id.clone());
            let prev = self.controller.selection().hovered.clone();
            match (&hit, &prev) {
                (Some(id), Some(p)) if id != p => {
                    self.controller.pointer_leave(p);
                    self.controller.pointer_enter(id);
                }
                (Some(id), None) => self.controller.pointer_enter(id),
                (None, Some(p)) => self.controller.pointer_leave(p),
                _ => {}
            }

            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                self.controller.wheel(scroll, pointer);
            }

            if response.clicked() {
                if let Some(id) = &hit {
                    self.controller.click(id);
                }
            }
        }
        else if let Some(prev) = self.controller.selection().hovered.clone() {
            // Pointer left the control entirely.
            self.controller.pointer_leave(&prev);
        }

        if response.drag_started() {
            self.controller.drag_start();
        }
        if response.dragged() {
            let delta = response.drag_delta();
            self.controller.drag_moved(RadarPoint::new(delta.x, delta.y));
        }
        if response.drag_stopped() {
            self.controller.drag_end();
        }
    }

    fn show_hover_tooltip(&self, ui: &egui::Ui, response: &egui::Response, frame: &RadarFrame) {
        if let Some(hovered) = &self.controller.selection().hovered {
            if let Some(sprite) = frame.blip_for(hovered) {
                egui::popup::show_tooltip(
                    ui.ctx(),
                    ui.layer_id(),
                    response.id.with("radar_hover_tooltip"),
                    |ui| {
                        ui.horizontal(|ui| {
                            ui.strong(&sprite.title);
                            ui.label(countdown_string(sprite.hours_from_now));
                        });
                    },
                );
            }
        }
    }

    fn build(
        &self,
        items: &[RadarItem],
        now: DateTime<Utc>,
        phase: AnimationPhase,
        geometry: RadarGeometry,
    ) -> RadarFrame {
        build_frame(&FrameParams {
            items,
            now,
            view: *self.controller.view(),
            phase,
            selection: self.controller.selection(),
            geometry,
        })
    }
}
