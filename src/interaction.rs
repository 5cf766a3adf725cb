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

//! The interaction controller: sole owner of the pan/zoom [ViewState] and of hover and
//! selection state.
//!
//! The controller is a plain state machine with no GUI dependencies. The host adapts its
//! pointer events (already hit-tested against the current frame) into calls on the
//! controller, and each frame drains the queued [RadarNotification]s. Notifications are
//! fire-and-forget: the controller never mutates items and never waits on the host.

use crate::{
    item::{ItemId, RadarItem},
    visualization::{types::shapes::RadarPoint, view::ViewState},
};

/// Hover and selection state. At most one of each at a time; cleared explicitly or
/// implicitly when the referenced item disappears from the collection.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InteractionSelection {
    pub hovered: Option<ItemId>,
    pub selected: Option<ItemId>,
}

/// Outbound, fire-and-forget notifications raised by the controller for the host and the
/// external item store to act on.
#[derive(Clone, Debug, PartialEq)]
pub enum RadarNotification {
    HoverChange(Option<ItemId>),
    Select(Option<ItemId>),
    RequestComplete(ItemId),
    RequestDelete(ItemId),
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
enum DragState {
    #[default]
    Idle,
    Dragging,
}

/// Owns view, hover, and selection state and translates pointer input into state changes
/// and notifications.
#[derive(Clone, Debug, Default)]
pub struct InteractionController {
    view: ViewState,
    selection: InteractionSelection,
    drag: DragState,
    notifications: Vec<RadarNotification>,
}

impl InteractionController {
    pub fn new() -> InteractionController {
        InteractionController::default()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn selection(&self) -> &InteractionSelection {
        &self.selection
    }

    pub fn is_dragging(&self) -> bool {
        self.drag == DragState::Dragging
    }

    /// Pointer moved onto a blip.
    pub fn pointer_enter(&mut self, id: &ItemId) {
        if self.selection.hovered.as_ref() != Some(id) {
            self.selection.hovered = Some(id.clone());
            self.notifications.push(RadarNotification::HoverChange(Some(id.clone())));
        }
    }

    /// Pointer left a blip. Clears hover only if it still refers to `id`, so a late leave
    /// event from one of two overlapping blips cannot clobber the newer hover.
    pub fn pointer_leave(&mut self, id: &ItemId) {
        if self.selection.hovered.as_ref() == Some(id) {
            self.selection.hovered = None;
            self.notifications.push(RadarNotification::HoverChange(None));
        }
    }

    /// Click or tap on a blip: replaces any prior selection. Clicks on empty canvas are
    /// the presentation layer's business and never reach the controller.
    pub fn click(&mut self, id: &ItemId) {
        if self.selection.selected.as_ref() != Some(id) {
            self.selection.selected = Some(id.clone());
            self.notifications.push(RadarNotification::Select(Some(id.clone())));
        }
    }

    /// Explicit deselection (e.g. the host closed its detail panel).
    pub fn deselect(&mut self) {
        if self.selection.selected.take().is_some() {
            self.notifications.push(RadarNotification::Select(None));
        }
    }

    /// Forward a completion request for a task to the item store.
    pub fn request_complete(&mut self, id: &ItemId) {
        self.notifications.push(RadarNotification::RequestComplete(id.clone()));
    }

    /// Forward a deletion request to the item store.
    pub fn request_delete(&mut self, id: &ItemId) {
        self.notifications.push(RadarNotification::RequestDelete(id.clone()));
    }

    /// Wheel zoom about the pointer position (device pixels).
    pub fn wheel(&mut self, delta_y: f32, pointer: RadarPoint<f32>) {
        self.view.wheel_zoom(delta_y, pointer);
    }

    /// Additive zoom step (zoom buttons).
    pub fn zoom_step(&mut self, delta: f32) {
        self.view.zoom_by(delta);
    }

    pub fn drag_start(&mut self) {
        self.drag = DragState::Dragging;
    }

    /// Pan by a pointer delta. Ignored unless a drag is in progress.
    pub fn drag_moved(&mut self, delta: RadarPoint<f32>) {
        if self.drag == DragState::Dragging {
            self.view.pan_by(delta);
        }
    }

    /// End the drag, committing the final offset.
    pub fn drag_end(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Reset the view transform unconditionally.
    pub fn reset_view(&mut self) {
        self.view.reset();
    }

    /// Reconcile hover/selection against the current item collection. Items can be
    /// deleted externally at any tick boundary; a dangling id is treated as an implicit
    /// clear rather than an error.
    pub fn sync_items(&mut self, items: &[RadarItem]) {
        if let Some(hovered) = &self.selection.hovered {
            if !items.iter().any(|item| item.id == *hovered) {
                log::debug!("Hovered item '{}' disappeared, clearing hover", hovered);
                self.selection.hovered = None;
                self.notifications.push(RadarNotification::HoverChange(None));
            }
        }
        if let Some(selected) = &self.selection.selected {
            if !items.iter().any(|item| item.id == *selected) {
                log::debug!("Selected item '{}' disappeared, clearing selection", selected);
                self.selection.selected = None;
                self.notifications.push(RadarNotification::Select(None));
            }
        }
    }

    /// Drain the notifications queued since the last call. The host should call this once
    /// per frame and dispatch the results.
    pub fn take_notifications(&mut self) -> Vec<RadarNotification> {
        std::mem::take(&mut self.notifications)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        item::{Category, Priority, RadarItem},
        visualization::view::{MAX_ZOOM, MIN_ZOOM},
    };
    use chrono::{TimeZone, Utc};

    fn items() -> Vec<RadarItem> {
        let now = Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
        vec![
            RadarItem::fixed("a", "A", now, now, Category::Work, Priority::Medium),
            RadarItem::task("b", "B", now, now, Category::Health, Priority::Low),
        ]
    }

    #[test]
    fn hover_enter_and_leave() {
        let mut ctl = InteractionController::new();
        let id = ItemId::from("a");
        ctl.pointer_enter(&id);
        assert_eq!(ctl.selection().hovered, Some(id.clone()));
        ctl.pointer_leave(&id);
        assert_eq!(ctl.selection().hovered, None);
        assert_eq!(
            ctl.take_notifications(),
            vec![
                RadarNotification::HoverChange(Some(id.clone())),
                RadarNotification::HoverChange(None),
            ]
        );
    }

    #[test]
    fn stale_leave_does_not_clobber_new_hover() {
        let mut ctl = InteractionController::new();
        let a = ItemId::from("a");
        let b = ItemId::from("b");
        ctl.pointer_enter(&a);
        // Overlapping blips: enter B fires before the leave for A arrives.
        ctl.pointer_enter(&b);
        ctl.pointer_leave(&a);
        assert_eq!(ctl.selection().hovered, Some(b));
    }

    #[test]
    fn click_replaces_selection() {
        let mut ctl = InteractionController::new();
        let a = ItemId::from("a");
        let b = ItemId::from("b");
        ctl.click(&a);
        ctl.click(&b);
        assert_eq!(ctl.selection().selected, Some(b.clone()));
        assert_eq!(
            ctl.take_notifications(),
            vec![
                RadarNotification::Select(Some(a)),
                RadarNotification::Select(Some(b)),
            ]
        );
    }

    #[test]
    fn repeated_click_is_idempotent() {
        let mut ctl = InteractionController::new();
        let a = ItemId::from("a");
        ctl.click(&a);
        ctl.click(&a);
        assert_eq!(ctl.take_notifications().len(), 1);
    }

    #[test]
    fn drag_state_machine() {
        let mut ctl = InteractionController::new();
        // Deltas outside a drag are ignored.
        ctl.drag_moved(RadarPoint::new(10.0, 10.0));
        assert_eq!(ctl.view().offset, RadarPoint::default());

        ctl.drag_start();
        assert!(ctl.is_dragging());
        ctl.drag_moved(RadarPoint::new(5.0, -3.0));
        ctl.drag_moved(RadarPoint::new(1.0, 1.0));
        ctl.drag_end();
        assert!(!ctl.is_dragging());
        assert_eq!(ctl.view().offset, RadarPoint::new(6.0, -2.0));
    }

    #[test]
    fn zoom_paths_clamp() {
        let mut ctl = InteractionController::new();
        for _ in 0..100 {
            ctl.zoom_step(0.5);
        }
        assert_eq!(ctl.view().scale, MAX_ZOOM);
        for _ in 0..100 {
            ctl.zoom_step(-0.5);
        }
        assert_eq!(ctl.view().scale, MIN_ZOOM);
        ctl.reset_view();
        assert_eq!(ctl.view().scale, 1.0);
    }

    #[test]
    fn dangling_ids_clear_implicitly() {
        let mut ctl = InteractionController::new();
        let gone = ItemId::from("gone");
        ctl.pointer_enter(&gone);
        ctl.click(&gone);
        ctl.take_notifications();

        ctl.sync_items(&items());
        assert_eq!(ctl.selection().hovered, None);
        assert_eq!(ctl.selection().selected, None);
        assert_eq!(
            ctl.take_notifications(),
            vec![RadarNotification::HoverChange(None), RadarNotification::Select(None)]
        );

        // Ids that still exist are left alone.
        let a = ItemId::from("a");
        ctl.click(&a);
        ctl.sync_items(&items());
        assert_eq!(ctl.selection().selected, Some(a));
    }

    #[test]
    fn mutation_requests_are_forwarded_verbatim() {
        let mut ctl = InteractionController::new();
        let b = ItemId::from("b");
        ctl.request_complete(&b);
        ctl.request_delete(&b);
        assert_eq!(
            ctl.take_notifications(),
            vec![
                RadarNotification::RequestComplete(b.clone()),
                RadarNotification::RequestDelete(b),
            ]
        );
    }
}
