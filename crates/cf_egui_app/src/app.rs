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

use chrono::{DateTime, Utc};
use chronofox::{
    clock::{SystemClock, TimeSource},
    interaction::RadarNotification,
    item::{ItemId, RadarItem},
};
use chronofox_egui::{
    widgets::{
        item_info::{ItemInfoAction, ItemInfoWidget},
        zoom_controls::{ZoomAction, ZoomControls},
    },
    RadarDisplay,
};

use crate::store::ItemStore;

pub const APP_NAME: &str = "chronofox-egui";

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
#[derive(Default, serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PersistentState {
    tasks: Vec<RadarItem>,
}

pub struct App {
    clock: SystemClock,
    now: DateTime<Utc>,
    store: ItemStore,
    radar: RadarDisplay,
    hovered: Option<ItemId>,
    selected: Option<ItemId>,
    side_panel_open: bool,
}

impl App {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let clock = SystemClock;
        let now = clock.now();
        let mut store = ItemStore::with_sample_data(now);

        // Restore the task list from the previous session (if any).
        if let Some(storage) = cc.storage {
            let p_state: PersistentState = eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default();
            store.restore_tasks(p_state.tasks);
        }

        App {
            clock,
            now,
            store,
            radar: RadarDisplay::new(),
            hovered: None,
            selected: None,
            side_panel_open: false,
        }
    }

    fn dispatch(&mut self, notifications: Vec<RadarNotification>) {
        for notification in notifications {
            match notification {
                RadarNotification::HoverChange(id) => {
                    self.hovered = id;
                }
                RadarNotification::Select(id) => {
                    self.side_panel_open = id.is_some();
                    self.selected = id;
                }
                RadarNotification::RequestComplete(id) => {
                    self.store.toggle_complete(&id);
                }
                RadarNotification::RequestDelete(id) => {
                    self.store.delete(&id);
                }
            }
        }
    }

    fn show_side_panel(&mut self, ctx: &egui::Context) {
        if !self.side_panel_open {
            return;
        }
        let Some(item) = self.selected.as_ref().and_then(|id| self.store.get(id)).cloned() else {
            return;
        };

        let mut action = None;
        egui::SidePanel::right("item_detail_panel")
            .resizable(false)
            .min_width(220.0)
            .show(ctx, |ui| {
                action = ItemInfoWidget::new(&item, self.now).show(ui);
            });

        match action {
            Some(ItemInfoAction::Complete) => self.radar.request_complete(&item.id),
            Some(ItemInfoAction::Delete) => self.radar.request_delete(&item.id),
            Some(ItemInfoAction::Close) => {
                self.radar.deselect();
                self.side_panel_open = false;
            }
            None => {}
        }
    }
}

impl eframe::App for App {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        let p_state = PersistentState {
            tasks: self.store.tasks().to_vec(),
        };
        eframe::set_value(storage, eframe::APP_KEY, &p_state);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // The radar repaints continuously, so sampling the clock here refreshes "now"
        // far more often than the once-per-second the engine asks for.
        self.now = self.clock.now();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("ChronoFox");
                ui.separator();
                let items = self.store.items();
                let open_tasks = items
                    .iter()
                    .filter(|item| !item.kind.is_fixed() && !item.kind.is_complete())
                    .count();
                ui.label(format!("{} items, {} open tasks", items.len(), open_tasks));
                if let Some(hovered) = self.hovered.as_ref().and_then(|id| self.store.get(id)) {
                    ui.separator();
                    ui.label(&hovered.title);
                }
            });
        });

        egui::TopBottomPanel::bottom("zoom_panel").show(ctx, |ui| {
            match ZoomControls::new(self.radar.scale()).show(ui) {
                Some(ZoomAction::In) => self.radar.zoom_in(),
                Some(ZoomAction::Out) => self.radar.zoom_out(),
                Some(ZoomAction::Reset) => self.radar.reset_view(),
                None => {}
            }
        });

        self.show_side_panel(ctx);

        let items = self.store.items();
        let mut notifications = Vec::new();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                notifications = self.radar.show(ui, &items, self.now);
            });
        });
        self.dispatch(notifications);
    }
}
