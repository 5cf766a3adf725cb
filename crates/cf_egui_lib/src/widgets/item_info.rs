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

//! A detail pane for one item: field grid plus, for tasks, Complete and Delete buttons.
//! The widget never mutates the item; button presses come back as [ItemInfoAction]s for
//! the host to forward to its store.

use chrono::{DateTime, Utc};
use chronofox::item::{ItemKind, RadarItem};
use egui::Ui;

use crate::countdown_string;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ItemInfoAction {
    Complete,
    Delete,
    Close,
}

pub struct ItemInfoWidget<'a> {
    item: &'a RadarItem,
    now: DateTime<Utc>,
}

impl<'a> ItemInfoWidget<'a> {
    pub fn new(item: &'a RadarItem, now: DateTime<Utc>) -> ItemInfoWidget<'a> {
        ItemInfoWidget { item, now }
    }

    pub fn show(&self, ui: &mut Ui) -> Option<ItemInfoAction> {
        let mut action = None;
        let item = self.item;

        ui.heading(&item.title);
        egui::Grid::new(("item_info_grid", &item.id)).striped(true).show(ui, |ui| {
            ui.label("Category:");
            ui.label(format!("{}", item.category));
            ui.end_row();

            ui.label("Priority:");
            ui.label(format!("{}", item.priority));
            ui.end_row();

            ui.label("Starts:");
            ui.label(item.start_time.format("%Y-%m-%d %H:%M").to_string());
            ui.end_row();

            ui.label("Countdown:");
            ui.label(countdown_string(item.hours_from(self.now)));
            ui.end_row();

            ui.label("Kind:");
            ui.label(match item.kind {
                ItemKind::Fixed => "fixed event".to_string(),
                ItemKind::Task { complete: false } => "task".to_string(),
                ItemKind::Task { complete: true } => "task (done)".to_string(),
            });
            ui.end_row();
        });

        if let Some(description) = &item.description {
            ui.separator();
            ui.label(description);
        }

        ui.separator();
        ui.horizontal(|ui| {
            if let ItemKind::Task { complete } = item.kind {
                let label = if complete { "Reopen" } else { "Complete" };
                if ui.button(label).clicked() {
                    action = Some(ItemInfoAction::Complete);
                }
                if ui.button("Delete").clicked() {
                    action = Some(ItemInfoAction::Delete);
                }
            }
            if ui.button("Close").clicked() {
                action = Some(ItemInfoAction::Close);
            }
        });

        action
    }
}
