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

//! The in-memory item store. The store is the single writer of the item collection; the
//! radar engine only ever reads snapshots of it and requests mutations via notifications.

use chrono::{DateTime, Duration, Utc};
use chronofox::item::{Category, ItemId, ItemKind, Priority, RadarItem};

#[derive(Default)]
pub struct ItemStore {
    events: Vec<RadarItem>,
    tasks: Vec<RadarItem>,
}

impl ItemStore {
    /// Seed the store the way a calendar sync would: a handful of fixed events relative
    /// to "now", plus a couple of starter tasks.
    pub fn with_sample_data(now: DateTime<Utc>) -> ItemStore {
        let events = vec![
            RadarItem::fixed(
                "evt-meeting",
                "Team Meeting",
                now + Duration::hours(2),
                now + Duration::hours(3),
                Category::Work,
                Priority::High,
            )
            .with_description("Weekly team sync"),
            RadarItem::fixed(
                "evt-gym",
                "Gym Session",
                now + Duration::hours(6),
                now + Duration::hours(7),
                Category::Health,
                Priority::Medium,
            )
            .with_description("Cardio and weights"),
            RadarItem::fixed(
                "evt-dinner",
                "Dinner with Friends",
                now + Duration::hours(12),
                now + Duration::hours(14),
                Category::Personal,
                Priority::Low,
            )
            .with_description("Restaurant reservation at 7pm"),
            RadarItem::fixed(
                "evt-deadline",
                "Project Deadline",
                now + Duration::hours(1),
                now + Duration::hours(2),
                Category::Work,
                Priority::Critical,
            )
            .with_description("Critical project submission"),
        ];
        let tasks = vec![
            RadarItem::task(
                "task-report",
                "Draft status report",
                now + Duration::hours(20),
                now + Duration::hours(21),
                Category::Work,
                Priority::Medium,
            ),
            // Past start and never fixed to a slot: rides the unscheduled perimeter.
            RadarItem::task(
                "task-groceries",
                "Buy groceries",
                now - Duration::hours(5),
                now - Duration::hours(5),
                Category::Personal,
                Priority::Low,
            ),
        ];
        ItemStore { events, tasks }
    }

    /// Restore tasks from a previous session, keeping the freshly seeded events.
    pub fn restore_tasks(&mut self, tasks: Vec<RadarItem>) {
        if !tasks.is_empty() {
            self.tasks = tasks;
        }
    }

    pub fn tasks(&self) -> &[RadarItem] {
        &self.tasks
    }

    /// Snapshot of the combined collection in stable insertion order: events first, then
    /// tasks. The radar draws blips in this order.
    pub fn items(&self) -> Vec<RadarItem> {
        let mut items = Vec::with_capacity(self.events.len() + self.tasks.len());
        items.extend(self.events.iter().cloned());
        items.extend(self.tasks.iter().cloned());
        items
    }

    pub fn get(&self, id: &ItemId) -> Option<&RadarItem> {
        self.events.iter().chain(self.tasks.iter()).find(|item| item.id == *id)
    }

    pub fn add_task(&mut self, task: RadarItem) {
        self.tasks.push(task);
    }

    /// Toggle a task's completion flag. Fixed events have no completion state; a request
    /// against one is logged and dropped.
    pub fn toggle_complete(&mut self, id: &ItemId) {
        match self.tasks.iter_mut().find(|task| task.id == *id) {
            Some(task) => {
                if let ItemKind::Task { complete } = task.kind {
                    task.kind = ItemKind::Task { complete: !complete };
                }
            }
            None => {
                log::warn!("Completion requested for non-task item '{}'", id);
            }
        }
    }

    /// Remove an item from either collection.
    pub fn delete(&mut self, id: &ItemId) {
        self.events.retain(|item| item.id != *id);
        self.tasks.retain(|item| item.id != *id);
    }
}
