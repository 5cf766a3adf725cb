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

//! The item model shared by every component of the radar.
//!
//! Items are created and mutated by an external store; the engine only ever reads them.
//! Whether an item is a fixed calendar event or a task is an explicit [ItemKind] variant
//! rather than an optional field, so the completion filter and the unscheduled-perimeter
//! rule can be matched exhaustively.

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use crate::RadarError;
use chrono::{DateTime, Utc};

/// Unique identifier of an item. Ids must be unique across the combined event and task
/// collections; the engine uses them to track hover and selection across frames.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> ItemId {
        ItemId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> ItemId {
        ItemId(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> ItemId {
        ItemId(id)
    }
}

/// Item category. Each category owns one angular sector of the radar - see the
/// [SECTORS](crate::sectors::SECTORS) table.
///
/// The [FromStr] impl is the boundary for external item sources: an unknown category is a
/// configuration error and must be rejected before the item ever reaches the polar mapping.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Category {
    Work,
    Personal,
    Health,
}

impl FromStr for Category {
    type Err = RadarError;

    fn from_str(s: &str) -> Result<Category, RadarError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "work" => Ok(Category::Work),
            "personal" => Ok(Category::Personal),
            "health" => Ok(Category::Health),
            _ => Err(RadarError::UnknownCategory(s.to_string())),
        }
    }
}

/// Item priority. Priority drives the base size of a blip and the stroke/glyph treatment
/// of task blips.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Base blip radius in display units, before pulse or hover scaling.
    pub fn base_size(&self) -> f32 {
        match self {
            Priority::Low => 3.0,
            Priority::Medium => 5.0,
            Priority::High => 7.0,
            Priority::Critical => 10.0,
        }
    }

    /// Outline stroke width used for task blips.
    pub fn stroke_width(&self) -> f32 {
        match self {
            Priority::Critical => 2.5,
            Priority::High => 2.0,
            _ => 1.5,
        }
    }

    /// Doodle glyph drawn inside task blips.
    pub fn glyph(&self) -> char {
        match self {
            Priority::Low => '·',
            Priority::Medium => '○',
            Priority::High => '◉',
            Priority::Critical => '●',
        }
    }

    /// Point size of the doodle glyph.
    pub fn glyph_size(&self) -> f32 {
        match self {
            Priority::Critical => 10.0,
            Priority::High => 8.0,
            _ => 6.0,
        }
    }

    /// Parse a priority from an external source, recovering to [Priority::Medium] when the
    /// value is missing or unrecognized. Unlike categories, a bad priority is not an error.
    pub fn parse_lenient(s: Option<&str>) -> Priority {
        match s.map(|s| s.trim().to_ascii_lowercase()).as_deref() {
            Some("low") => Priority::Low,
            Some("medium") => Priority::Medium,
            Some("high") => Priority::High,
            Some("critical") => Priority::Critical,
            Some(other) => {
                log::warn!("Unrecognized priority '{}', defaulting to medium", other);
                Priority::Medium
            }
            None => Priority::Medium,
        }
    }
}

/// Discriminates fixed calendar events from user tasks.
///
/// Fixed events are anchored to their scheduled slot: once the slot passes they collapse to
/// the radar center. Tasks with no future slot float on the unscheduled perimeter instead,
/// and carry a completion flag that controls whether they are drawn at all.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemKind {
    Fixed,
    Task { complete: bool },
}

impl ItemKind {
    pub fn is_fixed(&self) -> bool {
        matches!(self, ItemKind::Fixed)
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, ItemKind::Task { complete: true })
    }
}

/// One time-stamped item to be plotted on the radar.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadarItem {
    pub id: ItemId,
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub category: Category,
    pub priority: Priority,
    pub kind: ItemKind,
    pub description: Option<String>,
}

impl RadarItem {
    /// Construct a fixed calendar event.
    pub fn fixed(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        category: Category,
        priority: Priority,
    ) -> RadarItem {
        RadarItem {
            id: id.into(),
            title: title.into(),
            start_time,
            end_time,
            category,
            priority,
            kind: ItemKind::Fixed,
            description: None,
        }
    }

    /// Construct an (incomplete) task.
    pub fn task(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        category: Category,
        priority: Priority,
    ) -> RadarItem {
        RadarItem {
            id: id.into(),
            title: title.into(),
            start_time,
            end_time,
            category,
            priority,
            kind: ItemKind::Task { complete: false },
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> RadarItem {
        self.description = Some(description.into());
        self
    }

    /// Signed, fractional hour offset of this item's start time from `now`.
    /// Negative values mean the start time has already passed.
    pub fn hours_from(&self, now: DateTime<Utc>) -> f32 {
        (self.start_time - now).num_milliseconds() as f32 / 3_600_000.0
    }

    /// Whether this item should appear on the radar at all. Completed tasks are filtered
    /// from every frame; this is a display filter, not a deletion.
    pub fn is_visible(&self) -> bool {
        !self.kind.is_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn some_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn category_parses_known_names() {
        assert_eq!("work".parse::<Category>().unwrap(), Category::Work);
        assert_eq!(" Personal ".parse::<Category>().unwrap(), Category::Personal);
        assert_eq!("HEALTH".parse::<Category>().unwrap(), Category::Health);
    }

    #[test]
    fn category_rejects_unknown_names() {
        let err = "finance".parse::<Category>().unwrap_err();
        assert!(matches!(err, RadarError::UnknownCategory(s) if s == "finance"));
    }

    #[test]
    fn priority_recovers_to_medium() {
        assert_eq!(Priority::parse_lenient(None), Priority::Medium);
        assert_eq!(Priority::parse_lenient(Some("urgent")), Priority::Medium);
        assert_eq!(Priority::parse_lenient(Some("critical")), Priority::Critical);
    }

    #[test]
    fn hours_from_is_signed_and_fractional() {
        let now = some_time();
        let item = RadarItem::fixed(
            "i1",
            "Meeting",
            now + chrono::Duration::minutes(90),
            now + chrono::Duration::minutes(150),
            Category::Work,
            Priority::Medium,
        );
        assert!((item.hours_from(now) - 1.5).abs() < 1e-6);

        let past = RadarItem::task(
            "i2",
            "Errand",
            now - chrono::Duration::minutes(30),
            now - chrono::Duration::minutes(30),
            Category::Personal,
            Priority::Low,
        );
        assert!((past.hours_from(now) + 0.5).abs() < 1e-6);
    }

    #[test]
    fn completed_tasks_are_not_visible() {
        let now = some_time();
        let mut task = RadarItem::task("t1", "Chore", now, now, Category::Health, Priority::Low);
        assert!(task.is_visible());
        task.kind = ItemKind::Task { complete: true };
        assert!(!task.is_visible());

        let event = RadarItem::fixed("e1", "Call", now, now, Category::Work, Priority::Medium);
        assert!(event.is_visible());
    }
}
