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

//! The static sector table: three angular wedges partitioning `[0°, 360°)`, one per item
//! category. An item's blip is plotted at the midpoint angle of its category's wedge.
//!
//! The table is exhaustive by contract - [sector_for] is total over [Category] - so a
//! malformed table is a startup configuration error, never a per-item runtime condition.
//! Hosts should call [validate_table] once during initialization.

use crate::{item::Category, RadarError};
use strum::IntoEnumIterator;

/// One angular wedge of the radar, owned by a single category.
#[derive(Copy, Clone, Debug)]
pub struct SectorWedge {
    pub category: Category,
    pub label: &'static str,
    /// Doodle glyph drawn next to the sector label.
    pub glyph: char,
    /// Start angle in degrees (inclusive).
    pub start_angle: f32,
    /// End angle in degrees (exclusive).
    pub end_angle: f32,
}

pub const SECTORS: [SectorWedge; 3] = [
    SectorWedge { category: Category::Work, label: "Work", glyph: '◉', start_angle: 0.0, end_angle: 120.0 },
    SectorWedge {
        category: Category::Personal,
        label: "Personal",
        glyph: '○',
        start_angle: 120.0,
        end_angle: 240.0,
    },
    SectorWedge { category: Category::Health, label: "Health", glyph: '◐', start_angle: 240.0, end_angle: 360.0 },
];

impl SectorWedge {
    /// Midpoint angle of the wedge, in degrees. Blips for this category plot here.
    pub fn midpoint_angle(&self) -> f32 {
        (self.start_angle + self.end_angle) / 2.0
    }

    pub fn contains_angle(&self, angle_deg: f32) -> bool {
        angle_deg >= self.start_angle && angle_deg < self.end_angle
    }
}

/// Return the wedge owned by `category`. Total by construction; the table is validated at
/// startup rather than checked per item.
pub fn sector_for(category: Category) -> &'static SectorWedge {
    match category {
        Category::Work => &SECTORS[0],
        Category::Personal => &SECTORS[1],
        Category::Health => &SECTORS[2],
    }
}

/// Midpoint angle of `category`'s wedge, in degrees.
pub fn midpoint_angle(category: Category) -> f32 {
    sector_for(category).midpoint_angle()
}

/// Verify that the sector table partitions `[0°, 360°)` with no gaps or overlaps and that
/// every category resolves to a wedge that actually carries it. A failure here is fatal
/// host misconfiguration.
pub fn validate_table() -> Result<(), RadarError> {
    let mut cursor = 0.0f32;
    for wedge in SECTORS.iter() {
        if wedge.start_angle != cursor {
            return Err(RadarError::InvalidSectorTable(format!(
                "sector '{}' starts at {}°, expected {}°",
                wedge.label, wedge.start_angle, cursor
            )));
        }
        if wedge.end_angle <= wedge.start_angle {
            return Err(RadarError::InvalidSectorTable(format!("sector '{}' has non-positive span", wedge.label)));
        }
        cursor = wedge.end_angle;
    }
    if cursor != 360.0 {
        return Err(RadarError::InvalidSectorTable(format!("sectors end at {}°, expected 360°", cursor)));
    }
    for category in Category::iter() {
        if sector_for(category).category != category {
            return Err(RadarError::InvalidSectorTable(format!(
                "category '{}' resolves to the wrong wedge",
                category
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_a_partition() {
        validate_table().expect("sector table should partition the circle");
    }

    #[test]
    fn midpoints_fall_inside_their_wedge() {
        for category in Category::iter() {
            let wedge = sector_for(category);
            let mid = wedge.midpoint_angle();
            assert!(wedge.contains_angle(mid), "midpoint {}° outside wedge '{}'", mid, wedge.label);
        }
    }

    #[test]
    fn expected_midpoint_angles() {
        assert_eq!(midpoint_angle(Category::Work), 60.0);
        assert_eq!(midpoint_angle(Category::Personal), 180.0);
        assert_eq!(midpoint_angle(Category::Health), 300.0);
    }

    #[test]
    fn every_angle_belongs_to_exactly_one_wedge() {
        for deg in 0..360 {
            let hits = SECTORS.iter().filter(|w| w.contains_angle(deg as f32)).count();
            assert_eq!(hits, 1, "angle {}° covered by {} wedges", deg, hits);
        }
    }
}
