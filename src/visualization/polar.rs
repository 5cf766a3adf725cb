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

//! The time-banding function and the polar mapping.
//!
//! [radius_for_hours] maps an hour offset to a normalized radius by linear interpolation
//! within each ring band, so the scale is intentionally nonlinear: the first 8 hours span
//! as much radial space as the following week. Past the last finite band boundary (48h)
//! the radius saturates logarithmically toward the rim - an item three weeks out and one
//! three months out both sit at radius 1.0 rather than being clipped.
//!
//! [to_polar] composes the banding function with the sector table to place one item. It is
//! pure, cheap, and recomputed every tick; memoizing it against item identity would freeze
//! blips in place as "now" advances.

use crate::{
    item::{ItemKind, RadarItem},
    rings::{RINGS, RING_COUNT},
    sectors,
};
use chrono::{DateTime, Utc};

/// Radius used for tasks whose start time has passed without them ever being fixed to a
/// slot: they ride the outer perimeter instead of collapsing to the center.
pub const UNSCHEDULED_PERIMETER_RADIUS: f32 = 0.95;

/// Shape parameter of the saturation curve beyond 48h: hour offsets are compressed by
/// `ln(1 + excess / EASE)` before normalization. Smaller values flatten the tail sooner.
const SATURATION_EASE_HOURS: f32 = 24.0;

/// A point in the radar's polar space: degrees in `[0, 360)` and a normalized radius in
/// `[0, 1]`. Derived per tick from an item and "now"; never stored.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PolarCoordinate {
    pub angle_deg: f32,
    pub radius: f32,
}

/// Map an hour offset from "now" to a normalized radius in `[0, 1]`.
///
/// Offsets at or before "now" (and NaN) map to 0. Offsets within a finite ring band
/// interpolate linearly between the band's inner and outer radii. Offsets past the last
/// finite boundary follow the logarithmic saturation curve, clamped to 1.0 - including
/// `+∞`, so arbitrarily distant items land on the rim rather than erroring.
pub fn radius_for_hours(hours: f32) -> f32 {
    if hours.is_nan() || hours <= 0.0 {
        return 0.0;
    }
    for band in RINGS.iter().take(RING_COUNT - 1) {
        if hours < band.hours_end {
            let t = (hours - band.hours_start) / (band.hours_end - band.hours_start);
            return band.inner_radius() + t * (band.outer_radius - band.inner_radius());
        }
    }
    saturating_radius(hours)
}

/// Saturation curve for the open-ended outermost band:
/// `inner + (outer - inner) * min(1, ln(1 + excess/EASE) / ln(1 + span/EASE))`.
/// Monotone, continuous with the band boundary at 48h, and exactly 1.0 at the nominal
/// band end (168h) and beyond.
fn saturating_radius(hours: f32) -> f32 {
    let band = &RINGS[RING_COUNT - 1];
    let inner = band.inner_radius();
    if !hours.is_finite() {
        return band.outer_radius;
    }
    let normalized = ((1.0 + (hours - band.hours_start) / SATURATION_EASE_HOURS).ln()
        / (1.0 + (band.hours_end - band.hours_start) / SATURATION_EASE_HOURS).ln())
    .min(1.0);
    inner + normalized * (band.outer_radius - inner)
}

/// Map one item to its polar coordinate at the given instant.
///
/// The angle is the midpoint of the item's category wedge. The radius comes from
/// [radius_for_hours], except that tasks whose start time has already passed pin to
/// [UNSCHEDULED_PERIMETER_RADIUS] - a task left unscheduled should stay visible on the
/// rim, not vanish into the center like an elapsed event.
pub fn to_polar(item: &RadarItem, now: DateTime<Utc>) -> PolarCoordinate {
    let hours = item.hours_from(now);
    let radius = match item.kind {
        ItemKind::Task { .. } if hours < 0.0 => UNSCHEDULED_PERIMETER_RADIUS,
        _ => radius_for_hours(hours),
    };
    PolarCoordinate {
        angle_deg: sectors::midpoint_angle(item.category),
        radius,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Category, Priority};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn non_positive_offsets_collapse_to_center() {
        assert_eq!(radius_for_hours(0.0), 0.0);
        assert_eq!(radius_for_hours(-0.01), 0.0);
        assert_eq!(radius_for_hours(-500.0), 0.0);
        assert_eq!(radius_for_hours(f32::NEG_INFINITY), 0.0);
        assert_eq!(radius_for_hours(f32::NAN), 0.0);
    }

    #[test]
    fn band_interpolation_matches_table() {
        // One hour out: 1/8th of the way through the first band.
        assert!((radius_for_hours(1.0) - 0.025).abs() < 1e-6);
        // Band boundaries land on the table radii.
        assert!((radius_for_hours(8.0) - 0.2).abs() < 1e-6);
        assert!((radius_for_hours(16.0) - 0.4).abs() < 1e-6);
        assert!((radius_for_hours(24.0) - 0.6).abs() < 1e-6);
        assert!((radius_for_hours(48.0) - 0.8).abs() < 1e-6);
        // Midpoints interpolate linearly.
        assert!((radius_for_hours(12.0) - 0.3).abs() < 1e-6);
        assert!((radius_for_hours(36.0) - 0.7).abs() < 1e-6);
    }

    #[test]
    fn saturation_is_monotone_and_bounded() {
        let mut prev = 0.0;
        let mut h = 0.0f32;
        while h < 2_000.0 {
            let r = radius_for_hours(h);
            assert!(r >= prev, "radius decreased at {}h: {} < {}", h, r, prev);
            assert!((0.0..=1.0).contains(&r));
            prev = r;
            h += 0.25;
        }
        assert!((radius_for_hours(f32::INFINITY) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn saturation_reaches_rim_at_week_boundary() {
        assert!(radius_for_hours(100.0) < 1.0);
        assert!((radius_for_hours(168.0) - 1.0).abs() < 1e-6);
        assert!((radius_for_hours(169.0) - 1.0).abs() < 1e-6);
        assert!((radius_for_hours(100_000.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn fixed_items_use_banding_even_in_the_past() {
        let item = RadarItem::fixed(
            "e1",
            "Old meeting",
            now() - Duration::hours(3),
            now() - Duration::hours(2),
            Category::Work,
            Priority::Medium,
        );
        let polar = to_polar(&item, now());
        assert_eq!(polar.radius, 0.0);
        assert_eq!(polar.angle_deg, 60.0);
    }

    #[test]
    fn overdue_tasks_ride_the_perimeter() {
        for category in [Category::Work, Category::Personal, Category::Health] {
            let task = RadarItem::task(
                "t1",
                "Errand",
                now() - Duration::hours(1),
                now() - Duration::hours(1),
                category,
                Priority::Medium,
            );
            let polar = to_polar(&task, now());
            assert_eq!(polar.radius, UNSCHEDULED_PERIMETER_RADIUS);
            assert_eq!(polar.angle_deg, sectors::midpoint_angle(category));
        }
    }

    #[test]
    fn future_tasks_use_banding() {
        let task = RadarItem::task(
            "t2",
            "Scheduled errand",
            now() + Duration::hours(4),
            now() + Duration::hours(5),
            Category::Personal,
            Priority::Medium,
        );
        let polar = to_polar(&task, now());
        assert!((polar.radius - 0.1).abs() < 1e-6);
    }

    #[test]
    fn angles_fall_inside_the_owning_sector() {
        for category in [Category::Work, Category::Personal, Category::Health] {
            let item = RadarItem::fixed(
                "e2",
                "Probe",
                now() + Duration::hours(2),
                now() + Duration::hours(3),
                category,
                Priority::Medium,
            );
            let polar = to_polar(&item, now());
            let wedge = sectors::sector_for(category);
            assert!(polar.angle_deg >= wedge.start_angle && polar.angle_deg < wedge.end_angle);
        }
    }

    #[test]
    fn one_hour_work_item_scenario() {
        let item = RadarItem::fixed(
            "e3",
            "Deadline",
            now() + Duration::hours(1),
            now() + Duration::hours(2),
            Category::Work,
            Priority::Critical,
        );
        let polar = to_polar(&item, now());
        assert!((polar.radius - 0.025).abs() < 1e-6);
        assert_eq!(polar.angle_deg, 60.0);
    }
}
