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

//! The frame builder: one pure function from engine state to a display list.
//!
//! [build_frame] composes the polar mapping and the view transform over the current item
//! set and emits every paintable element in back-to-front order. It takes everything it
//! reads as parameters - items, "now", view, animation phase, selection - and owns
//! nothing, so a frame can be built for any instant in tests without timers or a display.

use crate::{
    item::{ItemKind, Priority, RadarItem},
    interaction::InteractionSelection,
    animation::AnimationPhase,
    rings::RINGS,
    sectors::SECTORS,
    visualization::{
        polar::{to_polar, PolarCoordinate},
        types::{
            display_list::{BlipSprite, BlipStyle, FrameElement, RadarFrame},
            shapes::{BlipFlags, RadarCircle, RadarLine},
        },
        view::{polar_to_canvas, ViewState},
        RadarGeometry,
    },
};
use chrono::{DateTime, Utc};

/// Radius of the center dot in display units.
const CENTER_DOT_RADIUS: f32 = 2.0;
const CENTER_DOT_OPACITY: f32 = 0.8;

/// Opacity of the dashed outermost ring.
const OUTER_RING_OPACITY: f32 = 0.5;
const SWEEP_OPACITY: f32 = 0.3;

/// Sector glyphs and labels sit at this fraction of the rim radius.
const LABEL_RADIUS_RATIO: f32 = 0.7;

/// Amplitude of the idle pulse applied to blip radii.
const PULSE_AMPLITUDE: f32 = 0.1;

/// Fixed enlargement applied to a hovered blip, replacing the pulse.
const HOVER_SCALE: f32 = 1.3;

/// Inner marker radius for fixed critical items, as a fraction of the blip radius.
const INNER_MARKER_RATIO: f32 = 0.4;

/// Inputs to one frame build. All state is borrowed; the builder mutates nothing.
#[derive(Clone, Debug)]
pub struct FrameParams<'a> {
    pub items: &'a [RadarItem],
    pub now: DateTime<Utc>,
    pub view: ViewState,
    pub phase: AnimationPhase,
    pub selection: &'a InteractionSelection,
    pub geometry: RadarGeometry,
}

/// Build the display list for one tick.
///
/// Elements are emitted in paint order: center dot, rings (outermost dashed at reduced
/// opacity), sector spokes and glyphs, the sweep line, then one blip per visible item in
/// collection order. Completed tasks are skipped entirely; a hovered or selected id that
/// no longer matches any item simply flags nothing.
pub fn build_frame(params: &FrameParams) -> RadarFrame {
    let mut frame = RadarFrame::new();
    let view = &params.view;
    let geometry = &params.geometry;
    let rim = |angle_deg: f32| {
        view.to_device(polar_to_canvas(
            &PolarCoordinate { angle_deg, radius: 1.0 },
            geometry,
        ))
    };
    let center = view.to_device(geometry.center);

    frame.push(FrameElement::CenterDot {
        circle: RadarCircle::new(center, CENTER_DOT_RADIUS * view.scale),
        opacity: CENTER_DOT_OPACITY,
    });

    for band in RINGS.iter() {
        frame.push(FrameElement::Ring {
            circle: RadarCircle::new(center, band.outer_radius * geometry.base_max_radius * view.scale),
            band: band.index,
            dashed: band.is_open_ended(),
            opacity: if band.is_open_ended() { OUTER_RING_OPACITY } else { 1.0 },
        });
    }

    for wedge in SECTORS.iter() {
        frame.push(FrameElement::Spoke {
            line: RadarLine::new(center, rim(wedge.start_angle)),
        });
        let label_pos = view.to_device(polar_to_canvas(
            &PolarCoordinate {
                angle_deg: wedge.midpoint_angle(),
                radius: LABEL_RADIUS_RATIO,
            },
            geometry,
        ));
        frame.push(FrameElement::SectorGlyph {
            pos: label_pos,
            category: wedge.category,
            glyph: wedge.glyph,
            label: wedge.label,
        });
    }

    frame.push(FrameElement::Sweep {
        line: RadarLine::new(center, rim(params.phase.sweep_angle_deg)),
        opacity: SWEEP_OPACITY,
    });

    for item in params.items.iter().filter(|item| item.is_visible()) {
        frame.push(FrameElement::Blip(build_blip(item, params)));
    }

    frame
}

fn build_blip(item: &RadarItem, params: &FrameParams) -> BlipSprite {
    let polar = to_polar(item, params.now);
    let canvas_pos = polar_to_canvas(&polar, &params.geometry);
    let hours = item.hours_from(params.now);

    let hovered = params.selection.hovered.as_ref() == Some(&item.id);
    let selected = params.selection.selected.as_ref() == Some(&item.id);

    // Hover pins the size; otherwise the blip breathes with the pulse clock.
    let multiplier = if hovered {
        HOVER_SCALE
    }
    else {
        1.0 + PULSE_AMPLITUDE * params.phase.pulse_clock.sin()
    };
    let canvas_radius = item.priority.base_size() * multiplier;

    let mut flags = BlipFlags::NONE;
    let style = match item.kind {
        ItemKind::Fixed => {
            flags |= BlipFlags::FIXED;
            if hours < 0.0 {
                flags |= BlipFlags::OVERDUE;
            }
            BlipStyle::Filled
        }
        ItemKind::Task { .. } => {
            if hours < 0.0 {
                flags |= BlipFlags::UNSCHEDULED;
            }
            BlipStyle::Outlined {
                stroke_width: item.priority.stroke_width(),
                glyph: item.priority.glyph(),
                glyph_size: item.priority.glyph_size(),
            }
        }
    };
    if hovered {
        flags |= BlipFlags::HOVERED;
    }
    if selected {
        flags |= BlipFlags::SELECTED;
    }

    let radius = canvas_radius * params.view.scale;
    let inner_marker = match (item.kind, item.priority) {
        (ItemKind::Fixed, Priority::Critical) => Some(radius * INNER_MARKER_RATIO),
        _ => None,
    };

    BlipSprite {
        id: item.id.clone(),
        title: item.title.clone(),
        category: item.category,
        priority: item.priority,
        polar,
        hours_from_now: hours,
        canvas_pos,
        canvas_radius,
        pos: params.view.to_device(canvas_pos),
        radius,
        style,
        inner_marker,
        flags,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        item::{Category, ItemId, Priority},
        visualization::types::shapes::RadarPoint,
    };
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn geometry() -> RadarGeometry {
        RadarGeometry::new(RadarPoint::new(400.0, 400.0), 340.0)
    }

    fn params<'a>(items: &'a [RadarItem], selection: &'a InteractionSelection) -> FrameParams<'a> {
        FrameParams {
            items,
            now: now(),
            view: ViewState::default(),
            phase: AnimationPhase::default(),
            selection,
            geometry: geometry(),
        }
    }

    fn sample_items() -> Vec<RadarItem> {
        vec![
            RadarItem::fixed(
                "meeting",
                "Team Meeting",
                now() + Duration::hours(2),
                now() + Duration::hours(3),
                Category::Work,
                Priority::High,
            ),
            RadarItem::task(
                "errand",
                "Errand",
                now() - Duration::hours(1),
                now() - Duration::hours(1),
                Category::Personal,
                Priority::Medium,
            ),
        ]
    }

    #[test]
    fn background_precedes_blips() {
        let items = sample_items();
        let selection = InteractionSelection::default();
        let frame = build_frame(&params(&items, &selection));

        let first_blip = frame
            .elements
            .iter()
            .position(|e| matches!(e, FrameElement::Blip(_)))
            .unwrap();
        for element in &frame.elements[..first_blip] {
            assert!(!matches!(element, FrameElement::Blip(_)));
        }
        // Center dot + 5 rings + 3 spokes + 3 glyphs + sweep.
        assert_eq!(first_blip, 13);
        assert_eq!(frame.blips().count(), 2);
    }

    #[test]
    fn outermost_ring_is_dashed_and_faded() {
        let items = Vec::new();
        let selection = InteractionSelection::default();
        let frame = build_frame(&params(&items, &selection));

        let rings: Vec<_> = frame
            .elements
            .iter()
            .filter_map(|e| match e {
                FrameElement::Ring { band, dashed, opacity, .. } => Some((*band, *dashed, *opacity)),
                _ => None,
            })
            .collect();
        assert_eq!(rings.len(), 5);
        for (band, dashed, opacity) in &rings {
            if *band == 4 {
                assert!(*dashed);
                assert!(*opacity < 1.0);
            }
            else {
                assert!(!*dashed);
                assert_eq!(*opacity, 1.0);
            }
        }
    }

    #[test]
    fn completed_tasks_never_render() {
        let mut items = sample_items();
        items[1].kind = ItemKind::Task { complete: true };
        let selection = InteractionSelection::default();
        let frame = build_frame(&params(&items, &selection));
        assert_eq!(frame.blips().count(), 1);
        assert!(frame.blip_for(&ItemId::from("errand")).is_none());
    }

    #[test]
    fn blips_follow_collection_order() {
        let items = sample_items();
        let selection = InteractionSelection::default();
        let frame = build_frame(&params(&items, &selection));
        let ids: Vec<_> = frame.blips().map(|b| b.id.as_str().to_string()).collect();
        assert_eq!(ids, vec!["meeting", "errand"]);
    }

    #[test]
    fn hover_overrides_pulse() {
        let items = sample_items();
        let selection = InteractionSelection {
            hovered: Some(ItemId::from("meeting")),
            selected: None,
        };
        let mut p = params(&items, &selection);
        // A pulse phase that would otherwise shrink the blip.
        p.phase = AnimationPhase {
            sweep_angle_deg: 0.0,
            pulse_clock: std::f32::consts::FRAC_PI_2 * 3.0,
        };
        let frame = build_frame(&p);

        let hovered = frame.blip_for(&ItemId::from("meeting")).unwrap();
        assert!(hovered.flags.contains(BlipFlags::HOVERED));
        assert!((hovered.canvas_radius - Priority::High.base_size() * HOVER_SCALE).abs() < 1e-6);

        let other = frame.blip_for(&ItemId::from("errand")).unwrap();
        let expected = Priority::Medium.base_size() * (1.0 + PULSE_AMPLITUDE * p.phase.pulse_clock.sin());
        assert!((other.canvas_radius - expected).abs() < 1e-6);
    }

    #[test]
    fn styles_and_markers_by_kind_and_priority() {
        let mut items = sample_items();
        items.push(RadarItem::fixed(
            "launch",
            "Launch",
            now() + Duration::hours(1),
            now() + Duration::hours(2),
            Category::Work,
            Priority::Critical,
        ));
        let selection = InteractionSelection::default();
        let frame = build_frame(&params(&items, &selection));

        let fixed = frame.blip_for(&ItemId::from("meeting")).unwrap();
        assert_eq!(fixed.style, BlipStyle::Filled);
        assert!(fixed.inner_marker.is_none());

        let task = frame.blip_for(&ItemId::from("errand")).unwrap();
        assert!(matches!(
            task.style,
            BlipStyle::Outlined { glyph: '○', .. }
        ));
        assert!(task.flags.contains(BlipFlags::UNSCHEDULED));
        assert!((task.polar.radius - 0.95).abs() < 1e-6);

        let critical = frame.blip_for(&ItemId::from("launch")).unwrap();
        let marker = critical.inner_marker.unwrap();
        assert!((marker - critical.radius * INNER_MARKER_RATIO).abs() < 1e-6);
    }

    #[test]
    fn dangling_selection_flags_nothing() {
        let items = sample_items();
        let selection = InteractionSelection {
            hovered: Some(ItemId::from("deleted")),
            selected: Some(ItemId::from("also-deleted")),
        };
        let frame = build_frame(&params(&items, &selection));
        assert!(frame
            .blips()
            .all(|b| !b.flags.intersects(BlipFlags::HOVERED | BlipFlags::SELECTED)));
    }

    #[test]
    fn view_transform_carries_through() {
        let items = sample_items();
        let selection = InteractionSelection::default();
        let mut p = params(&items, &selection);
        p.view = ViewState {
            scale: 2.0,
            offset: RadarPoint::new(15.0, -5.0),
        };
        let frame = build_frame(&p);

        let blip = frame.blip_for(&ItemId::from("meeting")).unwrap();
        let expected = p.view.to_device(blip.canvas_pos);
        assert!((blip.pos.x - expected.x).abs() < 1e-3);
        assert!((blip.pos.y - expected.y).abs() < 1e-3);
        assert!((blip.radius - blip.canvas_radius * 2.0).abs() < 1e-3);
    }

    #[test]
    fn hit_test_matches_rendered_radius() {
        let items = sample_items();
        let selection = InteractionSelection::default();
        let p = params(&items, &selection);
        let frame = build_frame(&p);

        let blip = frame.blip_for(&ItemId::from("meeting")).unwrap();
        let dead_center = blip.pos;
        assert_eq!(
            frame.hit_test(&p.view, dead_center).map(|b| b.id.clone()),
            Some(ItemId::from("meeting"))
        );

        let just_outside = RadarPoint::new(dead_center.x + blip.radius + 1.0, dead_center.y);
        assert!(frame
            .hit_test(&p.view, just_outside)
            .map(|b| b.id != ItemId::from("meeting"))
            .unwrap_or(true));
    }
}
