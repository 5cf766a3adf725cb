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

    tests/engine.rs

    End-to-end tests of the radar engine: items in, frames and notifications out.
*/

use chrono::{DateTime, Duration, TimeZone, Utc};
use chronofox::prelude::*;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
}

fn geometry() -> RadarGeometry {
    RadarGeometry::from_canvas(800.0, 800.0)
}

fn seed_items() -> Vec<RadarItem> {
    vec![
        RadarItem::fixed(
            "meeting",
            "Team Meeting",
            now() + Duration::hours(2),
            now() + Duration::hours(3),
            Category::Work,
            Priority::High,
        ),
        RadarItem::fixed(
            "gym",
            "Gym Session",
            now() + Duration::hours(6),
            now() + Duration::hours(7),
            Category::Health,
            Priority::Medium,
        ),
        RadarItem::task(
            "groceries",
            "Buy groceries",
            now() - Duration::hours(3),
            now() - Duration::hours(3),
            Category::Personal,
            Priority::Low,
        ),
        RadarItem::task(
            "report",
            "Write report",
            now() + Duration::hours(30),
            now() + Duration::hours(31),
            Category::Work,
            Priority::Critical,
        ),
    ]
}

fn build(items: &[RadarItem], controller: &InteractionController) -> RadarFrame {
    build_frame(&FrameParams {
        items,
        now: now(),
        view: *controller.view(),
        phase: AnimationPhase::default(),
        selection: controller.selection(),
        geometry: geometry(),
    })
}

#[test]
fn sector_table_is_valid_at_startup() {
    validate_table().expect("sector table must partition the circle");
}

#[test]
fn frame_plots_every_visible_item_once() {
    let items = seed_items();
    let controller = InteractionController::new();
    let frame = build(&items, &controller);

    assert_eq!(frame.blips().count(), items.len());
    for item in &items {
        let blip = frame.blip_for(&item.id).expect("blip missing for item");
        let wedge = sector_for(item.category);
        assert!(blip.polar.angle_deg >= wedge.start_angle && blip.polar.angle_deg < wedge.end_angle);
    }
}

#[test]
fn frame_pipeline_round_trips_through_hit_test() {
    let items = seed_items();
    let mut controller = InteractionController::new();
    controller.zoom_step(0.5);
    controller.drag_start();
    controller.drag_moved(RadarPoint::new(24.0, -36.0));
    controller.drag_end();

    let frame = build(&items, &controller);
    for blip in frame.blips() {
        let hit = frame
            .hit_test(controller.view(), blip.pos)
            .expect("pointer over a blip center must hit");
        // Overlapping blips resolve to the topmost; the hit must at least cover the point.
        assert!(hit.hit_by(controller.view(), blip.pos));
    }
}

#[test]
fn hover_then_click_then_delete_flow() {
    let mut items = seed_items();
    let mut controller = InteractionController::new();
    let id = ItemId::from("report");

    // Host hit-tests the pointer, then informs the controller.
    controller.pointer_enter(&id);
    controller.click(&id);
    let frame = build(&items, &controller);
    let blip = frame.blip_for(&id).unwrap();
    assert!(blip.flags.contains(BlipFlags::HOVERED));
    assert!(blip.flags.contains(BlipFlags::SELECTED));

    assert_eq!(
        controller.take_notifications(),
        vec![
            RadarNotification::HoverChange(Some(id.clone())),
            RadarNotification::Select(Some(id.clone())),
        ]
    );

    // The store deletes the item between ticks; the next frame carries no trace of it.
    items.retain(|item| item.id != id);
    controller.sync_items(&items);
    let frame = build(&items, &controller);
    assert!(frame.blip_for(&id).is_none());
    assert_eq!(controller.selection().selected, None);
    assert_eq!(
        controller.take_notifications(),
        vec![RadarNotification::HoverChange(None), RadarNotification::Select(None)]
    );
}

#[test]
fn completing_a_task_removes_its_blip_but_not_the_item() {
    let mut items = seed_items();
    let controller = InteractionController::new();

    let frame = build(&items, &controller);
    assert!(frame.blip_for(&ItemId::from("groceries")).is_some());

    // The store marks the task complete in place.
    for item in items.iter_mut() {
        if item.id == ItemId::from("groceries") {
            item.kind = ItemKind::Task { complete: true };
        }
    }
    let frame = build(&items, &controller);
    assert!(frame.blip_for(&ItemId::from("groceries")).is_none());
    assert_eq!(items.len(), 4);
}

#[test]
fn unscheduled_task_rides_perimeter_at_any_zoom() {
    let items = seed_items();
    let mut controller = InteractionController::new();
    for zoom in [-0.4f32, 0.0, 1.2] {
        controller.reset_view();
        controller.zoom_step(zoom);
        let frame = build(&items, &controller);
        let blip = frame.blip_for(&ItemId::from("groceries")).unwrap();
        assert_eq!(blip.polar.radius, UNSCHEDULED_PERIMETER_RADIUS);
        assert!(blip.flags.contains(BlipFlags::UNSCHEDULED));

        // The canvas-frame distance from center matches the perimeter radius.
        let d = blip.canvas_pos.distance_to(&geometry().center);
        let expected = UNSCHEDULED_PERIMETER_RADIUS * geometry().base_max_radius;
        assert!((d - expected).abs() < 1e-2);
    }
}

#[test]
fn wheel_zoom_keeps_blip_under_pointer() {
    let items = seed_items();
    let mut controller = InteractionController::new();

    let frame = build(&items, &controller);
    let target = frame.blip_for(&ItemId::from("meeting")).unwrap();
    let pointer = target.pos;

    controller.wheel(1.0, pointer);
    controller.wheel(1.0, pointer);

    let frame = build(&items, &controller);
    let target = frame.blip_for(&ItemId::from("meeting")).unwrap();
    assert!((target.pos.x - pointer.x).abs() < 1e-2);
    assert!((target.pos.y - pointer.y).abs() < 1e-2);
}

#[test]
fn items_far_in_the_future_collapse_to_the_rim() {
    let mut items = seed_items();
    items.push(RadarItem::fixed(
        "someday",
        "Distant conference",
        now() + Duration::days(400),
        now() + Duration::days(401),
        Category::Work,
        Priority::Low,
    ));
    let controller = InteractionController::new();
    let frame = build(&items, &controller);
    let blip = frame.blip_for(&ItemId::from("someday")).unwrap();
    assert!((blip.polar.radius - 1.0).abs() < 1e-6);
}
