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

//! # ChronoFox
//!
//! ChronoFox plots a set of time-stamped items - fixed calendar events and user-created
//! tasks - as "blips" on a polar radar display. Angular position encodes an item's category,
//! and radial distance encodes how soon the item starts. The radar's five concentric rings
//! are nonlinear time bands, denser near "now", so near-term urgency dominates visual space.
//!
//! The library is renderer-agnostic. Each animation tick, [visualization::frame::build_frame]
//! composes the polar mapping and the current view transform over the item set and produces a
//! [visualization::prelude::RadarFrame]: an ordered display list of rings, sector spokes, a
//! sweep line, and blip sprites, ready to be painted by whatever surface the host provides.
//! The `chronofox_egui` crate in this workspace provides an egui control that paints frames
//! and feeds pointer input back into the [interaction::InteractionController].
//!
//! A few principles shape the API:
//!
//! - The mapping from item to screen is a pure function of `(item, now, view, phase)`.
//!   "Now" is always an explicit argument, injected via [clock::TimeSource], so every
//!   coordinate function is testable without waiting on real timers.
//! - The core never mutates items. Mutation requests (complete / delete) leave the engine
//!   as [interaction::RadarNotification] values for the owning store to act on.
//! - View, selection, and animation state are plain values owned by their single writer
//!   and threaded through as parameters - there is no ambient global state.

pub mod animation;
pub mod clock;
pub mod interaction;
pub mod item;
pub mod prelude;
pub mod rings;
pub mod sectors;
pub mod visualization;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RadarError {
    #[error("Unknown item category: {0}")]
    UnknownCategory(String),
    #[error("Sector table does not partition the circle: {0}")]
    InvalidSectorTable(String),
    #[error("Invalid parameters were specified to a library function: {0}")]
    InvalidParameter(String),
}

pub use crate::{
    item::{Category, ItemId, ItemKind, Priority, RadarItem},
    rings::{RingBand, RINGS},
    sectors::{SectorWedge, SECTORS},
};
