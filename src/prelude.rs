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

//! The ChronoFox prelude. Brings the engine's common types into scope:
//! `use chronofox::prelude::*;`

pub use crate::{
    animation::{AnimationPhase, AnimationScheduler, SWEEP_STEP_DEG},
    clock::{FixedClock, SystemClock, TimeSource},
    interaction::{InteractionController, InteractionSelection, RadarNotification},
    item::{Category, ItemId, ItemKind, Priority, RadarItem},
    rings::{band_for_hours, RingBand, RINGS, RING_COUNT},
    sectors::{midpoint_angle, sector_for, validate_table, SectorWedge, SECTORS},
    visualization::prelude::*,
    RadarError,
};
