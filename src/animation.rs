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

//! The animation scheduler: two independent periodic signals feeding the frame builder.
//!
//! The sweep angle advances by a fixed step per tick and wraps modulo 360 - it is purely
//! decorative and frame-rate locked by design. The pulse clock, by contrast, is continuous
//! elapsed wall time from a monotonic instant, so the blip pulse stays a smooth function
//! of real time regardless of frame-rate jitter. Neither signal responds to user input,
//! and there is no pause state; teardown is dropping the scheduler.

use web_time::Instant;

/// Sweep advance per tick, in degrees. At ~60 ticks/second the sweep completes a
/// revolution every 12 seconds.
pub const SWEEP_STEP_DEG: f32 = 0.5;

/// The animation signals sampled at one tick. Owned by the [AnimationScheduler]; the
/// frame builder only reads it.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct AnimationPhase {
    /// Current sweep line angle in degrees, `[0, 360)`.
    pub sweep_angle_deg: f32,
    /// Monotonic elapsed time in seconds since the scheduler was created.
    pub pulse_clock: f32,
}

/// Drives the sweep and pulse signals. Tick this once per rendered frame.
#[derive(Clone, Debug)]
pub struct AnimationScheduler {
    sweep_angle_deg: f32,
    epoch: Instant,
}

impl Default for AnimationScheduler {
    fn default() -> AnimationScheduler {
        AnimationScheduler::new()
    }
}

impl AnimationScheduler {
    pub fn new() -> AnimationScheduler {
        AnimationScheduler {
            sweep_angle_deg: 0.0,
            epoch: Instant::now(),
        }
    }

    /// Advance the sweep by one step and sample both signals.
    pub fn tick(&mut self) -> AnimationPhase {
        self.sweep_angle_deg = (self.sweep_angle_deg + SWEEP_STEP_DEG) % 360.0;
        self.phase()
    }

    /// Sample the current signals without advancing the sweep.
    pub fn phase(&self) -> AnimationPhase {
        AnimationPhase {
            sweep_angle_deg: self.sweep_angle_deg,
            pulse_clock: self.epoch.elapsed().as_secs_f32(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_advances_and_wraps() {
        let mut scheduler = AnimationScheduler::new();
        let first = scheduler.tick();
        assert_eq!(first.sweep_angle_deg, SWEEP_STEP_DEG);

        // A full revolution's worth of ticks returns to the start.
        let ticks_per_rev = (360.0 / SWEEP_STEP_DEG) as usize;
        for _ in 0..ticks_per_rev - 1 {
            scheduler.tick();
        }
        let wrapped = scheduler.phase();
        assert!(wrapped.sweep_angle_deg < SWEEP_STEP_DEG + 1e-3);
        assert!(wrapped.sweep_angle_deg >= 0.0);
    }

    #[test]
    fn sweep_stays_in_range() {
        let mut scheduler = AnimationScheduler::new();
        for _ in 0..10_000 {
            let phase = scheduler.tick();
            assert!((0.0..360.0).contains(&phase.sweep_angle_deg));
        }
    }

    #[test]
    fn pulse_clock_is_monotonic() {
        let mut scheduler = AnimationScheduler::new();
        let a = scheduler.tick().pulse_clock;
        let b = scheduler.tick().pulse_clock;
        assert!(b >= a);
    }
}
