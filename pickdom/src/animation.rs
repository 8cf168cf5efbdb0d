//! Frame-stepped scroll animation.
//!
//! The host owns the frame clock. Each frame it reads the container's
//! current scroll offset, calls [`ScrollAnimation::step`] and applies the
//! returned offset. Every step covers a quarter of the remaining distance
//! (at least one unit) and never overshoots, so the animation reaches its
//! target in a bounded number of frames.

/// Fraction of the remaining distance covered per frame (1/n).
pub const DEFAULT_STRENGTH: i32 = 4;

/// Result of advancing an animation by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollStep {
    /// Apply this offset and step again next frame
    Continue(i32),
    /// Apply this offset; the animation is finished
    Done(i32),
}

impl ScrollStep {
    pub fn offset(self) -> i32 {
        match self {
            ScrollStep::Continue(offset) | ScrollStep::Done(offset) => offset,
        }
    }

    pub fn is_done(self) -> bool {
        matches!(self, ScrollStep::Done(_))
    }
}

/// A cancellable scroll toward a fixed target offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollAnimation {
    target: i32,
    strength: i32,
    cancelled: bool,
}

impl ScrollAnimation {
    pub fn new(target: i32) -> Self {
        Self {
            target,
            strength: DEFAULT_STRENGTH,
            cancelled: false,
        }
    }

    /// Set how many frames-worth of remaining distance each step divides by.
    /// Values below 1 are clamped to 1 (jump straight to the target).
    pub fn with_strength(mut self, strength: i32) -> Self {
        self.strength = strength.max(1);
        self
    }

    pub fn target(&self) -> i32 {
        self.target
    }

    pub fn cancel(&mut self) {
        if !self.cancelled {
            log::trace!("scroll animation to {} cancelled", self.target);
        }
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Advance one frame from `current`.
    pub fn step(&mut self, current: i32) -> ScrollStep {
        if self.cancelled {
            return ScrollStep::Done(current);
        }

        let remaining = self.target - current;
        if remaining == 0 {
            return ScrollStep::Done(current);
        }

        let distance = (remaining.abs() / self.strength).max(1);
        let next = current + distance * remaining.signum();

        if next == self.target {
            ScrollStep::Done(next)
        } else {
            ScrollStep::Continue(next)
        }
    }
}
