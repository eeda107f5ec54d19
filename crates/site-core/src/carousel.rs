//! Testimonial carousel: one visible slide out of `len`, paged with arrows,
//! dots, or a horizontal swipe. Paging wraps at both ends.

use crate::constants::SWIPE_CONFIDENCE_THRESHOLD;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
    /// `1` when the last move went forward, `-1` backward, `0` before any move.
    direction: i32,
}

/// Strength of a drag gesture, signed by the velocity.
#[inline]
pub fn swipe_power(offset: f64, velocity: f64) -> f64 {
    offset.abs() * velocity
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            direction: 0,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn direction(&self) -> i32 {
        self.direction
    }

    /// Step by `dir` slides, wrapping past either end. Returns the new index.
    pub fn paginate(&mut self, dir: i32) -> usize {
        if self.len == 0 {
            return 0;
        }
        self.direction = dir.signum();
        let len = self.len as i64;
        self.index = (self.index as i64 + dir as i64).rem_euclid(len) as usize;
        log::debug!("[carousel] -> {} (dir {})", self.index, self.direction);
        self.index
    }

    /// Jump straight to a dot. Direction is forward only when moving to a
    /// higher index; re-selecting the current slide counts as backward.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.direction = if index > self.index { 1 } else { -1 };
        self.index = index;
        true
    }

    /// Resolve a finished drag. A hard swipe left shows the next slide, a
    /// hard swipe right the previous one; anything weaker is ignored.
    pub fn swipe(&mut self, offset: f64, velocity: f64) -> bool {
        let power = swipe_power(offset, velocity);
        if power < -SWIPE_CONFIDENCE_THRESHOLD {
            self.paginate(1);
            true
        } else if power > SWIPE_CONFIDENCE_THRESHOLD {
            self.paginate(-1);
            true
        } else {
            false
        }
    }
}
