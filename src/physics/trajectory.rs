//! Bounded history of the lower mass position, used to draw the trail

use super::math::Vector;
use std::collections::VecDeque;

/// FIFO buffer of screen-space points, oldest first.
///
/// Once `capacity` points are stored, each new point evicts the oldest.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryBuffer {
    points: VecDeque<Vector>,
    capacity: usize,
}

impl TrajectoryBuffer {
    pub const DEFAULT_CAPACITY: usize = 3000;

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, point: Vector) {
        if self.capacity == 0 {
            return;
        }

        while self.points.len() >= self.capacity {
            self.points.pop_front();
        }

        self.points.push_back(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Points from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Vector> + ExactSizeIterator {
        self.points.iter()
    }

    pub fn newest(&self) -> Option<&Vector> {
        self.points.back()
    }

    pub fn oldest(&self) -> Option<&Vector> {
        self.points.front()
    }
}

impl Default for TrajectoryBuffer {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }
}
