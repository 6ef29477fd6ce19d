use glam::Vec3;
use std::collections::VecDeque;

/// Bounded history of brush-tip positions, most recent first.
#[derive(Clone, Debug)]
pub struct TrailBuffer {
    points: VecDeque<Vec3>,
    capacity: usize,
}

impl TrailBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record a new sample, evicting the oldest once full.
    pub fn push(&mut self, point: Vec3) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_back();
        }
        self.points.push_front(point);
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

    pub fn front(&self) -> Option<Vec3> {
        self.points.front().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.points.iter().copied()
    }

    /// Write the samples into `out[0..len)`, leaving the rest untouched.
    pub fn copy_into(&self, out: &mut [Vec3]) -> usize {
        let n = self.points.len().min(out.len());
        for (slot, p) in out.iter_mut().zip(self.points.iter()) {
            *slot = *p;
        }
        n
    }
}
