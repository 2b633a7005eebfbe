use std::collections::{HashSet, VecDeque};

use super::types::{Direction, Point};

/// Body cells head first, mirrored into a set for constant-time lookups.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
    heading: Direction,
}

impl Snake {
    /// A straight snake of `length` cells whose head is at `head`, laid out
    /// behind it so that it faces `heading`.
    pub fn new(head: Point, heading: Direction, length: usize) -> Self {
        let back = heading.opposite();
        let mut body = VecDeque::with_capacity(length.max(1));
        let mut cell = head;
        for _ in 0..length.max(1) {
            body.push_back(cell);
            cell = cell.step(back);
        }
        let body_set = body.iter().copied().collect();

        Self {
            body,
            body_set,
            heading,
        }
    }

    /// Arbitrary body, head first. `None` if empty or self-overlapping.
    pub fn from_cells(cells: &[Point], heading: Direction) -> Option<Self> {
        let body: VecDeque<Point> = cells.iter().copied().collect();
        let body_set: HashSet<Point> = cells.iter().copied().collect();
        if body.is_empty() || body_set.len() != body.len() {
            return None;
        }
        Some(Self {
            body,
            body_set,
            heading,
        })
    }

    pub fn head(&self) -> Point {
        self.body[0]
    }

    pub fn tail(&self) -> Point {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn set_heading(&mut self, heading: Direction) {
        self.heading = heading;
    }

    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    pub fn occupies(&self, point: Point) -> bool {
        self.body_set.contains(&point)
    }

    /// Occupancy as seen by a head about to enter `point`: unless the snake
    /// grows, its tail moves away on the same step and does not count.
    pub fn would_collide(&self, point: Point, grow: bool) -> bool {
        self.occupies(point) && (grow || point != self.tail())
    }

    pub fn propose_move(&self, direction: Direction) -> Point {
        self.head().step(direction)
    }

    /// Turning straight back is only possible when there is no neck to hit.
    pub fn would_reverse(&self, direction: Direction) -> bool {
        self.body.len() > 1 && direction.is_opposite(self.heading)
    }

    /// Moves the head to `new_head`. The tail stays put when `grow` is set.
    pub fn advance(&mut self, new_head: Point, grow: bool) {
        if !grow && let Some(tail) = self.body.pop_back() {
            self.body_set.remove(&tail);
        }
        self.body.push_front(new_head);
        self.body_set.insert(new_head);
    }
}
