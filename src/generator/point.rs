/*
point.rs

Copyright 2025 Hervé Quatremain

This file is part of Lodedigger.

Lodedigger is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Lodedigger is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Lodedigger. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Lattice points and the four unit directions.
//!
//! The lattice uses the mathematical orientation: `x` grows to the east and `y` grows to the
//! north. A [`Point`] designates both a cell (the unit square whose lower-left corner is the point)
//! and a corner of the lattice, depending on the context. The [`super::region::Region`] stores
//! cells, whereas the [`super::tracer`] walks corners.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// Integer point of the lattice.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a [`Point`] object.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance between two points.
    pub fn manhattan(self, other: Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Point one step away in the given direction.
    pub fn step(self, direction: Direction) -> Point {
        self + direction.delta()
    }

    /// The four points sharing an edge with this point.
    pub fn neighbors(self) -> [Point; 4] {
        Direction::ALL.map(|d| self.step(d))
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

/// Textual form used by the puzzle and board descriptions: `(x,y)`.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from(p: (i32, i32)) -> Self {
        Point::new(p.0, p.1)
    }
}

/// Unit direction on the lattice.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    North,
    West,
    South,
}

impl Direction {
    /// Expansion order of the neighbors.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::West,
        Direction::North,
        Direction::South,
    ];

    /// Unit vector.
    pub fn delta(self) -> Point {
        match self {
            Direction::East => Point::new(1, 0),
            Direction::North => Point::new(0, 1),
            Direction::West => Point::new(-1, 0),
            Direction::South => Point::new(0, -1),
        }
    }

    /// Rotate by a quarter turn counterclockwise.
    pub fn turn_left(self) -> Direction {
        match self {
            Direction::East => Direction::North,
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
        }
    }

    /// Rotate by a quarter turn clockwise.
    pub fn turn_right(self) -> Direction {
        match self {
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
            Direction::North => Direction::East,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns() {
        for d in Direction::ALL {
            assert_eq!(d.turn_left().turn_right(), d);
            assert_eq!(d.turn_left().turn_left().turn_left().turn_left(), d);
            // Turning left is a counterclockwise rotation of the unit vector
            let v: Point = d.delta();
            assert_eq!(d.turn_left().delta(), Point::new(-v.y, v.x));
        }
    }

    #[test]
    fn test_manhattan_and_display() {
        let p: Point = Point::new(3, -2);
        assert_eq!(p.manhattan(Point::new(0, 0)), 5);
        assert_eq!(p.manhattan(p), 0);
        assert_eq!(p.to_string(), "(3,-2)");
        assert_eq!(p.step(Direction::North), Point::new(3, -1));
        assert_eq!(p + Point::new(-1, 1), Point::new(2, -1));
    }

    #[test]
    fn test_neighbors() {
        let n: [Point; 4] = Point::new(0, 0).neighbors();
        assert_eq!(
            n,
            [
                Point::new(1, 0),
                Point::new(-1, 0),
                Point::new(0, 1),
                Point::new(0, -1)
            ]
        );
    }
}
