/*
tracer.rs

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

//! Trace the outline of the playable area.
//!
//! The walk follows the lattice corners along the border between free and blocked cells, keeping
//! the free cells on its left, so the resulting polygon is counterclockwise. It starts at the
//! lower-left corner of the first free cell, heading east. At every corner it looks at the two
//! cells ahead:
//!
//! - if the cell ahead on the right is free, the border turns right;
//! - otherwise, if the cell ahead on the left is blocked, the border turns left;
//! - otherwise the walk goes straight.
//!
//! Every turn is a vertex of the outline. If the walk goes through a corner twice before coming
//! back to its starting corner, then two free cells touch by a corner only, and the border is not
//! a simple polygon.

use log::debug;
use std::collections::HashSet;

use super::point::{Direction, Point};
use super::region::Region;

/// Errors raised when tracing the outline.
#[derive(Debug, PartialEq)]
pub enum TraceError {
    /// The whole square is blocked.
    NoFreeCell,

    /// The border goes twice through the given corner.
    SelfIntersection { corner: Point },
}

/// Outline of the playable area.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    /// Polygon vertexes, counterclockwise.
    pub vertexes: Vec<Point>,

    /// Free cell whose lower-left corner is the first vertex. The cell belongs to the playable
    /// area bounded by the outline.
    pub origin_cell: Point,
}

impl Outline {
    /// Number of vertexes.
    pub fn len(&self) -> usize {
        self.vertexes.len()
    }
}

/// Cells ahead of the walk at corner `q`, on the right and on the left of the direction.
fn cells_ahead(q: Point, d: Direction) -> (Point, Point) {
    match d {
        Direction::East => (Point::new(q.x, q.y - 1), Point::new(q.x, q.y)),
        Direction::North => (Point::new(q.x, q.y), Point::new(q.x - 1, q.y)),
        Direction::West => (Point::new(q.x - 1, q.y), Point::new(q.x - 1, q.y - 1)),
        Direction::South => (Point::new(q.x - 1, q.y - 1), Point::new(q.x, q.y - 1)),
    }
}

/// Trace the outline of the playable area that contains the first free cell of the square.
///
/// # Errors
///
/// The function returns an error when the square has no free cell, or when the border is not a
/// simple polygon.
pub fn trace(region: &Region) -> Result<Outline, TraceError> {
    let origin: Point = region.first_free().ok_or(TraceError::NoFreeCell)?;
    let mut vertexes: Vec<Point> = vec![origin];
    let mut visited: HashSet<Point> = HashSet::from([origin]);
    let mut p: Point = origin;
    let mut d: Direction = Direction::East;

    loop {
        let q: Point = p.step(d);
        if q == origin {
            break;
        }
        let (right, left) = cells_ahead(q, d);
        if !region.contains(right) {
            d = d.turn_right();
            vertexes.push(q);
        } else if region.contains(left) {
            d = d.turn_left();
            vertexes.push(q);
        }
        if !visited.insert(q) {
            debug!(
                "Self-intersecting outline at {q} after {} vertexes",
                vertexes.len()
            );
            return Err(TraceError::SelfIntersection { corner: q });
        }
        p = q;
    }

    debug!("Outline: {} vertexes", vertexes.len());
    Ok(Outline {
        vertexes,
        origin_cell: origin,
    })
}
