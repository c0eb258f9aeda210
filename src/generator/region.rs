/*
region.rs

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

//! Blocked region of the lattice.
//!
//! The [`Region`] object stores the cells that are blocked (the cave walls). Its storage covers the
//! `tsize × tsize` square plus a one-cell ring around it, which represents the outer world and is
//! always part of the blocked region once the [`super::carver`] has run.

use log::{Level, debug, log_enabled};
use std::collections::VecDeque;

use super::point::Point;

/// Number of cells in a square of the given side.
fn square_area(side: i32) -> usize {
    let side: usize = side as usize;
    side * side
}

/// Set of blocked cells, stored as a bitmap indexed by coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    /// Side of the playable square.
    tsize: i32,

    /// Side of the stored box, the square plus the outer ring.
    side: usize,

    /// Membership of the cells of the box, row by row, starting at `(-1, -1)`.
    cells: Vec<bool>,

    /// Number of blocked cells.
    count: usize,
}

impl Region {
    /// Create an empty [`Region`] object for a `tsize × tsize` square.
    pub fn new(tsize: i32) -> Self {
        let side: i32 = tsize + 2;
        Self {
            tsize,
            side: side as usize,
            cells: vec![false; square_area(side)],
            count: 0,
        }
    }

    /// Create a [`Region`] object that holds the ring of cells immediately outside the square.
    pub fn with_border(tsize: i32) -> Self {
        let mut region: Region = Region::new(tsize);
        for i in -1..=tsize {
            region.insert(Point::new(i, -1));
            region.insert(Point::new(i, tsize));
            region.insert(Point::new(-1, i));
            region.insert(Point::new(tsize, i));
        }
        region
    }

    /// Side of the playable square.
    pub fn tsize(&self) -> i32 {
        self.tsize
    }

    /// Number of blocked cells.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether the point is in the stored box (the square or its outer ring).
    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= -1 && p.y >= -1 && p.x <= self.tsize && p.y <= self.tsize
    }

    /// Whether the point is in the playable square.
    pub fn in_square(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.tsize && p.y < self.tsize
    }

    fn index(&self, p: Point) -> Option<usize> {
        if self.in_bounds(p) {
            Some((p.y + 1) as usize * self.side + (p.x + 1) as usize)
        } else {
            None
        }
    }

    /// Whether the cell is blocked. Points outside the stored box are reported as free.
    pub fn contains(&self, p: Point) -> bool {
        match self.index(p) {
            Some(i) => self.cells[i],
            None => false,
        }
    }

    /// Block a cell. Return `true` if the cell was not already blocked.
    ///
    /// Points outside the stored box are ignored.
    pub fn insert(&mut self, p: Point) -> bool {
        match self.index(p) {
            Some(i) if !self.cells[i] => {
                self.cells[i] = true;
                self.count += 1;
                true
            }
            _ => false,
        }
    }

    /// Unblock a cell. Return `true` if the cell was blocked.
    pub fn remove(&mut self, p: Point) -> bool {
        match self.index(p) {
            Some(i) if self.cells[i] => {
                self.cells[i] = false;
                self.count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Return the neighbors of the cell that lie in the stored box.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors().into_iter().filter(|q| self.in_bounds(*q))
    }

    /// Walk the 4-connected component that contains `from`.
    ///
    /// Cells are in the same component when they share the membership of `from` (blocked or free).
    /// The walk stays in the stored box.
    fn walk_component<F>(&self, from: Point, mut visit: F)
    where
        F: FnMut(Point),
    {
        let Some(start) = self.index(from) else {
            return;
        };
        let blocked: bool = self.cells[start];
        let mut visited: Vec<bool> = vec![false; self.cells.len()];
        let mut fringe: VecDeque<Point> = VecDeque::new();

        visited[start] = true;
        fringe.push_back(from);
        while let Some(p) = fringe.pop_front() {
            visit(p);
            for q in p.neighbors() {
                if let Some(i) = self.index(q)
                    && !visited[i]
                    && self.cells[i] == blocked
                {
                    visited[i] = true;
                    fringe.push_back(q);
                }
            }
        }
    }

    /// Size of the 4-connected component that contains `from`.
    pub fn connected_component_size(&self, from: Point) -> usize {
        let mut size: usize = 0;
        self.walk_component(from, |_| size += 1);
        size
    }

    /// Return the membership mask of the 4-connected component that contains `from`.
    ///
    /// The returned [`Component`] object answers membership queries for the component.
    pub fn connected_component(&self, from: Point) -> Component {
        let mut component: Component = Component {
            region: Region::new(self.tsize),
        };
        self.walk_component(from, |p| {
            component.region.insert(p);
        });
        component
    }

    /// First free cell of the square, scanning the rows from the lattice origin.
    pub fn first_free(&self) -> Option<Point> {
        (0..self.tsize)
            .flat_map(|y| (0..self.tsize).map(move |x| Point::new(x, y)))
            .find(|p| !self.contains(*p))
    }

    /// Snapshot of the free cells of the square that share an edge with a blocked cell.
    ///
    /// The cells are listed row by row, so that sampling from the snapshot is reproducible with a
    /// seeded random generator.
    pub fn frontier(&self) -> Vec<Point> {
        let mut frontier: Vec<Point> = Vec::new();
        for y in 0..self.tsize {
            for x in 0..self.tsize {
                let p: Point = Point::new(x, y);
                if !self.contains(p) && p.neighbors().iter().any(|q| self.contains(*q)) {
                    frontier.push(p);
                }
            }
        }
        frontier
    }

    /// Number of free cells in the square.
    pub fn free_cells(&self) -> usize {
        square_area(self.tsize) - self.iter().filter(|p| self.in_square(*p)).count()
    }

    /// Iterate over the blocked cells, row by row.
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        (-1..=self.tsize)
            .flat_map(|y| (-1..=self.tsize).map(move |x| Point::new(x, y)))
            .filter(|p| self.contains(*p))
    }

    /// Print the region as "ASCII art", top row first.
    pub fn debug(&self) {
        if !log_enabled!(Level::Debug) {
            return;
        }
        let mut s: String = String::new();
        for y in (-1..=self.tsize).rev() {
            s.clear();
            for x in -1..=self.tsize {
                s.push(if self.contains(Point::new(x, y)) {
                    '#'
                } else {
                    '.'
                });
            }
            debug!("{s}");
        }
    }
}

/// Cells of one connected component.
#[derive(Debug, Clone)]
pub struct Component {
    region: Region,
}

impl Component {
    /// Whether the cell belongs to the component.
    pub fn contains(&self, p: Point) -> bool {
        self.region.contains(p)
    }

    /// Number of cells in the component.
    pub fn len(&self) -> usize {
        self.region.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border() {
        let region: Region = Region::with_border(4);
        // 6 × 6 box minus the 4 × 4 square
        assert_eq!(region.len(), 20);
        assert!(region.contains(Point::new(-1, -1)));
        assert!(region.contains(Point::new(4, 2)));
        assert!(!region.contains(Point::new(0, 0)));
        assert!(!region.contains(Point::new(5, 5)));
        assert_eq!(region.first_free(), Some(Point::new(0, 0)));
        assert_eq!(region.free_cells(), 16);
    }

    #[test]
    fn test_insert() {
        let mut region: Region = Region::new(3);
        assert_eq!(region.len(), 0);
        assert!(region.insert(Point::new(1, 1)));
        assert!(!region.insert(Point::new(1, 1)));
        assert!(!region.insert(Point::new(7, 1)));
        assert_eq!(region.len(), 1);
        assert!(region.insert(Point::new(0, 2)));
        assert!(region.remove(Point::new(0, 2)));
        assert!(!region.remove(Point::new(0, 2)));
        assert_eq!(region.len(), 1);
        assert_eq!(region.iter().collect::<Vec<Point>>(), vec![Point::new(1, 1)]);
    }

    #[test]
    fn test_components() {
        let mut region: Region = Region::with_border(5);
        // Wall across the square, from the bottom ring to the top ring
        for y in 0..5 {
            region.insert(Point::new(2, y));
        }
        assert_eq!(region.connected_component_size(Point::new(0, 0)), 10);
        assert_eq!(region.connected_component_size(Point::new(4, 4)), 10);
        assert_eq!(region.connected_component_size(Point::new(2, 2)), region.len());

        let c: Component = region.connected_component(Point::new(0, 3));
        assert_eq!(c.len(), 10);
        assert!(c.contains(Point::new(1, 4)));
        assert!(!c.contains(Point::new(3, 4)));
        assert!(!c.contains(Point::new(2, 4)));
    }

    #[test]
    fn test_frontier() {
        let mut region: Region = Region::with_border(3);
        assert_eq!(region.frontier().len(), 8);
        region.insert(Point::new(0, 0));
        let frontier: Vec<Point> = region.frontier();
        assert_eq!(frontier.len(), 7);
        assert!(!frontier.contains(&Point::new(0, 0)));
        assert!(!frontier.contains(&Point::new(1, 1)));
    }

    #[test]
    fn test_large_square_area() {
        assert_eq!(square_area(46_341), 2_147_488_281);
        assert_eq!(square_area(50_002), 2_500_200_004);
    }

    #[test]
    fn test_neighbors_stay_in_box() {
        let region: Region = Region::new(2);
        assert_eq!(region.neighbors(Point::new(-1, -1)).count(), 2);
        assert_eq!(region.neighbors(Point::new(0, 0)).count(), 4);
    }
}
