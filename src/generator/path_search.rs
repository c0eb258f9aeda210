/*
path_search.rs

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

//! Best-first search of a path between a cell and the blocked region.
//!
//! The search expands the cell with the lowest `steps + manhattan(cell, goal)` score first. It
//! stops on the first expanded cell that is the goal or that is already blocked, so the returned
//! path always ends on a cell that connects to the existing region.

use log::debug;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};

use super::point::Point;
use super::region::Region;

/// Node of the search tree.
struct Node {
    point: Point,
    parent: Option<usize>,
    steps: i32,
}

/// Find a path from `origin` to `goal` or to the blocked region, whichever comes first.
///
/// Cells for which `forbidden` returns `true` are never entered. The search does not leave the
/// box stored by the region.
///
/// Return the path, `origin` first. The path is empty if every route is cut by forbidden cells.
pub fn find_path<F>(origin: Point, goal: Point, region: &Region, forbidden: F) -> Vec<Point>
where
    F: Fn(Point) -> bool,
{
    let mut nodes: Vec<Node> = vec![Node {
        point: origin,
        parent: None,
        steps: 0,
    }];
    let mut fringe: BinaryHeap<Reverse<(i32, Point, usize)>> = BinaryHeap::new();
    let mut visited: HashSet<Point> = HashSet::new();

    fringe.push(Reverse((origin.manhattan(goal), origin, 0)));
    while let Some(Reverse((_, p, index))) = fringe.pop() {
        if p == goal || region.contains(p) {
            let path: Vec<Point> = unwind(&nodes, index);
            debug!(
                "Path from {origin} to {goal}: {} cells, {} nodes expanded",
                path.len(),
                visited.len()
            );
            return path;
        }
        if !visited.insert(p) {
            continue;
        }
        let steps: i32 = nodes[index].steps + 1;
        for q in region.neighbors(p) {
            if forbidden(q) {
                continue;
            }
            nodes.push(Node {
                point: q,
                parent: Some(index),
                steps,
            });
            fringe.push(Reverse((steps + q.manhattan(goal), q, nodes.len() - 1)));
        }
    }
    debug!("No path from {origin} to {goal}");
    Vec::new()
}

/// Rebuild the path that leads to the given node.
fn unwind(nodes: &[Node], mut index: usize) -> Vec<Point> {
    let mut path: Vec<Point> = Vec::with_capacity(nodes[index].steps as usize + 1);
    loop {
        path.push(nodes[index].point);
        match nodes[index].parent {
            Some(i) => index = i,
            None => break,
        }
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_path() {
        let region: Region = Region::with_border(10);
        let path: Vec<Point> = find_path(Point::new(2, 5), Point::new(0, 5), &region, |_| false);
        assert_eq!(
            path,
            vec![Point::new(2, 5), Point::new(1, 5), Point::new(0, 5)]
        );
    }

    #[test]
    fn test_stops_on_region() {
        let region: Region = Region::with_border(10);
        // The goal is in the ring: the search stops on the first ring cell it expands
        let path: Vec<Point> = find_path(Point::new(8, 4), Point::new(10, 4), &region, |_| false);
        assert_eq!(path.first(), Some(&Point::new(8, 4)));
        assert_eq!(path.last(), Some(&Point::new(10, 4)));
        assert_eq!(path.len(), 3);

        // The origin is already blocked
        let path: Vec<Point> = find_path(Point::new(-1, 4), Point::new(0, 4), &region, |_| false);
        assert_eq!(path, vec![Point::new(-1, 4)]);
    }

    #[test]
    fn test_detour() {
        let region: Region = Region::with_border(10);
        let wall: HashSet<Point> = [Point::new(1, 4), Point::new(1, 5), Point::new(1, 6)]
            .into_iter()
            .collect();
        let path: Vec<Point> = find_path(Point::new(2, 5), Point::new(0, 5), &region, |p| {
            wall.contains(&p)
        });
        assert!(!path.is_empty());
        assert!(path.iter().all(|p| !wall.contains(p)));
        for w in path.windows(2) {
            assert_eq!(w[0].manhattan(w[1]), 1);
        }
        let last: Point = *path.last().unwrap();
        assert!(last == Point::new(0, 5) || region.contains(last));
        // Around the wall, then back to the goal
        assert_eq!(path.len(), 7);
        assert_eq!(last, Point::new(0, 5));
    }

    #[test]
    fn test_enclosed() {
        let region: Region = Region::with_border(10);
        let origin: Point = Point::new(5, 5);
        let path: Vec<Point> = find_path(origin, Point::new(0, 5), &region, |p| {
            p.manhattan(origin) == 1
        });
        assert!(path.is_empty());
    }
}
