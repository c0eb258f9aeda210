/*
carver.rs

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

//! Carve the initial blocked region.
//!
//! The region starts as the ring of cells around the square. Every excluded cell is then linked
//! to that ring by a path that avoids the included cells, so that the blocked region is one
//! connected wall that touches the border.
//!
//! Excluded cells are processed shell by shell, from the border of the square to its center. A
//! shell is a concentric square ring of cells. Inside a shell the order is random. Linking the
//! outer cells first keeps their walls from cutting the shortest routes of the inner cells.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::{BTreeMap, HashSet};

use super::digger::GenerateError;
use super::path_search;
use super::point::{Direction, Point};
use super::puzzle_spec::PuzzleSpec;
use super::region::Region;

/// Index of the concentric shell of the square that holds the cell. The outermost shell is `0`.
pub fn shell_index(p: Point, tsize: i32) -> i32 {
    p.x.min(p.y).min(tsize - 1 - p.x).min(tsize - 1 - p.y)
}

/// Target on the border of the square for linking the given cell.
///
/// The nearest edge wins, and ties go to the lowest edge index:
///
/// - `0`: the `x = 0` column, sliding toward `+y`
/// - `1`: the `x = tsize` column of the ring, sliding toward `+y`
/// - `2`: the `y = 0` row, sliding toward `+x`
/// - `3`: the `y = tsize` row of the ring, sliding toward `+x`
///
/// While the target is an included cell, it slides one cell along its edge.
pub fn border_target(p: Point, tsize: i32, include: &HashSet<Point>) -> Point {
    let candidates: [(i32, usize, Point, Direction); 4] = [
        (p.x, 0, Point::new(0, p.y), Direction::North),
        (tsize - p.x, 1, Point::new(tsize, p.y), Direction::North),
        (p.y, 2, Point::new(p.x, 0), Direction::East),
        (tsize - p.y, 3, Point::new(p.x, tsize), Direction::East),
    ];
    let (_, _, mut target, slide) = candidates
        .into_iter()
        .min_by_key(|c| (c.0, c.1))
        .unwrap_or((0, 0, p, Direction::North));
    while include.contains(&target) {
        target = target.step(slide);
    }
    target
}

/// Build the blocked region: the outer ring plus a wall linking every excluded cell to it.
///
/// # Errors
///
/// The function returns [`GenerateError::UnsatisfiableExclusion`] when the included cells
/// enclose an excluded cell, which cannot be linked to the border.
pub fn dig_holes<R>(spec: &PuzzleSpec, rng: &mut R) -> Result<Region, GenerateError>
where
    R: Rng + ?Sized,
{
    let include: HashSet<Point> = spec.include_points.iter().copied().collect();
    let mut region: Region = Region::with_border(spec.tsize);

    let mut shells: BTreeMap<i32, Vec<Point>> = BTreeMap::new();
    for p in &spec.exclude_points {
        shells
            .entry(shell_index(*p, spec.tsize))
            .or_default()
            .push(*p);
    }

    for (shell, mut pending) in shells {
        pending.sort_unstable();
        pending.dedup();
        pending.shuffle(rng);
        debug!("Shell {shell}: linking {} excluded cells", pending.len());

        for p in pending {
            let target: Point = border_target(p, spec.tsize, &include);
            let path: Vec<Point> =
                path_search::find_path(p, target, &region, |q| include.contains(&q));
            if path.is_empty() {
                return Err(GenerateError::UnsatisfiableExclusion { point: p });
            }
            for q in path {
                region.insert(q);
            }
        }
    }

    debug!(
        "Carved region: {} blocked cells, {} free cells",
        region.len(),
        region.free_cells()
    );
    region.debug();
    Ok(region)
}
