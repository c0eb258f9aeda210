/*
mutator.rs

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

//! Grow the blocked region one cell at a time without changing its topology.
//!
//! A growth step blocks a random free cell that touches the region. The step is kept only if the
//! size of the blocked component plus the size of the playable component is unchanged: blocking a
//! cell adds one to the first and removes one from the second, unless the cell splits the playable
//! area or belongs to another free pocket, in which case the step is undone.

use log::debug;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::collections::HashSet;

use super::digger::GenerateError;
use super::point::Point;
use super::region::Region;

/// Cell of the outer ring, always blocked, from which the blocked component is measured.
const BLOCKED_ANCHOR: Point = Point::new(-1, -1);

/// [`Mutator`] object.
pub struct Mutator {
    /// Cells that must never be blocked: the included cells, the free anchor, and the first free
    /// cell of the square, which keeps the outline starting in the same playable area.
    protected: HashSet<Point>,

    /// Free cell from which the playable component is measured.
    free_anchor: Option<Point>,

    /// Sum of the component sizes when the mutator was created.
    baseline: usize,

    /// Number of accepted growth steps.
    pub accepted: usize,

    /// Number of rejected growth steps.
    pub rejected: usize,
}

impl Mutator {
    /// Create the object for the given region.
    ///
    /// The playable component is measured from the first included cell, or from the first free
    /// cell of the square when there are no included cells.
    pub fn new(region: &Region, include_points: &[Point]) -> Self {
        let mut protected: HashSet<Point> = include_points.iter().copied().collect();
        let first_free: Option<Point> = region.first_free();
        let free_anchor: Option<Point> = include_points.first().copied().or(first_free);
        protected.extend(first_free);
        protected.extend(free_anchor);

        let mut mutator: Mutator = Self {
            protected,
            free_anchor,
            baseline: 0,
            accepted: 0,
            rejected: 0,
        };
        mutator.baseline = mutator.measure(region);
        mutator
    }

    /// Sum of the sizes of the blocked component and of the playable component.
    fn measure(&self, region: &Region) -> usize {
        let blocked: usize = region.connected_component_size(BLOCKED_ANCHOR);
        let free: usize = match self.free_anchor {
            Some(p) => region.connected_component_size(p),
            None => 0,
        };
        blocked + free
    }

    /// Free cells that a growth step may block, row by row.
    pub fn candidates(&self, region: &Region) -> Vec<Point> {
        region
            .frontier()
            .into_iter()
            .filter(|p| !self.protected.contains(p))
            .collect()
    }

    /// Try `attempts` growth steps and return the number of accepted steps.
    ///
    /// # Errors
    ///
    /// The method returns [`GenerateError::Undergrowth`] when no free cell can be blocked
    /// anymore. `vertexes` and `vmin` are only used to report that error.
    pub fn spread<R>(
        &mut self,
        region: &mut Region,
        attempts: usize,
        vertexes: usize,
        vmin: usize,
        rng: &mut R,
    ) -> Result<usize, GenerateError>
    where
        R: Rng + ?Sized,
    {
        let mut accepted: usize = 0;
        for _ in 0..attempts {
            let candidates: Vec<Point> = self.candidates(region);
            let Some(&p) = candidates.choose(rng) else {
                return Err(GenerateError::Undergrowth { vertexes, vmin });
            };

            region.insert(p);
            if self.measure(region) == self.baseline {
                accepted += 1;
            } else {
                region.remove(p);
                self.rejected += 1;
            }
        }
        self.accepted += accepted;
        debug!(
            "Growth: {accepted}/{attempts} steps accepted ({} accepted, {} rejected in total)",
            self.accepted, self.rejected
        );
        Ok(accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_candidates_skip_protected() {
        let region: Region = Region::with_border(3);
        let mutator: Mutator = Mutator::new(&region, &[Point::new(0, 1)]);
        let candidates: Vec<Point> = mutator.candidates(&region);
        assert_eq!(candidates.len(), 6);
        assert!(!candidates.contains(&Point::new(0, 1)));
        assert!(!candidates.contains(&Point::new(0, 0)));
        assert!(!candidates.contains(&Point::new(1, 1)));
    }

    #[test]
    fn test_growth_keeps_topology() {
        let include: Vec<Point> = vec![Point::new(4, 4), Point::new(1, 7), Point::new(7, 1)];
        for seed in 0..10 {
            let mut region: Region = Region::with_border(9);
            let mut rng: StdRng = StdRng::seed_from_u64(seed);
            let mut mutator: Mutator = Mutator::new(&region, &include);
            let free: usize = region.connected_component_size(include[0]);

            let accepted: usize = mutator.spread(&mut region, 40, 4, 40, &mut rng).unwrap();
            assert_eq!(accepted, mutator.accepted);
            assert_eq!(accepted + mutator.rejected, 40);

            // One connected wall, one connected playable area
            assert_eq!(region.connected_component_size(BLOCKED_ANCHOR), region.len());
            assert_eq!(region.connected_component_size(include[0]), free - accepted);
            assert_eq!(region.free_cells(), free - accepted);
            for p in &include {
                assert!(!region.contains(*p));
            }
        }
    }

    #[test]
    fn test_growth_without_included_cells() {
        let mut region: Region = Region::with_border(6);
        let mut rng: StdRng = StdRng::seed_from_u64(7);
        let mut mutator: Mutator = Mutator::new(&region, &[]);
        mutator.spread(&mut region, 20, 4, 20, &mut rng).unwrap();
        assert!(!region.contains(Point::new(0, 0)));
        assert_eq!(
            region.connected_component_size(Point::new(0, 0)),
            region.free_cells()
        );
    }

    #[test]
    fn test_no_room_to_grow() {
        let mut region: Region = Region::with_border(2);
        let include: Vec<Point> = vec![
            Point::new(0, 0),
            Point::new(1, 0),
            Point::new(0, 1),
            Point::new(1, 1),
        ];
        let mut rng: StdRng = StdRng::seed_from_u64(0);
        let mut mutator: Mutator = Mutator::new(&region, &include);
        assert_eq!(
            mutator.spread(&mut region, 1, 4, 8, &mut rng),
            Err(GenerateError::Undergrowth {
                vertexes: 4,
                vmin: 8
            })
        );
    }
}
