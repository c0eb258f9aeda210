/*
scatter.rs

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

//! Place the starting position and the boosters.

use log::debug;
use rand::Rng;
use std::collections::HashSet;

use super::board::{Booster, BoosterKind};
use super::digger::GenerateError;
use super::point::Point;
use super::puzzle_spec::PuzzleSpec;
use super::region::{Component, Region};

/// Draw random cells of the square until one is free, playable, and not used yet.
fn random_cell<R>(
    region: &Region,
    playable: &Component,
    used: &mut HashSet<Point>,
    rng: &mut R,
) -> Point
where
    R: Rng + ?Sized,
{
    let tsize: i32 = region.tsize();
    loop {
        let p: Point = Point::new(rng.random_range(0..tsize), rng.random_range(0..tsize));
        if region.contains(p) || !playable.contains(p) || used.contains(&p) {
            continue;
        }
        used.insert(p);
        return p;
    }
}

/// Place the starting position, then the boosters grouped by type.
///
/// All the objects are in the `playable` component, which must be free in `region`, and no two
/// objects share a cell.
///
/// # Errors
///
/// The function returns [`GenerateError::Starvation`] when the playable area has fewer cells than
/// the number of objects to place.
pub fn scatter_objects<R>(
    spec: &PuzzleSpec,
    region: &Region,
    playable: &Component,
    rng: &mut R,
) -> Result<(Point, Vec<Booster>), GenerateError>
where
    R: Rng + ?Sized,
{
    let requested: usize = spec.object_count();
    let available: usize = playable.len();
    if available < requested {
        return Err(GenerateError::Starvation {
            available,
            requested,
        });
    }

    let mut used: HashSet<Point> = HashSet::with_capacity(requested);
    let start: Point = random_cell(region, playable, &mut used, rng);

    let mut boosters: Vec<Booster> = Vec::with_capacity(requested - 1);
    for kind in BoosterKind::all() {
        for _ in 0..spec.booster_count(kind) {
            boosters.push(Booster {
                kind,
                position: random_cell(region, playable, &mut used, rng),
            });
        }
    }
    debug!(
        "Placed the start at {start} and {} boosters in {available} playable cells",
        boosters.len()
    );
    Ok((start, boosters))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_scatter() {
        let mut spec: PuzzleSpec = PuzzleSpec::new(6, 4, 8);
        spec.manipulators = 2;
        spec.drills = 3;
        spec.spawns = 1;
        let mut region: Region = Region::with_border(6);
        for y in 0..6 {
            region.insert(Point::new(2, y));
        }
        // Only the cells on the left of the wall are playable
        let playable: Component = region.connected_component(Point::new(0, 0));

        for seed in 0..10 {
            let mut rng: StdRng = StdRng::seed_from_u64(seed);
            let (start, boosters) = scatter_objects(&spec, &region, &playable, &mut rng).unwrap();
            let kinds: Vec<BoosterKind> = boosters.iter().map(|b| b.kind).collect();
            assert_eq!(
                kinds,
                vec![
                    BoosterKind::Manipulator,
                    BoosterKind::Manipulator,
                    BoosterKind::Drill,
                    BoosterKind::Drill,
                    BoosterKind::Drill,
                    BoosterKind::Spawn
                ]
            );
            let mut positions: HashSet<Point> = HashSet::from([start]);
            for b in &boosters {
                assert!(positions.insert(b.position));
            }
            for p in positions {
                assert!(p.x < 2 && p.y >= 0 && p.y < 6);
            }
        }
    }

    #[test]
    fn test_fills_every_cell() {
        let mut spec: PuzzleSpec = PuzzleSpec::new(2, 4, 8);
        spec.wheels = 3;
        let region: Region = Region::with_border(2);
        let playable: Component = region.connected_component(Point::new(0, 0));
        let mut rng: StdRng = StdRng::seed_from_u64(5);
        let (start, boosters) = scatter_objects(&spec, &region, &playable, &mut rng).unwrap();
        let mut all: Vec<Point> = boosters.iter().map(|b| b.position).collect();
        all.push(start);
        all.sort();
        assert_eq!(
            all,
            vec![
                Point::new(0, 0),
                Point::new(0, 1),
                Point::new(1, 0),
                Point::new(1, 1)
            ]
        );
    }

    #[test]
    fn test_starvation() {
        let mut spec: PuzzleSpec = PuzzleSpec::new(2, 4, 8);
        spec.teleports = 4;
        let region: Region = Region::with_border(2);
        let playable: Component = region.connected_component(Point::new(0, 0));
        let mut rng: StdRng = StdRng::seed_from_u64(0);
        assert_eq!(
            scatter_objects(&spec, &region, &playable, &mut rng),
            Err(GenerateError::Starvation {
                available: 4,
                requested: 5
            })
        );
    }
}
