/*
check.rs

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

//! Verify that a board satisfies a puzzle specification.
//!
//! The checks mirror what the consumers of the board expect: a simple, counterclockwise,
//! rectilinear outline with the requested number of vertexes, and objects that lie strictly inside
//! the outline on distinct cells.

use std::collections::HashSet;
use thiserror::Error;

use super::board::{Board, BoosterKind};
use super::point::Point;
use super::puzzle_spec::PuzzleSpec;

/// First violation found in a board.
#[derive(Error, Debug, PartialEq)]
pub enum CheckError {
    #[error("the outline has only {0} vertexes")]
    TooFewVertexes(usize),

    #[error("the outline has {vertexes} vertexes, outside the [{vmin}, {vmax}] range")]
    VertexCount {
        vertexes: usize,
        vmin: usize,
        vmax: usize,
    },

    #[error("the vertex {0} is outside the square")]
    VertexOutOfBounds(Point),

    #[error("the vertex {0} appears twice in the outline")]
    RepeatedVertex(Point),

    #[error("the outline edge {from} -> {to} is not axis-aligned or does not turn")]
    NotRectilinear { from: Point, to: Point },

    #[error("the outline edges starting at {0} and {1} cross")]
    Crossing(Point, Point),

    #[error("the outline is not counterclockwise")]
    Clockwise,

    #[error("generated boards have no obstacles, found {0}")]
    Obstacles(usize),

    #[error("the {what} at {point} is not inside the outline")]
    Outside { what: String, point: Point },

    #[error("two objects share the cell {0}")]
    SharedCell(Point),

    #[error("expected {expected} {kind} boosters, found {found}")]
    BoosterCount {
        kind: BoosterKind,
        expected: usize,
        found: usize,
    },

    #[error("the excluded cell {0} is inside the outline")]
    ExcludedInside(Point),
}

/// Whether the cell lies inside the polygon.
///
/// The test casts a ray from the center of the cell toward `+x` and counts the vertical edges it
/// crosses. Coordinates are doubled so that the center has integer coordinates, which are odd and
/// therefore never aligned with a vertex.
pub fn contains_cell(polygon: &[Point], cell: Point) -> bool {
    let cx: i64 = 2 * cell.x as i64 + 1;
    let cy: i64 = 2 * cell.y as i64 + 1;
    let n: usize = polygon.len();
    let mut inside: bool = false;

    for i in 0..n {
        let a: Point = polygon[i];
        let b: Point = polygon[(i + 1) % n];
        if a.x != b.x {
            continue;
        }
        let low: i64 = 2 * a.y.min(b.y) as i64;
        let high: i64 = 2 * a.y.max(b.y) as i64;
        if low < cy && cy < high && 2 * a.x as i64 > cx {
            inside = !inside;
        }
    }
    inside
}

/// Twice the signed area of the polygon, positive for counterclockwise polygons.
fn signed_area2(polygon: &[Point]) -> i64 {
    let n: usize = polygon.len();
    (0..n)
        .map(|i| {
            let a: Point = polygon[i];
            let b: Point = polygon[(i + 1) % n];
            a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64
        })
        .sum()
}

/// Whether two axis-aligned segments share at least one point.
fn segments_touch(a: (Point, Point), b: (Point, Point)) -> bool {
    let (a_x0, a_x1) = (a.0.x.min(a.1.x), a.0.x.max(a.1.x));
    let (a_y0, a_y1) = (a.0.y.min(a.1.y), a.0.y.max(a.1.y));
    let (b_x0, b_x1) = (b.0.x.min(b.1.x), b.0.x.max(b.1.x));
    let (b_y0, b_y1) = (b.0.y.min(b.1.y), b.0.y.max(b.1.y));
    a_x0 <= b_x1 && b_x0 <= a_x1 && a_y0 <= b_y1 && b_y0 <= a_y1
}

/// Verify the outline alone: a simple, counterclockwise, rectilinear polygon in the square.
///
/// # Errors
///
/// The function returns the first violation.
pub fn check_outline(outline: &[Point], tsize: i32) -> Result<(), CheckError> {
    let n: usize = outline.len();
    if n < 4 {
        return Err(CheckError::TooFewVertexes(n));
    }

    let mut seen: HashSet<Point> = HashSet::with_capacity(n);
    for p in outline {
        if p.x < 0 || p.y < 0 || p.x > tsize || p.y > tsize {
            return Err(CheckError::VertexOutOfBounds(*p));
        }
        if !seen.insert(*p) {
            return Err(CheckError::RepeatedVertex(*p));
        }
    }

    // Edges alternate between horizontal and vertical
    let edge = |i: usize| (outline[i], outline[(i + 1) % n]);
    for i in 0..n {
        let (from, to) = edge(i);
        let (_, next) = edge((i + 1) % n);
        let horizontal: bool = from.y == to.y;
        let next_horizontal: bool = to.y == next.y;
        if (from.x == to.x) == horizontal || horizontal == next_horizontal {
            return Err(CheckError::NotRectilinear { from, to });
        }
    }

    // Non-adjacent edges must not share any point
    for i in 0..n {
        for j in i + 2..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            if segments_touch(edge(i), edge(j)) {
                return Err(CheckError::Crossing(outline[i], outline[j]));
            }
        }
    }

    if signed_area2(outline) <= 0 {
        return Err(CheckError::Clockwise);
    }
    Ok(())
}

/// Verify that the board satisfies the specification.
///
/// # Errors
///
/// The function returns the first violation.
pub fn check_board(board: &Board, spec: &PuzzleSpec) -> Result<(), CheckError> {
    check_outline(&board.outline, spec.tsize)?;

    let n: usize = board.outline.len();
    if n < spec.vmin || n > spec.vmax {
        return Err(CheckError::VertexCount {
            vertexes: n,
            vmin: spec.vmin,
            vmax: spec.vmax,
        });
    }
    if !board.obstacles.is_empty() {
        return Err(CheckError::Obstacles(board.obstacles.len()));
    }

    let mut used: HashSet<Point> = HashSet::new();
    let objects = std::iter::once(("start position".to_string(), board.start_position)).chain(
        board
            .boosters
            .iter()
            .map(|b| (format!("{} booster", b.kind), b.position)),
    );
    for (what, point) in objects {
        if !contains_cell(&board.outline, point) {
            return Err(CheckError::Outside { what, point });
        }
        if !used.insert(point) {
            return Err(CheckError::SharedCell(point));
        }
    }

    for kind in BoosterKind::all() {
        let expected: usize = spec.booster_count(kind);
        let found: usize = board.booster_count(kind);
        if expected != found {
            return Err(CheckError::BoosterCount {
                kind,
                expected,
                found,
            });
        }
    }

    for p in &spec.include_points {
        if !contains_cell(&board.outline, *p) {
            return Err(CheckError::Outside {
                what: "included cell".to_string(),
                point: *p,
            });
        }
    }
    for p in &spec.exclude_points {
        if contains_cell(&board.outline, *p) {
            return Err(CheckError::ExcludedInside(*p));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::board::Booster;

    fn points(v: &[(i32, i32)]) -> Vec<Point> {
        v.iter().map(|p| Point::from(*p)).collect()
    }

    fn notched() -> Vec<Point> {
        points(&[
            (0, 0),
            (10, 0),
            (10, 10),
            (0, 10),
            (0, 6),
            (6, 6),
            (6, 5),
            (0, 5),
        ])
    }

    #[test]
    fn test_contains_cell() {
        let outline: Vec<Point> = notched();
        assert!(contains_cell(&outline, Point::new(0, 0)));
        assert!(contains_cell(&outline, Point::new(9, 9)));
        assert!(contains_cell(&outline, Point::new(7, 5)));
        assert!(!contains_cell(&outline, Point::new(3, 5)));
        assert!(!contains_cell(&outline, Point::new(10, 3)));
        assert!(!contains_cell(&outline, Point::new(-1, 3)));
    }

    #[test]
    fn test_check_outline() {
        assert_eq!(check_outline(&notched(), 10), Ok(()));
        assert_eq!(
            check_outline(&points(&[(0, 0), (4, 0), (4, 4)]), 10),
            Err(CheckError::TooFewVertexes(3))
        );
        assert_eq!(
            check_outline(&points(&[(0, 0), (0, 4), (4, 4), (4, 0)]), 10),
            Err(CheckError::Clockwise)
        );
        assert_eq!(
            check_outline(&points(&[(0, 0), (4, 1), (4, 4), (0, 4)]), 10),
            Err(CheckError::NotRectilinear {
                from: Point::new(0, 0),
                to: Point::new(4, 1)
            })
        );
        assert_eq!(
            check_outline(&points(&[(0, 0), (12, 0), (12, 4), (0, 4)]), 10),
            Err(CheckError::VertexOutOfBounds(Point::new(12, 0)))
        );
        // Two squares touching by a corner
        let pinched: Vec<Point> = points(&[
            (0, 0),
            (2, 0),
            (2, 2),
            (4, 2),
            (4, 4),
            (2, 4),
            (2, 2),
            (0, 2),
        ]);
        assert_eq!(
            check_outline(&pinched, 10),
            Err(CheckError::RepeatedVertex(Point::new(2, 2)))
        );
        // Edges crossing away from the vertexes
        let crossing: Vec<Point> = points(&[
            (0, 0),
            (6, 0),
            (6, 4),
            (2, 4),
            (2, 2),
            (8, 2),
            (8, 6),
            (0, 6),
        ]);
        assert!(matches!(
            check_outline(&crossing, 10),
            Err(CheckError::Crossing(_, _))
        ));
    }

    #[test]
    fn test_check_board() {
        let mut spec: PuzzleSpec = PuzzleSpec::new(10, 4, 8);
        spec.drills = 1;
        spec.exclude_points = vec![Point::new(5, 5)];
        spec.include_points = vec![Point::new(5, 4)];
        let mut board: Board = Board {
            outline: notched(),
            start_position: Point::new(1, 1),
            obstacles: Vec::new(),
            boosters: vec![Booster {
                kind: BoosterKind::Drill,
                position: Point::new(8, 8),
            }],
        };
        assert_eq!(check_board(&board, &spec), Ok(()));

        board.boosters[0].position = Point::new(1, 1);
        assert_eq!(
            check_board(&board, &spec),
            Err(CheckError::SharedCell(Point::new(1, 1)))
        );

        board.boosters[0].position = Point::new(2, 5);
        assert_eq!(
            check_board(&board, &spec),
            Err(CheckError::Outside {
                what: "drill booster".to_string(),
                point: Point::new(2, 5)
            })
        );

        board.boosters[0].kind = BoosterKind::Wheel;
        board.boosters[0].position = Point::new(8, 8);
        assert_eq!(
            check_board(&board, &spec),
            Err(CheckError::BoosterCount {
                kind: BoosterKind::Wheel,
                expected: 0,
                found: 1
            })
        );

        board.boosters.clear();
        spec.drills = 0;
        spec.vmax = 6;
        assert_eq!(
            check_board(&board, &spec),
            Err(CheckError::VertexCount {
                vertexes: 8,
                vmin: 4,
                vmax: 6
            })
        );

        spec.vmax = 8;
        spec.exclude_points = vec![Point::new(7, 7)];
        assert_eq!(
            check_board(&board, &spec),
            Err(CheckError::ExcludedInside(Point::new(7, 7)))
        );
    }
}
