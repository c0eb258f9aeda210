/*
puzzle_spec.rs

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

//! Puzzle specification: the constraints a generated board must satisfy.
//!
//! A specification is a single-line description:
//!
//! ```text
//! block,epoch,tsize,vmin,vmax,manipulators,wheels,drills,teleports,clonings,spawns#include#exclude
//! ```
//!
//! `include` lists the cells that must stay in the playable area, and `exclude` the cells that
//! must be walled off.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::board::BoosterKind;
use super::desc::{self, FIELD_SEPARATOR, ParseError};
use super::point::Point;

/// A rectilinear polygon has at least four vertexes.
pub const MIN_VERTEXES: usize = 4;

/// Inconsistent specification.
#[derive(Error, Debug, PartialEq)]
pub enum SpecError {
    #[error("the square size must be positive (tsize = {0})")]
    Size(i32),

    #[error("the minimum number of vertexes ({vmin}) exceeds the maximum ({vmax})")]
    VertexBounds { vmin: usize, vmax: usize },

    #[error("a polygon needs at least 4 vertexes, but the maximum is {vmax}")]
    VertexMaximum { vmax: usize },

    #[error("the point {point} is outside the {tsize}x{tsize} square")]
    OutOfBounds { point: Point, tsize: i32 },

    #[error("the point {0} is both included and excluded")]
    Conflict(Point),
}

/// Puzzle specification.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PuzzleSpec {
    /// Opaque block identifier.
    pub block: u64,

    /// Opaque epoch identifier.
    pub epoch: u64,

    /// Side of the square that holds the board.
    pub tsize: i32,

    /// Minimum number of vertexes of the outline.
    pub vmin: usize,

    /// Maximum number of vertexes of the outline.
    pub vmax: usize,

    pub manipulators: usize,
    pub wheels: usize,
    pub drills: usize,
    pub teleports: usize,
    pub clonings: usize,
    pub spawns: usize,

    /// Cells that must remain in the playable area.
    pub include_points: Vec<Point>,

    /// Cells that must be blocked.
    pub exclude_points: Vec<Point>,
}

impl PuzzleSpec {
    /// Create a [`PuzzleSpec`] object without boosters nor point constraints.
    #[cfg(test)]
    pub fn new(tsize: i32, vmin: usize, vmax: usize) -> Self {
        Self {
            tsize,
            vmin,
            vmax,
            ..Default::default()
        }
    }

    /// Number of boosters of the given type to place.
    pub fn booster_count(&self, kind: BoosterKind) -> usize {
        match kind {
            BoosterKind::Manipulator => self.manipulators,
            BoosterKind::Wheel => self.wheels,
            BoosterKind::Drill => self.drills,
            BoosterKind::Teleport => self.teleports,
            BoosterKind::Cloner => self.clonings,
            BoosterKind::Spawn => self.spawns,
        }
    }

    /// Total number of objects to place: the starting position and the boosters.
    pub fn object_count(&self) -> usize {
        1 + BoosterKind::all()
            .map(|k| self.booster_count(k))
            .sum::<usize>()
    }

    /// Verify that the specification is consistent before generating a board.
    ///
    /// # Errors
    ///
    /// The method returns an error when the square is empty, when the vertex bounds cannot be
    /// satisfied, when a point is outside the square, or when a point is both included and
    /// excluded.
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.tsize <= 0 {
            return Err(SpecError::Size(self.tsize));
        }
        if self.vmin > self.vmax {
            return Err(SpecError::VertexBounds {
                vmin: self.vmin,
                vmax: self.vmax,
            });
        }
        if self.vmax < MIN_VERTEXES {
            return Err(SpecError::VertexMaximum { vmax: self.vmax });
        }
        for p in self.include_points.iter().chain(self.exclude_points.iter()) {
            if p.x < 0 || p.y < 0 || p.x >= self.tsize || p.y >= self.tsize {
                return Err(SpecError::OutOfBounds {
                    point: *p,
                    tsize: self.tsize,
                });
            }
        }
        let include: HashSet<Point> = self.include_points.iter().copied().collect();
        if let Some(p) = self.exclude_points.iter().find(|p| include.contains(p)) {
            return Err(SpecError::Conflict(*p));
        }
        Ok(())
    }
}

/// Encode the specification description.
impl fmt::Display for PuzzleSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{},{},{},{},{},{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}",
            self.block,
            self.epoch,
            self.tsize,
            self.vmin,
            self.vmax,
            self.manipulators,
            self.wheels,
            self.drills,
            self.teleports,
            self.clonings,
            self.spawns,
            desc::dump_points(&self.include_points),
            desc::dump_points(&self.exclude_points),
        )
    }
}

/// Decode a specification description.
///
/// Decoding does not validate the specification; see [`PuzzleSpec::validate`].
impl FromStr for PuzzleSpec {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.trim().split(FIELD_SEPARATOR).collect();
        if fields.len() != 3 {
            return Err(ParseError::FieldCount {
                expected: 3,
                found: fields.len(),
            });
        }

        let header: Vec<&str> = fields[0].split(',').collect();
        if header.len() != 11 {
            return Err(ParseError::HeaderCount {
                expected: 11,
                found: header.len(),
            });
        }

        Ok(PuzzleSpec {
            block: desc::parse_integer("block", header[0])?,
            epoch: desc::parse_integer("epoch", header[1])?,
            tsize: desc::parse_integer("tsize", header[2])?,
            vmin: desc::parse_integer("vmin", header[3])?,
            vmax: desc::parse_integer("vmax", header[4])?,
            manipulators: desc::parse_integer("manipulators", header[5])?,
            wheels: desc::parse_integer("wheels", header[6])?,
            drills: desc::parse_integer("drills", header[7])?,
            teleports: desc::parse_integer("teleports", header[8])?,
            clonings: desc::parse_integer("clonings", header[9])?,
            spawns: desc::parse_integer("spawns", header[10])?,
            include_points: desc::parse_points(fields[1])?,
            exclude_points: desc::parse_points(fields[2])?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "1,1,150,400,1200,6,10,5,1,3,4#(73,61),(49,125),(73,110)#(145,82),(20,0)";

    #[test]
    fn test_decode() {
        let spec: PuzzleSpec = SAMPLE.parse().unwrap();
        assert_eq!(spec.block, 1);
        assert_eq!(spec.tsize, 150);
        assert_eq!(spec.vmin, 400);
        assert_eq!(spec.vmax, 1200);
        assert_eq!(spec.booster_count(BoosterKind::Manipulator), 6);
        assert_eq!(spec.booster_count(BoosterKind::Wheel), 10);
        assert_eq!(spec.booster_count(BoosterKind::Spawn), 4);
        assert_eq!(spec.object_count(), 1 + 6 + 10 + 5 + 1 + 3 + 4);
        assert_eq!(spec.include_points.len(), 3);
        assert_eq!(spec.exclude_points[1], Point::new(20, 0));
        assert_eq!(spec.validate(), Ok(()));
    }

    #[test]
    fn test_encode_round_trip() {
        let spec: PuzzleSpec = SAMPLE.parse().unwrap();
        assert_eq!(spec.to_string(), SAMPLE);
        let empty: PuzzleSpec = PuzzleSpec::new(10, 4, 8);
        assert_eq!(empty.to_string(), "0,0,10,4,8,0,0,0,0,0,0##");
        assert_eq!(empty.to_string().parse::<PuzzleSpec>(), Ok(empty));
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(
            "1,1,10,4,8,0,0,0,0,0,0#".parse::<PuzzleSpec>(),
            Err(ParseError::FieldCount {
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            "1,1,10,4,8,0,0,0,0,0##".parse::<PuzzleSpec>(),
            Err(ParseError::HeaderCount {
                expected: 11,
                found: 10
            })
        );
        assert!(matches!(
            "1,1,10,x,8,0,0,0,0,0,0##".parse::<PuzzleSpec>(),
            Err(ParseError::Integer { field: "vmin", .. })
        ));
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            PuzzleSpec::new(10, 9, 8).validate(),
            Err(SpecError::VertexBounds { vmin: 9, vmax: 8 })
        );
        assert_eq!(PuzzleSpec::new(0, 4, 8).validate(), Err(SpecError::Size(0)));
        assert_eq!(
            PuzzleSpec::new(10, 0, 2).validate(),
            Err(SpecError::VertexMaximum { vmax: 2 })
        );

        let mut spec: PuzzleSpec = PuzzleSpec::new(10, 4, 8);
        spec.include_points = vec![Point::new(3, 3)];
        spec.exclude_points = vec![Point::new(10, 3)];
        assert_eq!(
            spec.validate(),
            Err(SpecError::OutOfBounds {
                point: Point::new(10, 3),
                tsize: 10
            })
        );
        spec.exclude_points = vec![Point::new(3, 3)];
        assert_eq!(spec.validate(), Err(SpecError::Conflict(Point::new(3, 3))));
    }
}
