/*
board.rs

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

//! Generated board and its textual description.
//!
//! A board description has four `#` separated fields:
//!
//! ```text
//! outline#start_position#obstacles#boosters
//! ```
//!
//! The obstacles field is always empty for generated boards, but the decoder accepts `;` joined
//! point lists so that it can also read task descriptions. Boosters are `;` joined tokens made of
//! a type character followed by a point, such as `B(3,4);X(0,7)`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum_macros::FromRepr;

use super::desc::{self, FIELD_SEPARATOR, GROUP_SEPARATOR, ParseError};
use super::point::Point;

/// Type of a pickup item.
///
/// The order of the variants is the order in which the items are placed on the board.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr)]
#[repr(u8)]
pub enum BoosterKind {
    Manipulator,
    Wheel,
    Drill,
    Teleport,
    Cloner,
    Spawn,
}

impl BoosterKind {
    /// Number of booster types.
    pub const COUNT: usize = 6;

    /// Iterate over the booster types in placement order.
    pub fn all() -> impl Iterator<Item = BoosterKind> {
        (0..Self::COUNT as u8).filter_map(BoosterKind::from_repr)
    }

    /// Type character used in board descriptions.
    pub fn tag(self) -> char {
        match self {
            BoosterKind::Manipulator => 'B',
            BoosterKind::Wheel => 'F',
            BoosterKind::Drill => 'L',
            BoosterKind::Teleport => 'R',
            BoosterKind::Cloner => 'C',
            BoosterKind::Spawn => 'X',
        }
    }

    /// Booster type for the given type character.
    pub fn from_tag(tag: char) -> Option<BoosterKind> {
        BoosterKind::all().find(|k| k.tag() == tag)
    }
}

impl fmt::Display for BoosterKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BoosterKind::Manipulator => write!(f, "manipulator"),
            BoosterKind::Wheel => write!(f, "wheel"),
            BoosterKind::Drill => write!(f, "drill"),
            BoosterKind::Teleport => write!(f, "teleport"),
            BoosterKind::Cloner => write!(f, "cloner"),
            BoosterKind::Spawn => write!(f, "spawn"),
        }
    }
}

/// A pickup item and its position.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Booster {
    pub kind: BoosterKind,
    pub position: Point,
}

/// Result of a successful generation.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Board {
    /// Vertexes of the polygon that bounds the playable area, counterclockwise.
    pub outline: Vec<Point>,

    /// Starting position.
    pub start_position: Point,

    /// Obstacle polygons. Always empty for generated boards.
    pub obstacles: Vec<Vec<Point>>,

    /// Pickup items, grouped by type in placement order.
    pub boosters: Vec<Booster>,
}

impl Board {
    /// Number of boosters of the given type.
    pub fn booster_count(&self, kind: BoosterKind) -> usize {
        self.boosters.iter().filter(|b| b.kind == kind).count()
    }
}

/// Encode the board description.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let obstacles: Vec<String> = self
            .obstacles
            .iter()
            .map(|o| desc::dump_points(o))
            .collect();
        let boosters: Vec<String> = self
            .boosters
            .iter()
            .map(|b| format!("{}{}", b.kind.tag(), b.position))
            .collect();
        let separator: String = GROUP_SEPARATOR.to_string();
        write!(
            f,
            "{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}",
            desc::dump_points(&self.outline),
            self.start_position,
            obstacles.join(separator.as_str()),
            boosters.join(separator.as_str()),
        )
    }
}

/// Decode a board description.
impl FromStr for Board {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.trim().split(FIELD_SEPARATOR).collect();
        if fields.len() != 4 {
            return Err(ParseError::FieldCount {
                expected: 4,
                found: fields.len(),
            });
        }

        let outline: Vec<Point> = desc::parse_points(fields[0])?;

        let start: Vec<Point> = desc::parse_points(fields[1])?;
        if start.len() != 1 {
            return Err(ParseError::SinglePoint {
                field: "start position",
                found: start.len(),
            });
        }

        let mut obstacles: Vec<Vec<Point>> = Vec::new();
        for group in fields[2].split(GROUP_SEPARATOR).filter(|g| !g.trim().is_empty()) {
            obstacles.push(desc::parse_points(group)?);
        }

        let mut boosters: Vec<Booster> = Vec::new();
        for token in fields[3].split(GROUP_SEPARATOR).map(str::trim) {
            if token.is_empty() {
                continue;
            }
            let mut chars = token.chars();
            let kind: BoosterKind = chars
                .next()
                .and_then(BoosterKind::from_tag)
                .ok_or_else(|| ParseError::Booster(token.to_string()))?;
            let position: Vec<Point> = desc::parse_points(chars.as_str())
                .map_err(|_| ParseError::Booster(token.to_string()))?;
            match position[..] {
                [position] => boosters.push(Booster { kind, position }),
                _ => return Err(ParseError::Booster(token.to_string())),
            }
        }

        Ok(Board {
            outline,
            start_position: start[0],
            obstacles,
            boosters,
        })
    }
}
