/*
desc.rs

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

//! Shared pieces of the textual description format.
//!
//! Puzzle specifications and boards are single-line descriptions. Fields are separated by `#`,
//! and points are written `(x,y)` and joined with commas, for example `(0,0),(4,0),(4,4),(0,4)`.

use std::str::FromStr;
use thiserror::Error;

use super::point::Point;

/// Field separator.
pub const FIELD_SEPARATOR: char = '#';

/// Separator between the groups of a field, such as the boosters of a board.
pub const GROUP_SEPARATOR: char = ';';

/// Errors raised when decoding a description.
#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    /// The description does not have the expected number of `#` separated fields.
    #[error("expected {expected} fields separated by '#', found {found}")]
    FieldCount { expected: usize, found: usize },

    /// The header of a puzzle specification does not have the expected number of integers.
    #[error("expected {expected} comma-separated integers in the header, found {found}")]
    HeaderCount { expected: usize, found: usize },

    /// An integer field cannot be parsed.
    #[error("invalid value {value:?} for {field}")]
    Integer { field: &'static str, value: String },

    /// A point list is malformed.
    #[error("invalid point list {0:?}")]
    Points(String),

    /// A booster token is malformed or uses an unknown type character.
    #[error("invalid booster {0:?}")]
    Booster(String),

    /// A field that must hold exactly one point holds none or several.
    #[error("expected a single point in {field}, found {found}")]
    SinglePoint { field: &'static str, found: usize },
}

/// Parse a comma-joined list of `(x,y)` points. An empty (or blank) field is an empty list.
pub fn parse_points(s: &str) -> Result<Vec<Point>, ParseError> {
    let s: &str = s.trim();
    let mut points: Vec<Point> = Vec::new();
    if s.is_empty() {
        return Ok(points);
    }

    let mut rest: &str = s;
    loop {
        let body: &str = rest
            .strip_prefix('(')
            .ok_or_else(|| ParseError::Points(s.to_string()))?;
        let (pair, tail) = body
            .split_once(')')
            .ok_or_else(|| ParseError::Points(s.to_string()))?;
        let (x, y) = pair
            .split_once(',')
            .ok_or_else(|| ParseError::Points(s.to_string()))?;
        let x: i32 = x
            .trim()
            .parse()
            .map_err(|_| ParseError::Points(s.to_string()))?;
        let y: i32 = y
            .trim()
            .parse()
            .map_err(|_| ParseError::Points(s.to_string()))?;
        points.push(Point::new(x, y));

        if tail.is_empty() {
            break;
        }
        rest = tail
            .strip_prefix(',')
            .ok_or_else(|| ParseError::Points(s.to_string()))?;
    }
    Ok(points)
}

/// Render a list of points as a comma-joined `(x,y)` list.
pub fn dump_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<String>>()
        .join(",")
}

/// Parse an integer field.
pub fn parse_integer<T: FromStr>(field: &'static str, value: &str) -> Result<T, ParseError> {
    value.trim().parse().map_err(|_| ParseError::Integer {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_points() {
        assert_eq!(parse_points(""), Ok(Vec::new()));
        assert_eq!(parse_points("  "), Ok(Vec::new()));
        assert_eq!(
            parse_points("(0,0),(10,2),(3,44)"),
            Ok(vec![Point::new(0, 0), Point::new(10, 2), Point::new(3, 44)])
        );
        assert_eq!(parse_points("(7, 8)"), Ok(vec![Point::new(7, 8)]));
    }

    #[test]
    fn test_parse_points_errors() {
        for bad in ["(1,2", "1,2", "(1;2)", "(1,2)(3,4)", "(1,2),", "(a,2)", "(1,2),x"] {
            assert!(
                matches!(parse_points(bad), Err(ParseError::Points(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_dump_points() {
        assert_eq!(dump_points(&[]), "");
        assert_eq!(
            dump_points(&[Point::new(1, 2), Point::new(30, 0)]),
            "(1,2),(30,0)"
        );
        let points: Vec<Point> = vec![Point::new(5, 6), Point::new(0, 9)];
        assert_eq!(parse_points(&dump_points(&points)), Ok(points));
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer::<usize>("vmin", " 12"), Ok(12));
        assert_eq!(
            parse_integer::<usize>("vmin", "-1"),
            Err(ParseError::Integer {
                field: "vmin",
                value: "-1".to_string()
            })
        );
    }
}
