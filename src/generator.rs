/*
generator.rs

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

//! Generate random cave boards.
//!
//! A [`puzzle_spec::PuzzleSpec`] object describes the constraints of a board: the size of the
//! square, the range of vertexes for the outline, the number of boosters of each type, and the
//! cells that must stay playable or must be walled off.
//!
//! A [`digger::Generator`] object turns a specification into a [`board::Board`] object in
//! several steps:
//!
//! * [`carver::dig_holes`] builds the initial blocked [`region::Region`]: the ring around the
//!   square, plus a wall linking every excluded cell to that ring.
//!   The walls follow the paths computed by [`path_search::find_path`].
//!
//! * [`tracer::trace`] walks the border of the playable area and returns its outline.
//!   If the border touches itself, then the attempt is discarded and the generator starts over.
//!
//! * While the outline has too few vertexes, a [`mutator::Mutator`] object grows the region one
//!   cell at a time without splitting the playable area, and the outline is traced again.
//!
//! * [`scatter::scatter_objects`] places the starting position and the boosters.
//!
//! Specifications and boards are exchanged as single-line text descriptions ([`desc`]).
//! [`check::check_board`] verifies a board against its specification.

pub mod board;
pub mod carver;
pub mod check;
pub mod desc;
pub mod digger;
pub mod mutator;
pub mod path_search;
pub mod point;
pub mod puzzle_spec;
pub mod region;
pub mod scatter;
pub mod tracer;
