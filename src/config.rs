/*
config.rs

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

//! Build-wide constants.

/// Program name.
pub const PROGRAM_NAME: &str = "lodedigger";

/// Copyright notice displayed by `--version`.
pub const COPYRIGHT_NOTICE: &str = "
Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";

/// Default number of carving attempts before giving up on self-intersecting outlines.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Number of consecutive growth rounds without any accepted step after which the region is
/// considered unable to grow.
pub const MAX_STALLED_ROUNDS: usize = 1000;

/// Suffix of the board file derived from the name of the puzzle file.
pub const SOLUTION_SUFFIX: &str = "-sol.desc";
