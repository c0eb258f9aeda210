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

//! Save and restore board descriptions.
//!
//! The saved file is the single-line description of the [`Board`] object (see
//! [`crate::generator::board`]).

use log::debug;
use std::error::Error;
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::PathBuf;

use crate::generator::board::Board;

/// Object to save and restore a board.
pub struct SaverBoard {
    /// Path to the board file.
    save_file: PathBuf,
}

impl SaverBoard {
    /// Create a [`SaverBoard`] object for the given file.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("Board file: {save_file:?}");
        Self { save_file }
    }

    /// Path to the board file.
    pub fn path(&self) -> &PathBuf {
        &self.save_file
    }

    /// Retrieve the [`Board`] object from the board file.
    ///
    /// Return the [`Board`] object or None if the board file does not exist.
    pub fn get_board(&self) -> Result<Option<Board>, Box<dyn Error>> {
        let description: String = match fs::read_to_string(&self.save_file) {
            Ok(s) => s,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let board: Board = description.parse()?;
        Ok(Some(board))
    }

    /// Save the provided [`Board`] object.
    pub fn save_board(&self, board: &Board) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        write!(writer, "{board}")?;
        writer.flush()?;
        Ok(())
    }
}
