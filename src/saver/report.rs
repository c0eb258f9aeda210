/*
report.rs

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

//! Save the generation report.
//!
//! The saved object is a serialization of the [`GenerationReport`] object in JSON format by
//! using [`serde`].

use log::debug;
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use crate::generator::digger::GenerationReport;

/// Object to save a generation report.
pub struct SaverReport {
    /// Path to the report file.
    save_file: PathBuf,
}

impl SaverReport {
    /// Create a [`SaverReport`] object for the given file.
    pub fn new(save_file: PathBuf) -> Self {
        debug!("Report file: {save_file:?}");
        Self { save_file }
    }

    /// Save the provided [`GenerationReport`] object.
    pub fn save_report(&self, report: &GenerationReport) -> Result<(), Box<dyn Error>> {
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, report)?;
        writer.flush()?;
        Ok(())
    }
}
