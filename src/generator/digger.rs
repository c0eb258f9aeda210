/*
digger.rs

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

//! Generate a board for a puzzle specification.
//!
//! One generation attempt carves the initial region, traces its outline, and grows the region
//! until the outline has enough vertexes. An attempt ends in one of three ways:
//!
//! - the outline is in the requested range of vertexes, and the objects are placed on the board;
//! - the outline is not a simple polygon, or an included cell is cut off from the playable area,
//!   and the attempt is discarded and started over with fresh randomness ([`AttemptError::Retry`]);
//! - the specification cannot be satisfied, and the generation fails ([`AttemptError::Fatal`]).

use log::{debug, info, warn};
use rand::Rng;
use serde::Serialize;
use std::time::Instant;
use thiserror::Error;

use super::board::Board;
use super::carver;
use super::mutator::Mutator;
use super::point::Point;
use super::puzzle_spec::{PuzzleSpec, SpecError};
use super::region::{Component, Region};
use super::scatter;
use super::tracer::{self, Outline, TraceError};
use crate::config;

/// Errors that abort the generation.
#[derive(Error, Debug, PartialEq)]
pub enum GenerateError {
    /// The specification is inconsistent.
    #[error("invalid specification: {0}")]
    Spec(#[from] SpecError),

    /// The included cells enclose an excluded cell.
    #[error("the excluded cell {point} cannot be linked to the border")]
    UnsatisfiableExclusion { point: Point },

    /// The outline has too many vertexes.
    #[error("the outline has {vertexes} vertexes, more than the maximum of {vmax}")]
    VertexOvershoot { vertexes: usize, vmax: usize },

    /// The outline has too few vertexes, and the region cannot grow anymore.
    #[error("the outline is stuck at {vertexes} vertexes, fewer than the minimum of {vmin}")]
    Undergrowth { vertexes: usize, vmin: usize },

    /// The playable area is too small for the objects.
    #[error("{requested} objects to place, but only {available} playable cells")]
    Starvation { available: usize, requested: usize },

    /// The excluded cells cover the whole square.
    #[error("no playable cell left in the square")]
    NoPlayableArea,

    /// Every attempt failed on a transient error.
    #[error("no valid board after {0} attempts")]
    AttemptsExhausted(usize),
}

/// Reason for discarding an attempt.
#[derive(Error, Debug, PartialEq)]
pub enum RetryReason {
    #[error("self-intersecting outline at {corner}")]
    SelfIntersectingBoundary { corner: Point },

    #[error("the included cell {point} is cut off from the playable area")]
    DisconnectedInclude { point: Point },
}

/// Outcome of a failed attempt.
#[derive(Debug, PartialEq)]
pub enum AttemptError {
    /// Discard the attempt and start over.
    Retry(RetryReason),

    /// Abort the generation.
    Fatal(GenerateError),
}

impl From<GenerateError> for AttemptError {
    fn from(error: GenerateError) -> Self {
        AttemptError::Fatal(error)
    }
}

impl From<TraceError> for AttemptError {
    fn from(error: TraceError) -> Self {
        match error {
            TraceError::NoFreeCell => AttemptError::Fatal(GenerateError::NoPlayableArea),
            TraceError::SelfIntersection { corner } => {
                AttemptError::Retry(RetryReason::SelfIntersectingBoundary { corner })
            }
        }
    }
}

/// Generation settings.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Maximum number of attempts. `None` retries forever.
    pub max_attempts: Option<usize>,

    /// Consecutive growth rounds without progress before giving up.
    pub max_stalled_rounds: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_attempts: Some(config::DEFAULT_MAX_ATTEMPTS),
            max_stalled_rounds: config::MAX_STALLED_ROUNDS,
        }
    }
}

/// Statistics of the last generation.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct GenerationReport {
    pub attempts: usize,
    pub retries: usize,
    pub growth_rounds: usize,
    pub growth_steps: usize,
    pub vertexes: usize,
    pub blocked_cells: usize,
    pub playable_cells: usize,

    /// Duration in seconds.
    pub duration: f32,
}

/// Walled area of a successful attempt.
struct Mine {
    region: Region,
    outline: Outline,
    playable: Component,
}

/// [`Generator`] object.
pub struct Generator {
    config: GeneratorConfig,

    /// Statistics of the last call to [`Generator::generate`].
    pub report: GenerationReport,
}

impl Generator {
    /// Create the object.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            report: GenerationReport::default(),
        }
    }

    /// Generate a board for the given specification.
    ///
    /// The random generator is the only source of randomness, so a seeded generator produces the
    /// same board for the same specification.
    ///
    /// # Errors
    ///
    /// The method returns an error when the specification is inconsistent or cannot be satisfied
    /// on the square, or when [`GeneratorConfig::max_attempts`] attempts have been discarded.
    pub fn generate<R>(&mut self, spec: &PuzzleSpec, rng: &mut R) -> Result<Board, GenerateError>
    where
        R: Rng + ?Sized,
    {
        spec.validate()?;
        self.report = GenerationReport::default();
        let start: Instant = Instant::now();

        let mine: Mine = loop {
            if let Some(max) = self.config.max_attempts
                && self.report.attempts >= max
            {
                return Err(GenerateError::AttemptsExhausted(max));
            }
            self.report.attempts += 1;
            debug!("== Attempt {}", self.report.attempts);

            match self.build_mine(spec, rng) {
                Ok(mine) => break mine,
                Err(AttemptError::Retry(reason)) => {
                    self.report.retries += 1;
                    warn!("Attempt {} discarded: {reason}", self.report.attempts);
                }
                Err(AttemptError::Fatal(error)) => return Err(error),
            }
        };

        let (start_position, boosters) =
            scatter::scatter_objects(spec, &mine.region, &mine.playable, rng)?;

        self.report.vertexes = mine.outline.len();
        self.report.blocked_cells = mine.region.len();
        self.report.playable_cells = mine.playable.len();
        self.report.duration = start.elapsed().as_secs_f32();
        info!(
            "Board generated: {} vertexes, {} attempts, {}s",
            self.report.vertexes, self.report.attempts, self.report.duration
        );

        Ok(Board {
            outline: mine.outline.vertexes,
            start_position,
            obstacles: Vec::new(),
            boosters,
        })
    }

    /// Run one attempt: carve, trace, and grow until the outline is in range.
    fn build_mine<R>(&mut self, spec: &PuzzleSpec, rng: &mut R) -> Result<Mine, AttemptError>
    where
        R: Rng + ?Sized,
    {
        let mut region: Region = carver::dig_holes(spec, rng)?;
        let mut outline: Outline = tracer::trace(&region)?;
        Self::verify_includes(spec, &region.connected_component(outline.origin_cell))?;

        let mut mutator: Option<Mutator> = None;
        let mut stalled: usize = 0;
        while outline.len() < spec.vmin {
            let vertexes: usize = outline.len();
            let attempts: usize = (spec.vmin - vertexes).div_ceil(2).max(1);
            debug!(
                "Outline has {vertexes} vertexes (min {}): {attempts} growth steps",
                spec.vmin
            );

            let m: &mut Mutator =
                mutator.get_or_insert_with(|| Mutator::new(&region, &spec.include_points));
            let accepted: usize = m.spread(&mut region, attempts, vertexes, spec.vmin, rng)?;
            self.report.growth_rounds += 1;
            self.report.growth_steps += accepted;

            stalled = if accepted == 0 { stalled + 1 } else { 0 };
            if stalled >= self.config.max_stalled_rounds {
                return Err(AttemptError::Fatal(GenerateError::Undergrowth {
                    vertexes,
                    vmin: spec.vmin,
                }));
            }
            outline = tracer::trace(&region)?;
        }

        if outline.len() > spec.vmax {
            return Err(AttemptError::Fatal(GenerateError::VertexOvershoot {
                vertexes: outline.len(),
                vmax: spec.vmax,
            }));
        }

        let playable: Component = region.connected_component(outline.origin_cell);
        Self::verify_includes(spec, &playable)?;
        region.debug();
        Ok(Mine {
            region,
            outline,
            playable,
        })
    }

    /// Verify that every included cell is in the playable area bounded by the outline.
    fn verify_includes(spec: &PuzzleSpec, playable: &Component) -> Result<(), AttemptError> {
        match spec.include_points.iter().find(|p| !playable.contains(**p)) {
            Some(p) => Err(AttemptError::Retry(RetryReason::DisconnectedInclude {
                point: *p,
            })),
            None => Ok(()),
        }
    }
}
