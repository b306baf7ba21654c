// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Random cup selection.
//!
//! Draws an ordered selection of distinct tracks from the pool. The whole
//! pool is shuffled and then truncated, so every subset of the requested
//! size is equally likely and, within it, every running order is equally
//! likely. Picking first and ordering afterwards would not give both
//! guarantees at once.

use rand::{Rng, seq::SliceRandom};
use thiserror::Error;

use crate::model::{SelectedTrack, Track};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DrawError {
    #[error("cup size must be between 1 and {pool_size}, requested {requested}")]
    CountOutOfRange { requested: usize, pool_size: usize },
}

/// Draws `count` distinct tracks from `pool` in a uniformly random running
/// order, assigning dense 1-based order numbers.
///
/// The random source is supplied by the caller so that draws can be
/// reproduced from a fixed seed.
///
/// # Errors
///
/// Returns [`DrawError::CountOutOfRange`] when `count` is zero or exceeds
/// the pool size. That is a caller bug, not a runtime condition, and is
/// never clamped silently.
pub fn draw(
    pool: &[Track],
    count: usize,
    rng: &mut impl Rng,
) -> Result<Vec<SelectedTrack>, DrawError> {
    if count == 0 || count > pool.len() {
        return Err(DrawError::CountOutOfRange {
            requested: count,
            pool_size: pool.len(),
        });
    }

    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(count);

    Ok(shuffled
        .into_iter()
        .enumerate()
        .map(|(index, track)| SelectedTrack {
            track,
            order: index as u32 + 1,
        })
        .collect())
}
