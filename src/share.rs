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

//! Selection tokens.
//!
//! A selection is shared and persisted as a compact token: the track ids in
//! running order, comma-joined, then base64-encoded with the URL-safe
//! alphabet so the token can sit in a query parameter untouched. There is
//! no compression and no checksum; a token can be decoded by eye, which is
//! worth more here than saving a few bytes.
//!
//! Decoding is all-or-nothing. A token either reproduces the exact
//! id-to-order mapping it was encoded from or fails with a typed error;
//! partially valid tokens are never salvaged.

use std::collections::HashSet;

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use thiserror::Error;

use crate::model::{SelectedTrack, Track};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("token is not valid base64")]
    InvalidToken,
    #[error("token payload is empty")]
    EmptyPayload,
    #[error("token entry `{0}` is not a track id")]
    InvalidId(String),
    #[error("expected {expected} tracks, token holds {found}")]
    WrongCount { expected: usize, found: usize },
    #[error("token holds {found} tracks but only {pool_size} exist")]
    TooManyTracks { found: usize, pool_size: usize },
    #[error("track id {0} appears more than once")]
    DuplicateId(u32),
    #[error("track id {0} is not in the pool")]
    UnknownId(u32),
}

/// Encodes a selection as a URL-safe token.
///
/// The selection is sorted by running order first, so the caller's element
/// order is irrelevant. Deterministic: the same id-to-order mapping always
/// yields the same token.
pub fn encode(selection: &[SelectedTrack]) -> String {
    let mut sorted: Vec<&SelectedTrack> = selection.iter().collect();
    sorted.sort_by_key(|s| s.order);

    let ids = sorted
        .iter()
        .map(|s| s.track.id.to_string())
        .collect::<Vec<_>>()
        .join(",");

    URL_SAFE_NO_PAD.encode(ids)
}

/// Decodes a token back into an ordered selection against `pool`.
///
/// Running order is recovered from each id's position in the token, which
/// is why [`encode`] emits ids in order. When `expected` is given the token
/// must hold exactly that many tracks; otherwise any count from one up to
/// the pool size is accepted.
///
/// # Errors
///
/// One [`DecodeError`] variant per failure class: bad base64 or non-UTF-8
/// payload, empty payload, an entry that is not an id, a count that
/// violates the size rule, a repeated id, or an id the pool does not
/// contain.
pub fn decode(
    token: &str,
    pool: &[Track],
    expected: Option<usize>,
) -> Result<Vec<SelectedTrack>, DecodeError> {
    let bytes = URL_SAFE_NO_PAD
        .decode(token)
        .map_err(|_| DecodeError::InvalidToken)?;
    let payload = String::from_utf8(bytes).map_err(|_| DecodeError::InvalidToken)?;

    if payload.is_empty() {
        return Err(DecodeError::EmptyPayload);
    }

    let ids = payload
        .split(',')
        .map(|entry| {
            entry
                .parse::<u32>()
                .map_err(|_| DecodeError::InvalidId(entry.to_string()))
        })
        .collect::<Result<Vec<u32>, DecodeError>>()?;

    if let Some(expected) = expected {
        if ids.len() != expected {
            return Err(DecodeError::WrongCount {
                expected,
                found: ids.len(),
            });
        }
    }
    if ids.len() > pool.len() {
        return Err(DecodeError::TooManyTracks {
            found: ids.len(),
            pool_size: pool.len(),
        });
    }

    let mut seen = HashSet::new();
    for &id in &ids {
        if !seen.insert(id) {
            return Err(DecodeError::DuplicateId(id));
        }
    }

    ids.into_iter()
        .enumerate()
        .map(|(position, id)| {
            let track = pool
                .iter()
                .find(|t| t.id == id)
                .ok_or(DecodeError::UnknownId(id))?;
            Ok(SelectedTrack {
                track: track.clone(),
                order: position as u32 + 1,
            })
        })
        .collect()
}
