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

//! # Race Cup Randomizer.
//!
//! A terminal companion for Mario Kart World VS sessions: draws a random,
//! ordered cup of race tracks from the fixed pool, keeps it (and the
//! player's progress through it) across sessions, and shares it as a
//! compact URL-safe token.
//!
//! The library surface is deliberately narrow. Collaborators, whether the
//! command layer here or anything else, work through four operations:
//!
//! * [`picker::draw`] — a uniformly random ordered selection of a
//!   requested size.
//! * [`share::encode`] / [`share::decode`] — the reversible, validated
//!   token form of a selection.
//! * [`util::format::format_track_list`] — the plain-text listing for
//!   clipboard export.
//!
//! All four are synchronous pure functions over their arguments; the only
//! randomness is the caller-supplied generator handed to [`picker::draw`].
//! Where the selection token is stashed, be it a configuration file or a
//! URL query parameter, is the caller's business.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod model;
pub mod picker;
pub mod share;
pub mod util;
