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

//! The fixed track pool.
//!
//! Every track in the game, with its position on the world map and its
//! provenance. The pool is built once at startup and treated as read-only
//! for the life of the process.

use crate::model::{Provenance, Track};

/// Width of the reference world map the coordinates are expressed against.
pub const MAP_REF_WIDTH: u32 = 1420;
/// Height of the reference world map.
pub const MAP_REF_HEIGHT: u32 = 800;

fn debut(id: u32, name: &str, x: u32, y: u32) -> Track {
    Track {
        id,
        name: name.to_string(),
        x,
        y,
        provenance: Provenance::New,
    }
}

fn retro(id: u32, name: &str, x: u32, y: u32, origin: &str) -> Track {
    Track {
        id,
        name: name.to_string(),
        x,
        y,
        provenance: Provenance::Returning {
            origin: origin.to_string(),
        },
    }
}

/// Builds the complete pool: 16 debut tracks and 14 returning ones.
pub fn all_tracks() -> Vec<Track> {
    vec![
        debut(1, "Mario Bros. Circuit", 420, 537),
        debut(2, "Crown City", 555, 607),
        debut(3, "Whistlestop Summit", 410, 687),
        debut(4, "DK Spaceport", 570, 717),
        debut(5, "Starview Peak", 940, 231),
        debut(6, "Faraway Oasis", 830, 587),
        debut(7, "Peach Stadium", 700, 510),
        debut(8, "Salty Salty Speedway", 930, 547),
        debut(9, "Great ? Block Ruins", 980, 697),
        debut(10, "Cheep Cheep Falls", 850, 472),
        debut(11, "Dandelion Depths", 810, 352),
        debut(12, "Boo Cinema", 850, 140),
        debut(13, "Dry Bones Burnout", 545, 177),
        debut(14, "Bowser's Castle", 480, 92),
        debut(15, "Acorn Heights", 690, 17),
        debut(16, "Rainbow Road", 700, 600),
        retro(17, "Desert Hills", 310, 623, "Mario Kart DS"),
        retro(18, "Shy Guy Bazaar", 310, 447, "Mario Kart 7"),
        retro(19, "Wario Stadium", 430, 387, "Mario Kart 64"),
        retro(20, "Airship Fortress", 350, 297, "Mario Kart DS"),
        retro(21, "DK Pass", 960, 392, "Mario Kart DS"),
        retro(22, "Sky-High Sundae", 1060, 322, "MK8 Booster Pass"),
        retro(23, "Wario's Galleon", 1080, 462, "Mario Kart 7"),
        retro(24, "Koopa Troopa Beach", 700, 695, "Super Mario Kart"),
        retro(25, "Peach Beach", 1060, 590, "Double Dash!!"),
        retro(26, "Dino Dino Jungle", 830, 745, "Double Dash!!"),
        retro(27, "Moo Moo Meadows", 680, 382, "Mario Kart Wii"),
        retro(28, "Choco Mountain", 570, 463, "Mario Kart 64"),
        retro(29, "Toad's Factory", 530, 322, "Mario Kart Wii"),
        retro(30, "Mario Circuit", 730, 282, "Super Mario Kart"),
    ]
}
