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

//! End-to-end cup lifecycle over the real track pool: draw, share, restore.

use rand::{SeedableRng, rngs::StdRng};

use cupdraw::catalog;
use cupdraw::picker::draw;
use cupdraw::share::{DecodeError, decode, encode};
use cupdraw::util::format::format_track_list;

#[test]
fn a_drawn_cup_survives_the_share_round_trip() {
    let pool = catalog::all_tracks();
    let mut rng = StdRng::seed_from_u64(2026);

    let selection = draw(&pool, 16, &mut rng).unwrap();
    assert_eq!(selection.len(), 16);
    assert!(selection.iter().all(|s| (1..=30).contains(&s.track.id)));

    let mut orders: Vec<u32> = selection.iter().map(|s| s.order).collect();
    orders.sort_unstable();
    assert_eq!(orders, (1..=16).collect::<Vec<u32>>());

    let restored = decode(&encode(&selection), &pool, None).unwrap();
    let original_ids: Vec<(u32, u32)> = {
        let mut sorted = selection.clone();
        sorted.sort_by_key(|s| s.order);
        sorted.iter().map(|s| (s.track.id, s.order)).collect()
    };
    let restored_ids: Vec<(u32, u32)> =
        restored.iter().map(|s| (s.track.id, s.order)).collect();
    assert_eq!(restored_ids, original_ids);
}

#[test]
fn a_full_pool_cup_round_trips_too() {
    let pool = catalog::all_tracks();
    let mut rng = StdRng::seed_from_u64(7);

    let selection = draw(&pool, 30, &mut rng).unwrap();
    let restored = decode(&encode(&selection), &pool, None).unwrap();
    assert_eq!(restored.len(), 30);
}

#[test]
fn legacy_fixed_size_decoding_rejects_short_cups() {
    let pool = catalog::all_tracks();
    let mut rng = StdRng::seed_from_u64(3);

    let selection = draw(&pool, 4, &mut rng).unwrap();
    assert_eq!(
        decode(&encode(&selection), &pool, Some(16)),
        Err(DecodeError::WrongCount {
            expected: 16,
            found: 4
        })
    );
}

#[test]
fn exported_text_lists_the_cup_in_running_order() {
    let pool = catalog::all_tracks();
    let mut rng = StdRng::seed_from_u64(99);

    let selection = draw(&pool, 16, &mut rng).unwrap();
    let text = format_track_list(&selection);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Mario Kart World - Random Track Selection");
    assert_eq!(lines.len(), 18);
    for (index, line) in lines[2..].iter().enumerate() {
        assert!(
            line.starts_with(&format!("{}. ", index + 1)),
            "line {line:?} out of order"
        );
    }
}
