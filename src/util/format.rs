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

use crate::model::SelectedTrack;

const LIST_TITLE: &str = "Mario Kart World - Random Track Selection";

/// Renders a selection as a plain-text list suitable for pasting: a fixed
/// title, a rule of `=` characters, then one `<order>. <name> [<badge>]`
/// line per track in running order.
///
/// Pure text construction; handing the result to the system clipboard is
/// up to the caller.
pub fn format_track_list(selection: &[SelectedTrack]) -> String {
    let mut sorted: Vec<&SelectedTrack> = selection.iter().collect();
    sorted.sort_by_key(|s| s.order);

    let mut out = String::new();
    out.push_str(LIST_TITLE);
    out.push('\n');
    out.push_str(&"=".repeat(LIST_TITLE.len()));
    for entry in sorted {
        out.push('\n');
        out.push_str(&format!(
            "{}. {} [{}]",
            entry.order,
            entry.track.name,
            entry.track.badge()
        ));
    }
    out
}
