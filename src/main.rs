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

//! Command-line front end.
//!
//! Loads the configuration, runs exactly one subcommand against the fixed
//! track pool, and persists any state change before exiting. All domain
//! logic lives in the library; this file only wires user actions to it and
//! decides what to print.

use anyhow::{Context, Result, bail};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

use cupdraw::{
    catalog,
    cli::{Cli, Command},
    config::{self, AppConfig},
    model::{SelectedTrack, Track},
    picker, share,
    util::format::format_track_list,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut cfg = config::load_config();
    let pool = catalog::all_tracks();

    match cli.command {
        Command::Draw { count, seed, force } => cmd_draw(&mut cfg, &pool, count, seed, force),
        Command::Show => cmd_show(&cfg, &pool),
        Command::Open { token, save, force } => cmd_open(&mut cfg, &pool, &token, save, force),
        Command::Done { order } => cmd_done(&mut cfg, &pool, order),
        Command::Export => cmd_export(&cfg, &pool),
        Command::Reset { force } => cmd_reset(&mut cfg, force),
        Command::Tracks => cmd_tracks(&pool),
    }
}

/// Draws a fresh cup, replacing the current one and clearing progress.
fn cmd_draw(
    cfg: &mut AppConfig,
    pool: &[Track],
    count: Option<usize>,
    seed: Option<u64>,
    force: bool,
) -> Result<()> {
    guard_progress(cfg, force)?;

    let count = count.unwrap_or(cfg.cup_size);
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    let selection = picker::draw(pool, count, &mut rng)?;

    let token = share::encode(&selection);
    cfg.last_selection = Some(token.clone());
    cfg.completed.clear();
    config::save_config(cfg).context("Failed to save the new selection")?;

    print_selection(&selection, &cfg.completed);
    println!();
    println!("Share token: {token}");
    Ok(())
}

fn cmd_show(cfg: &AppConfig, pool: &[Track]) -> Result<()> {
    let Some(selection) = current_selection(cfg, pool)? else {
        println!("No cup drawn yet. Run `cupdraw draw` to get one.");
        return Ok(());
    };

    print_selection(&selection, &cfg.completed);
    if let Some(token) = &cfg.last_selection {
        println!();
        println!("Share token: {token}");
    }
    Ok(())
}

/// Decodes a token someone shared and prints it; with `--save` it becomes
/// the current cup and progress starts over.
fn cmd_open(
    cfg: &mut AppConfig,
    pool: &[Track],
    token: &str,
    save: bool,
    force: bool,
) -> Result<()> {
    let selection =
        share::decode(token, pool, None).context("Could not read the shared token")?;

    print_selection(&selection, &[]);

    if save {
        guard_progress(cfg, force)?;
        cfg.last_selection = Some(token.to_string());
        cfg.completed.clear();
        config::save_config(cfg).context("Failed to save the shared selection")?;
        println!();
        println!("Saved as the current cup.");
    }
    Ok(())
}

/// Toggles completion of one order number in the current cup.
fn cmd_done(cfg: &mut AppConfig, pool: &[Track], order: u32) -> Result<()> {
    let Some(selection) = current_selection(cfg, pool)? else {
        bail!("No cup drawn yet, nothing to mark done");
    };
    if order == 0 || order as usize > selection.len() {
        bail!(
            "Order {} is not in the current cup (valid orders are 1 to {})",
            order,
            selection.len()
        );
    }

    if let Some(position) = cfg.completed.iter().position(|&o| o == order) {
        cfg.completed.remove(position);
    } else {
        cfg.completed.push(order);
        cfg.completed.sort_unstable();
    }
    config::save_config(cfg).context("Failed to save progress")?;

    print_selection(&selection, &cfg.completed);
    Ok(())
}

fn cmd_export(cfg: &AppConfig, pool: &[Track]) -> Result<()> {
    let Some(selection) = current_selection(cfg, pool)? else {
        bail!("No cup drawn yet, nothing to export");
    };
    println!("{}", format_track_list(&selection));
    Ok(())
}

fn cmd_reset(cfg: &mut AppConfig, force: bool) -> Result<()> {
    guard_progress(cfg, force)?;
    cfg.last_selection = None;
    cfg.completed.clear();
    config::save_config(cfg).context("Failed to save configuration")?;
    println!("Cup cleared.");
    Ok(())
}

fn cmd_tracks(pool: &[Track]) -> Result<()> {
    for track in pool {
        println!("{:>2}  {} [{}]", track.id, track.name, track.badge());
    }
    Ok(())
}

/// Restores the persisted selection, if any.
///
/// A token that no longer decodes (hand-edited file, older format) is
/// surfaced as an error rather than silently discarded.
fn current_selection(cfg: &AppConfig, pool: &[Track]) -> Result<Option<Vec<SelectedTrack>>> {
    match &cfg.last_selection {
        Some(token) => {
            let selection = share::decode(token, pool, None)
                .context("The saved selection is unreadable, run `cupdraw reset --force`")?;
            Ok(Some(selection))
        }
        None => Ok(None),
    }
}

/// Refuses to discard completion progress unless `--force` is given.
fn guard_progress(cfg: &AppConfig, force: bool) -> Result<()> {
    if !force && !cfg.completed.is_empty() {
        bail!(
            "{} completed track(s) would be lost, pass --force to continue",
            cfg.completed.len()
        );
    }
    Ok(())
}

/// Prints the cup in running order with progress marks: `x` for completed
/// tracks and `>` for the next one up.
fn print_selection(selection: &[SelectedTrack], completed: &[u32]) {
    let next = next_track_order(selection, completed);
    let mut sorted: Vec<&SelectedTrack> = selection.iter().collect();
    sorted.sort_by_key(|s| s.order);

    for entry in sorted {
        let mark = if completed.contains(&entry.order) {
            'x'
        } else if next == Some(entry.order) {
            '>'
        } else {
            ' '
        };
        println!(
            "{mark} {:>2}. {} [{}]",
            entry.order,
            entry.track.name,
            entry.track.badge()
        );
    }

    if !completed.is_empty() {
        println!();
        println!(
            "{} of {} tracks completed",
            completed.len(),
            selection.len()
        );
    }
}

/// The lowest order number not yet completed, if any remain.
fn next_track_order(selection: &[SelectedTrack], completed: &[u32]) -> Option<u32> {
    selection
        .iter()
        .map(|s| s.order)
        .filter(|order| !completed.contains(order))
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cupdraw::model::Provenance;

    fn cup(orders: &[u32]) -> Vec<SelectedTrack> {
        orders
            .iter()
            .map(|&order| SelectedTrack {
                track: Track {
                    id: order,
                    name: format!("Track {order}"),
                    x: 0,
                    y: 0,
                    provenance: Provenance::New,
                },
                order,
            })
            .collect()
    }

    #[test]
    fn next_up_is_the_lowest_uncompleted_order() {
        let selection = cup(&[1, 2, 3, 4]);
        assert_eq!(next_track_order(&selection, &[]), Some(1));
        assert_eq!(next_track_order(&selection, &[1, 2]), Some(3));
        assert_eq!(next_track_order(&selection, &[2]), Some(1));
    }

    #[test]
    fn next_up_is_none_once_everything_is_done() {
        let selection = cup(&[1, 2]);
        assert_eq!(next_track_order(&selection, &[1, 2]), None);
    }

    #[test]
    fn progress_guard_blocks_without_force() {
        let cfg = AppConfig {
            completed: vec![1, 2],
            ..AppConfig::default()
        };
        assert!(guard_progress(&cfg, false).is_err());
        assert!(guard_progress(&cfg, true).is_ok());
        assert!(guard_progress(&AppConfig::default(), false).is_ok());
    }
}
