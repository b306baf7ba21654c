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

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cupdraw")]
#[command(about = "Draw a random race cup for Mario Kart World", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Draw a fresh random selection and make it the current cup
    Draw {
        #[arg(long, help = "Number of tracks to draw (defaults to the configured cup size)")]
        count: Option<usize>,
        #[arg(long, help = "Seed for a reproducible draw")]
        seed: Option<u64>,
        #[arg(long, help = "Discard completion progress without asking")]
        force: bool,
    },
    /// Show the current cup with completion progress
    Show,
    /// Decode a shared token and print it; optionally adopt it
    Open {
        token: String,
        #[arg(long, help = "Make the shared selection the current cup")]
        save: bool,
        #[arg(long, help = "Discard completion progress without asking")]
        force: bool,
    },
    /// Toggle completion of one track by its order number
    Done { order: u32 },
    /// Print the current cup as clipboard-ready text
    Export,
    /// Forget the current cup and all progress
    Reset {
        #[arg(long, help = "Discard completion progress without asking")]
        force: bool,
    },
    /// List every track in the pool
    Tracks,
}
