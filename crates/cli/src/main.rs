// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokerdice round simulator.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::Result;
use clap::Parser;
use log::{error, info};

use pokerdice_core::{DiceRoller, Hand, PlayerId, RandomSource, SecureRandom, Standings};

mod strategy;

#[derive(Debug, Parser)]
struct Cli {
    /// Number of players.
    #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=10))]
    players: u8,
    /// Seed for a reproducible round.
    #[clap(long)]
    seed: Option<u64>,
    /// Number of rerolls for each player.
    #[clap(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=2))]
    rerolls: u8,
}

static NICKNAMES: &[&str] = &[
    "Alice", "Bob", "Carol", "Dave", "Erin", "Frank", "Grace", "Heidi", "Ivan", "Mike",
];

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        error!("{e}");
    }
}

fn run(cli: &Cli) -> Result<()> {
    let rng = match cli.seed {
        Some(seed) => SecureRandom::with_seed(seed),
        None => SecureRandom::new()?,
    };

    let mut roller = DiceRoller::new(rng);
    let hands = (0..cli.players)
        .map(|idx| play_turn(&mut roller, idx, cli.rerolls))
        .collect::<Result<Vec<_>>>()?;

    let standings = Standings::new(hands);
    for (pos, s) in standings.iter().enumerate() {
        println!(
            "{}. {:<6} {}  {}",
            pos + 1,
            nickname(s.player_id),
            s.hand,
            s.result
        );
    }

    if let Some(winner) = standings.winner() {
        println!("Winner: {}", nickname(winner.player_id));
    }

    Ok(())
}

/// Rolls a hand for a player and rerolls it following the player strategy.
fn play_turn<R: RandomSource>(
    roller: &mut DiceRoller<R>,
    idx: u8,
    rerolls: u8,
) -> Result<(PlayerId, Hand)> {
    let player_id = PlayerId::new(idx as u64);
    let mut hand = roller.roll()?;
    info!("{} rolled {hand}", nickname(player_id));

    for _ in 0..rerolls {
        let Some(req) = strategy::reroll_request(&hand) else {
            info!("{} keeps {hand}", nickname(player_id));
            break;
        };

        let outcome = roller.reroll(&mut hand, &req)?;
        info!(
            "{} rerolled {} dice {:?} into {hand}",
            nickname(player_id),
            outcome.rerolled,
            req.faces()
        );
    }

    Ok((player_id, hand))
}

fn nickname(player_id: PlayerId) -> &'static str {
    NICKNAMES[player_id.id() as usize % NICKNAMES.len()]
}
