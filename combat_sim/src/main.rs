//! combat_sim - Headless encounter runner for combat_core
//!
//! Usage: combat_sim [SEED] [ENEMY_COUNT] [--json]

mod simulation;

use anyhow::{bail, Context, Result};
use combat_core::prelude::*;
use simulation::{run_encounter, AutoPlayer};

const ENEMY_POOL: [&str; 3] = ["wolf", "goblin", "wolf"];
const MAX_PLAYER_ACTIONS: u32 = 500;

struct Options {
    seed: u64,
    enemies: usize,
    json: bool,
}

fn parse_args() -> Result<Options> {
    let mut options = Options {
        seed: 42,
        enemies: 3,
        json: false,
    };
    let mut positional = 0;

    for arg in std::env::args().skip(1) {
        if arg == "--json" {
            options.json = true;
            continue;
        }
        match positional {
            0 => options.seed = arg.parse().with_context(|| format!("invalid seed {arg}"))?,
            1 => {
                options.enemies = arg
                    .parse()
                    .with_context(|| format!("invalid enemy count {arg}"))?
            }
            _ => bail!("unexpected argument {arg}"),
        }
        positional += 1;
    }

    if options.enemies == 0 {
        bail!("need at least one enemy");
    }
    Ok(options)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = parse_args()?;

    let units = default_units().context("loading unit templates")?;
    let moves = default_moves().context("loading move templates")?;
    let constants = default_constants();

    let mut roster = vec![Unit::from_library(units.require("hero")?, 1, &moves)?];
    for index in 0..options.enemies {
        let id = if options.enemies == 1 {
            "ogre"
        } else {
            ENEMY_POOL[index % ENEMY_POOL.len()]
        };
        roster.push(Unit::from_library(units.require(id)?, 1, &moves)?);
    }

    let controller = EnemyController::from_library(&moves, "claw")?;
    let mut encounter = Encounter::with_seed(roster, controller, constants, options.seed)?;
    let report = run_encounter(&mut encounter, &AutoPlayer, options.seed, MAX_PLAYER_ACTIONS)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in report.lines() {
            println!("{line}");
        }
        println!(
            "-- {:?} after {} player action(s), hero at {} HP",
            report.final_state, report.player_actions, report.player_hp
        );
    }
    Ok(())
}
