//! Headless demo: runs a scripted encounter of the starblitz core and
//! prints a summary. Useful for profiling the sim and eyeballing logs.

use anyhow::Result;
use blitz_sim::motion::{Circle, CircleDir, FollowLeader, Motion, Path, Seek, Spiral};
use blitz_sim::{GameState, PlayerInput};
use clap::Parser;
use glam::Vec2;

#[derive(Parser, Debug)]
#[command(about = "starblitz headless encounter runner")]
struct Args {
    /// Number of fixed ticks to simulate.
    #[arg(long, default_value_t = 3600)]
    ticks: u32,
    /// Fixed timestep in seconds.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,
    /// RNG seed for pickup rolls.
    #[arg(long, default_value_t = 7)]
    seed: u64,
    /// Tick at which the boss is spawned.
    #[arg(long, default_value_t = 1200)]
    boss_tick: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut state = GameState::new(args.seed);
    let player = state.spawn_player(Vec2::new(0.0, -3.0));

    // Opening wave: a seeker, a circler, a spiral diver and a path patrol.
    let _ = state.spawn_enemy(
        "raider",
        Vec2::new(-6.0, 3.5),
        Motion::Seek(Seek::new(player, true, true)),
    );
    let _ = state.spawn_enemy(
        "spinner",
        Vec2::new(4.0, 2.0),
        Motion::Circle(Circle::new(
            Vec2::new(4.0, 2.0),
            2.5,
            CircleDir::CounterClockwise,
        )),
    );
    let _ = state.spawn_enemy(
        "spinner",
        Vec2::new(-3.0, 4.0),
        Motion::Spiral(Spiral::new(
            Circle::new(Vec2::new(0.0, 1.0), 3.0, CircleDir::Clockwise),
            0.5,
            1.0,
            Some(270.0),
        )),
    );
    let leader = state.spawn_enemy(
        "patrol",
        Vec2::new(-7.0, 3.0),
        Motion::Path(Path::new(
            vec![
                Vec2::new(-5.0, 3.0),
                Vec2::new(5.0, 3.0),
                Vec2::new(5.0, 1.0),
                Vec2::new(-5.0, 1.0),
            ],
            true,
            2.0,
            0.5,
        )),
    );
    if let Some(lead) = leader {
        for i in 0..3 {
            let _ = state.spawn_enemy(
                "drone",
                Vec2::new(-7.5 - i as f32 * 0.8, 3.0),
                Motion::FollowLeader(FollowLeader::new(lead, 0.25, 10)),
            );
        }
    }

    let mut audio_requests = 0usize;
    let mut pickup_drops = 0usize;
    for tick in 0..args.ticks {
        if tick == args.boss_tick {
            let _ = state.spawn_boss(Vec2::new(0.0, 6.0));
        }
        // Scripted input: strafe gently, fire a burst every third of a second.
        let input = PlayerInput {
            x: ((tick as f32) * 0.01).sin() * 0.6,
            y: 0.0,
            fire: tick % 20 == 0,
            bomb: false,
        };
        let ctx = state.step(args.dt, &input);
        audio_requests += ctx.audio.len();
        pickup_drops += ctx.pickups.len();
        for pos in ctx.pickups {
            log::debug!("pickup drop requested at {pos}");
        }
        if state.player_out_of_lives() {
            log::info!("player defeated at tick {tick}");
            break;
        }
    }

    log::info!(
        "done: tick={} score={} actors={} audio_requests={} pickup_drops={}",
        state.tick,
        state.score,
        state.actors.len(),
        audio_requests,
        pickup_drops
    );
    println!(
        "score {} after {} ticks ({} actors alive)",
        state.score,
        state.tick,
        state.actors.len()
    );
    Ok(())
}
