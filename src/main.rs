//! Spud Blaster entry point
//!
//! Runs a headless session driven by seeded demo input and prints the final
//! snapshot as JSON. A windowed host links the library and supplies its own
//! clock, input and renderer.

use spud_blaster::consts::{SIM_DT, TARGET_FPS};
use spud_blaster::platform::{Clock, DemoInput, FixedClock, SystemClock};
use spud_blaster::renderer;
use spud_blaster::sim::Snapshot;
use spud_blaster::{Game, Settings};

struct Args {
    settings: Option<String>,
    seconds: f32,
    seed: u64,
    /// Pace frames with the wall clock instead of a fixed dt
    realtime: bool,
}

fn parse_args(argv: impl IntoIterator<Item = String>) -> Args {
    let mut args = Args {
        settings: None,
        seconds: 10.0,
        seed: 1,
        realtime: false,
    };

    let mut iter = argv.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--settings" => match iter.next() {
                Some(path) => args.settings = Some(path),
                None => log::warn!("--settings expects a path, using default settings"),
            },
            "--seconds" => match iter.next().map(|v| v.parse::<f32>()) {
                Some(Ok(seconds)) => args.seconds = seconds,
                _ => log::warn!("--seconds expects a number, keeping {}", args.seconds),
            },
            "--seed" => match iter.next().map(|v| v.parse::<u64>()) {
                Some(Ok(seed)) => args.seed = seed,
                _ => log::warn!("--seed expects an integer, keeping {}", args.seed),
            },
            "--realtime" => args.realtime = true,
            other => log::warn!("Ignoring unknown argument: {other}"),
        }
    }

    args
}

fn run<C: Clock>(settings: &Settings, args: &Args, clock: C) -> Snapshot {
    let mut game = Game::new(settings, clock);
    let mut demo = DemoInput::new(args.seed);
    let frames = (args.seconds.max(0.0) / SIM_DT) as u64;

    let mut snapshot = game.state().snapshot();
    let mut vertex_bytes = 0;
    for _ in 0..frames {
        demo.advance();
        snapshot = game.frame(&demo);
        vertex_bytes = renderer::as_bytes(&renderer::frame(&snapshot)).len();
    }

    log::info!(
        "Session over after {} frames: score {}, best {}, last frame {} vertex bytes",
        game.frames(),
        snapshot.score,
        game.best_score(),
        vertex_bytes
    );
    if settings.show_hud {
        log::info!("{}", snapshot.hud_text());
    }

    snapshot
}

fn main() {
    env_logger::init();
    log::info!("Spud Blaster (headless) starting...");

    let args = parse_args(std::env::args().skip(1));
    let settings = match &args.settings {
        Some(path) => Settings::load(path).unwrap_or_else(|e| {
            log::warn!("{e}; using default settings");
            Settings::default()
        }),
        None => Settings::default(),
    };

    let snapshot = if args.realtime {
        run(&settings, &args, SystemClock::new(TARGET_FPS))
    } else {
        run(&settings, &args, FixedClock::new(SIM_DT))
    };

    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize snapshot: {e}"),
    }
}
