//! Block Breaker entry point
//!
//! Sets up the terminal and runs the game loop.

use std::fs::File;
use std::io::{self, Stdout, stdout};
use std::time::Instant;

use anyhow::Context;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use block_breaker::Settings;
use block_breaker::platform::{Command, FrameClock, poll_command};
use block_breaker::renderer::{Surface, TerminalSurface, compose};
use block_breaker::sim::{GameEvent, GameState, Playfield, TickInput, tick};

/// Best-effort terminal restore for the panic path
fn restore_terminal() {
    use crossterm::{cursor, execute, terminal};
    let _ = terminal::disable_raw_mode();
    let _ = execute!(
        stdout(),
        cursor::Show,
        terminal::EnableLineWrap,
        terminal::LeaveAlternateScreen
    );
}

/// Report the game's own error first; a restore failure only surfaces when the
/// run itself succeeded
fn finish(result: anyhow::Result<()>, restored: io::Result<()>) -> anyhow::Result<()> {
    result?;
    restored.context("restoring terminal")
}

fn init_logging(settings: &Settings) -> anyhow::Result<()> {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if settings.log_file.is_some() {
            "info"
        } else {
            "error"
        }),
    );
    if let Some(path) = &settings.log_file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
    Ok(())
}

fn log_event(event: GameEvent) {
    match event {
        GameEvent::PaddleHit => log::trace!("Paddle hit"),
        GameEvent::BlockDestroyed { x, y } => log::debug!("Block at ({x}, {y}) destroyed"),
        GameEvent::LifeLost { lives_left } => log::info!("Life lost, {lives_left} left"),
        GameEvent::GameOver => log::info!("Game over"),
        GameEvent::Won => log::info!("Player won"),
    }
}

fn run(
    surface: &mut TerminalSurface<Stdout>,
    state: &mut GameState,
    rng: &mut Pcg32,
    settings: &Settings,
) -> anyhow::Result<()> {
    let mut clock = FrameClock::new(settings.frame_budget());

    loop {
        let frame_start = Instant::now();
        let dt = clock.tick();

        let command = poll_command().context("reading keyboard input")?;
        match command {
            Command::Quit => {
                log::info!("Quit with score {}", state.score);
                return Ok(());
            }
            Command::Restart if state.is_finished() => {
                state.reset();
                clock.reset();
            }
            _ => {}
        }

        let input = TickInput {
            direction: command.direction(),
        };
        for event in tick(state, &input, dt, rng) {
            log_event(event);
        }

        surface
            .draw_frame(&compose(state))
            .context("drawing frame")?;
        state.advance_animation();

        clock.pace(frame_start);
    }
}

fn main() -> anyhow::Result<()> {
    // Leave raw mode before the default hook prints the panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    let settings = Settings::load()?;
    init_logging(&settings)?;
    log::info!("Block Breaker starting...");

    let (width, height) = crossterm::terminal::size().context("querying terminal size")?;
    let field = Playfield::new(width, height)?;
    let mut state = GameState::new(field);

    let seed = settings.seed.unwrap_or_else(rand::random);
    let mut rng = Pcg32::seed_from_u64(seed);
    log::info!("Playfield {width}x{height}, seed {seed}");

    let mut surface = TerminalSurface::new(stdout(), settings.color);
    surface.enter().context("entering alternate screen")?;
    let result = run(&mut surface, &mut state, &mut rng, &settings);
    let restored = surface.restore();
    finish(result, restored)
}
