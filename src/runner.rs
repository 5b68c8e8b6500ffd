//! Interactive session loop
//!
//! The runner owns the engine plus the session state (pause, running and a
//! generation counter that `clear` resets) and drives a single-threaded
//! render / step / poll / sleep loop.

use crate::config::Config;
use crate::display::{Display, Frame, Status};
use crate::engine::Engine;
use crate::error::LifeError;
use crate::input::{Command, InputSource, CONTROLS};
use log::{debug, info};
use std::io;
use std::thread;
use std::time::Duration;

/// How long a paused frame waits for a key before redrawing
const PAUSED_POLL: Duration = Duration::from_millis(50);

pub struct Runner {
    engine: Engine,
    seed: Option<u64>,
    delay: Duration,
    paused: bool,
    running: bool,
    generation: u64,
}

impl Runner {
    /// Build the engine from `config`, stamping the configured preset
    /// centered on an empty grid if there is one.
    pub fn new(config: &Config) -> Result<Self, LifeError> {
        let mut engine = Engine::new(config.width, config.height, config.seed)?;

        if let Some(pattern) = config.pattern {
            let (w, h) = pattern.size();
            engine.clear();
            engine.stamp(
                pattern,
                config.width.saturating_sub(w) / 2,
                config.height.saturating_sub(h) / 2,
            );
        }

        Ok(Self {
            engine,
            seed: config.seed,
            delay: config.delay,
            paused: false,
            running: false,
            generation: 0,
        })
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Generations since start or the last clear
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn step(&mut self) {
        self.engine.step();
        self.generation += 1;
    }

    /// Reseed the grid with the session seed. The generation count carries on.
    pub fn randomize(&mut self) {
        self.engine.randomize(self.seed);
    }

    pub fn clear(&mut self) {
        self.engine.clear();
        self.generation = 0;
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Apply one keyboard command. Manual steps only happen while paused.
    pub fn apply(&mut self, command: Command) {
        debug!("command {:?} at generation {}", command, self.generation);
        match command {
            Command::TogglePause => self.toggle_pause(),
            Command::Step if self.paused => self.step(),
            Command::Step => {}
            Command::Randomize => self.randomize(),
            Command::Clear => self.clear(),
            Command::Quit => self.quit(),
        }
    }

    /// Current grid with the status line
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            engine: &self.engine,
            status: Some(Status {
                generation: self.generation,
                paused: self.paused,
                controls: CONTROLS,
            }),
        }
    }

    /// Run until a quit command arrives.
    ///
    /// Each frame renders, steps unless paused, applies at most one key and
    /// then sleeps for the configured delay unless paused. A paused frame
    /// instead waits briefly on the input source so the loop does not spin.
    pub fn run<D: Display, I: InputSource>(&mut self, display: &mut D, input: &mut I) -> io::Result<()> {
        self.running = true;
        info!(
            "running {}x{} grid (seed: {:?}, delay: {:?})",
            self.engine.width(),
            self.engine.height(),
            self.seed,
            self.delay
        );

        while self.running {
            display.render(&self.frame())?;

            if !self.paused {
                self.step();
            }

            let wait = if self.paused { PAUSED_POLL } else { Duration::ZERO };
            if let Some(command) = input.poll_key(wait)?.and_then(Command::from_key) {
                self.apply(command);
            }

            if self.running && !self.paused && !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
        }

        info!("stopped at generation {}", self.generation);
        Ok(())
    }
}
