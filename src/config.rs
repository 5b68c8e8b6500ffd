use crate::cli::Cli;
use crate::display::Glyphs;
use crate::engine::MAX_CELLS;
use crate::error::LifeError;
use crate::patterns::{self, Pattern};
use crate::settings::Settings;
use std::time::Duration;

pub const DEFAULT_WIDTH: i64 = 50;
pub const DEFAULT_HEIGHT: i64 = 25;
pub const DEFAULT_SPEED_MS: i64 = 100;

/// Validated session configuration
#[derive(Clone)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub delay: Duration,               // Zero means run as fast as possible
    pub seed: Option<u64>,
    pub pattern: Option<&'static Pattern>,
    pub glyphs: Glyphs,
}

impl Config {
    /// Validate raw values, rejecting non-positive dimensions and negative speeds
    pub fn new(width: i64, height: i64, speed_ms: i64, seed: Option<u64>) -> Result<Self, LifeError> {
        if width <= 0 || height <= 0 {
            return Err(LifeError::InvalidDimension { width, height });
        }
        if (width as u64).checked_mul(height as u64).map_or(true, |n| n > MAX_CELLS) {
            return Err(LifeError::GridTooLarge { width, height, max: MAX_CELLS });
        }
        if speed_ms < 0 {
            return Err(LifeError::InvalidSpeed(speed_ms));
        }

        Ok(Self {
            width: width as usize,
            height: height as usize,
            delay: Duration::from_millis(speed_ms as u64),
            seed,
            pattern: None,
            glyphs: Glyphs::default(),
        })
    }

    /// Start from a preset instead of random soup
    pub fn with_pattern(mut self, name: &str) -> Result<Self, LifeError> {
        let pattern = patterns::find(name).ok_or_else(|| {
            LifeError::UnknownPattern(format!("{} (available: {})", name, patterns::names()))
        })?;
        self.pattern = Some(pattern);
        Ok(self)
    }

    pub fn with_glyphs(mut self, glyphs: Glyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Merge command-line flags over the settings file over built-in defaults
    pub fn resolve(cli: &Cli, settings: &Settings) -> Result<Self, LifeError> {
        let width = cli.width.or(settings.width).unwrap_or(DEFAULT_WIDTH);
        let height = cli.height.or(settings.height).unwrap_or(DEFAULT_HEIGHT);
        let speed = cli.speed.or(settings.speed).unwrap_or(DEFAULT_SPEED_MS);

        let defaults = Glyphs::default();
        let glyphs = Glyphs {
            alive: cli.alive.or(settings.alive_char).unwrap_or(defaults.alive),
            dead: cli.dead.or(settings.dead_char).unwrap_or(defaults.dead),
        };

        // Negative seeds are just another bit pattern for the generator
        let seed = cli.seed.map(|s| s as u64);
        let config = Self::new(width, height, speed, seed)?.with_glyphs(glyphs);
        match &cli.pattern {
            Some(name) => config.with_pattern(name),
            None => Ok(config),
        }
    }
}
