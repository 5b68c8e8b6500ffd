use clap::Parser;
use std::io;
use std::process::ExitCode;
use termlife::cli::Cli;
use termlife::config::Config;
use termlife::display::{Display, Frame, Status, TerminalDisplay, TextDisplay};
use termlife::input::TerminalInput;
use termlife::settings::Settings;
use termlife::terminal::Terminal;
use termlife::{LifeError, Runner};

fn main() -> ExitCode {
    // Quiet by default so log lines do not scribble over the grid; RUST_LOG overrides
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .try_init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(cli: &Cli) -> Result<(), LifeError> {
    let settings = Settings::load();
    let config = Config::resolve(cli, &settings)?;
    let mut runner = Runner::new(&config)?;

    if cli.print {
        print_grid(&mut runner, cli.generations, &config)
    } else {
        run_interactive(&mut runner, &config)
    }
}

/// Advance `generations` steps, then write one plain-text frame to stdout
fn print_grid(runner: &mut Runner, generations: u64, config: &Config) -> Result<(), LifeError> {
    for _ in 0..generations {
        runner.step();
    }

    let frame = Frame {
        engine: runner.engine(),
        status: Some(Status {
            generation: runner.generation(),
            paused: true,
            controls: "",
        }),
    };
    let mut display = TextDisplay::new(io::stdout().lock(), config.glyphs);
    display.render(&frame)?;
    Ok(())
}

fn run_interactive(runner: &mut Runner, config: &Config) -> Result<(), LifeError> {
    // Dropping the display restores the terminal, on error paths too
    let term = Terminal::new()?;
    let mut display = TerminalDisplay::new(term, config.glyphs, config.width, config.height);
    runner.run(&mut display, &mut TerminalInput)?;
    Ok(())
}
