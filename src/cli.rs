use clap::Parser;

#[derive(Parser)]
#[command(name = "termlife")]
#[command(version)]
#[command(about = "Conway's Game of Life on a wrapping grid in your terminal", long_about = None)]
pub struct Cli {
    /// Grid width in cells [default: 50]
    #[arg(long, allow_negative_numbers = true)]
    pub width: Option<i64>,

    /// Grid height in cells [default: 25]
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<i64>,

    /// Delay between generations in milliseconds, 0 for none [default: 100]
    #[arg(long, allow_negative_numbers = true)]
    pub speed: Option<i64>,

    /// Random seed for reproducible grids
    #[arg(long, allow_negative_numbers = true)]
    pub seed: Option<i64>,

    /// Start from a preset: block, blinker, toad, beacon, glider, r-pentomino, lwss
    #[arg(short = 'P', long)]
    pub pattern: Option<String>,

    /// Character for living cells [default: █]
    #[arg(long)]
    pub alive: Option<char>,

    /// Character for dead cells [default: ░]
    #[arg(long)]
    pub dead: Option<char>,

    /// Print the grid to stdout instead of running interactively
    #[arg(short, long)]
    pub print: bool,

    /// Generations to advance before printing (print mode)
    #[arg(short, long, default_value = "0")]
    pub generations: u64,
}
