use clap::Args;

/// Grid options shared by `carve` and `solve`; unset values come from the config file
#[derive(Args, Debug, Clone, Default)]
pub struct MazeArgs {
    /// Rooms per row
    #[arg(long, short = 'W')]
    pub width: Option<usize>,

    /// Rooms per column
    #[arg(long, short = 'H')]
    pub height: Option<usize>,

    /// Seed for the wall weights (random when omitted)
    #[arg(long, short)]
    pub seed: Option<u64>,
}
