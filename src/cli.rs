use clap::Parser;

/// taskling — tiny task-list and counting demo
#[derive(Parser, Debug, Clone)]
#[command(name = "taskling", version, about)]
pub struct Cli {
    /// Starting value for the countdown section (default: 5)
    #[arg(long)]
    pub countdown_from: Option<i64>,

    /// Upper bound for the summation section (default: 10)
    #[arg(long)]
    pub sum_to: Option<i64>,

    /// Print task listings as JSON instead of plain text
    #[arg(long)]
    pub json: bool,

    /// Path to config file
    #[arg(long)]
    pub config: Option<String>,
}
