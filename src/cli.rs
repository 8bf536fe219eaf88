use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "snap-classify", about = "Classify images and keep a history of them")]
pub struct Args {
    /// Open a window instead of using the terminal
    #[arg(long)]
    pub gui: bool,

    /// Make the model fail to load
    #[arg(long)]
    pub fail_model_load: bool,

    /// Number of labels returned per classification
    #[arg(long)]
    pub top_k: Option<usize>,

    #[arg(long)]
    pub load_delay_ms: Option<u64>,

    #[arg(long)]
    pub classify_delay_ms: Option<u64>,

    /// Offset applied to log timestamps
    #[arg(long, allow_hyphen_values = true)]
    pub utc_offset_hours: Option<i32>,
}
