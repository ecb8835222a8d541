use clap::{Parser, ValueEnum};

#[derive(Parser, Clone)]
#[command(name = "wikipath")]
#[command(about = "Find a path between two Wikipedia pages by following links semantically")]
pub struct Args {
    /// Start page link (e.g. https://en.wikipedia.org/wiki/Cheese)
    pub start_link: String,

    /// Target page link
    pub target_link: String,

    /// Embedding backend used to score candidate links
    #[arg(short, long, value_enum, default_value_t = EmbedderKind::Word2vec)]
    pub embedder: EmbedderKind,

    /// Path to a word-vector table (defaults to ~/.wikipath/vectors.bin,
    /// downloaded on demand)
    #[arg(long, value_name = "FILE")]
    pub vectors: Option<String>,

    /// Embedding service URL for the remote backend
    #[arg(long, value_name = "URL", default_value = "http://localhost:8080/embed")]
    pub endpoint: String,

    /// Similarity penalty per hop of path depth
    #[arg(short = 'p', long, value_name = "PENALTY", default_value = "0.1")]
    pub depth_penalty: f64,

    /// Give up after fetching this many pages
    #[arg(short = 'b', long, value_name = "COUNT")]
    pub page_budget: Option<usize>,

    /// Output the result as JSON
    #[arg(short, long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the path itself
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum EmbedderKind {
    /// Static word-vector table, labels averaged word by word
    Word2vec,
    /// Sentence-embedding inference service
    Remote,
}
