pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod download;
pub mod embedder;
pub mod fetcher;
pub mod json_output;

// Re-export commonly used items
pub use app::WikipathApp;
pub use args::{Args, EmbedderKind};
pub use embedder::{EmbedderBackend, RemoteEmbedder, WordTableEmbedder, tokenize_label};
pub use fetcher::{WIKI_PREFIX, WikipediaFetcher, extract_article_links};
