use std::{error::Error, path::PathBuf};

use crate::args::{Args, EmbedderKind};
use crate::download;
use crate::embedder::{EmbedderBackend, RemoteEmbedder, WordTableEmbedder};
use crate::fetcher::WikipediaFetcher;

/// The collaborators one search run is wired against.
pub struct WikipathApp {
    pub fetcher: WikipediaFetcher,
    pub embedder: EmbedderBackend,
}

impl WikipathApp {
    pub fn new(args: &Args) -> Result<Self, Box<dyn Error>> {
        let fetcher = WikipediaFetcher::new(args.quiet)?;

        let embedder = match args.embedder {
            EmbedderKind::Word2vec => {
                let vectors_path = resolve_vectors_path(args)?;
                EmbedderBackend::WordTable(WordTableEmbedder::load(&vectors_path)?)
            }
            EmbedderKind::Remote => {
                EmbedderBackend::Remote(RemoteEmbedder::new(args.endpoint.clone())?)
            }
        };

        Ok(Self { fetcher, embedder })
    }
}

fn resolve_vectors_path(args: &Args) -> Result<PathBuf, Box<dyn Error>> {
    if let Some(path) = &args.vectors {
        let path = PathBuf::from(path);
        if !path.exists() {
            return Err(format!("Vector table does not exist: {path:?}").into());
        }
        return Ok(path);
    }

    download::ensure_vectors_downloaded()
}
