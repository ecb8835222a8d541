use reqwest::blocking::Client;
use rustc_hash::FxHashMap;
use scraper::{Html, Selector};
use std::time::Duration;
use wikipath_core::PageLinkFetcher;

pub const WIKI_PREFIX: &str = "https://en.wikipedia.org/wiki/";

/// Fetches Wikipedia pages and extracts their article links. Results are
/// memoized per run, failures included, so a dead page is only requested
/// once.
pub struct WikipediaFetcher {
    client: Client,
    cache: FxHashMap<String, Vec<String>>,
    quiet: bool,
}

impl WikipediaFetcher {
    pub fn new(quiet: bool) -> Result<Self, Box<dyn std::error::Error>> {
        let client = Client::builder()
            .user_agent(concat!(
                "wikipath/",
                env!("CARGO_PKG_VERSION"),
                " (https://github.com/malbiruk/wikipath)"
            ))
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(5))
            .build()?;

        Ok(Self {
            client,
            cache: FxHashMap::default(),
            quiet,
        })
    }

    fn fetch_uncached(&self, reference: &str) -> Vec<String> {
        if !self.quiet {
            println!("[#] requesting {reference}");
        }

        let body = match self
            .client
            .get(reference)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
        {
            Ok(body) => body,
            Err(error) => {
                if !self.quiet {
                    eprintln!("Failed to fetch {reference}: {error}");
                }
                return vec![];
            }
        };

        extract_article_links(&body, reference)
    }
}

impl PageLinkFetcher for WikipediaFetcher {
    fn fetch(&mut self, reference: &str) -> Vec<String> {
        if let Some(links) = self.cache.get(reference) {
            return links.clone();
        }

        let links = self.fetch_uncached(reference);
        self.cache.insert(reference.to_string(), links.clone());
        links
    }
}

/// Pulls every same-namespace article link out of a page, normalized to the
/// absolute wiki prefix regardless of how it appeared on the page. Meta
/// pages (colon in the title), links back to the page itself, and anything
/// outside the article namespace are dropped. Order and duplicates are
/// preserved; deduplication is the search engine's job.
pub fn extract_article_links(html: &str, page_url: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let anchors = Selector::parse("a").expect("anchor selector is valid");

    let mut links = Vec::new();
    for element in document.select(&anchors) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let Some(title) = article_title(href) else {
            continue;
        };

        let link = format!("{WIKI_PREFIX}{title}");
        if link != page_url {
            links.push(link);
        }
    }

    links
}

fn article_title(href: &str) -> Option<&str> {
    let title = href
        .strip_prefix(WIKI_PREFIX)
        .or_else(|| href.strip_prefix("/wiki/"))?;

    // Colons mark non-article namespaces (Category:, File:, Help:, ...).
    if title.is_empty() || title.contains(':') {
        return None;
    }

    Some(title)
}
