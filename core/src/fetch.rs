/// Supplies the outgoing article links of a page, already filtered and
/// normalized to canonical form. Implementations own their HTTP client and
/// any memoization, which is why `fetch` takes `&mut self`. A dead or
/// unreachable page is an empty list, never an error: the search treats it
/// like a page with no outbound links.
pub trait PageLinkFetcher {
    fn fetch(&mut self, reference: &str) -> Vec<String>;
}
