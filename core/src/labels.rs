/// Get the trailing segment of a page reference (the part after the last
/// slash), e.g. `https://en.wikipedia.org/wiki/Python_(programming_language)`
/// -> `Python_(programming_language)`. This is the unit compared against the
/// target's label, not the full reference.
pub fn page_label(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}
