use wikipath::{WIKI_PREFIX, extract_article_links};

const PAGE_URL: &str = "https://en.wikipedia.org/wiki/Cheese";

#[test]
fn test_relative_links_are_normalized_to_absolute() {
    let html = r#"<html><body><a href="/wiki/Milk">Milk</a></body></html>"#;
    let links = extract_article_links(html, PAGE_URL);
    assert_eq!(links, vec![format!("{WIKI_PREFIX}Milk")]);
}

#[test]
fn test_absolute_links_are_kept() {
    let html = r#"<a href="https://en.wikipedia.org/wiki/Milk">Milk</a>"#;
    let links = extract_article_links(html, PAGE_URL);
    assert_eq!(links, vec![format!("{WIKI_PREFIX}Milk")]);
}

#[test]
fn test_meta_namespace_links_are_dropped() {
    let html = r#"
        <a href="/wiki/Category:Dairy_products">category</a>
        <a href="/wiki/File:Cheese.jpg">image</a>
        <a href="/wiki/Help:Contents">help</a>
        <a href="/wiki/Milk">Milk</a>
    "#;
    let links = extract_article_links(html, PAGE_URL);
    assert_eq!(links, vec![format!("{WIKI_PREFIX}Milk")]);
}

#[test]
fn test_self_links_are_dropped() {
    let html = r#"
        <a href="/wiki/Cheese">this page</a>
        <a href="https://en.wikipedia.org/wiki/Cheese">this page again</a>
        <a href="/wiki/Milk">Milk</a>
    "#;
    let links = extract_article_links(html, PAGE_URL);
    assert_eq!(links, vec![format!("{WIKI_PREFIX}Milk")]);
}

#[test]
fn test_external_and_empty_links_are_dropped() {
    let html = r##"
        <a href="https://example.com/wiki/Milk">offsite</a>
        <a href="/not-wiki/Milk">wrong prefix</a>
        <a href="/wiki/">empty title</a>
        <a>no href</a>
        <a href="#History">fragment</a>
    "##;
    let links = extract_article_links(html, PAGE_URL);
    assert!(links.is_empty());
}

#[test]
fn test_order_and_duplicates_are_preserved() {
    // Deduplication belongs to the search engine's seen-set, not the
    // fetcher.
    let html = r#"
        <a href="/wiki/Milk">Milk</a>
        <a href="/wiki/Goat">Goat</a>
        <a href="/wiki/Milk">Milk again</a>
    "#;
    let links = extract_article_links(html, PAGE_URL);
    assert_eq!(
        links,
        vec![
            format!("{WIKI_PREFIX}Milk"),
            format!("{WIKI_PREFIX}Goat"),
            format!("{WIKI_PREFIX}Milk"),
        ]
    );
}
