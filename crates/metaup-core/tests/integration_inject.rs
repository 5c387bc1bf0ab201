//! Integration test: configuration through injection end to end.
//!
//! Builds an injector from a config with a single-origin match pattern and
//! runs it against a minimal server-rendered page, checking the exact
//! rewritten document and the duplication/error behaviors.

use metaup_core::config::MetaupConfig;
use metaup_core::injector::{self, InjectOutcome, Injector, CSP_META_TAG};

const EMPTY_PAGE: &str = "<html><head></head><body></body></html>";

fn single_origin_config() -> MetaupConfig {
    MetaupConfig {
        match_patterns: vec!["https://fava.example.com/*".to_string()],
        ..MetaupConfig::default()
    }
}

#[test]
fn matching_page_ends_up_with_exactly_one_meta_tag() {
    let injector = Injector::from_config(&single_origin_config()).unwrap();
    let (out, outcome) = injector
        .inject("https://fava.example.com/income_statement/", EMPTY_PAGE)
        .unwrap();

    assert_eq!(outcome, InjectOutcome::Injected);
    assert_eq!(
        out,
        format!("<html><head>{CSP_META_TAG}</head><body></body></html>")
    );
    assert_eq!(injector::tag_count(&out), 1);
}

#[test]
fn double_activation_appends_two_tags() {
    // Repeated activation is not deduplicated by default; this matches the
    // original injector, which appends unconditionally on every run.
    let injector = Injector::from_config(&single_origin_config()).unwrap();
    let url = "https://fava.example.com/";
    let (once, _) = injector.inject(url, EMPTY_PAGE).unwrap();
    let (twice, outcome) = injector.inject(url, &once).unwrap();

    assert_eq!(outcome, InjectOutcome::Injected);
    assert_eq!(injector::tag_count(&twice), 2);
}

#[test]
fn non_matching_origin_leaves_the_document_untouched() {
    let injector = Injector::from_config(&single_origin_config()).unwrap();
    let (out, outcome) = injector
        .inject("https://blog.example.com/post/1", EMPTY_PAGE)
        .unwrap();

    assert_eq!(outcome, InjectOutcome::Skipped);
    assert_eq!(out, EMPTY_PAGE);
}

#[test]
fn headless_document_fails_loudly() {
    let injector = Injector::from_config(&single_origin_config()).unwrap();
    let err = injector
        .inject("https://fava.example.com/", "<html><body></body></html>")
        .unwrap_err();
    assert!(err.to_string().contains("no head section"));
}

#[test]
fn realistic_page_is_modified_only_inside_the_head() {
    let page = concat!(
        "<!DOCTYPE html>\n",
        "<html lang=\"en\">\n",
        "<head>\n",
        "    <meta charset=\"utf-8\">\n",
        "    <title>Balance sheet</title>\n",
        "    <link rel=\"stylesheet\" href=\"/static/app.css\">\n",
        "    <script>var legend = \"</head>\";</script>\n",
        "</head>\n",
        "<body>\n",
        "    <h1>Balance sheet</h1>\n",
        "</body>\n",
        "</html>\n",
    );
    let injector = Injector::from_config(&single_origin_config()).unwrap();
    let (out, outcome) = injector
        .inject("https://fava.example.com/balance_sheet/", page)
        .unwrap();

    assert_eq!(outcome, InjectOutcome::Injected);
    assert_eq!(injector::tag_count(&out), 1);

    // Removing the injected tag restores the original document byte for byte.
    let at = out.find(CSP_META_TAG).unwrap();
    let mut stripped = out.clone();
    stripped.replace_range(at..at + CSP_META_TAG.len(), "");
    assert_eq!(stripped, page);

    // The tag sits at the end of the head's child list.
    assert!(out.contains(&format!("{CSP_META_TAG}</head>")));
}
