use super::Extractor;
use log::debug;
use scraper::{Html, Selector};

/// Reads JSON-LD from `<script type="application/ld+json">` elements of an
/// HTML page.
pub struct HtmlJsonLdExtractor;

const JSON_LD_MIME: &str = "application/ld+json";

fn json_ld_selector() -> Selector {
    Selector::parse("script[type='application/ld+json']").expect("Invalid JSON-LD selector")
}

impl Extractor for HtmlJsonLdExtractor {
    fn name(&self) -> &'static str {
        "HtmlJsonLdExtractor"
    }

    /// Text check only; the document is parsed once, in `payloads`.
    /// A false positive just yields no payloads.
    fn can_parse(&self, input: &str) -> bool {
        input.to_ascii_lowercase().contains(JSON_LD_MIME)
    }

    fn payloads(&self, input: &str) -> Vec<String> {
        let document = Html::parse_document(input);
        let scripts: Vec<String> = document
            .select(&json_ld_selector())
            .map(|script| script.text().collect::<String>())
            .collect();
        debug!(
            "HtmlJsonLdExtractor: Found {} JSON-LD script tags",
            scripts.len()
        );
        scripts
    }
}
