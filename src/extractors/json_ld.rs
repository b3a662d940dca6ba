use super::Extractor;

/// Accepts input that already is a JSON-LD payload, as handed over by
/// readers that pull script contents out of a rendered page themselves.
pub struct JsonLdExtractor;

impl Extractor for JsonLdExtractor {
    fn name(&self) -> &'static str {
        "JsonLdExtractor"
    }

    fn can_parse(&self, input: &str) -> bool {
        let trimmed = input.trim_start();
        trimmed.starts_with('{') || trimmed.starts_with('[')
    }

    fn payloads(&self, input: &str) -> Vec<String> {
        vec![input.to_string()]
    }
}
