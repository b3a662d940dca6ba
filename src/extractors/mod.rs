use html_escape::decode_html_entities;
use log::{debug, warn};
use serde_json::{Map, Value};

use crate::config::ExtractConfig;
use crate::error::ReciformatError;

mod html_json_ld;
mod json_ld;

pub use self::html_json_ld::HtmlJsonLdExtractor;
pub use self::json_ld::JsonLdExtractor;

/// The located schema.org `Recipe` object, before normalization
pub type RawRecipe = Map<String, Value>;

const RECIPE: &str = "Recipe";
const TYPE_TAG: &str = "@type";
const GRAPH_TAG: &str = "@graph";

/// A way of pulling JSON-LD payloads out of a document.
///
/// Implementors only decide whether they understand the input and where its
/// payloads are; finding the recipe among those payloads is shared.
pub trait Extractor {
    fn name(&self) -> &'static str;

    fn can_parse(&self, input: &str) -> bool;

    /// Raw JSON-LD texts in document order
    fn payloads(&self, input: &str) -> Vec<String>;

    fn locate(&self, input: &str, config: &ExtractConfig) -> Option<RawRecipe> {
        find_recipe(&self.payloads(input), config)
    }
}

/// Extractors in the order they are tried
pub fn default_extractors() -> Vec<Box<dyn Extractor>> {
    vec![Box::new(HtmlJsonLdExtractor), Box::new(JsonLdExtractor)]
}

/// Find the recipe object in a document using the first extractor that
/// understands it.
pub fn locate_recipe(input: &str, config: &ExtractConfig) -> Result<RawRecipe, ReciformatError> {
    for extractor in default_extractors() {
        if !extractor.can_parse(input) {
            debug!("{}: cannot parse input", extractor.name());
            continue;
        }
        if let Some(recipe) = extractor.locate(input, config) {
            debug!("{}: found recipe", extractor.name());
            return Ok(recipe);
        }
        debug!("{}: no recipe among payloads", extractor.name());
    }
    Err(ReciformatError::NoRecipeFound)
}

/// Scan payloads in order and return the first object typed as a `Recipe`.
///
/// A payload that fails to parse is logged and skipped.
pub fn find_recipe(payloads: &[String], config: &ExtractConfig) -> Option<RawRecipe> {
    for (index, payload) in payloads.iter().enumerate() {
        let json = match parse_payload(payload, config.max_unescape_passes) {
            Ok(json) => json,
            Err(e) => {
                warn!("Parsing JSON-LD payload {index} failed: {e}");
                continue;
            }
        };

        for candidate in candidates(json) {
            if !is_recipe(&candidate) {
                continue;
            }
            if let Value::Object(recipe) = candidate {
                debug!("Recipe found in JSON-LD payload {index}");
                return Some(recipe);
            }
        }
    }
    None
}

/// Parse a payload, decoding one entity pass at a time until it is valid JSON.
///
/// Passes left over once the payload parses are spent on its string values,
/// so entities inside clean JSON are decoded without breaking its syntax.
fn parse_payload(payload: &str, max_passes: usize) -> Result<Value, serde_json::Error> {
    let max_passes = max_passes.max(1);
    let mut text = payload.to_string();
    let mut passes = 0;
    loop {
        let err = match serde_json::from_str::<Value>(&text) {
            Ok(mut json) => {
                decode_strings(&mut json, max_passes - passes);
                return Ok(json);
            }
            Err(e) => e,
        };
        if passes == max_passes {
            return Err(err);
        }
        let decoded = decode_html_entities(&text).into_owned();
        if decoded == text {
            return Err(err);
        }
        text = decoded;
        passes += 1;
    }
}

fn decode_strings(value: &mut Value, passes: usize) {
    if passes == 0 {
        return;
    }
    match value {
        Value::String(s) => *s = decode_entities(s, passes),
        Value::Array(items) => items.iter_mut().for_each(|item| decode_strings(item, passes)),
        Value::Object(obj) => obj.values_mut().for_each(|item| decode_strings(item, passes)),
        _ => {}
    }
}

/// Decode HTML entities until the text stops changing.
///
/// Some publishers escape their JSON-LD twice. Clean text is a fixed point,
/// so extra passes are harmless.
fn decode_entities(text: &str, max_passes: usize) -> String {
    let mut current = text.to_string();
    for _ in 0..max_passes.max(1) {
        let decoded = decode_html_entities(&current).into_owned();
        if decoded == current {
            break;
        }
        current = decoded;
    }
    current
}

/// Flatten the top level shapes (single object, `@graph` wrapper, list)
/// into one ordered list of candidates.
fn candidates(json: Value) -> Vec<Value> {
    match json {
        Value::Array(items) => items,
        Value::Object(mut obj) => match obj.remove(GRAPH_TAG) {
            Some(Value::Array(items)) => items,
            Some(graph) => vec![graph],
            None => vec![Value::Object(obj)],
        },
        _ => Vec::new(),
    }
}

fn is_recipe(value: &Value) -> bool {
    match value.get(TYPE_TAG) {
        Some(Value::String(t)) => t == RECIPE,
        Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some(RECIPE)),
        _ => false,
    }
}
