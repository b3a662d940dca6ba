use std::fmt::Write;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use log::{debug, warn};
use serde_json::Value;

use crate::config::NormalizeConfig;
use crate::duration::humanize;
use crate::extractors::RawRecipe;
use crate::instructions::build_tree;
use crate::model::Recipe;

/// Naive date-time layouts accepted after RFC 3339 has been tried
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Maps a raw schema.org `Recipe` object onto [`Recipe`].
///
/// Each field is handled on its own: a missing or odd-shaped field ends up
/// empty (or verbatim) without affecting the others.
pub struct Normalizer {
    date_format: String,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(&NormalizeConfig::default())
    }
}

impl Normalizer {
    pub fn new(config: &NormalizeConfig) -> Self {
        Self {
            date_format: config.date_format.clone(),
        }
    }

    pub fn normalize(&self, raw: &RawRecipe) -> Recipe {
        let rating = raw.get("aggregateRating");
        let recipe = Recipe {
            title: text_field(raw, "name"),
            url: text_field(raw, "url"),
            author: author(raw.get("author")),
            published: self.date(raw.get("datePublished")),
            modified: self.date(raw.get("dateModified")),
            description: text_field(raw, "description"),
            recipe_yield: text_field(raw, "recipeYield"),
            ingredients: ingredients(raw.get("recipeIngredient")),
            prep_time: duration(raw.get("prepTime")),
            cook_time: duration(raw.get("cookTime")),
            total_time: duration(raw.get("totalTime")),
            rating: text_of(rating.and_then(|r| r.get("ratingValue"))),
            rating_count: text_of(rating.and_then(|r| r.get("ratingCount"))),
            category: text_field(raw, "recipeCategory"),
            instructions: build_tree(raw.get("recipeInstructions")),
        };
        debug!(
            "Normalized {:?}: {} ingredients, {} steps",
            recipe.title,
            recipe.ingredients.len(),
            recipe.instructions.step_count()
        );
        recipe
    }

    /// Reformat an ISO 8601 date-time. Unparseable values are kept as written.
    fn date(&self, value: Option<&Value>) -> String {
        let raw = text_of(value);
        if raw.is_empty() {
            return raw;
        }
        let Some(parsed) = parse_datetime(&raw) else {
            warn!("Date not in ISO 8601 format: {raw:?}");
            return raw;
        };

        let mut out = String::new();
        if write!(out, "{}", parsed.format(&self.date_format)).is_err() {
            warn!("Invalid date format {:?}", self.date_format);
            return raw;
        }
        out
    }
}

/// Parse the date-time layouts publishers use, keeping the wall-clock time
/// as written (offsets are not applied).
fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(dt.naive_local());
    }
    NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

fn text_field(raw: &RawRecipe, key: &str) -> String {
    text_of(raw.get(key))
}

/// Plain text of a scalar-ish JSON value.
///
/// Numbers and booleans are written out, lists are joined with `", "` and
/// objects contribute their `text` field.
fn text_of(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| text_of(Some(item)))
            .collect::<Vec<_>>()
            .join(", "),
        Some(Value::Object(obj)) => obj
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
    }
}

fn author(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(name)) => name.clone(),
        // Entries without a name still take a slot in the joined list
        Some(Value::Array(authors)) => authors
            .iter()
            .map(|author| match author {
                Value::String(name) => name.clone(),
                other => name_of(other),
            })
            .collect::<Vec<_>>()
            .join(", "),
        Some(obj @ Value::Object(_)) => name_of(obj),
        _ => String::new(),
    }
}

fn name_of(value: &Value) -> String {
    value
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn ingredients(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().map(|item| text_of(Some(item))).collect(),
        Some(Value::String(single)) => vec![single.clone()],
        _ => Vec::new(),
    }
}

fn duration(value: Option<&Value>) -> String {
    let raw = text_of(value);
    if raw.is_empty() {
        return raw;
    }
    humanize(&raw)
}
