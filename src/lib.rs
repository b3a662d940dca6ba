//! Extracts schema.org recipes embedded as JSON-LD in web pages and
//! reformats them as Markdown.
//!
//! ```
//! let html = r#"<script type="application/ld+json">
//!     {"@type": "Recipe", "name": "Toast", "recipeInstructions": ["Toast the bread"]}
//! </script>"#;
//!
//! let markdown = reciformat::format_recipe(html).unwrap();
//! assert!(markdown.starts_with("# Toast\n"));
//! assert!(markdown.contains("1. Toast the bread\n"));
//! ```

pub mod config;
pub mod duration;
pub mod error;
pub mod extractors;
pub mod instructions;
pub mod markdown;
pub mod model;
pub mod normalize;
pub mod readers;

use log::debug;

pub use config::{load_config, Settings};
pub use error::ReciformatError;
pub use extractors::{locate_recipe, Extractor, RawRecipe};
pub use markdown::render_recipe;
pub use model::{InstructionNode, Recipe};
pub use normalize::Normalizer;

/// Locate and normalize the recipe in `document` using default settings.
pub fn parse_recipe(document: &str) -> Result<Recipe, ReciformatError> {
    parse_recipe_with_config(document, &Settings::default())
}

/// Locate and normalize the recipe in `document`.
///
/// Returns [`ReciformatError::NoRecipeFound`] when no JSON-LD payload
/// describes a `Recipe`.
pub fn parse_recipe_with_config(
    document: &str,
    settings: &Settings,
) -> Result<Recipe, ReciformatError> {
    let raw = locate_recipe(document, &settings.extract)?;
    let recipe = Normalizer::new(&settings.normalize).normalize(&raw);
    debug!("{:#?}", recipe);
    Ok(recipe)
}

/// Parse `document` and render the recipe as Markdown.
pub fn format_recipe(document: &str) -> Result<String, ReciformatError> {
    format_recipe_with_config(document, &Settings::default())
}

pub fn format_recipe_with_config(
    document: &str,
    settings: &Settings,
) -> Result<String, ReciformatError> {
    let recipe = parse_recipe_with_config(document, settings)?;
    Ok(render_recipe(&recipe))
}
