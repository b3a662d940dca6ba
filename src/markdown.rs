//! Renders a [`Recipe`] as a Markdown document.
//!
//! Output is fully determined by the recipe: rendering the same value twice
//! gives byte-identical text.

use crate::model::{InstructionNode, Recipe};

/// Markdown hard line break
const HARD_BREAK: &str = "  \n";

/// Heading level of `## Instructions`; nested sections go one level deeper each
const INSTRUCTIONS_LEVEL: usize = 2;
const MAX_HEADING_LEVEL: usize = 6;

/// Render `recipe` as Markdown
pub fn render_recipe(recipe: &Recipe) -> String {
    let mut output = String::new();

    output.push_str(&format!("# {}\n", recipe.title));

    let mut byline = String::new();
    if !recipe.url.is_empty() {
        byline.push_str(&format!("<{}>{HARD_BREAK}", recipe.url));
    }
    byline.push_str(&opt_lines(&[
        ("Author: ", &recipe.author),
        ("Published: ", &recipe.published),
        ("Modified: ", &recipe.modified),
    ]));
    push_block(&mut output, &byline);

    push_block(&mut output, &recipe.description);

    push_block(
        &mut output,
        &opt_lines(&[
            ("Yields: ", &recipe.recipe_yield),
            ("Prep time: ", &recipe.prep_time),
            ("Cooking time: ", &recipe.cook_time),
            ("Total time: ", &recipe.total_time),
        ]),
    );

    push_block(&mut output, "## Ingredients\n");
    push_block(&mut output, &bullet_points(&recipe.ingredients));

    push_block(&mut output, "## Instructions\n");
    render_section(&mut output, &recipe.instructions, 0);

    if !output.ends_with('\n') {
        output.push('\n');
    }
    output
}

/// Lines for every non-empty value, each ended with a hard line break
fn opt_lines(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(label, value)| format!("{label}{value}{HARD_BREAK}"))
        .collect()
}

fn bullet_points(items: &[String]) -> String {
    items.iter().map(|item| format!("- {item}\n")).collect()
}

/// Append `block` as its own paragraph. Empty blocks leave no trace.
fn push_block(output: &mut String, block: &str) {
    if block.is_empty() {
        return;
    }
    ensure_blank_line(output);
    output.push_str(block);
    if !block.ends_with('\n') {
        output.push('\n');
    }
}

fn ensure_blank_line(output: &mut String) {
    if output.is_empty() {
        return;
    }
    while !output.ends_with("\n\n") {
        output.push('\n');
    }
}

fn render_section(output: &mut String, node: &InstructionNode, depth: usize) {
    let InstructionNode::Section { name, children } = node else {
        return;
    };

    if depth > 0 {
        if let Some(name) = name.as_deref().filter(|name| !name.is_empty()) {
            let level = (INSTRUCTIONS_LEVEL + depth).min(MAX_HEADING_LEVEL);
            ensure_blank_line(output);
            output.push_str(&format!("{} {name}\n", "#".repeat(level)));
        }
    }

    // Numbering is local to this section and survives nested sections
    let mut number = 0;
    let mut after_section = false;
    for child in children {
        match child {
            InstructionNode::Step { text } => {
                number += 1;
                if number == 1 || after_section {
                    ensure_blank_line(output);
                }
                output.push_str(&format!("{number}. {text}\n"));
                after_section = false;
            }
            InstructionNode::Section { .. } => {
                render_section(output, child, depth + 1);
                after_section = true;
            }
        }
    }
}
