use log::{debug, warn};
use serde_json::Value;

use crate::model::InstructionNode;

const TYPE_TAG: &str = "@type";
const HOW_TO_STEP: &str = "HowToStep";
const HOW_TO_SECTION: &str = "HowToSection";

/// Build the instruction tree from a raw `recipeInstructions` value.
///
/// The result is always an unnamed root section. Plain strings and
/// `HowToStep` objects become steps, `HowToSection` objects become nested
/// sections built from their `itemListElement`. Anything else is logged and
/// dropped.
pub fn build_tree(instructions: Option<&Value>) -> InstructionNode {
    let children = match instructions {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => build_children(items),
        // A lone string or object is treated as a one-element list
        Some(single) => build_children(std::slice::from_ref(single)),
    };
    InstructionNode::section(None, children)
}

fn build_children(items: &[Value]) -> Vec<InstructionNode> {
    items.iter().filter_map(build_node).collect()
}

fn build_node(item: &Value) -> Option<InstructionNode> {
    match item {
        Value::String(text) => Some(InstructionNode::step(text.as_str())),
        Value::Object(_) if has_type(item, HOW_TO_STEP) => {
            // Prefer text over name
            let text = item
                .get("text")
                .and_then(Value::as_str)
                .or_else(|| item.get("name").and_then(Value::as_str))
                .unwrap_or_default();
            Some(InstructionNode::step(text))
        }
        Value::Object(_) if has_type(item, HOW_TO_SECTION) => {
            let name = item
                .get("name")
                .and_then(Value::as_str)
                .filter(|name| !name.is_empty())
                .map(str::to_string);
            let children = match item.get("itemListElement") {
                Some(Value::Array(items)) => build_children(items),
                Some(Value::Null) | None => Vec::new(),
                Some(single) => build_children(std::slice::from_ref(single)),
            };
            debug!(
                "Section {:?} with {} entries",
                name.as_deref().unwrap_or(""),
                children.len()
            );
            Some(InstructionNode::section(name, children))
        }
        other => {
            let found = other.get(TYPE_TAG).cloned().unwrap_or(Value::Null);
            warn!("Step type not recognised: {found}");
            None
        }
    }
}

/// `@type` may be a single string or a list of strings
fn has_type(item: &Value, wanted: &str) -> bool {
    match item.get(TYPE_TAG) {
        Some(Value::String(t)) => t == wanted,
        Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some(wanted)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn step(text: &str) -> InstructionNode {
        InstructionNode::step(text)
    }

    #[test]
    fn test_missing_instructions_give_empty_root() {
        assert_eq!(build_tree(None), InstructionNode::root());
        assert_eq!(build_tree(Some(&json!([]))), InstructionNode::root());
        assert_eq!(build_tree(Some(&Value::Null)), InstructionNode::root());
    }

    #[test]
    fn test_plain_strings() {
        let tree = build_tree(Some(&json!(["Chop", "Fry"])));
        assert_eq!(
            tree,
            InstructionNode::section(None, vec![step("Chop"), step("Fry")])
        );
    }

    #[test]
    fn test_single_string_is_one_step() {
        let tree = build_tree(Some(&json!("Mix everything and bake.")));
        assert_eq!(
            tree,
            InstructionNode::section(None, vec![step("Mix everything and bake.")])
        );
    }

    #[test]
    fn test_how_to_step_prefers_text_over_name() {
        let tree = build_tree(Some(&json!([
            {"@type": "HowToStep", "name": "Short", "text": "Long version"},
            {"@type": "HowToStep", "name": "Only a name"},
            {"@type": "HowToStep"}
        ])));
        assert_eq!(
            tree,
            InstructionNode::section(
                None,
                vec![step("Long version"), step("Only a name"), step("")]
            )
        );
    }

    #[test]
    fn test_nested_sections_keep_order() {
        let tree = build_tree(Some(&json!([
            "Preheat the oven",
            {
                "@type": "HowToSection",
                "name": "Dough",
                "itemListElement": [
                    {"@type": "HowToStep", "text": "Mix flour"},
                    {
                        "@type": "HowToSection",
                        "name": "Filling",
                        "itemListElement": ["Stir jam"]
                    },
                    {"@type": "HowToStep", "text": "Roll out"}
                ]
            },
            {"@type": "HowToStep", "text": "Bake"}
        ])));

        let expected = InstructionNode::section(
            None,
            vec![
                step("Preheat the oven"),
                InstructionNode::section(
                    Some("Dough".to_string()),
                    vec![
                        step("Mix flour"),
                        InstructionNode::section(
                            Some("Filling".to_string()),
                            vec![step("Stir jam")],
                        ),
                        step("Roll out"),
                    ],
                ),
                step("Bake"),
            ],
        );
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_section_without_name_is_anonymous() {
        let tree = build_tree(Some(&json!([
            {"@type": "HowToSection", "name": "", "itemListElement": ["a"]},
            {"@type": "HowToSection", "itemListElement": ["b"]}
        ])));
        assert_eq!(
            tree,
            InstructionNode::section(
                None,
                vec![
                    InstructionNode::section(None, vec![step("a")]),
                    InstructionNode::section(None, vec![step("b")]),
                ]
            )
        );
    }

    #[test]
    fn test_unknown_types_are_dropped() {
        let tree = build_tree(Some(&json!([
            {"@type": "HowToTip", "text": "Use a sharp knife"},
            {"text": "No type at all"},
            42,
            "Keep me"
        ])));
        assert_eq!(tree, InstructionNode::section(None, vec![step("Keep me")]));
    }

    #[test]
    fn test_type_list_is_accepted() {
        let tree = build_tree(Some(&json!([
            {"@type": ["HowToStep", "ListItem"], "text": "Whisk"}
        ])));
        assert_eq!(tree, InstructionNode::section(None, vec![step("Whisk")]));
    }
}
