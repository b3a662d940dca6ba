use serde::Serialize;

/// A recipe normalized from a schema.org `Recipe` object.
///
/// Every text field defaults to an empty string when the source omits it,
/// so consumers never have to distinguish "absent" from "empty".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Recipe {
    pub title: String,
    pub url: String,
    /// Author display name(s), joined with `", "` when there are several
    pub author: String,
    pub published: String,
    pub modified: String,
    pub description: String,
    pub recipe_yield: String,
    pub ingredients: Vec<String>,
    pub prep_time: String,
    pub cook_time: String,
    pub total_time: String,
    pub rating: String,
    pub rating_count: String,
    pub category: String,
    /// Root of the instruction tree. Always an unnamed [`InstructionNode::Section`].
    pub instructions: InstructionNode,
}

/// One node of a recipe's instruction tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InstructionNode {
    Step {
        text: String,
    },
    Section {
        name: Option<String>,
        children: Vec<InstructionNode>,
    },
}

impl InstructionNode {
    /// An unnamed section with no children, used as the tree root.
    pub fn root() -> Self {
        InstructionNode::Section {
            name: None,
            children: Vec::new(),
        }
    }

    pub fn step(text: impl Into<String>) -> Self {
        InstructionNode::Step { text: text.into() }
    }

    pub fn section(name: Option<String>, children: Vec<InstructionNode>) -> Self {
        InstructionNode::Section { name, children }
    }

    /// Number of `Step` leaves anywhere below this node (a step counts itself).
    pub fn step_count(&self) -> usize {
        match self {
            InstructionNode::Step { .. } => 1,
            InstructionNode::Section { children, .. } => {
                children.iter().map(InstructionNode::step_count).sum()
            }
        }
    }
}

impl Default for InstructionNode {
    fn default() -> Self {
        InstructionNode::root()
    }
}
