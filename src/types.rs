use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NarrativeOutput {
    pub items: Vec<ContentNode>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub warnings: Vec<Diagnostic>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentNode {
    Title(TitleNode),
    Text(TextNode),
    Card(CardNode),
    Component(ComponentNode),
    Image(ImageNode),
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TitleNode {
    pub id: String,
    pub level: u8, // 1 = main title, 2 = subtitle
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TextNode {
    pub id: String,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardNode {
    pub id: String,
    pub title: Option<String>, // "HH:MM" timestamp
    pub text: String,
    pub align: Align,
    pub trigger_after: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentNode {
    pub id: String,
    pub component_name: String,
    pub content: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ImageNode {
    pub src: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    #[default]
    Right,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    pub line_no: usize,
    pub kind: DiagnosticKind,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum DiagnosticKind {
    /// A `(` argument block that never saw its closing `)` line; it ran to
    /// the end of the document.
    UnterminatedComponentArgs { component: String },
}

impl ContentNode {
    pub fn as_card(&self) -> Option<&CardNode> {
        match self {
            ContentNode::Card(card) => Some(card),
            _ => None,
        }
    }

    pub fn as_card_mut(&mut self) -> Option<&mut CardNode> {
        match self {
            ContentNode::Card(card) => Some(card),
            _ => None,
        }
    }
}
