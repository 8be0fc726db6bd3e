#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub kind: LineKind,
    pub raw: String, // untrimmed, line ending stripped
    pub line_no: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    Blank,
    Component(ComponentTag),
    Card(CardTag),
    Heading(Heading),
    Image(String),
    Text,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComponentTag {
    pub name: String,
    pub remainder: String, // whatever follows `]` on the tag line
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardTag {
    pub id: Option<String>,
    pub remainder: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    pub level: u8,
    pub text: String,
}

impl Line {
    pub fn is_blank(&self) -> bool {
        matches!(self.kind, LineKind::Blank)
    }
}
