use crate::args;
use crate::ast::{CardTag, ComponentTag, Heading, Line, LineKind};
use crate::builder::{card_node, component_node, image_node, text_node, title_node};
use crate::ids::{IdGenerator, SequentialIds, UuidIds};
use crate::postprocess::assign_alignment;
use crate::types::{ContentNode, Diagnostic, DiagnosticKind, NarrativeOutput};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// Per-compile counter; output is reproducible.
    #[default]
    Sequential,
    /// Random v4 uuids.
    Uuid,
}

#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
    pub ids: IdStrategy,
}

struct PendingCard {
    id: String,
    lines: Vec<String>,
}

/// Turns classified lines into content nodes. One compiler per document:
/// the card counter and id generator live here and nowhere else.
pub struct NarrativeCompiler {
    ids: Box<dyn IdGenerator>,
    items: Vec<ContentNode>,
    diagnostics: Vec<Diagnostic>,

    // closed paragraphs of the text node being built
    paragraphs: Vec<String>,
    // lines of the paragraph being built
    paragraph: Vec<String>,
    card: Option<PendingCard>,
    card_count: usize,
}

impl Default for NarrativeCompiler {
    fn default() -> Self {
        Self::with_id_generator(Box::new(SequentialIds::default()))
    }
}

impl NarrativeCompiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CompileOptions) -> Self {
        let ids: Box<dyn IdGenerator> = match options.ids {
            IdStrategy::Sequential => Box::new(SequentialIds::default()),
            IdStrategy::Uuid => Box::new(UuidIds),
        };
        Self::with_id_generator(ids)
    }

    pub fn with_id_generator(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            ids,
            items: Vec::new(),
            diagnostics: Vec::new(),
            paragraphs: Vec::new(),
            paragraph: Vec::new(),
            card: None,
            card_count: 0,
        }
    }

    pub fn compile(mut self, lines: &[Line]) -> NarrativeOutput {
        let mut cursor = 0;
        while cursor < lines.len() {
            let line = &lines[cursor];
            cursor += 1;
            match &line.kind {
                LineKind::Blank => self.handle_blank(),
                LineKind::Component(tag) => {
                    cursor = self.handle_component(tag, line.line_no, lines, cursor);
                }
                LineKind::Card(tag) => self.handle_card(tag),
                LineKind::Heading(h) => self.handle_heading(h),
                LineKind::Image(src) => self.handle_image(src),
                LineKind::Text => self.handle_text(&line.raw),
            }
        }

        self.flush_blocks();
        assign_alignment(&mut self.items);

        NarrativeOutput {
            items: self.items,
            warnings: self.diagnostics,
        }
    }

    fn handle_blank(&mut self) {
        if self.card.is_some() {
            self.flush_card();
        } else {
            self.close_paragraph();
        }
    }

    fn handle_text(&mut self, raw: &str) {
        match &mut self.card {
            Some(card) => card.lines.push(raw.to_string()),
            None => self.paragraph.push(raw.to_string()),
        }
    }

    fn handle_component(
        &mut self,
        tag: &ComponentTag,
        line_no: usize,
        lines: &[Line],
        cursor: usize,
    ) -> usize {
        self.flush_blocks();

        let capture = args::capture(&tag.remainder, lines, cursor);
        if !capture.terminated {
            warn!(
                component = %tag.name,
                line_no,
                "component arguments never closed, captured to end of document"
            );
            self.diagnostics.push(Diagnostic {
                line_no,
                kind: DiagnosticKind::UnterminatedComponentArgs {
                    component: tag.name.clone(),
                },
            });
        }

        let node = component_node(self.ids.as_mut(), &tag.name, &capture.raw);
        self.items.push(ContentNode::Component(node));
        capture.cursor
    }

    fn handle_card(&mut self, tag: &CardTag) {
        self.flush_blocks();

        let id = tag
            .id
            .clone()
            .unwrap_or_else(|| format!("generated-card-{}", self.card_count));
        self.card_count += 1;

        let mut lines = Vec::new();
        if !tag.remainder.is_empty() {
            lines.push(tag.remainder.clone());
        }
        self.card = Some(PendingCard { id, lines });
    }

    fn handle_heading(&mut self, h: &Heading) {
        self.flush_blocks();
        let node = title_node(self.ids.as_mut(), h.level, &h.text);
        self.items.push(ContentNode::Title(node));
    }

    fn handle_image(&mut self, src: &str) {
        self.flush_blocks();
        self.items.push(ContentNode::Image(image_node(src)));
    }

    fn flush_blocks(&mut self) {
        self.flush_card();
        self.flush_text();
    }

    fn flush_card(&mut self) {
        if let Some(card) = self.card.take() {
            let node = card_node(card.id, &card.lines.join("\n"));
            self.items.push(ContentNode::Card(node));
        }
    }

    fn close_paragraph(&mut self) {
        args::push_paragraph(&mut self.paragraphs, &mut self.paragraph);
    }

    fn flush_text(&mut self) {
        self.close_paragraph();
        if self.paragraphs.is_empty() {
            return;
        }
        let paragraphs = std::mem::take(&mut self.paragraphs);
        let node = text_node(self.ids.as_mut(), paragraphs);
        self.items.push(ContentNode::Text(node));
    }
}
