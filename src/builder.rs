use crate::args::split_paragraphs;
use crate::ids::{IdGenerator, IdKind};
use crate::types::{Align, CardNode, ComponentNode, ImageNode, TextNode, TitleNode};
use winnow::combinator::delimited;
use winnow::prelude::*;
use winnow::token::take_while;

pub fn title_node(ids: &mut dyn IdGenerator, level: u8, text: &str) -> TitleNode {
    let kind = if level == 1 {
        IdKind::Title
    } else {
        IdKind::Subtitle
    };
    TitleNode {
        id: ids.next_id(kind),
        level,
        text: text.to_string(),
    }
}

pub fn text_node(ids: &mut dyn IdGenerator, paragraphs: Vec<String>) -> TextNode {
    TextNode {
        id: ids.next_id(IdKind::Text),
        paragraphs,
    }
}

/// Build a card from its body. A leading `[H:MM]` / `[HH:MM]` becomes the
/// title and is cut from the text together with the whitespace after it.
/// Alignment is assigned later, once every card is known.
pub fn card_node(id: String, body: &str) -> CardNode {
    let body = body.trim();
    let mut rest = body;
    let (title, text) = match timestamp(&mut rest) {
        Ok(stamp) => (Some(stamp.to_string()), rest.trim_start().to_string()),
        Err(_) => (None, body.to_string()),
    };

    CardNode {
        id,
        title,
        text,
        align: Align::default(),
        trigger_after: None,
    }
}

pub fn component_node(ids: &mut dyn IdGenerator, name: &str, raw_args: &str) -> ComponentNode {
    ComponentNode {
        id: ids.next_id(IdKind::Component),
        component_name: name.to_string(),
        content: split_paragraphs(raw_args),
    }
}

pub fn image_node(src: &str) -> ImageNode {
    ImageNode {
        src: src.to_string(),
    }
}

fn timestamp<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    delimited(
        '[',
        (
            take_while(1..=2, |c: char| c.is_ascii_digit()),
            ':',
            take_while(2, |c: char| c.is_ascii_digit()),
        )
            .take(),
        ']',
    )
    .parse_next(input)
}
