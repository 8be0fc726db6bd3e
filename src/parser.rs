use crate::ast::*;
use winnow::ascii::{space0, Caseless};
use winnow::combinator::{alt, delimited, eof, opt, preceded};
use winnow::prelude::*;
use winnow::token::{literal, take_till, take_until, take_while};

/// Split a document into classified lines. Accepts `\n` and `\r\n`.
pub fn parse(input: &str) -> Vec<Line> {
    let mut lines = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let mut raw = line;
        if idx == 0 {
            raw = raw.trim_start_matches('\u{feff}');
        }

        lines.push(Line {
            kind: classify(raw),
            raw: raw.to_string(),
            line_no: idx + 1,
        });
    }

    lines
}

/// Classify a single line. Tag checks run on the trimmed line in priority
/// order: component, card, heading, image. Anything else is prose.
pub fn classify(raw: &str) -> LineKind {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return LineKind::Blank;
    }

    let mut input = trimmed;
    if let Ok(tag) = component_tag(&mut input) {
        return LineKind::Component(tag);
    }

    let mut input = trimmed;
    if let Ok(tag) = card_tag(&mut input) {
        return LineKind::Card(tag);
    }

    if trimmed.starts_with('#') {
        let text = trimmed.trim_start_matches('#');
        let hashes = trimmed.len() - text.len();
        return LineKind::Heading(Heading {
            level: if hashes == 1 { 1 } else { 2 },
            text: text.trim().to_string(),
        });
    }

    let mut input = trimmed;
    if let Ok(src) = image_tag(&mut input) {
        return LineKind::Image(src);
    }

    LineKind::Text
}

// `[component: name]` followed by anything.
fn component_tag(input: &mut &str) -> ModalResult<ComponentTag> {
    let name = delimited(
        ('[', literal(Caseless("component")), ':', space0),
        tag_ident,
        (space0, ']'),
    )
    .parse_next(input)?;

    Ok(ComponentTag {
        name: name.to_string(),
        remainder: input.trim().to_string(),
    })
}

// `[card]` or `[card: id]` followed by anything.
fn card_tag(input: &mut &str) -> ModalResult<CardTag> {
    let _ = ('[', literal(Caseless("card"))).parse_next(input)?;
    let id = opt(preceded((':', space0), tag_ident)).parse_next(input)?;
    let _ = (space0, ']').parse_next(input)?;

    Ok(CardTag {
        id: id.map(str::to_string),
        remainder: input.trim().to_string(),
    })
}

// `@[path]` or the escaped `@\[path\]`, alone on the line.
fn image_tag(input: &mut &str) -> ModalResult<String> {
    let src = alt((
        delimited("@[", take_till(1.., ']'), ']'),
        delimited("@\\[", take_until(1.., "\\]"), "\\]"),
    ))
    .parse_next(input)?;
    let _ = eof.parse_next(input)?;

    Ok(src.trim().to_string())
}

fn tag_ident<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-').parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn component(name: &str, remainder: &str) -> LineKind {
        LineKind::Component(ComponentTag {
            name: name.to_string(),
            remainder: remainder.to_string(),
        })
    }

    fn card(id: Option<&str>, remainder: &str) -> LineKind {
        LineKind::Card(CardTag {
            id: id.map(str::to_string),
            remainder: remainder.to_string(),
        })
    }

    fn heading(level: u8, text: &str) -> LineKind {
        LineKind::Heading(Heading {
            level,
            text: text.to_string(),
        })
    }

    #[rstest]
    #[case("", LineKind::Blank)]
    #[case("   \t", LineKind::Blank)]
    #[case("[component: map]", component("map", ""))]
    #[case("  [component:map](lat,lon)  ", component("map", "(lat,lon)"))]
    #[case("[Component: moto-accident-simulation] (", component("moto-accident-simulation", "("))]
    #[case("[card]", card(None, ""))]
    #[case("[CARD: card-recife]", card(Some("card-recife"), ""))]
    #[case("[card:  a ] [05:50] Leaves", card(Some("a"), "[05:50] Leaves"))]
    #[case("# Hello", heading(1, "Hello"))]
    #[case("##   Subtitle  ", heading(2, "Subtitle"))]
    #[case("#### Deep", heading(2, "Deep"))]
    #[case("@[assets/pic.png]", LineKind::Image("assets/pic.png".to_string()))]
    #[case("@\\[assets/pic.png\\]", LineKind::Image("assets/pic.png".to_string()))]
    #[case("Plain prose.", LineKind::Text)]
    fn classifies_lines(#[case] line: &str, #[case] expected: LineKind) {
        assert_eq!(classify(line), expected);
    }

    #[rstest]
    #[case("[component]")]
    #[case("[component: ]")]
    #[case("[component: bad name]")]
    #[case("[cards]")]
    #[case("[card:]")]
    #[case("[card: two words]")]
    #[case("[05:50] She leaves home.")]
    #[case("@[pic.png] caption")]
    #[case("@[]")]
    #[case("see @[pic.png]")]
    fn malformed_tags_are_text(#[case] line: &str) {
        assert_eq!(classify(line), LineKind::Text);
    }

    #[test]
    fn component_wins_over_heading_priority() {
        assert_eq!(classify("[component: title]"), component("title", ""));
    }

    #[test]
    fn splits_crlf_and_numbers_lines() {
        let lines = parse("# Title\r\n\r\nBody\r\n");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].kind, heading(1, "Title"));
        assert_eq!(lines[1].kind, LineKind::Blank);
        assert_eq!(lines[2].raw, "Body");
        assert_eq!(lines[2].line_no, 3);
    }

    #[test]
    fn strips_bom_on_first_line() {
        let lines = parse("\u{feff}[card]");
        assert_eq!(lines[0].kind, card(None, ""));
    }

    #[test]
    fn keeps_raw_text_untrimmed() {
        let lines = parse("  indented prose  ");
        assert_eq!(lines[0].raw, "  indented prose  ");
        assert_eq!(lines[0].kind, LineKind::Text);
    }

    #[test]
    fn empty_document_has_no_lines() {
        assert!(parse("").is_empty());
    }
}
