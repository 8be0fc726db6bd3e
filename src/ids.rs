use uuid::Uuid;

/// What an identifier is being minted for. Cards carry author ids and images
/// are identified by their `src`, so neither needs one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Title,
    Subtitle,
    Text,
    Component,
}

impl IdKind {
    pub fn prefix(self) -> &'static str {
        match self {
            IdKind::Title => "title",
            IdKind::Subtitle => "subtitle",
            IdKind::Text => "text",
            IdKind::Component => "component",
        }
    }
}

pub trait IdGenerator {
    fn next_id(&mut self, kind: IdKind) -> String;
}

/// `title-0`, `text-1`, ... One counter shared by every kind, scoped to a
/// single compile.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: usize,
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self, kind: IdKind) -> String {
        let id = format!("{}-{}", kind.prefix(), self.next);
        self.next += 1;
        id
    }
}

#[derive(Debug, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self, kind: IdKind) -> String {
        format!("{}-{}", kind.prefix(), Uuid::new_v4().simple())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn sequential_ids_share_one_counter() {
        let mut ids = SequentialIds::default();
        assert_eq!(ids.next_id(IdKind::Title), "title-0");
        assert_eq!(ids.next_id(IdKind::Text), "text-1");
        assert_eq!(ids.next_id(IdKind::Subtitle), "subtitle-2");
        assert_eq!(ids.next_id(IdKind::Component), "component-3");
    }

    #[test]
    fn uuid_ids_are_prefixed_and_unique() {
        let mut ids = UuidIds;
        let a = ids.next_id(IdKind::Text);
        let b = ids.next_id(IdKind::Text);
        assert!(a.starts_with("text-"));
        assert_eq!(a.len(), "text-".len() + 32);
        assert_ne!(a, b);
    }
}
