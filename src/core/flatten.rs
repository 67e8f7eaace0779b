//! Flattening: the transform from structured content blocks to markup

use super::catalog::{ContentBlock, Note};

/// Flatten a note's first content document into a markdown string.
///
/// Each block maps to one fragment; fragments are concatenated in block
/// order with no extra separator. Every non-empty fragment is
/// newline-terminated, so adjacent blocks render as distinct elements.
/// A note with no content document flattens to the empty string.
///
/// Text is interpolated verbatim. Catalog content is trusted; nothing is
/// escaped here.
pub fn flatten(note: &Note) -> String {
    let Some(doc) = note.content_list.first() else {
        return String::new();
    };

    let mut out = String::new();
    for block in &doc.body {
        match block {
            ContentBlock::Title { text } => {
                out.push_str("## **");
                out.push_str(text);
                out.push_str("**\n\n");
            }
            ContentBlock::Header { text } => {
                out.push_str("## ");
                out.push_str(text);
                out.push_str("\n\n");
            }
            ContentBlock::Paragraph { text } => {
                out.push_str(text);
                out.push_str("\n\n");
            }
            ContentBlock::List { items } => {
                for item in items {
                    out.push_str("- ");
                    out.push_str(item);
                    out.push('\n');
                }
                out.push('\n');
            }
            ContentBlock::Unknown => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::ContentDocument;

    fn note_with_body(body: Vec<ContentBlock>) -> Note {
        Note {
            title: "Test".to_string(),
            category: "Misc".to_string(),
            content_list: vec![ContentDocument { body }],
        }
    }

    #[test]
    fn test_title_is_emphasized_heading() {
        let note = note_with_body(vec![ContentBlock::Title {
            text: "Policy".to_string(),
        }]);
        assert_eq!(flatten(&note), "## **Policy**\n\n");
    }

    #[test]
    fn test_header_and_list_order() {
        let note = note_with_body(vec![
            ContentBlock::Header {
                text: "H".to_string(),
            },
            ContentBlock::List {
                items: vec!["a".to_string(), "b".to_string()],
            },
        ]);
        assert_eq!(flatten(&note), "## H\n\n- a\n- b\n\n");
    }

    #[test]
    fn test_paragraph() {
        let note = note_with_body(vec![ContentBlock::Paragraph {
            text: "Some text.".to_string(),
        }]);
        assert_eq!(flatten(&note), "Some text.\n\n");
    }

    #[test]
    fn test_unknown_blocks_skipped_without_disturbing_neighbors() {
        let note = note_with_body(vec![
            ContentBlock::Paragraph {
                text: "before".to_string(),
            },
            ContentBlock::Unknown,
            ContentBlock::Paragraph {
                text: "after".to_string(),
            },
        ]);
        assert_eq!(flatten(&note), "before\n\nafter\n\n");
    }

    #[test]
    fn test_empty_content_list_flattens_to_empty() {
        let note = Note {
            title: "Bare".to_string(),
            category: "Misc".to_string(),
            content_list: Vec::new(),
        };
        assert_eq!(flatten(&note), "");
    }

    #[test]
    fn test_empty_body_flattens_to_empty() {
        let note = note_with_body(Vec::new());
        assert_eq!(flatten(&note), "");
    }

    #[test]
    fn test_only_first_document_is_used() {
        let mut note = note_with_body(vec![ContentBlock::Paragraph {
            text: "first".to_string(),
        }]);
        note.content_list.push(ContentDocument {
            body: vec![ContentBlock::Paragraph {
                text: "second".to_string(),
            }],
        });
        assert_eq!(flatten(&note), "first\n\n");
    }

    #[test]
    fn test_flatten_is_deterministic() {
        let note = note_with_body(vec![
            ContentBlock::Title {
                text: "T".to_string(),
            },
            ContentBlock::List {
                items: vec!["x".to_string()],
            },
        ]);
        assert_eq!(flatten(&note), flatten(&note));
    }
}
