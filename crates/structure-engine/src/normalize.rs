//! Turns raw ingestion blocks into identified, non-empty paragraphs

use shared_types::{Paragraph, SourceBlock, Style};
use uuid::Uuid;

/// Normalize blocks, assigning a random v4 UUID to every kept paragraph
pub fn normalize(blocks: &[SourceBlock]) -> Vec<Paragraph> {
    normalize_with(blocks, || Uuid::new_v4().to_string())
}

/// Normalize blocks with a caller-supplied id source
///
/// Empty blocks are dropped before an id is drawn, so `next_id` is called
/// exactly once per returned paragraph.
pub fn normalize_with<F>(blocks: &[SourceBlock], mut next_id: F) -> Vec<Paragraph>
where
    F: FnMut() -> String,
{
    blocks
        .iter()
        .filter_map(|block| {
            let content = block.text.trim();
            if content.is_empty() {
                return None;
            }
            Some(Paragraph::new(
                next_id(),
                Style::from_hint(block.style.as_deref()),
                content,
            ))
        })
        .collect()
}
