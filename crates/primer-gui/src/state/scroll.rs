//! Reading progress and active-section tracking for lesson pages.
//!
//! The scrollable reports its offset, viewport height, and total content
//! height on every scroll. Progress is derived from those three numbers.
//! Section anchors are estimated from the block composition of the lesson
//! and rescaled against the real content height once the scrollable has
//! reported it, so the section menu highlight stays honest even though the
//! layout engine never tells us where each section actually landed.

use primer_model::{ContentBlock, TopicRecord};

/// A section becomes active once its top edge scrolls within this many
/// pixels below the top of the viewport.
pub const ACTIVATION_MARGIN: f32 = 100.0;

/// Estimated height of the lesson header above the first section.
const HEADER_HEIGHT: f32 = 150.0;

/// Estimated height of a section heading row.
const SECTION_HEADING_HEIGHT: f32 = 56.0;

// =============================================================================
// SCROLL PROGRESS
// =============================================================================

/// Percentage of the scrollable distance already covered, clamped to 0-100.
///
/// When the content fits the viewport there is nothing to scroll and the
/// progress is defined as 0.
pub fn scroll_progress(offset: f32, content_height: f32, viewport_height: f32) -> f32 {
    let scrollable = content_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (offset / scrollable * 100.0).clamp(0.0, 100.0)
}

// =============================================================================
// SECTION ANCHORS
// =============================================================================

/// A section heading's estimated vertical position within the lesson.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionAnchor {
    pub id: String,
    pub top: f32,
}

/// Estimated anchor positions for every section of a lesson.
#[derive(Debug, Clone, Default)]
pub struct SectionAnchors {
    anchors: Vec<SectionAnchor>,
    estimated_height: f32,
}

impl SectionAnchors {
    /// Estimate anchors from the lesson's block composition.
    pub fn estimate(topic: &TopicRecord) -> Self {
        let mut anchors = Vec::with_capacity(topic.sections.len());
        let mut cursor = HEADER_HEIGHT;

        for section in &topic.sections {
            anchors.push(SectionAnchor {
                id: section.id.clone(),
                top: cursor,
            });
            cursor += SECTION_HEADING_HEIGHT;
            for block in &section.blocks {
                cursor += block_height(block);
            }
        }

        Self {
            anchors,
            estimated_height: cursor,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    /// Anchor position for a section, rescaled to the real content height.
    /// Used when the user clicks a menu entry to jump to a section.
    pub fn target_offset(&self, section_id: &str, content_height: f32) -> Option<f32> {
        let scale = self.scale(content_height);
        self.anchors
            .iter()
            .find(|anchor| anchor.id == section_id)
            .map(|anchor| anchor.top * scale)
    }

    /// The section the reader is currently in: the last section whose top
    /// has scrolled within [`ACTIVATION_MARGIN`] of the viewport top, or the
    /// first section when none has.
    pub fn active_at(&self, offset: f32, content_height: f32) -> Option<&str> {
        let scale = self.scale(content_height);
        let threshold = offset + ACTIVATION_MARGIN;

        self.anchors
            .iter()
            .rev()
            .find(|anchor| anchor.top * scale <= threshold)
            .or_else(|| self.anchors.first())
            .map(|anchor| anchor.id.as_str())
    }

    /// The section after `section_id` in authored order.
    pub fn next_section(&self, section_id: &str) -> Option<&str> {
        let position = self.anchors.iter().position(|a| a.id == section_id)?;
        self.anchors.get(position + 1).map(|a| a.id.as_str())
    }

    /// The section before `section_id` in authored order.
    pub fn previous_section(&self, section_id: &str) -> Option<&str> {
        let position = self.anchors.iter().position(|a| a.id == section_id)?;
        position
            .checked_sub(1)
            .and_then(|p| self.anchors.get(p))
            .map(|a| a.id.as_str())
    }

    /// Scale factor from estimated to reported content height. Before the
    /// first scroll event reports a real height the estimates stand as-is.
    fn scale(&self, content_height: f32) -> f32 {
        if content_height > 0.0 && self.estimated_height > 0.0 {
            content_height / self.estimated_height
        } else {
            1.0
        }
    }
}

/// Rough per-block height used for anchor estimation. Estimates only; the
/// rescale against the reported content height absorbs the error.
fn block_height(block: &ContentBlock) -> f32 {
    match block {
        ContentBlock::Prose(text) => {
            let lines = (text.len() as f32 / 90.0).ceil().max(1.0);
            lines * 24.0 + 16.0
        }
        ContentBlock::Code(sample) => {
            let lines = sample.source.lines().count().max(1) as f32;
            lines * 20.0 + 96.0
        }
        ContentBlock::Quiz(quiz) => 120.0 + quiz.options.len() as f32 * 44.0,
        ContentBlock::Panel(_) => 64.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use primer_model::Section;

    fn lesson_with_sections(count: usize) -> TopicRecord {
        let sections = (0..count)
            .map(|i| Section {
                id: format!("section-{i}"),
                title: format!("Section {i}"),
                blocks: vec![
                    ContentBlock::Prose("Some introductory prose for the section.".to_string()),
                    ContentBlock::Prose("A second paragraph to give the section body.".repeat(4)),
                ],
            })
            .collect();
        TopicRecord {
            id: "lesson".to_string(),
            title: "Lesson".to_string(),
            description: "A lesson".to_string(),
            category: Some(primer_model::Category::Core),
            order: Some(1),
            date: None,
            parent: None,
            sections,
        }
    }

    #[test]
    fn progress_is_zero_when_content_fits_the_viewport() {
        assert_eq!(scroll_progress(0.0, 600.0, 600.0), 0.0);
        assert_eq!(scroll_progress(50.0, 500.0, 600.0), 0.0);
    }

    #[test]
    fn progress_spans_zero_to_one_hundred() {
        assert_eq!(scroll_progress(0.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(1000.0, 2000.0, 1000.0), 100.0);
        // Overscroll clamps instead of overshooting.
        assert_eq!(scroll_progress(1200.0, 2000.0, 1000.0), 100.0);
    }

    #[test]
    fn anchors_are_strictly_increasing() {
        let anchors = SectionAnchors::estimate(&lesson_with_sections(4));
        let tops: Vec<f32> = (0..4)
            .map(|i| {
                anchors
                    .target_offset(&format!("section-{i}"), 0.0)
                    .expect("anchor exists")
            })
            .collect();
        for pair in tops.windows(2) {
            assert!(pair[0] < pair[1], "anchor tops must increase: {tops:?}");
        }
    }

    #[test]
    fn first_section_is_active_before_any_anchor_is_reached() {
        let anchors = SectionAnchors::estimate(&lesson_with_sections(3));
        assert_eq!(anchors.active_at(0.0, 0.0), Some("section-0"));
    }

    #[test]
    fn last_anchor_above_the_margin_wins() {
        let topic = lesson_with_sections(3);
        let anchors = SectionAnchors::estimate(&topic);
        let second_top = anchors
            .target_offset("section-1", 0.0)
            .expect("anchor exists");

        // Just past the second anchor minus the margin: section-1 active.
        assert_eq!(
            anchors.active_at(second_top - ACTIVATION_MARGIN + 1.0, 0.0),
            Some("section-1")
        );
        // Just before: still section-0.
        assert_eq!(
            anchors.active_at(second_top - ACTIVATION_MARGIN - 1.0, 0.0),
            Some("section-0")
        );
    }

    #[test]
    fn rescaling_moves_anchors_proportionally() {
        let anchors = SectionAnchors::estimate(&lesson_with_sections(2));
        let raw = anchors
            .target_offset("section-1", 0.0)
            .expect("anchor exists");
        let doubled = anchors
            .target_offset("section-1", anchors.estimated_height * 2.0)
            .expect("anchor exists");
        assert!((doubled - raw * 2.0).abs() < 0.01);
    }

    #[test]
    fn unknown_section_has_no_target() {
        let anchors = SectionAnchors::estimate(&lesson_with_sections(2));
        assert_eq!(anchors.target_offset("missing", 0.0), None);
    }

    #[test]
    fn neighbors_follow_authored_order() {
        let anchors = SectionAnchors::estimate(&lesson_with_sections(3));
        assert_eq!(anchors.next_section("section-0"), Some("section-1"));
        assert_eq!(anchors.previous_section("section-1"), Some("section-0"));
        assert_eq!(anchors.previous_section("section-0"), None);
        assert_eq!(anchors.next_section("section-2"), None);
    }
}
