//! Plain-text and table rendering for command output.

use std::fmt::Write;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use serde::Serialize;

use primer_model::{ContentBlock, TopicRecord};

/// One catalog listing entry, shared by the table and `--json` outputs.
#[derive(Debug, Serialize)]
pub struct CatalogRow {
    pub id: String,
    pub title: String,
    pub category: Option<&'static str>,
    pub updated: Option<String>,
}

impl CatalogRow {
    /// Table cells in header order, with `-` standing in for absent values.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.category.unwrap_or("-").to_string(),
            self.updated.clone().unwrap_or_else(|| "-".to_string()),
        ]
    }
}

pub fn catalog_row(topic: &TopicRecord) -> CatalogRow {
    CatalogRow {
        id: topic.id.clone(),
        title: topic.title.clone(),
        category: topic.category.map(|category| category.slug()),
        updated: topic.date.map(|date| date.to_string()),
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Render a full topic as plain text: title and description, then every
/// section with prose as-is, fenced code, quiz prompts, and panel bodies.
/// Child topics are listed at the end by id so they can be fed back into
/// `primer show`.
pub fn render_topic(topic: &TopicRecord, children: &[&TopicRecord]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {}", topic.title);
    let _ = writeln!(out, "{}", topic.description);
    let mut facts: Vec<String> = Vec::new();
    if let Some(category) = topic.category {
        facts.push(category.slug().to_string());
    }
    if let Some(date) = topic.date {
        facts.push(format!("updated {date}"));
    }
    if !facts.is_empty() {
        let _ = writeln!(out, "({})", facts.join(", "));
    }
    out.push('\n');
    for section in &topic.sections {
        let _ = writeln!(out, "## {}\n", section.title);
        for block in &section.blocks {
            push_block(&mut out, block);
        }
    }
    if !children.is_empty() {
        out.push_str("Subtopics:\n");
        for child in children {
            let _ = writeln!(out, "  - {}: {}", child.id, child.title);
        }
    }
    out
}

fn push_block(out: &mut String, block: &ContentBlock) {
    match block {
        ContentBlock::Prose(markdown) => {
            out.push_str(markdown.trim_end());
            out.push_str("\n\n");
        }
        ContentBlock::Code(sample) => {
            if let Some(title) = &sample.title {
                let _ = writeln!(out, "{title}:");
            }
            out.push_str("```\n");
            out.push_str(sample.source.trim_end());
            out.push_str("\n```\n\n");
        }
        ContentBlock::Quiz(quiz) => {
            // The correct answer is never printed.
            let _ = writeln!(out, "Quiz: {}", quiz.prompt);
            for (index, option) in quiz.options.iter().enumerate() {
                let _ = writeln!(out, "  {}. {option}", index + 1);
            }
            out.push('\n');
        }
        ContentBlock::Panel(panel) => {
            let _ = writeln!(out, "> {}", panel.summary);
            out.push_str(panel.body.trim_end());
            out.push_str("\n\n");
        }
    }
}
