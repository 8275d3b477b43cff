//! Serde schema for authored topic documents.
//!
//! Topics are written as TOML: scalar metadata at the top, then `[[section]]`
//! tables each holding `[[section.block]]` entries tagged by `kind`. These
//! types mirror the authored shape one-to-one; conversion into the validated
//! [`primer_model`] types happens in [`crate::registry`].

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RawTopic {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub order: Option<u32>,
    /// ISO `YYYY-MM-DD`, authored as a quoted string.
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub parent: Option<String>,
    #[serde(default, rename = "section")]
    pub sections: Vec<RawSection>,
}

#[derive(Debug, Deserialize)]
pub struct RawSection {
    pub id: String,
    pub title: String,
    #[serde(default, rename = "block")]
    pub blocks: Vec<RawBlock>,
}

/// One authored content block, discriminated by its `kind` field.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RawBlock {
    Prose {
        text: String,
    },
    Code {
        #[serde(default)]
        title: Option<String>,
        source: String,
        #[serde(default)]
        runnable: bool,
        #[serde(default)]
        scope: Vec<String>,
    },
    Quiz {
        id: String,
        prompt: String,
        options: Vec<String>,
        correct_index: usize,
        explanation: String,
    },
    Panel {
        summary: String,
        body: String,
    },
}
