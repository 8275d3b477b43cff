pub mod category;
pub mod quiz;
pub mod topic;

pub use category::Category;
pub use quiz::{QuizAttempt, QuizSpec, Verdict};
pub use topic::{CodeSample, ContentBlock, PanelSpec, Section, TopicRecord};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_record_serializes() {
        let record = TopicRecord {
            id: "actions".to_string(),
            title: "Actions".to_string(),
            description: "Plain data describing what happened.".to_string(),
            category: Some(Category::Core),
            order: Some(2),
            date: chrono::NaiveDate::from_ymd_opt(2026, 8, 18),
            parent: None,
            sections: vec![],
        };
        let json = serde_json::to_string(&record).expect("serialize record");
        let round: TopicRecord = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
        assert!(json.contains("\"core\""));
    }
}
