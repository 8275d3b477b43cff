use primer_content::{ContentError, TopicRegistry};
use primer_model::Category;

#[test]
fn loads_embedded_catalog() {
    let registry = TopicRegistry::load().expect("load catalog");
    assert!(!registry.is_empty());
    assert_eq!(registry.len(), 12);
    let store = registry.get("store").expect("store topic");
    assert_eq!(store.category, Some(Category::Core));
    assert!(store.has_toc(), "store should declare multiple sections");
}

#[test]
fn get_returns_the_exact_inserted_record() {
    let registry = TopicRegistry::load().expect("load catalog");
    for topic in registry.get_all() {
        let found = registry.get(&topic.id).expect("lookup by id");
        assert_eq!(found, topic);
    }
}

#[test]
fn unknown_id_is_a_distinguishable_not_found() {
    let registry = TopicRegistry::load().expect("load catalog");
    let err = registry.get("no-such-topic").unwrap_err();
    assert!(matches!(err, ContentError::TopicNotFound { .. }));
    assert!(err.is_not_found());
}

#[test]
fn children_lists_nested_topics_in_order() {
    let registry = TopicRegistry::load().expect("load catalog");
    let children = registry.children("middleware").expect("middleware children");
    let ids: Vec<&str> = children.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["logger-middleware", "async-middleware"]);
}

#[test]
fn children_of_a_leaf_topic_is_empty_not_an_error() {
    let registry = TopicRegistry::load().expect("load catalog");
    let children = registry.children("reducers").expect("leaf children");
    assert!(children.is_empty());
}

#[test]
fn children_of_an_unknown_parent_is_not_found() {
    let registry = TopicRegistry::load().expect("load catalog");
    assert!(matches!(
        registry.children("ghost"),
        Err(ContentError::TopicNotFound { .. })
    ));
}

#[test]
fn grouping_by_category_sorts_by_order() {
    let registry = TopicRegistry::load().expect("load catalog");
    let grouped = registry.grouped();
    let (category, members) = grouped.first().expect("core group present");
    assert_eq!(*category, Category::Core);

    // `actions` (order 2) must precede `reducers` (order 3) inside core.
    let ids: Vec<&str> = members.iter().map(|t| t.id.as_str()).collect();
    let actions = ids.iter().position(|id| *id == "actions").expect("actions");
    let reducers = ids.iter().position(|id| *id == "reducers").expect("reducers");
    assert!(actions < reducers);
}

#[test]
fn recently_added_is_newest_first() {
    let registry = TopicRegistry::load().expect("load catalog");
    let recent = registry.recently_added(3);
    assert_eq!(recent.len(), 3);
    let dates: Vec<_> = recent.iter().map(|t| t.date.expect("dated")).collect();
    assert!(dates.windows(2).all(|pair| pair[0] >= pair[1]));
    assert_eq!(recent[0].id, "memoized-selectors");
}

#[test]
fn quiz_answer_indexes_are_always_in_range() {
    let registry = TopicRegistry::load().expect("load catalog");
    for topic in registry.get_all() {
        for quiz in topic.quizzes() {
            assert!(
                quiz.correct_index < quiz.options.len(),
                "quiz {} has out-of-range answer",
                quiz.id
            );
        }
    }
}

fn doc(id: &str, extra: &str) -> String {
    format!(
        "id = \"{id}\"\ntitle = \"T\"\ndescription = \"d\"\ncategory = \"core\"\n{extra}"
    )
}

#[test]
fn unknown_category_loads_but_stays_ungrouped() {
    let text =
        "id = \"experiment\"\ntitle = \"X\"\ndescription = \"d\"\ncategory = \"experimental\"";
    let registry =
        TopicRegistry::from_documents(&[("experiment.toml", text)]).expect("load synthetic doc");
    let topic = registry.get("experiment").expect("still reachable by id");
    assert_eq!(topic.category, None);
    assert!(registry.grouped().is_empty());
}

#[test]
fn duplicate_topic_ids_fail_to_load() {
    let a = doc("twin", "");
    let b = doc("twin", "order = 2\n");
    let err = TopicRegistry::from_documents(&[("a.toml", &a), ("b.toml", &b)]).unwrap_err();
    assert!(matches!(err, ContentError::DuplicateTopic { .. }));
}

#[test]
fn unknown_parent_fails_to_load() {
    let text = doc("orphan", "parent = \"missing\"\n");
    let err = TopicRegistry::from_documents(&[("orphan.toml", &text)]).unwrap_err();
    assert!(matches!(err, ContentError::UnknownParent { .. }));
}

#[test]
fn nesting_under_a_child_fails_to_load() {
    let root = doc("root", "");
    let mid = doc("mid", "parent = \"root\"\n");
    let leaf = doc("leaf", "parent = \"mid\"\n");
    let err = TopicRegistry::from_documents(&[
        ("root.toml", &root),
        ("mid.toml", &mid),
        ("leaf.toml", &leaf),
    ])
    .unwrap_err();
    assert!(matches!(err, ContentError::NestedParent { .. }));
}

#[test]
fn out_of_range_quiz_answer_fails_to_load() {
    let text = concat!(
        "id = \"q\"\ntitle = \"T\"\ndescription = \"d\"\ncategory = \"core\"\n",
        "[[section]]\nid = \"s\"\ntitle = \"S\"\n",
        "[[section.block]]\nkind = \"quiz\"\nid = \"broken\"\nprompt = \"p\"\n",
        "options = [\"a\", \"b\"]\ncorrect_index = 5\nexplanation = \"e\"\n",
    );
    let err = TopicRegistry::from_documents(&[("q.toml", text)]).unwrap_err();
    assert!(matches!(err, ContentError::QuizIndexOutOfRange { .. }));
}

#[test]
fn malformed_toml_reports_the_document_name() {
    let err = TopicRegistry::from_documents(&[("broken.toml", "id = ")]).unwrap_err();
    match err {
        ContentError::Parse { doc, .. } => assert_eq!(doc, "broken.toml"),
        other => panic!("expected parse error, got {other}"),
    }
}

#[test]
fn malformed_date_fails_to_load() {
    let text = doc("dated", "date = \"yesterday\"\n");
    let err = TopicRegistry::from_documents(&[("dated.toml", &text)]).unwrap_err();
    assert!(matches!(err, ContentError::InvalidDate { .. }));
}
