//! Integration tests for argument parsing and the command helpers.

use clap::{CommandFactory, Parser};

use primer_cli::cli::{CategoryArg, Cli, Command, RunArgs};
use primer_cli::commands::{resolve_target, run_snippet};
use primer_cli::render::{catalog_row, render_topic};
use primer_content::TopicRegistry;

fn catalog() -> TopicRegistry {
    TopicRegistry::load().unwrap()
}

#[test]
fn command_definition_is_internally_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn parsing_requires_a_subcommand() {
    assert!(Cli::try_parse_from(["primer"]).is_err());
}

#[test]
fn topics_flags_parse() {
    let cli = Cli::try_parse_from(["primer", "topics", "--category", "core", "--json"]).unwrap();
    let Command::Topics(args) = cli.command else {
        panic!("expected the topics subcommand");
    };
    assert!(args.json);
    assert!(matches!(args.category, Some(CategoryArg::Core)));
}

#[test]
fn run_defaults_to_the_first_snippet() {
    let cli = Cli::try_parse_from(["primer", "run", "store"]).unwrap();
    let Command::Run(args) = cli.command else {
        panic!("expected the run subcommand");
    };
    assert_eq!(args.topic_id, "store");
    assert_eq!(args.snippet, 1);
}

#[test]
fn log_flags_are_accepted_after_the_subcommand() {
    let cli = Cli::try_parse_from(["primer", "topics", "--log-format", "json", "-v"]).unwrap();
    assert!(matches!(cli.command, Command::Topics(_)));
}

#[test]
fn resolve_target_accepts_bare_ids_and_routes() {
    let registry = catalog();
    assert_eq!(resolve_target(&registry, "store").unwrap().id, "store");
    assert_eq!(resolve_target(&registry, "/concepts/store").unwrap().id, "store");
    let child = resolve_target(&registry, "/concepts/middleware/async-middleware").unwrap();
    assert_eq!(child.id, "async-middleware");
}

#[test]
fn resolve_target_rejects_bad_paths() {
    let registry = catalog();
    assert!(resolve_target(&registry, "/").is_err());
    assert!(resolve_target(&registry, "/concepts/nope").is_err());
    // Child topics resolve only under their parent.
    assert!(resolve_target(&registry, "/concepts/async-middleware").is_err());
    assert!(resolve_target(&registry, "nope").is_err());
}

#[test]
fn rendered_topics_carry_sections_code_and_quizzes() {
    let registry = catalog();
    let store = registry.get("store").unwrap();
    let rendered = render_topic(store, &[]);
    assert!(rendered.starts_with("# The Store"));
    assert!(rendered.contains("## A single source of truth"));
    assert!(rendered.contains("A counter store:"));
    assert!(rendered.contains("```"));
    assert!(rendered.contains("Quiz: Which of these can the store do by itself"));
}

#[test]
fn rendered_parents_list_their_subtopics() {
    let registry = catalog();
    let middleware = registry.get("middleware").unwrap();
    let children = registry.children("middleware").unwrap();
    let rendered = render_topic(middleware, &children);
    assert!(rendered.contains("Subtopics:"));
    assert!(rendered.contains("- async-middleware: Async Middleware"));
    assert!(rendered.contains("- logger-middleware:"));
}

#[test]
fn catalog_rows_serialize_with_slug_categories() {
    let registry = catalog();
    let row = catalog_row(registry.get("store").unwrap());
    let value = serde_json::to_value(&row).unwrap();
    assert_eq!(value["id"], "store");
    assert_eq!(value["category"], "core");
    assert!(value["updated"].is_null());
}

#[test]
fn run_snippet_renders_the_counter_walkthrough() {
    let args = RunArgs {
        topic_id: "store".to_string(),
        snippet: 1,
    };
    let evaluation = run_snippet(&args).unwrap();
    assert!(!evaluation.is_failed());
}

#[test]
fn run_snippet_reports_out_of_range_requests() {
    let registry = catalog();
    assert!(registry.get("store").is_ok());
    for out_of_range in [0, 40] {
        let args = RunArgs {
            topic_id: "store".to_string(),
            snippet: out_of_range,
        };
        let error = run_snippet(&args).unwrap_err();
        assert!(error.to_string().contains("out of range"));
    }
    let args = RunArgs {
        topic_id: "missing".to_string(),
        snippet: 1,
    };
    assert!(run_snippet(&args).is_err());
}
