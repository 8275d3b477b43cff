use primer_sandbox::{Evaluation, Result, SandboxAdapter, Scope, SnippetRunner, Transcript};

#[test]
fn a_valid_script_renders_its_transcript() {
    let adapter = SandboxAdapter::store_script();
    let source = "let s = store(counter, 0)\n\
                  s.dispatch({ \"type\": \"increment\" })\n\
                  print s.getState()";
    match adapter.evaluate(source, &Scope::closed(&["counter"])) {
        Evaluation::Rendered { output } => {
            assert!(output.contains("s.getState() = 1"));
            assert!(output.lines().count() == 3);
        }
        Evaluation::Failed { message } => panic!("unexpected failure: {message}"),
    }
}

#[test]
fn out_of_scope_names_fail_inline_and_name_the_offender() {
    let adapter = SandboxAdapter::store_script();
    let result = adapter.evaluate("let t = store(todos, [])", &Scope::closed(&["counter"]));
    match result {
        Evaluation::Failed { message } => assert!(message.contains("todos")),
        Evaluation::Rendered { .. } => panic!("scope should be closed"),
    }
}

#[test]
fn empty_source_is_a_friendly_failure() {
    let adapter = SandboxAdapter::store_script();
    let result = adapter.evaluate("   \n# just a comment\n", &Scope::standard());
    match result {
        Evaluation::Failed { message } => assert!(message.contains("nothing to run")),
        Evaluation::Rendered { .. } => panic!("empty snippet cannot render"),
    }
}

#[test]
fn parse_errors_point_at_the_line() {
    let adapter = SandboxAdapter::store_script();
    let source = "let s = store(counter, 0)\nexplode s";
    match adapter.evaluate(source, &Scope::standard()) {
        Evaluation::Failed { message } => assert!(message.starts_with("line 2:")),
        Evaluation::Rendered { .. } => panic!("malformed snippet cannot render"),
    }
}

struct PanickingRunner;

impl SnippetRunner for PanickingRunner {
    fn run(&self, _source: &str, _scope: &Scope) -> Result<Transcript> {
        panic!("runner bug");
    }
}

#[test]
fn a_panicking_runner_is_contained() {
    let adapter = SandboxAdapter::new(Box::new(PanickingRunner));
    let result = adapter.evaluate("anything", &Scope::standard());
    assert!(result.is_failed());

    // The adapter stays usable after containment.
    let again = adapter.evaluate("anything else", &Scope::standard());
    assert!(again.is_failed());
}

#[test]
fn one_snippet_cannot_observe_anothers_stores() {
    let adapter = SandboxAdapter::store_script();
    let first = adapter.evaluate(
        "let shared = store(counter, 5)\nprint shared.getState()",
        &Scope::standard(),
    );
    assert!(!first.is_failed());

    // `shared` must not leak into a second evaluation.
    let second = adapter.evaluate("print shared.getState()", &Scope::standard());
    match second {
        Evaluation::Failed { message } => assert!(message.contains("shared")),
        Evaluation::Rendered { .. } => panic!("stores leaked across evaluations"),
    }
}

#[test]
fn every_runnable_catalog_snippet_evaluates_cleanly() {
    let registry = primer_content::TopicRegistry::load().expect("load catalog");
    let adapter = SandboxAdapter::store_script();
    let mut seen = 0;
    for topic in registry.get_all() {
        for (index, sample) in topic.runnable_snippets() {
            let scope = Scope::closed(&sample.scope);
            let result = adapter.evaluate(&sample.source, &scope);
            if let Evaluation::Failed { message } = result {
                panic!("snippet {index} of `{}` failed: {message}", topic.id);
            }
            seen += 1;
        }
    }
    assert!(seen >= 6, "catalog should carry runnable snippets, saw {seen}");
}
