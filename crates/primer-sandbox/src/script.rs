//! Parsing for the store-script vocabulary.
//!
//! One statement per line, three statement forms, `#` comment lines:
//!
//! ```text
//! let s = store(counter, 0)
//! s.dispatch({ "type": "increment" })
//! print s.getState()
//! ```
//!
//! JSON arguments are handed to serde_json verbatim, so anything JSON can
//! express is a valid initial state or action payload.

use serde_json::Value;

use crate::error::{Result, RunnerError};

/// One parsed statement with its 1-based source line.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let NAME = store(REDUCER, INITIAL)`
    Let {
        name: String,
        reducer: String,
        initial: Value,
    },
    /// `NAME.dispatch(ACTION)`
    Dispatch { name: String, action: Value },
    /// `print NAME.getState()`
    Print { name: String },
}

/// Parse a whole snippet. Blank and comment lines are skipped; every other
/// line must be one of the three statement forms.
pub fn parse(source: &str) -> Result<Vec<(usize, Statement)>> {
    let mut statements = Vec::new();
    for (offset, raw_line) in source.lines().enumerate() {
        let line_no = offset + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        statements.push((line_no, parse_line(line_no, line)?));
    }
    Ok(statements)
}

fn parse_line(line_no: usize, line: &str) -> Result<Statement> {
    if let Some(rest) = line.strip_prefix("let ") {
        return parse_let(line_no, rest);
    }
    if let Some(rest) = line.strip_prefix("print ") {
        return parse_print(line_no, rest);
    }
    if line.contains(".dispatch(") {
        return parse_dispatch(line_no, line);
    }
    Err(RunnerError::parse(
        line_no,
        "expected `let NAME = store(...)`, `NAME.dispatch(...)`, or `print NAME.getState()`",
    ))
}

fn parse_let(line_no: usize, rest: &str) -> Result<Statement> {
    let (name, value) = rest
        .split_once('=')
        .ok_or_else(|| RunnerError::parse(line_no, "`let` needs `= store(reducer, initial)`"))?;
    let name = name.trim();
    if !is_ident(name) {
        return Err(RunnerError::parse(
            line_no,
            format!("`{name}` is not a usable store name"),
        ));
    }
    let value = value.trim();
    let inner = value
        .strip_prefix("store(")
        .and_then(|v| v.strip_suffix(')'))
        .ok_or_else(|| {
            RunnerError::parse(line_no, "the right-hand side must be `store(reducer, initial)`")
        })?;
    let (reducer, initial) = inner.split_once(',').ok_or_else(|| {
        RunnerError::parse(line_no, "`store` takes a reducer name and an initial state")
    })?;
    let reducer = reducer.trim();
    if !is_ident(reducer) {
        return Err(RunnerError::parse(
            line_no,
            format!("`{reducer}` is not a reducer name"),
        ));
    }
    let initial = parse_json(line_no, initial)?;
    Ok(Statement::Let {
        name: name.to_string(),
        reducer: reducer.to_string(),
        initial,
    })
}

fn parse_dispatch(line_no: usize, line: &str) -> Result<Statement> {
    let (name, rest) = line
        .split_once(".dispatch(")
        .ok_or_else(|| RunnerError::parse(line_no, "malformed dispatch"))?;
    let name = name.trim();
    if !is_ident(name) {
        return Err(RunnerError::parse(
            line_no,
            format!("`{name}` is not a usable store name"),
        ));
    }
    let action_text = rest
        .trim_end()
        .strip_suffix(')')
        .ok_or_else(|| RunnerError::parse(line_no, "dispatch is missing its closing `)`"))?;
    let action = parse_json(line_no, action_text)?;
    Ok(Statement::Dispatch {
        name: name.to_string(),
        action,
    })
}

fn parse_print(line_no: usize, rest: &str) -> Result<Statement> {
    let rest = rest.trim();
    let name = rest.strip_suffix(".getState()").ok_or_else(|| {
        RunnerError::parse(line_no, "print takes `NAME.getState()`")
    })?;
    if !is_ident(name) {
        return Err(RunnerError::parse(
            line_no,
            format!("`{name}` is not a usable store name"),
        ));
    }
    Ok(Statement::Print {
        name: name.to_string(),
    })
}

fn parse_json(line_no: usize, text: &str) -> Result<Value> {
    serde_json::from_str(text.trim())
        .map_err(|err| RunnerError::parse(line_no, format!("bad JSON: {err}")))
}

fn is_ident(s: &str) -> bool {
    !s.is_empty()
        && s.chars().next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_the_three_statement_forms() {
        let script = "let s = store(counter, 0)\ns.dispatch({ \"type\": \"increment\" })\nprint s.getState()\n";
        let parsed = parse(script).expect("parse script");
        assert_eq!(parsed.len(), 3);
        assert_eq!(
            parsed[0].1,
            Statement::Let {
                name: "s".to_string(),
                reducer: "counter".to_string(),
                initial: json!(0)
            }
        );
        assert!(matches!(parsed[2].1, Statement::Print { .. }));
    }

    #[test]
    fn comments_and_blank_lines_are_skipped_but_numbering_is_kept() {
        let script = "# a comment\n\nlet s = store(toggle, true)";
        let parsed = parse(script).expect("parse script");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].0, 3, "line numbers follow the source");
    }

    #[test]
    fn json_payloads_may_contain_commas_and_parens() {
        let script = r#"let s = store(todos, [{ "text": "a (draft)", "done": false }])"#;
        let parsed = parse(script).expect("parse script");
        match &parsed[0].1 {
            Statement::Let { initial, .. } => assert_eq!(initial[0]["text"], json!("a (draft)")),
            other => panic!("unexpected statement {other:?}"),
        }
    }

    #[test]
    fn bad_lines_report_their_line_number() {
        let err = parse("let s = store(counter, 0)\nlaunch the missiles").unwrap_err();
        assert!(err.to_string().starts_with("line 2:"));
    }

    #[test]
    fn bad_json_is_a_parse_error() {
        let err = parse("let s = store(counter, {nope)").unwrap_err();
        assert!(matches!(err, RunnerError::Parse { line: 1, .. }));
    }
}
