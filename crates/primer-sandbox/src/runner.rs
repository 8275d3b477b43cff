//! The runner trait and the built-in store-script implementation.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::error::{Result, RunnerError};
use crate::reducers::ReducerKind;
use crate::scope::Scope;
use crate::script::{self, Statement};

/// Output of a successful run: one line per observable step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    pub lines: Vec<String>,
}

impl Transcript {
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    fn push(&mut self, line: String) {
        self.lines.push(line);
    }
}

/// The evaluation collaborator behind the adapter boundary.
///
/// Implementations take the snippet source and its scope and either produce
/// a transcript or fail with a runner error. The adapter catches panics, but
/// well-behaved runners report failures through `Err`.
pub trait SnippetRunner {
    fn run(&self, source: &str, scope: &Scope) -> Result<Transcript>;
}

/// The built-in line interpreter for store scripts.
///
/// Stateless: every run starts from an empty store table, so one snippet can
/// never observe another's stores.
#[derive(Debug, Clone, Copy, Default)]
pub struct StoreScriptRunner;

impl SnippetRunner for StoreScriptRunner {
    fn run(&self, source: &str, scope: &Scope) -> Result<Transcript> {
        let statements = script::parse(source)?;
        if statements.is_empty() {
            return Err(RunnerError::EmptySource);
        }

        let mut stores: BTreeMap<String, (ReducerKind, Value)> = BTreeMap::new();
        let mut transcript = Transcript::default();

        for (line, statement) in statements {
            match statement {
                Statement::Let {
                    name,
                    reducer,
                    initial,
                } => {
                    let kind = scope
                        .get(&reducer)
                        .ok_or_else(|| RunnerError::undefined(&reducer))?;
                    transcript.push(format!("{name} = store({reducer}, {initial})"));
                    tracing::debug!(store = %name, reducer = %reducer, "store created");
                    stores.insert(name, (kind, initial));
                }
                Statement::Dispatch { name, action } => {
                    let (kind, state) = stores
                        .get_mut(&name)
                        .ok_or_else(|| RunnerError::undefined(&name))?;
                    let next = kind
                        .apply(state, &action)
                        .map_err(|message| RunnerError::apply(line, message))?;
                    transcript.push(format!("{name}.dispatch({action}) -> {next}"));
                    *state = next;
                }
                Statement::Print { name } => {
                    let (_, state) = stores
                        .get(&name)
                        .ok_or_else(|| RunnerError::undefined(&name))?;
                    transcript.push(format!("{name}.getState() = {state}"));
                }
            }
        }

        Ok(transcript)
    }
}
