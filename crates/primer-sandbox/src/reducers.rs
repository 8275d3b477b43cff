//! Built-in reducers the scope can hand to a snippet.
//!
//! Each reducer parses the incoming JSON action into a typed variant first;
//! unrecognized `type` tags become the fall-through variant and return the
//! state unchanged, mirroring the habit the content teaches.

use serde_json::{Value, json};

/// The closed set of reducers snippets can bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReducerKind {
    /// Integer state; `increment`, `decrement`, `incrementBy {amount}`.
    Counter,
    /// Array of `{text, done}`; `addTodo {text}`, `toggleTodo {index}`.
    Todos,
    /// Boolean state; `toggle`.
    Toggle,
    /// String state; `setVisibility {filter}`.
    Visibility,
}

impl ReducerKind {
    pub fn name(&self) -> &'static str {
        match self {
            ReducerKind::Counter => "counter",
            ReducerKind::Todos => "todos",
            ReducerKind::Toggle => "toggle",
            ReducerKind::Visibility => "visibility",
        }
    }

    pub fn from_name(name: &str) -> Option<ReducerKind> {
        match name {
            "counter" => Some(ReducerKind::Counter),
            "todos" => Some(ReducerKind::Todos),
            "toggle" => Some(ReducerKind::Toggle),
            "visibility" => Some(ReducerKind::Visibility),
            _ => None,
        }
    }

    /// Run one step: `(state, action) -> next state`.
    ///
    /// # Errors
    ///
    /// A message when the action is structurally broken (no `type` tag, bad
    /// payload) or the state does not fit this reducer. Unknown action types
    /// are not errors; the state comes back unchanged.
    pub fn apply(&self, state: &Value, action: &Value) -> std::result::Result<Value, String> {
        match self {
            ReducerKind::Counter => counter(state, action),
            ReducerKind::Todos => todos(state, action),
            ReducerKind::Toggle => toggle(state, action),
            ReducerKind::Visibility => visibility(state, action),
        }
    }
}

/// Extract the mandatory `type` tag.
fn action_type(action: &Value) -> std::result::Result<&str, String> {
    action
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| "an action must be an object with a string `type` field".to_string())
}

enum CounterAction {
    Increment,
    Decrement,
    IncrementBy(i64),
    Other,
}

fn counter(state: &Value, action: &Value) -> std::result::Result<Value, String> {
    let current = state
        .as_i64()
        .ok_or_else(|| format!("counter expects integer state, got {state}"))?;
    let parsed = match action_type(action)? {
        "increment" => CounterAction::Increment,
        "decrement" => CounterAction::Decrement,
        "incrementBy" => {
            let amount = action
                .get("amount")
                .and_then(Value::as_i64)
                .ok_or_else(|| "incrementBy needs an integer `amount`".to_string())?;
            CounterAction::IncrementBy(amount)
        }
        _ => CounterAction::Other,
    };
    Ok(match parsed {
        CounterAction::Increment => json!(current + 1),
        CounterAction::Decrement => json!(current - 1),
        CounterAction::IncrementBy(amount) => json!(current + amount),
        CounterAction::Other => state.clone(),
    })
}

enum TodosAction {
    Add(String),
    Toggle(usize),
    Other,
}

fn todos(state: &Value, action: &Value) -> std::result::Result<Value, String> {
    let current = state
        .as_array()
        .ok_or_else(|| format!("todos expects array state, got {state}"))?;
    let parsed = match action_type(action)? {
        "addTodo" => {
            let text = action
                .get("text")
                .and_then(Value::as_str)
                .ok_or_else(|| "addTodo needs a string `text`".to_string())?;
            TodosAction::Add(text.to_string())
        }
        "toggleTodo" => {
            let index = action
                .get("index")
                .and_then(Value::as_u64)
                .ok_or_else(|| "toggleTodo needs a non-negative `index`".to_string())?;
            TodosAction::Toggle(index as usize)
        }
        _ => TodosAction::Other,
    };
    match parsed {
        TodosAction::Add(text) => {
            let mut next = current.clone();
            next.push(json!({ "text": text, "done": false }));
            Ok(Value::Array(next))
        }
        TodosAction::Toggle(index) => {
            if index >= current.len() {
                return Err(format!(
                    "toggleTodo index {index} is out of range ({} todos)",
                    current.len()
                ));
            }
            let mut next = current.clone();
            let item = next[index]
                .as_object_mut()
                .ok_or_else(|| format!("todo {index} is not an object"))?;
            let done = item.get("done").and_then(Value::as_bool).unwrap_or(false);
            item.insert("done".to_string(), json!(!done));
            Ok(Value::Array(next))
        }
        TodosAction::Other => Ok(state.clone()),
    }
}

fn toggle(state: &Value, action: &Value) -> std::result::Result<Value, String> {
    let current = state
        .as_bool()
        .ok_or_else(|| format!("toggle expects boolean state, got {state}"))?;
    Ok(match action_type(action)? {
        "toggle" => json!(!current),
        _ => state.clone(),
    })
}

fn visibility(state: &Value, action: &Value) -> std::result::Result<Value, String> {
    state
        .as_str()
        .ok_or_else(|| format!("visibility expects string state, got {state}"))?;
    Ok(match action_type(action)? {
        "setVisibility" => {
            let filter = action
                .get("filter")
                .and_then(Value::as_str)
                .ok_or_else(|| "setVisibility needs a string `filter`".to_string())?;
            json!(filter)
        }
        _ => state.clone(),
    })
}
