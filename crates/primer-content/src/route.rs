//! The route table: path parsing and resolution against the registry.
//!
//! Three path shapes exist: `/`, `/concepts/{id}`, and
//! `/concepts/{parentId}/{childId}`. Resolution is plain string matching;
//! the route set is statically enumerable, so there are no wildcards and no
//! precedence rules. Anything else is `RouteNotFound`, which callers render
//! as a dedicated not-found view.

use primer_model::TopicRecord;

use crate::error::{ContentError, Result};
use crate::registry::TopicRegistry;

/// A syntactically valid navigation path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Topic { id: String },
    Child { parent: String, id: String },
}

impl Route {
    /// Parse a path into a route without consulting the registry.
    ///
    /// Trailing slashes are tolerated (`/concepts/store/` parses like
    /// `/concepts/store`).
    ///
    /// # Errors
    ///
    /// `RouteNotFound` when the path matches none of the three shapes.
    pub fn parse(path: &str) -> Result<Route> {
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return Ok(Route::Home);
        }
        let segments: Vec<&str> = trimmed
            .strip_prefix('/')
            .map(|rest| rest.split('/').collect())
            .unwrap_or_default();
        match segments.as_slice() {
            ["concepts", id] if !id.is_empty() => Ok(Route::Topic { id: (*id).to_string() }),
            ["concepts", parent, id] if !parent.is_empty() && !id.is_empty() => Ok(Route::Child {
                parent: (*parent).to_string(),
                id: (*id).to_string(),
            }),
            _ => Err(ContentError::RouteNotFound {
                path: path.to_string(),
            }),
        }
    }

    /// The canonical string form of this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Topic { id } => format!("/concepts/{id}"),
            Route::Child { parent, id } => format!("/concepts/{parent}/{id}"),
        }
    }

    /// The canonical route for a record: nested for children, flat otherwise.
    pub fn for_topic(topic: &TopicRecord) -> Route {
        match &topic.parent {
            Some(parent) => Route::Child {
                parent: parent.clone(),
                id: topic.id.clone(),
            },
            None => Route::Topic {
                id: topic.id.clone(),
            },
        }
    }
}

/// A route resolved against the registry.
#[derive(Debug, PartialEq, Eq)]
pub enum Resolution<'a> {
    Home,
    Topic(&'a TopicRecord),
    Child {
        parent: &'a TopicRecord,
        topic: &'a TopicRecord,
    },
}

impl Resolution<'_> {
    /// The record this resolution lands on, if it is a topic at all.
    pub fn topic(&self) -> Option<&TopicRecord> {
        match self {
            Resolution::Home => None,
            Resolution::Topic(topic) => Some(topic),
            Resolution::Child { topic, .. } => Some(topic),
        }
    }
}

/// Resolve a path against the registry.
///
/// Child topics resolve only under their parent's nested path: a child id at
/// top level, an unknown id, or a mismatched parent/child pair are all
/// `RouteNotFound`, never a panic, and deliberately not distinguished from
/// a missing route shape.
///
/// # Errors
///
/// `RouteNotFound` carrying the original path.
pub fn resolve<'a>(registry: &'a TopicRegistry, path: &str) -> Result<Resolution<'a>> {
    let not_found = || ContentError::RouteNotFound {
        path: path.to_string(),
    };
    match Route::parse(path)? {
        Route::Home => Ok(Resolution::Home),
        Route::Topic { id } => {
            let topic = registry.get(&id).map_err(|_| not_found())?;
            if topic.is_child() {
                return Err(not_found());
            }
            Ok(Resolution::Topic(topic))
        }
        Route::Child { parent, id } => {
            let parent_record = registry.get(&parent).map_err(|_| not_found())?;
            let topic = registry.get(&id).map_err(|_| not_found())?;
            if topic.parent.as_deref() != Some(parent_record.id.as_str()) {
                return Err(not_found());
            }
            Ok(Resolution::Child {
                parent: parent_record,
                topic,
            })
        }
    }
}

/// Canonical path for a record; [`resolve`] round-trips it for every catalog
/// entry.
pub fn canonical_path(topic: &TopicRecord) -> String {
    Route::for_topic(topic).path()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_the_three_shapes() {
        assert_eq!(Route::parse("/").unwrap(), Route::Home);
        assert_eq!(
            Route::parse("/concepts/store").unwrap(),
            Route::Topic {
                id: "store".to_string()
            }
        );
        assert_eq!(
            Route::parse("/concepts/middleware/async-middleware").unwrap(),
            Route::Child {
                parent: "middleware".to_string(),
                id: "async-middleware".to_string()
            }
        );
    }

    #[test]
    fn parse_tolerates_trailing_slashes() {
        assert_eq!(
            Route::parse("/concepts/store/").unwrap(),
            Route::Topic {
                id: "store".to_string()
            }
        );
    }

    #[test]
    fn parse_rejects_other_shapes() {
        for path in ["concepts/store", "/concepts", "/concepts//x", "/c/a/b/c"] {
            assert!(
                matches!(Route::parse(path), Err(ContentError::RouteNotFound { .. })),
                "expected {path} to be unrouteable"
            );
        }
    }

    #[test]
    fn path_round_trips() {
        let route = Route::Child {
            parent: "middleware".to_string(),
            id: "logger-middleware".to_string(),
        };
        assert_eq!(Route::parse(&route.path()).unwrap(), route);
    }
}
