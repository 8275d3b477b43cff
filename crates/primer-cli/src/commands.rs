//! Command implementations for the `primer` binary.

use anyhow::{Context, Result, anyhow, bail};
use comfy_table::Table;
use tracing::{debug, info};

use primer_content::{CategoryFilter, Resolution, TopicQuery, TopicRegistry, resolve, search};
use primer_model::{Category, TopicRecord};
use primer_sandbox::{Evaluation, SandboxAdapter, Scope};

use crate::cli::{CategoryArg, RunArgs, SearchArgs, ShowArgs, TopicsArgs};
use crate::render::{CatalogRow, apply_table_style, catalog_row, header_cell, render_topic};

/// `primer topics`: the catalog as a table, or as JSON with `--json`.
pub fn run_topics(args: &TopicsArgs) -> Result<()> {
    let registry = load_registry()?;
    let query = TopicQuery {
        text: String::new(),
        category: category_filter(args.category),
    };
    let topics = search(&registry, &query);
    debug!(count = topics.len(), "catalog listed");
    if args.json {
        let rows: Vec<CatalogRow> = topics.into_iter().map(catalog_row).collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Title"),
        header_cell("Category"),
        header_cell("Updated"),
    ]);
    apply_table_style(&mut table);
    for topic in topics {
        table.add_row(catalog_row(topic).cells());
    }
    println!("{table}");
    Ok(())
}

/// `primer search`: the same matcher the app's landing page uses.
pub fn run_search(args: &SearchArgs) -> Result<()> {
    let registry = load_registry()?;
    let query = TopicQuery {
        text: args.query.clone(),
        category: category_filter(args.category),
    };
    let matches = search(&registry, &query);
    debug!(query = %args.query, matches = matches.len(), "search complete");
    if matches.is_empty() {
        println!("No topics match `{}`.", args.query);
        return Ok(());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Title"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for topic in matches {
        table.add_row(vec![
            topic.id.clone(),
            topic.title.clone(),
            topic.description.clone(),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// `primer show`: print one topic in full.
pub fn run_show(args: &ShowArgs) -> Result<()> {
    let registry = load_registry()?;
    debug!(path = %args.target, "showing topic");
    let topic = resolve_target(&registry, &args.target)?;
    let children = registry.children(&topic.id).unwrap_or_default();
    print!("{}", render_topic(topic, &children));
    Ok(())
}

/// `primer run`: push one of a topic's runnable snippets through the
/// sandbox and print the transcript or the inline failure.
///
/// The caller maps [`Evaluation::Failed`] to a non-zero exit code.
pub fn run_snippet(args: &RunArgs) -> Result<Evaluation> {
    let registry = load_registry()?;
    let topic = registry.get(&args.topic_id)?;
    let snippets: Vec<_> = topic
        .runnable_snippets()
        .map(|(_, sample)| sample)
        .collect();
    if snippets.is_empty() {
        bail!("`{}` has no runnable snippets", topic.id);
    }
    let index = args
        .snippet
        .checked_sub(1)
        .filter(|index| *index < snippets.len())
        .ok_or_else(|| {
            anyhow!(
                "snippet {} is out of range for `{}` (runnable snippets: {})",
                args.snippet,
                topic.id,
                snippets.len()
            )
        })?;
    let sample = snippets[index];
    let scope = Scope::closed(&sample.scope);
    info!(topic = %topic.id, snippet = index + 1, "running snippet");
    let evaluation = SandboxAdapter::default().evaluate(&sample.source, &scope);
    match &evaluation {
        Evaluation::Rendered { output } => println!("{output}"),
        Evaluation::Failed { message } => println!("snippet failed: {message}"),
    }
    Ok(evaluation)
}

/// Resolve `show`'s argument: a `/`-prefixed route path, or a bare topic id.
pub fn resolve_target<'a>(registry: &'a TopicRegistry, target: &str) -> Result<&'a TopicRecord> {
    if target.starts_with('/') {
        return match resolve(registry, target)? {
            Resolution::Home => bail!(
                "`{target}` is the landing page; pass a topic path like `/concepts/store`"
            ),
            Resolution::Topic(topic) => Ok(topic),
            Resolution::Child { topic, .. } => Ok(topic),
        };
    }
    Ok(registry.get(target)?)
}

fn load_registry() -> Result<TopicRegistry> {
    TopicRegistry::load().context("load topic catalog")
}

fn category_filter(arg: Option<CategoryArg>) -> CategoryFilter {
    match arg {
        None => CategoryFilter::All,
        Some(CategoryArg::Core) => CategoryFilter::Only(Category::Core),
        Some(CategoryArg::Middleware) => CategoryFilter::Only(Category::Middleware),
        Some(CategoryArg::Advanced) => CategoryFilter::Only(Category::Advanced),
        Some(CategoryArg::Implementation) => CategoryFilter::Only(Category::Implementation),
        Some(CategoryArg::Normalization) => CategoryFilter::Only(Category::Normalization),
        Some(CategoryArg::Selectors) => CategoryFilter::Only(Category::Selectors),
    }
}
