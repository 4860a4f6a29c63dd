//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Configures where log records go
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: Convert shell arguments into typed commands via clap
//! 2. **Logging**: `env_logger` on stderr, `warn` by default, `info` with `--verbose`,
//!    `RUST_LOG` wins over both
//! 3. **Context Setup**: Load configuration and open the store
//! 4. **Dispatch**: Route each command to the API
//! 5. **Output**: Hand results to `render.rs` and print them
//!
//! Errors bubble up to `main`, which prints them and exits with status 1.

use super::render::{render_affected, render_document, render_list, render_messages, render_nav};
use super::setup::{Cli, Commands};
use anyhow::Context;
use clap::Parser;
use mdshelfapp::commands::edit::DocumentEdit;
use mdshelfapp::commands::CmdResult;
use mdshelfapp::filter::ViewFilter;
use mdshelfapp::init::{initialize, ShelfContext};
use mdshelfapp::model::{parse_tags, DocumentFields};
use mdshelfapp::render::PlainHighlighter;
use mdshelfapp::store::doc_store::ImportDefaults;
use std::io::{IsTerminal, Read};

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = initialize(cli.data)?;

    // Naked invocation lists everything.
    let command = cli.command.unwrap_or(Commands::List {
        search: None,
        category: None,
        tag: None,
    });
    log::debug!("dispatching {:?}", command);

    match command {
        Commands::List {
            search,
            category,
            tag,
        } => handle_list(&ctx, list_filter(search, category, tag)),
        Commands::View { reference } => handle_view(&ctx, &reference),
        Commands::Render { reference } => handle_render(&ctx, &reference),
        Commands::Add {
            title,
            category,
            tags,
            content,
        } => handle_add(&mut ctx, title, category, tags, content),
        Commands::Edit {
            reference,
            title,
            category,
            tags,
            content,
        } => {
            let edit = DocumentEdit {
                title,
                category,
                tags: tags.as_deref().map(parse_tags),
                content,
            };
            print_modification(ctx.api.edit_document(&reference, edit)?);
            Ok(())
        }
        Commands::Import {
            files,
            title,
            category,
            tags,
        } => {
            let defaults = ImportDefaults {
                title,
                category: category.unwrap_or_default(),
                tags: tags.as_deref().map(parse_tags).unwrap_or_default(),
            };
            print_modification(ctx.api.import_files(&files, &defaults)?);
            Ok(())
        }
        Commands::Categories => {
            print!("{}", render_nav(&ctx.api.categories()?.nav_entries));
            Ok(())
        }
        Commands::Tags => {
            print!("{}", render_nav(&ctx.api.tags()?.nav_entries));
            Ok(())
        }
        Commands::Recent => {
            let result = ctx.api.recent()?;
            print!("{}", render_list(&result.listed_docs, ctx.config.preview_length));
            Ok(())
        }
        Commands::Theme { toggle } => {
            let result = if toggle {
                ctx.api.toggle_theme()?
            } else {
                ctx.api.theme()?
            };
            print!("{}", render_messages(&result.messages));
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

fn list_filter(
    search: Option<String>,
    category: Option<String>,
    tag: Option<String>,
) -> ViewFilter {
    match (search, category, tag) {
        (Some(text), _, _) => ViewFilter::Text(text),
        (_, Some(category), _) => ViewFilter::Category(category),
        (_, _, Some(tag)) => ViewFilter::Tag(tag),
        _ => ViewFilter::None,
    }
}

fn handle_list(ctx: &ShelfContext, filter: ViewFilter) -> anyhow::Result<()> {
    let result = ctx.api.list_documents(&filter)?;
    print!(
        "{}",
        render_list(&result.listed_docs, ctx.config.preview_length)
    );
    print!("{}", render_messages(&result.messages));
    Ok(())
}

fn handle_view(ctx: &ShelfContext, reference: &str) -> anyhow::Result<()> {
    let result = ctx.api.view_document(reference)?;
    if let Some(dd) = result.listed_docs.first() {
        print!("{}", render_document(dd));
    }
    Ok(())
}

fn handle_render(ctx: &ShelfContext, reference: &str) -> anyhow::Result<()> {
    let result = ctx.api.render_document(reference, &PlainHighlighter)?;
    if let Some(html) = result.html {
        println!("{}", html.trim_end());
    }
    Ok(())
}

fn handle_add(
    ctx: &mut ShelfContext,
    title: String,
    category: Option<String>,
    tags: Option<String>,
    content: Option<String>,
) -> anyhow::Result<()> {
    let content = match content {
        Some(content) => content,
        None => read_stdin()?,
    };

    let mut fields = DocumentFields::new(title, content);
    if let Some(category) = category {
        fields = fields.with_category(category);
    }
    if let Some(tags) = tags {
        fields = fields.with_tags_input(&tags);
    }

    print_modification(ctx.api.create_document(fields)?);
    Ok(())
}

/// Reads piped content. An interactive stdin gives empty content, which the
/// store then rejects with a validation error.
fn read_stdin() -> anyhow::Result<String> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }
    let mut buffer = String::new();
    stdin
        .lock()
        .read_to_string(&mut buffer)
        .context("failed to read content from stdin")?;
    Ok(buffer)
}

fn print_modification(result: CmdResult) {
    print!("{}", render_messages(&result.messages));
    print!("{}", render_affected(&result.affected_docs));
}
