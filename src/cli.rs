//! Command-line driver.
//!
//! Loads the saved manuscript, applies actions from JSON files through the
//! same store and reducer a UI would use, and prints summaries.
//!
//! ```text
//! scriptorium [--config PATH] [--data-dir PATH] <show | apply | comment | export | reset | help>
//! ```

use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use serde_json::Value;

use crate::config::Config;
use crate::model::Comment;
use crate::mvi::Reducer;
use crate::persistence::{FileStorage, StatePersistence};
use crate::store::{selectors, Action, AppState, Store};
use crate::ui::help::{load_topic, DirectoryHelpSource, HelpIntent, HelpReducer, HelpState};

#[derive(Parser, Debug)]
#[command(
    name = "scriptorium",
    about = "Manuscript, comments and codex state for novel writing",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the data directory from the config
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Summarize the manuscript and codex
    Show,
    /// Apply actions from a JSON file ("-" reads stdin)
    Apply { file: PathBuf },
    /// Print the saved state as JSON
    Export,
    /// Delete the saved manuscript
    Reset,
    /// Comment on a span of a chapter, or suggest a replacement for it
    Comment {
        chapter_id: String,
        /// The annotated text
        #[arg(long = "on")]
        original_text: String,
        /// Comment body
        text: String,
        /// Propose this replacement text (makes it a suggestion)
        #[arg(long)]
        suggest: Option<String>,
    },
    /// Print a help page
    Help { topic: String },
}

impl Cli {
    /// Config from `--config`, or the default location.
    pub fn load_config(&self) -> Result<Config> {
        let config = match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        };
        config.context("failed to load configuration")
    }
}

/// Execute `command` against the configured storage, writing user-facing
/// output to `out`.
pub fn run(cli: &Cli, config: &Config, out: &mut dyn Write) -> Result<()> {
    let data_dir = cli.data_dir.clone().unwrap_or_else(|| config.data_dir());
    let storage = FileStorage::open(&data_dir)
        .with_context(|| format!("failed to open data directory {}", data_dir.display()))?;
    let mut persistence = StatePersistence::new(storage, config.storage.state_key.clone());

    tracing::debug!(
        command = ?cli.command,
        data_dir = %data_dir.display(),
        "Running command"
    );

    match &cli.command {
        Command::Show => {
            let state = persistence.load_or_initial()?;
            out.write_all(render_summary(&state).as_bytes())?;
        }

        Command::Apply { file } => {
            let actions = read_actions(file)?;
            let state = persistence.load_or_initial()?;
            let mut store = Store::new(state);

            let total = actions.len();
            let mut changed = 0;
            for action in actions {
                if store.dispatch(action) {
                    changed += 1;
                }
            }
            if changed > 0 {
                persistence
                    .save(store.state())
                    .context("failed to save manuscript")?;
            }

            tracing::info!(total, changed, "Applied actions");
            writeln!(out, "Applied {} action(s), {} changed the manuscript", total, changed)?;
        }

        Command::Comment {
            chapter_id,
            original_text,
            text,
            suggest,
        } => {
            let author = config.author.name.as_str();
            let comment = match suggest {
                Some(replacement) => Comment::suggestion(
                    author,
                    text.as_str(),
                    original_text.as_str(),
                    replacement.as_str(),
                ),
                None => Comment::new(author, text.as_str(), original_text.as_str()),
            };
            let comment_id = comment.id.clone();
            let action = Action::add_comment(chapter_id.as_str(), comment);
            action.validate()?;

            let mut store = Store::new(persistence.load_or_initial()?);
            if !store.dispatch(action) {
                bail!("No chapter with id '{}'", chapter_id);
            }
            persistence
                .save(store.state())
                .context("failed to save manuscript")?;
            writeln!(out, "Added comment {}", comment_id)?;
        }

        Command::Export => {
            let state = persistence.load_or_initial()?;
            let json = serde_json::to_string_pretty(&state)?;
            writeln!(out, "{}", json)?;
        }

        Command::Reset => {
            persistence.clear()?;
            writeln!(out, "Manuscript reset")?;
        }

        Command::Help { topic } => {
            let source = DirectoryHelpSource::new(config.help_dir());
            let state = HelpReducer::reduce(
                HelpState::Hidden,
                HelpIntent::Open {
                    topic: topic.clone(),
                },
            );
            let state = HelpReducer::reduce(state, load_topic(&source, topic));
            match state {
                HelpState::Loaded { content, .. } => writeln!(out, "{}", content.trim_end())?,
                _ => bail!("Failed to load help topic '{}'", topic),
            }
        }
    }

    Ok(())
}

/// Parse and validate every action before any is applied.
fn read_actions(path: &Path) -> Result<Vec<Action>> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read actions from stdin")?;
        buf
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read actions file {}", path.display()))?
    };
    parse_actions(&raw)
}

/// Parse a JSON action or array of actions and validate each payload.
///
/// Errors name the position of the offending action.
pub fn parse_actions(raw: &str) -> Result<Vec<Action>> {
    let items = match serde_json::from_str::<Value>(raw).context("invalid action JSON")? {
        Value::Array(items) => items,
        single => vec![single],
    };

    let mut actions = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        let action = Action::deserialize(item)
            .with_context(|| format!("action #{} is malformed", index + 1))?;
        action
            .validate()
            .with_context(|| format!("action #{} ({}) is invalid", index + 1, action.kind()))?;
        actions.push(action);
    }
    Ok(actions)
}

/// Human-readable overview of the manuscript and codex.
pub fn render_summary(state: &AppState) -> String {
    let mut s = String::new();
    s.push_str(&format!(
        "Manuscript: {} chapter(s), {} word(s)\n",
        state.chapters.len(),
        selectors::manuscript_word_count(state)
    ));

    for (i, chapter) in state.chapters.iter().enumerate() {
        let comments = selectors::comments_for_chapter(state, &chapter.id);
        let hidden = comments.iter().filter(|c| c.is_hidden).count();
        let suggestions = comments.iter().filter(|c| c.is_suggestion).count();
        s.push_str(&format!(
            "  {}. {} [{:?}] {} word(s), {} comment(s) ({} hidden, {} suggestion(s))\n",
            i + 1,
            chapter.title,
            chapter.status,
            selectors::word_count(chapter),
            comments.len(),
            hidden,
            suggestions
        ));
    }

    s.push_str(&format!(
        "Codex: {} character(s), {} relationship(s), {} event(s)\n",
        state.characters.len(),
        state.relationships.len(),
        state.events.len()
    ));
    for character in &state.characters {
        let links = selectors::relationships_for_character(state, &character.id).len();
        s.push_str(&format!("  - {} ({} relationship(s))\n", character.name, links));
    }
    s
}
