//! Where help pages come from.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

use super::intent::HelpIntent;

#[derive(Debug, Error)]
pub enum HelpError {
    #[error("Invalid help topic '{topic}'")]
    InvalidTopic { topic: String },

    #[error("Help topic '{topic}' not found")]
    NotFound { topic: String },

    #[error("Failed to read help page '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Fetches Markdown-like help text by topic id.
pub trait HelpSource {
    fn fetch(&self, topic: &str) -> Result<String, HelpError>;
}

/// Reads `<dir>/<topic>.md`.
#[derive(Debug, Clone)]
pub struct DirectoryHelpSource {
    dir: PathBuf,
}

impl DirectoryHelpSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl HelpSource for DirectoryHelpSource {
    fn fetch(&self, topic: &str) -> Result<String, HelpError> {
        let valid = !topic.is_empty()
            && topic
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(HelpError::InvalidTopic {
                topic: topic.to_string(),
            });
        }

        let path = self.dir.join(format!("{topic}.md"));
        fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => HelpError::NotFound {
                topic: topic.to_string(),
            },
            _ => HelpError::Read { path, source: e },
        })
    }
}

/// Fetch `topic` and turn the outcome into the intent the help reducer
/// expects.
pub fn load_topic(source: &dyn HelpSource, topic: &str) -> HelpIntent {
    match source.fetch(topic) {
        Ok(content) => HelpIntent::Loaded {
            topic: topic.to_string(),
            content,
        },
        Err(e) => {
            tracing::warn!(topic, error = %e, "Failed to load help topic");
            HelpIntent::FailedToLoad {
                topic: topic.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn fetch_reads_markdown_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("codex.md"), "# Codex\n").unwrap();

        let source = DirectoryHelpSource::new(temp.path());
        assert_eq!(source.fetch("codex").unwrap(), "# Codex\n");
    }

    #[test]
    fn missing_topic_is_not_found() {
        let temp = TempDir::new().unwrap();
        let source = DirectoryHelpSource::new(temp.path());
        assert!(matches!(
            source.fetch("nothing"),
            Err(HelpError::NotFound { .. })
        ));
    }

    #[test]
    fn traversal_topics_are_rejected() {
        let source = DirectoryHelpSource::new("/tmp");
        assert!(matches!(
            source.fetch("../etc/passwd"),
            Err(HelpError::InvalidTopic { .. })
        ));
    }

    #[test]
    fn load_topic_maps_failure_to_intent() {
        let temp = TempDir::new().unwrap();
        let source = DirectoryHelpSource::new(temp.path());
        assert_eq!(
            load_topic(&source, "missing"),
            HelpIntent::FailedToLoad {
                topic: "missing".into()
            }
        );
    }
}
