//! Reducer for the help panel.

use crate::mvi::Reducer;

use super::intent::HelpIntent;
use super::state::HelpState;

pub struct HelpReducer;

impl Reducer for HelpReducer {
    type State = HelpState;
    type Intent = HelpIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            HelpIntent::Open { topic } => HelpState::Loading { topic },

            // Results for anything but the topic being loaded are stale.
            HelpIntent::Loaded { topic, content } => match state {
                HelpState::Loading { topic: loading } if loading == topic => {
                    HelpState::Loaded { topic, content }
                }
                other => other,
            },

            HelpIntent::FailedToLoad { topic } => match state {
                HelpState::Loading { topic: loading } if loading == topic => {
                    HelpState::Failed { topic }
                }
                other => other,
            },

            HelpIntent::Retry => match state {
                HelpState::Failed { topic } => HelpState::Loading { topic },
                other => other,
            },

            HelpIntent::Close => HelpState::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loading(topic: &str) -> HelpState {
        HelpState::Loading {
            topic: topic.into(),
        }
    }

    #[test]
    fn open_starts_loading() {
        let state = HelpReducer::reduce(
            HelpState::Hidden,
            HelpIntent::Open {
                topic: "editor".into(),
            },
        );
        assert_eq!(state, loading("editor"));
    }

    #[test]
    fn loaded_for_current_topic_shows_content() {
        let state = HelpReducer::reduce(
            loading("editor"),
            HelpIntent::Loaded {
                topic: "editor".into(),
                content: "Type here".into(),
            },
        );
        assert_eq!(state.content(), Some("Type here"));
    }

    #[test]
    fn stale_result_is_ignored() {
        let state = HelpReducer::reduce(
            loading("codex"),
            HelpIntent::Loaded {
                topic: "editor".into(),
                content: "old".into(),
            },
        );
        assert_eq!(state, loading("codex"));
    }

    #[test]
    fn failure_then_retry_reloads_same_topic() {
        let state = HelpReducer::reduce(
            loading("codex"),
            HelpIntent::FailedToLoad {
                topic: "codex".into(),
            },
        );
        assert!(state.has_failed());

        let state = HelpReducer::reduce(state, HelpIntent::Retry);
        assert!(state.is_loading());
        assert_eq!(state, loading("codex"));
    }

    #[test]
    fn retry_when_not_failed_is_noop() {
        let state = HelpReducer::reduce(HelpState::Hidden, HelpIntent::Retry);
        assert_eq!(state, HelpState::Hidden);
    }

    #[test]
    fn close_hides_from_any_state() {
        let state = HelpReducer::reduce(loading("x"), HelpIntent::Close);
        assert!(!state.is_visible());
    }
}
