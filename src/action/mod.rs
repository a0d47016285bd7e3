//! Navigation intents attached to interactive items.
//!
//! The resolver is the only place that talks to the [`Navigator`]. Navigation
//! failures are logged and recorded here and never reach the renderer.

use std::collections::VecDeque;
use std::time::SystemTime;

use parking_lot::Mutex;
use thiserror::Error;

use crate::model::Action;

const HISTORY_LIMIT: usize = 64;

/// Errors a navigator may report. They stay inside [`ActionResolver`].
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("URL scheme '{scheme}' is not allowed for '{url}'")]
    UnsupportedScheme { url: String, scheme: String },

    #[error("Failed to launch '{command}' for '{url}': {source}")]
    Launch {
        command: String,
        url: String,
        #[source]
        source: std::io::Error,
    },
}

/// External navigation collaborator.
pub trait Navigator {
    /// Hands `url` off for navigation. Must not block.
    fn navigate(&self, url: &str) -> Result<(), NavigationError>;
}

/// Whether a leaf is interactive, and where it leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance<'a> {
    Inert,
    Clickable(&'a Action),
}

impl<'a> Affordance<'a> {
    pub fn of(action: Option<&'a Action>) -> Self {
        match action {
            Some(action) => Affordance::Clickable(action),
            None => Affordance::Inert,
        }
    }

    pub fn is_clickable(&self) -> bool {
        matches!(self, Affordance::Clickable(_))
    }

    pub fn action(&self) -> Option<&'a Action> {
        match *self {
            Affordance::Clickable(action) => Some(action),
            Affordance::Inert => None,
        }
    }
}

/// Outcome of one forwarded navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    Dispatched,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct NavigationAttempt {
    pub timestamp: SystemTime,
    pub kind: String,
    pub url: String,
    pub outcome: NavigationOutcome,
}

pub struct ActionResolver<N> {
    navigator: N,
    history: Mutex<VecDeque<NavigationAttempt>>,
}

impl<N: Navigator> ActionResolver<N> {
    pub fn new(navigator: N) -> Self {
        Self {
            navigator,
            history: Mutex::new(VecDeque::with_capacity(HISTORY_LIMIT)),
        }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Forwards `action` to the navigator. `None` is a no-op.
    pub fn resolve_and_navigate(&self, action: Option<&Action>) {
        let Some(action) = action else {
            return;
        };

        tracing::info!(kind = %action.kind, url = %action.url, "Navigation requested");

        let outcome = match self.navigator.navigate(&action.url) {
            Ok(()) => NavigationOutcome::Dispatched,
            Err(err) => {
                tracing::warn!(url = %action.url, error = %err, "Navigation failed");
                NavigationOutcome::Failed(err.to_string())
            }
        };

        let mut history = self.history.lock();
        if history.len() == HISTORY_LIMIT {
            history.pop_front();
        }
        history.push_back(NavigationAttempt {
            timestamp: SystemTime::now(),
            kind: action.kind.clone(),
            url: action.url.clone(),
            outcome,
        });
    }

    /// Recorded attempts, oldest first.
    pub fn history(&self) -> Vec<NavigationAttempt> {
        self.history.lock().iter().cloned().collect()
    }

    pub fn last_attempt(&self) -> Option<NavigationAttempt> {
        self.history.lock().back().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Refusing;

    impl Navigator for Refusing {
        fn navigate(&self, url: &str) -> Result<(), NavigationError> {
            Err(NavigationError::UnsupportedScheme {
                url: url.to_string(),
                scheme: "ftp".to_string(),
            })
        }
    }

    struct Accepting;

    impl Navigator for Accepting {
        fn navigate(&self, _url: &str) -> Result<(), NavigationError> {
            Ok(())
        }
    }

    fn action(url: &str) -> Action {
        Action {
            kind: "navigate".to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn affordance_follows_action_presence() {
        let target = action("https://example.com");
        assert!(Affordance::of(Some(&target)).is_clickable());
        assert_eq!(Affordance::of(Some(&target)).action(), Some(&target));
        assert!(!Affordance::of(None).is_clickable());
        assert_eq!(Affordance::of(None).action(), None);
    }

    #[test]
    fn failures_are_recorded_not_raised() {
        let resolver = ActionResolver::new(Refusing);
        resolver.resolve_and_navigate(Some(&action("ftp://example.com")));

        let last = resolver.last_attempt().unwrap();
        assert_eq!(last.url, "ftp://example.com");
        assert!(matches!(last.outcome, NavigationOutcome::Failed(ref msg) if msg.contains("ftp")));
    }

    #[test]
    fn history_is_bounded() {
        let resolver = ActionResolver::new(Accepting);
        for idx in 0..HISTORY_LIMIT + 5 {
            resolver.resolve_and_navigate(Some(&action(&format!("https://example.com/{idx}"))));
        }

        let history = resolver.history();
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history[0].url, "https://example.com/5");
        assert_eq!(
            resolver.last_attempt().unwrap().url,
            format!("https://example.com/{}", HISTORY_LIMIT + 4)
        );
    }
}
