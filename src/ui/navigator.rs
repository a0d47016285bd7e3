use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

use crate::action::{NavigationError, Navigator};
use crate::config::NavigationConfig;

/// Hands URLs to an external program after checking their scheme.
///
/// Without an `open_command` accepted URLs are only logged by the resolver.
#[derive(Debug, Clone)]
pub struct SchemeNavigator {
    allowed_schemes: Vec<String>,
    open_command: Option<String>,
}

impl SchemeNavigator {
    pub fn from_config(config: &NavigationConfig) -> Self {
        Self {
            allowed_schemes: config
                .allowed_schemes
                .iter()
                .map(|scheme| scheme.to_ascii_lowercase())
                .collect(),
            open_command: config.open_command.clone(),
        }
    }

    pub fn allows(&self, url: &str) -> bool {
        let scheme = scheme_of(url).to_ascii_lowercase();
        self.allowed_schemes.iter().any(|allowed| *allowed == scheme)
    }
}

impl Navigator for SchemeNavigator {
    fn navigate(&self, url: &str) -> Result<(), NavigationError> {
        if !self.allows(url) {
            return Err(NavigationError::UnsupportedScheme {
                url: url.to_string(),
                scheme: scheme_of(url).to_string(),
            });
        }

        let Some(command) = &self.open_command else {
            return Ok(());
        };

        let child = Command::new(command)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| NavigationError::Launch {
                command: command.clone(),
                url: url.to_string(),
                source,
            })?;

        spawn_reaper(child);
        Ok(())
    }
}

/// Waits for `child` on its own thread so the caller never blocks.
fn spawn_reaper(mut child: Child) -> JoinHandle<Option<ExitStatus>> {
    thread::spawn(move || match child.wait() {
        Ok(status) => Some(status),
        Err(err) => {
            tracing::warn!(error = %err, "Failed to reap open command");
            None
        }
    })
}

/// `"https"` for `"https://x"`, `""` when the URL has no scheme.
fn scheme_of(url: &str) -> &str {
    match url.split_once(':') {
        Some((scheme, _))
            if !scheme.is_empty()
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.')) =>
        {
            scheme
        }
        _ => "",
    }
}
