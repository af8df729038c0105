//! Tool availability probing

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::domain::delivery::Invocation;
use crate::domain::session::Platform;

use super::cache::TtlCache;
use super::ports::{Clock, CommandRunner};
use super::selector::ToolPresence;

/// Upper bound for a single `which`/`where` lookup
const LOOKUP_TIMEOUT: Duration = Duration::from_secs(1);

/// Memoized answer to "is this executable on PATH?"
pub struct ToolAvailabilityCache {
    runner: Arc<dyn CommandRunner>,
    cache: TtlCache<String, bool>,
    platform: Platform,
}

impl ToolAvailabilityCache {
    /// Create a cache probing with the platform's lookup command
    pub fn new(
        runner: Arc<dyn CommandRunner>,
        platform: Platform,
        ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            runner,
            cache: TtlCache::new(ttl, clock),
            platform,
        }
    }

    /// Whether `name` resolves to an executable.
    ///
    /// A lookup that cannot be spawned or times out counts as "not available".
    pub async fn command_exists(&self, name: &str) -> bool {
        let key = name.to_string();
        if let Some(exists) = self.cache.get(&key) {
            debug!(tool = name, exists, "Tool cache hit");
            return exists;
        }

        let lookup = Invocation::new(self.lookup_program(), [name]);
        let exists = match self.runner.run(&lookup, LOOKUP_TIMEOUT).await {
            Ok(output) => output.success(),
            Err(e) => {
                debug!(tool = name, error = %e, "Tool lookup failed");
                false
            }
        };

        debug!(tool = name, exists, "Tool probed");
        self.cache.insert(key, exists);
        exists
    }

    /// Probe several tools at once
    pub async fn presence(&self, names: &[&str]) -> ToolPresence {
        let mut presence = ToolPresence::new();
        for name in names {
            let exists = self.command_exists(name).await;
            presence.insert(name, exists);
        }
        presence
    }

    fn lookup_program(&self) -> &'static str {
        match self.platform {
            Platform::Windows => "where",
            Platform::MacOs | Platform::Linux => "which",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{ManualClock, Scripted, ScriptedRunner};

    fn cache(runner: &Arc<ScriptedRunner>, clock: &Arc<ManualClock>) -> ToolAvailabilityCache {
        ToolAvailabilityCache::new(
            runner.clone(),
            Platform::Linux,
            Duration::from_secs(30),
            clock.clone(),
        )
    }

    #[tokio::test]
    async fn second_lookup_within_ttl_does_not_spawn() {
        let runner = Arc::new(ScriptedRunner::new().with_tools(&["xdotool"]));
        let clock = Arc::new(ManualClock::new());
        let tools = cache(&runner, &clock);

        assert!(tools.command_exists("xdotool").await);
        clock.advance(Duration::from_secs(10));
        assert!(tools.command_exists("xdotool").await);

        assert_eq!(runner.call_count(), 1);
    }

    #[tokio::test]
    async fn reprobes_after_expiry() {
        let runner = Arc::new(ScriptedRunner::new().with_tools(&[]));
        let clock = Arc::new(ManualClock::new());
        let tools = cache(&runner, &clock);

        assert!(!tools.command_exists("wtype").await);
        clock.advance(Duration::from_secs(30));
        assert!(!tools.command_exists("wtype").await);

        assert_eq!(runner.call_count(), 2);
    }

    #[tokio::test]
    async fn spawn_failure_is_negative() {
        let runner = Arc::new(ScriptedRunner::new().on("which", Scripted::SpawnError));
        let clock = Arc::new(ManualClock::new());
        let tools = cache(&runner, &clock);

        assert!(!tools.command_exists("xdotool").await);
    }

    #[tokio::test]
    async fn windows_uses_where() {
        let runner = Arc::new(ScriptedRunner::new().with_tools(&["powershell"]));
        let clock = Arc::new(ManualClock::new());
        let tools = ToolAvailabilityCache::new(
            runner.clone(),
            Platform::Windows,
            Duration::from_secs(30),
            clock,
        );

        assert!(tools.command_exists("powershell").await);
        assert_eq!(runner.calls_to("where").len(), 1);
        assert!(runner.calls_to("which").is_empty());
    }

    #[tokio::test]
    async fn presence_reports_each_tool() {
        let runner = Arc::new(ScriptedRunner::new().with_tools(&["wtype"]));
        let clock = Arc::new(ManualClock::new());
        let tools = cache(&runner, &clock);

        let presence = tools.presence(&["wtype", "xdotool"]).await;
        assert!(presence.has("wtype"));
        assert!(!presence.has("xdotool"));
    }
}
