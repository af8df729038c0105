//! Mock port implementations shared by the application tests

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use async_trait::async_trait;

use super::ports::{
    Clipboard, ClipboardError, Clock, CommandError, CommandOutput, CommandRunner, Environment,
};
use crate::domain::delivery::Invocation;

/// Clock moved by hand
pub struct ManualClock {
    now: Mutex<Instant>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Instant::now()),
        }
    }

    pub fn advance(&self, by: Duration) {
        *self.now.lock().unwrap() += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        *self.now.lock().unwrap()
    }
}

/// Canned process behaviour
#[derive(Debug, Clone)]
pub enum Scripted {
    /// Exit with a code and stdout
    Exit(i32, &'static str),
    /// Fail to spawn
    SpawnError,
    /// Never exit on its own; times out
    Hang,
}

struct Rule {
    program: String,
    args_contain: Option<String>,
    response: Scripted,
}

/// Runner answering from a rule table and recording every call.
///
/// Unmatched programs behave as if missing from PATH.
#[derive(Default)]
pub struct ScriptedRunner {
    rules: Vec<Rule>,
    calls: Mutex<Vec<Invocation>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to any call of `program`
    pub fn on(mut self, program: &str, response: Scripted) -> Self {
        self.rules.push(Rule {
            program: program.to_string(),
            args_contain: None,
            response,
        });
        self
    }

    /// Respond to calls of `program` whose joined args contain `pattern`
    pub fn on_args(mut self, program: &str, pattern: &str, response: Scripted) -> Self {
        self.rules.push(Rule {
            program: program.to_string(),
            args_contain: Some(pattern.to_string()),
            response,
        });
        self
    }

    /// Make `which`/`where` report the given tools as installed
    pub fn with_tools(mut self, tools: &[&str]) -> Self {
        for tool in tools {
            self = self
                .on_args("which", tool, Scripted::Exit(0, ""))
                .on_args("where", tool, Scripted::Exit(0, ""));
        }
        self.on("which", Scripted::Exit(1, ""))
            .on("where", Scripted::Exit(1, ""))
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Calls of `program` (not counting lookups of it)
    pub fn calls_to(&self, program: &str) -> Vec<Invocation> {
        self.calls()
            .into_iter()
            .filter(|c| c.program == program)
            .collect()
    }

    fn lookup(&self, invocation: &Invocation) -> Option<Scripted> {
        let joined = invocation.args.join(" ");
        self.rules
            .iter()
            .find(|r| {
                r.program == invocation.program
                    && r.args_contain
                        .as_ref()
                        .map_or(true, |p| joined.contains(p.as_str()))
            })
            .map(|r| r.response.clone())
    }
}

#[async_trait]
impl CommandRunner for ScriptedRunner {
    async fn run(
        &self,
        invocation: &Invocation,
        timeout: Duration,
    ) -> Result<CommandOutput, CommandError> {
        self.calls.lock().unwrap().push(invocation.clone());

        match self.lookup(invocation) {
            Some(Scripted::Exit(code, stdout)) => Ok(CommandOutput {
                code: Some(code),
                stdout: stdout.to_string(),
                stderr: if code == 0 {
                    String::new()
                } else {
                    "scripted failure".to_string()
                },
            }),
            Some(Scripted::SpawnError) => Err(CommandError::SpawnFailed {
                program: invocation.program.clone(),
                message: "scripted spawn error".to_string(),
            }),
            Some(Scripted::Hang) => {
                tokio::time::sleep(timeout).await;
                Err(CommandError::TimedOut {
                    program: invocation.program.clone(),
                    timeout,
                })
            }
            None => Err(CommandError::NotFound(invocation.program.clone())),
        }
    }
}

/// In-memory clipboard recording every write
#[derive(Default)]
pub struct MemoryClipboard {
    content: Mutex<Option<String>>,
    writes: Mutex<Vec<String>>,
    handovers: Mutex<usize>,
}

impl MemoryClipboard {
    pub fn with_text(text: &str) -> Self {
        Self {
            content: Mutex::new(Some(text.to_string())),
            writes: Mutex::new(Vec::new()),
            handovers: Mutex::new(0),
        }
    }

    pub fn content(&self) -> Option<String> {
        self.content.lock().unwrap().clone()
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }

    pub fn handovers(&self) -> usize {
        *self.handovers.lock().unwrap()
    }
}

#[async_trait]
impl Clipboard for MemoryClipboard {
    async fn read(&self) -> Result<Option<String>, ClipboardError> {
        Ok(self.content())
    }

    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        *self.content.lock().unwrap() = Some(text.to_string());
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn hand_over(&self) -> Result<(), ClipboardError> {
        *self.handovers.lock().unwrap() += 1;
        Ok(())
    }
}

/// Environment backed by a map and a set of existing files
#[derive(Default)]
pub struct FakeEnvironment {
    vars: HashMap<String, String>,
    files: Vec<PathBuf>,
    exe_dir: Option<PathBuf>,
}

impl FakeEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }

    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(path.into());
        self
    }

    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.exe_dir = Some(dir.into());
        self
    }
}

impl Environment for FakeEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.files.iter().any(|f| f == path)
    }

    fn exe_dir(&self) -> Option<PathBuf> {
        self.exe_dir.clone()
    }
}
