//! Page interaction driver.
//!
//! Executes a compiled [`PageStep`] plan as one fresh browser session:
//! write the script to a temp dir, run it with node, and parse the single
//! JSON result line from stdout. Playwright log noise around that line is
//! ignored.

use std::collections::BTreeMap;
use std::process::{Command, Stdio};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use tokio::process::Command as TokioCommand;
use tracing::debug;

use singlish_fixtures::UiFixture;

use crate::config::TargetConfig;
use crate::error::{HarnessError, HarnessResult};
use crate::script::{PageStep, ScriptBuilder};

/// Labeled text reads collected by a session script.
pub type Emits = BTreeMap<String, String>;

/// Both probes of the incremental-typing scenario plus the final read.
#[derive(Debug, Clone)]
pub struct IncrementalOutcome {
    /// Output text right after clearing the input (stale-state check).
    pub after_clear: String,
    /// Output text after typing only the partial prefix.
    pub partial: String,
    /// Final rendered text after the full input.
    pub final_text: String,
}

static RESULT_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?m)^\{"ok":.*\}\s*$"#).expect("result-line regex"));

#[derive(Debug, Deserialize)]
struct RawOutcome {
    ok: bool,
    #[serde(default)]
    emits: Emits,
    #[serde(default)]
    kind: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Check that `npx playwright` answers; the suite cannot run without it.
pub fn playwright_available() -> bool {
    Command::new("npx")
        .args(["playwright", "--version"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

pub struct PageDriver {
    config: TargetConfig,
}

impl PageDriver {
    pub fn new(config: TargetConfig) -> HarnessResult<Self> {
        if !playwright_available() {
            return Err(HarnessError::PlaywrightNotFound);
        }
        std::fs::create_dir_all(&config.artifacts_dir)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &TargetConfig {
        &self.config
    }

    /// Run a step plan in a fresh browser session named `session`.
    pub async fn run_steps(&self, session: &str, steps: &[PageStep]) -> HarnessResult<Emits> {
        let script = ScriptBuilder::new(&self.config).build(session, steps);

        let dir = tempfile::tempdir()?;
        let script_path = dir.path().join("session.js");
        std::fs::write(&script_path, &script)?;

        debug!(session, steps = steps.len(), "running browser session");

        let output = TokioCommand::new("node")
            .arg(&script_path)
            .output()
            .await
            .map_err(|e| HarnessError::Script(format!("failed to run node: {e}")))?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        match parse_outcome(&stdout) {
            Ok(emits) => Ok(emits),
            Err(HarnessError::Protocol(msg)) if !output.status.success() => {
                // The script died before printing its result line.
                let stderr = String::from_utf8_lossy(&output.stderr);
                Err(HarnessError::Script(format!(
                    "{msg}\nstderr: {}",
                    stderr.trim()
                )))
            }
            Err(e) => Err(e),
        }
    }

    /// The atomic step for every functional fixture: fresh page, clear,
    /// fill, two-phase wait, read. Returns the final rendered text.
    pub async fn perform_translation(&self, session: &str, input: &str) -> HarnessResult<String> {
        let steps = vec![
            PageStep::Navigate,
            PageStep::ClearAndSettle,
            PageStep::TypeText {
                text: input.to_string(),
            },
            PageStep::WaitForRenderedOutput {
                timeout_ms: self.config.timeouts.output_wait_ms,
            },
            PageStep::ReadOutput {
                label: "final".into(),
            },
        ];
        let mut emits = self.run_steps(session, &steps).await?;
        emits
            .remove("final")
            .ok_or_else(|| HarnessError::MissingEmit("final".into()))
    }

    /// The incremental scenario: probe right after clearing (stale-state
    /// check), type the prefix and probe again (live-render check), then
    /// finish typing and read the final rendering.
    pub async fn perform_incremental(
        &self,
        session: &str,
        ui: &UiFixture,
        per_char_delay_ms: u64,
        partial_settle_ms: u64,
    ) -> HarnessResult<IncrementalOutcome> {
        let steps = vec![
            PageStep::Navigate,
            PageStep::ClearAndSettle,
            PageStep::ProbeOutputText {
                label: "after_clear".into(),
            },
            PageStep::TypeIncremental {
                text: ui.partial_input.clone(),
                per_char_delay_ms,
            },
            PageStep::Sleep {
                ms: partial_settle_ms,
            },
            PageStep::ProbeOutputText {
                label: "partial".into(),
            },
            PageStep::TypeIncremental {
                text: ui.remainder().to_string(),
                per_char_delay_ms,
            },
            PageStep::WaitForRenderedOutput {
                timeout_ms: self.config.timeouts.output_wait_ms,
            },
            PageStep::ReadOutput {
                label: "final".into(),
            },
        ];
        let mut emits = self.run_steps(session, &steps).await?;
        let take = |emits: &mut Emits, label: &str| {
            emits
                .remove(label)
                .ok_or_else(|| HarnessError::MissingEmit(label.to_string()))
        };
        Ok(IncrementalOutcome {
            after_clear: take(&mut emits, "after_clear")?,
            partial: take(&mut emits, "partial")?,
            final_text: take(&mut emits, "final")?,
        })
    }
}

/// Extract and decode the session result line from node's stdout.
fn parse_outcome(stdout: &str) -> HarnessResult<Emits> {
    let line = RESULT_LINE
        .find_iter(stdout)
        .last()
        .ok_or_else(|| HarnessError::Protocol(format!("no result line in: {stdout:?}")))?;

    let raw: RawOutcome = serde_json::from_str(line.as_str())
        .map_err(|e| HarnessError::Protocol(format!("bad result line: {e}")))?;

    if raw.ok {
        return Ok(raw.emits);
    }

    let message = raw.message.unwrap_or_else(|| "unknown error".to_string());
    Err(match raw.kind.as_deref() {
        Some("navigation") => HarnessError::Navigation(message),
        Some("locator") => HarnessError::ElementNotFound(message),
        Some("render_timeout") => HarnessError::RenderTimeout(message),
        _ => HarnessError::Script(message),
    })
}
