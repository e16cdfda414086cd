//! Suite runner.
//!
//! One fresh browser session per fixture, strictly sequential, with a
//! courtesy delay between cases so concurrent load on the shared remote
//! target stays bounded. A failing case never aborts its siblings.

use std::time::{Duration, Instant};

use chrono::Utc;
use tracing::{error, info};

use singlish_fixtures::{Fixture, UiFixture};

use crate::config::TargetConfig;
use crate::driver::PageDriver;
use crate::error::{HarnessError, HarnessResult};
use crate::report::{CaseResult, Group, SuiteResult};

/// Inter-keystroke delay for the incremental-typing scenario.
pub const KEYSTROKE_DELAY_MS: u64 = 150;

/// Settle after typing the partial prefix, before probing for live output.
pub const PARTIAL_SETTLE_MS: u64 = 1500;

pub struct SuiteRunner {
    driver: PageDriver,
    /// Independent sessions per fixture; > 1 additionally checks that the
    /// output is identical across sessions.
    repeat: usize,
}

impl SuiteRunner {
    pub fn new(config: TargetConfig) -> HarnessResult<Self> {
        Ok(Self {
            driver: PageDriver::new(config)?,
            repeat: 1,
        })
    }

    pub fn with_repeat(mut self, repeat: usize) -> Self {
        self.repeat = repeat.max(1);
        self
    }

    /// Fail fast before the first session: the target must answer an HTTP
    /// GET, otherwise every case would time out identically.
    pub async fn preflight(&self) -> HarnessResult<()> {
        let url = &self.driver.config().url;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        let resp = client.get(url).send().await.map_err(|e| {
            HarnessError::TargetUnreachable {
                url: url.clone(),
                reason: e.to_string(),
            }
        })?;
        if !resp.status().is_success() {
            return Err(HarnessError::TargetUnreachable {
                url: url.clone(),
                reason: format!("HTTP {}", resp.status()),
            });
        }

        info!("target reachable at {url}");
        Ok(())
    }

    /// Run functional fixtures and, optionally, the UI scenario.
    pub async fn run_suite(
        &self,
        functional: &[Fixture],
        ui: Option<&UiFixture>,
    ) -> SuiteResult {
        let started_at = Utc::now();
        let start = Instant::now();
        let mut results = Vec::new();

        let total = functional.len() + usize::from(ui.is_some());
        info!("running {total} test case(s) against {}", self.driver.config().url);

        for fixture in functional {
            results.push(
                self.run_case(fixture, Group::from_tc_id(&fixture.tc_id))
                    .await,
            );
            self.pace().await;
        }

        if let Some(ui) = ui {
            results.push(self.run_ui_case(ui).await);
            self.pace().await;
        }

        let suite = SuiteResult::from_cases(started_at, start.elapsed().as_millis() as u64, results);
        info!(
            "suite finished: {} passed, {} failed ({} ms)",
            suite.passed, suite.failed, suite.duration_ms
        );
        suite
    }

    /// Run one functional fixture in its own fresh session(s).
    pub async fn run_case(&self, fixture: &Fixture, group: Group) -> CaseResult {
        let start = Instant::now();
        let outcome = self.observed_output(fixture).await;
        case_result(fixture, group, start.elapsed().as_millis() as u64, outcome)
    }

    /// Run the incremental-typing scenario.
    pub async fn run_ui_case(&self, ui: &UiFixture) -> CaseResult {
        let start = Instant::now();
        let outcome = self.incremental_checked(ui).await;
        case_result(
            &ui.fixture,
            Group::Ui,
            start.elapsed().as_millis() as u64,
            outcome,
        )
    }

    async fn observed_output(&self, fixture: &Fixture) -> HarnessResult<String> {
        let first = self.translate_once(fixture, 1).await?;
        for attempt in 2..=self.repeat {
            self.pace().await;
            let later = self.translate_once(fixture, attempt).await?;
            require_stable(&fixture.tc_id, &first, later)?;
        }
        Ok(first)
    }

    async fn translate_once(&self, fixture: &Fixture, attempt: usize) -> HarnessResult<String> {
        let session = format!("{}-s{attempt}", fixture.tc_id);
        let actual = self
            .driver
            .perform_translation(&session, &fixture.input)
            .await?;
        checked_translation(fixture, actual)
    }

    async fn incremental_checked(&self, ui: &UiFixture) -> HarnessResult<String> {
        let first = self.incremental_once(ui, 1).await?;
        for attempt in 2..=self.repeat {
            self.pace().await;
            let later = self.incremental_once(ui, attempt).await?;
            require_stable(&ui.fixture.tc_id, &first, later)?;
        }
        Ok(first)
    }

    async fn incremental_once(&self, ui: &UiFixture, attempt: usize) -> HarnessResult<String> {
        let session = format!("{}-s{attempt}", ui.fixture.tc_id);
        let outcome = self
            .driver
            .perform_incremental(&session, ui, KEYSTROKE_DELAY_MS, PARTIAL_SETTLE_MS)
            .await?;

        if !outcome.after_clear.is_empty() {
            return Err(HarnessError::StaleOutput {
                tc_id: ui.fixture.tc_id.clone(),
                text: outcome.after_clear,
            });
        }
        if outcome.partial.is_empty() {
            return Err(HarnessError::NoPartialRender {
                tc_id: ui.fixture.tc_id.clone(),
            });
        }
        Ok(outcome.final_text)
    }

    async fn pace(&self) {
        tokio::time::sleep(Duration::from_millis(
            self.driver.config().timeouts.between_tests_ms,
        ))
        .await;
    }
}

/// No-op sanity check: when the fixture expects a transformation, reading
/// back the raw input means the page echoed it without translating.
fn checked_translation(fixture: &Fixture, actual: String) -> HarnessResult<String> {
    if fixture.transforms_input() && actual == fixture.input {
        return Err(HarnessError::NoOpRender {
            tc_id: fixture.tc_id.clone(),
        });
    }
    Ok(actual)
}

/// Independent sessions of the same fixture must observe identical output.
fn require_stable(tc_id: &str, first: &str, later: String) -> HarnessResult<()> {
    if later != first {
        return Err(HarnessError::Unstable {
            tc_id: tc_id.to_string(),
            first: first.to_string(),
            later,
        });
    }
    Ok(())
}

/// Fold a session outcome into a reportable case result. The rendered text
/// is kept whenever the session got far enough to read it, so mismatches
/// always carry both strings.
fn case_result(
    fixture: &Fixture,
    group: Group,
    duration_ms: u64,
    outcome: HarnessResult<String>,
) -> CaseResult {
    let display_name = fixture.display_name();
    let (passed, actual, error) = match outcome {
        Ok(actual) if actual == fixture.expected => (true, Some(actual), None),
        Ok(actual) => {
            let err = HarnessError::Mismatch {
                tc_id: fixture.tc_id.clone(),
                expected: fixture.expected.clone(),
                actual: actual.clone(),
            };
            (false, Some(actual), Some(err.to_string()))
        }
        Err(e) => (false, None, Some(e.to_string())),
    };

    match &error {
        None => info!("✓ {} ({duration_ms} ms)", display_name),
        Some(e) => error!("✗ {} - {e}", display_name),
    }

    CaseResult {
        tc_id: fixture.tc_id.clone(),
        name: display_name,
        group,
        passed,
        duration_ms,
        expected: fixture.expected.clone(),
        actual,
        error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use singlish_fixtures::{Category, Grammar, LengthClass};

    fn fixture() -> Fixture {
        Fixture {
            tc_id: "Pos_Fun_0016".into(),
            name: "Convert English names".into(),
            input: "api dhaen Matara yamu.".into(),
            expected: "අපි දැන් Matara යමු.".into(),
            category: Category::NamesPlaces,
            grammar: Grammar::PresentTense,
            length: LengthClass::S,
        }
    }

    #[test]
    fn matching_output_passes() {
        let fx = fixture();
        let result = case_result(&fx, Group::Positive, 10, Ok(fx.expected.clone()));
        assert!(result.passed);
        assert_eq!(result.actual.as_deref(), Some(fx.expected.as_str()));
        assert!(result.error.is_none());
        assert_eq!(result.name, "Pos_Fun_0016 - Convert English names");
    }

    #[test]
    fn mismatch_keeps_both_strings_for_diffing() {
        let fx = fixture();
        let result = case_result(&fx, Group::Positive, 10, Ok("අපි Matara යමු.".into()));
        assert!(!result.passed);
        assert_eq!(result.actual.as_deref(), Some("අපි Matara යමු."));
        let err = result.error.unwrap();
        assert!(err.contains("expected"));
        assert!(err.contains("actual"));
    }

    #[test]
    fn infrastructure_failure_has_no_actual_text() {
        let fx = fixture();
        let result = case_result(
            &fx,
            Group::Positive,
            10,
            Err(HarnessError::RenderTimeout("exceeded 10000ms".into())),
        );
        assert!(!result.passed);
        assert!(result.actual.is_none());
        assert!(result.error.unwrap().contains("never rendered"));
    }

    #[test]
    fn echoed_input_is_a_no_op_render() {
        let fx = fixture();
        assert!(matches!(
            checked_translation(&fx, fx.input.clone()),
            Err(HarnessError::NoOpRender { .. })
        ));
    }

    #[test]
    fn transformed_output_passes_the_no_op_check() {
        let fx = fixture();
        let out = checked_translation(&fx, fx.expected.clone()).unwrap();
        assert_eq!(out, fx.expected);
    }

    #[test]
    fn identity_fixture_may_echo_its_input() {
        // A fixture whose expected output equals its input (pure Latin
        // passthrough) must not trip the no-op check.
        let mut fx = fixture();
        fx.expected = fx.input.clone();
        assert!(checked_translation(&fx, fx.input.clone()).is_ok());
    }

    #[test]
    fn repeated_sessions_must_agree() {
        assert!(require_stable(
            "Pos_Fun_0016",
            "අපි දැන් Matara යමු.",
            "අපි දැන් Matara යමු.".into()
        )
        .is_ok());

        let err = require_stable(
            "Pos_Fun_0016",
            "අපි දැන් Matara යමු.",
            "අපි Matara යමු.".into(),
        )
        .unwrap_err();
        match err {
            HarnessError::Unstable { tc_id, first, later } => {
                assert_eq!(tc_id, "Pos_Fun_0016");
                assert_eq!(first, "අපි දැන් Matara යමු.");
                assert_eq!(later, "අපි Matara යමු.");
            }
            other => panic!("expected Unstable, got {other}"),
        }
    }

    #[test]
    fn exact_equality_is_whitespace_sensitive() {
        let mut fx = fixture();
        fx.expected = "ඊයෙ         අපි         මිදුල        පිරිසිදු             කරා.".into();
        let collapsed = "ඊයෙ අපි මිදුල පිරිසිදු කරා.".to_string();
        let result = case_result(&fx, Group::Positive, 10, Ok(collapsed));
        assert!(!result.passed, "collapsed whitespace must not pass");
    }
}
