//! Error taxonomy for the live suite.
//!
//! Nothing here is retried: every failure is terminal for its test case and
//! surfaces either as an infrastructure error (navigation, locator, render
//! timeout) or as the primary expected failure mode, a translation mismatch
//! carrying both strings for diff inspection.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("navigation failed: {0}")]
    Navigation(String),

    #[error("element not found: {0}")]
    ElementNotFound(String),

    #[error("translation output never rendered: {0}")]
    RenderTimeout(String),

    #[error("translation mismatch for {tc_id}\n  expected: {expected:?}\n  actual:   {actual:?}")]
    Mismatch {
        tc_id: String,
        expected: String,
        actual: String,
    },

    #[error("{tc_id}: rendered text equals the raw input; the target performed no transformation")]
    NoOpRender { tc_id: String },

    #[error("{tc_id}: output still shows {text:?} after clearing the input")]
    StaleOutput { tc_id: String, text: String },

    #[error("{tc_id}: no output rendered after typing the partial input")]
    NoPartialRender { tc_id: String },

    #[error("{tc_id}: output differs across independent sessions\n  first: {first:?}\n  later: {later:?}")]
    Unstable {
        tc_id: String,
        first: String,
        later: String,
    },

    #[error("playwright not found; install with: npm install playwright && npx playwright install")]
    PlaywrightNotFound,

    #[error("target {url} unreachable: {reason}")]
    TargetUnreachable { url: String, reason: String },

    #[error("browser session failed: {0}")]
    Script(String),

    #[error("could not parse browser session output: {0}")]
    Protocol(String),

    #[error("session did not emit {0:?}")]
    MissingEmit(String),

    #[error("fixture error: {0}")]
    Fixture(#[from] singlish_fixtures::FixtureError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type HarnessResult<T> = Result<T, HarnessError>;
