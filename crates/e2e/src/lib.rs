//! Browser-driven E2E suite for the Singlish-to-Sinhala translator UI.
//!
//! The crate drives a real browser through Playwright: each test case is
//! compiled into a self-contained Node.js script, executed as a fresh
//! browser session, and the final JSON line on stdout carries the rendered
//! text back to Rust for an exact-equality assertion.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      Suite Runner (Rust)                     │
//! ├──────────────────────────────────────────────────────────────┤
//! │  SuiteRunner                                                 │
//! │    ├── preflight() -> playwright installed, target reachable │
//! │    ├── run_case(fixture) -> one fresh session per fixture    │
//! │    └── run_ui_case(ui) -> incremental-typing scenario        │
//! ├──────────────────────────────────────────────────────────────┤
//! │  PageDriver                                                  │
//! │    ├── PageStep plan: Navigate -> ClearAndSettle ->          │
//! │    │     TypeText / TypeIncremental ->                       │
//! │    │     WaitForRenderedOutput -> ReadOutput                 │
//! │    ├── ScriptBuilder: steps -> Playwright JS                 │
//! │    └── node <session.js> -> { ok, emits } on stdout          │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The target page renders translations asynchronously with no completion
//! signal, so the wait is two-phase: poll until any non-empty output
//! appears, then apply a fixed render-grace delay before reading. The
//! grace delay is a heuristic; it is kept configurable because it has no
//! correctness guarantee against a slow-rendering target.

pub mod config;
pub mod driver;
pub mod error;
pub mod report;
pub mod runner;
pub mod script;

pub use config::{Browser, TargetConfig, Timeouts};
pub use driver::PageDriver;
pub use error::{HarnessError, HarnessResult};
pub use report::{CaseResult, Group, SuiteResult};
pub use runner::SuiteRunner;
pub use script::{PageStep, ScriptBuilder};
