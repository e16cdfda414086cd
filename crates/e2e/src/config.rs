//! Target and timing configuration.
//!
//! The tunable surface is deliberately small: the target URL, the two DOM
//! contracts (input accessible name, output CSS signature) and five timing
//! constants. Everything else about the remote page is outside our control.

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;

/// Browser engine driven through Playwright. `ValueEnum` so the harness
/// CLI rejects unknown names instead of guessing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Browser {
    #[default]
    Chromium,
    Firefox,
    Webkit,
}

impl Browser {
    pub fn as_str(&self) -> &'static str {
        match self {
            Browser::Chromium => "chromium",
            Browser::Firefox => "firefox",
            Browser::Webkit => "webkit",
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five externally tunable timing constants, all in milliseconds.
#[derive(Debug, Clone)]
pub struct Timeouts {
    /// Fixed settle after the page reaches network-idle.
    pub page_load_ms: u64,
    /// Fixed settle after clearing the input, letting any debounce cycle
    /// in the target page catch up.
    pub after_clear_ms: u64,
    /// Grace delay applied after the first non-empty paint; the target may
    /// still be mutating the DOM in small increments.
    pub render_grace_ms: u64,
    /// Courtesy delay between fixtures against the shared remote target.
    pub between_tests_ms: u64,
    /// Hard bound on waiting for any non-empty output.
    pub output_wait_ms: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            page_load_ms: 2000,
            after_clear_ms: 1000,
            render_grace_ms: 3000,
            between_tests_ms: 2000,
            output_wait_ms: 10_000,
        }
    }
}

/// Everything the driver needs to know about the target page.
#[derive(Debug, Clone)]
pub struct TargetConfig {
    /// URL of the translator single-page application.
    pub url: String,

    /// Accessible name of the input textbox.
    pub input_label: String,

    /// Structural CSS signature shared by the output container(s). The
    /// driver disambiguates by excluding editable text controls.
    pub output_selector: String,

    pub timeouts: Timeouts,
    pub browser: Browser,
    pub headless: bool,
    pub viewport_width: u32,
    pub viewport_height: u32,

    /// Failure screenshots land here.
    pub artifacts_dir: PathBuf,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            url: "https://www.swifttranslator.com/".to_string(),
            input_label: "Input Your Singlish Text Here.".to_string(),
            output_selector:
                "div.w-full.h-80.p-3.rounded-lg.ring-1.ring-slate-300.whitespace-pre-wrap"
                    .to_string(),
            timeouts: Timeouts::default(),
            browser: Browser::Chromium,
            headless: true,
            viewport_width: 1280,
            viewport_height: 720,
            artifacts_dir: PathBuf::from("test-results/artifacts"),
        }
    }
}
