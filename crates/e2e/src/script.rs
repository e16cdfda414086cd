//! Compiling page-interaction steps into a Playwright session script.
//!
//! One script = one browser session = one test case. The script performs
//! every step in order inside a single page, collects labeled text reads in
//! an `emits` object, and prints exactly one JSON line at the end:
//! `{ ok: true, emits }` on success, or
//! `{ ok: false, kind, message }` with the failing phase on error.

use crate::config::TargetConfig;

/// Bound on probe reads; without it a missing output element would hold
/// the session for Playwright's default 30 s locator timeout before the
/// probe's empty-string fallback kicks in.
const PROBE_READ_TIMEOUT_MS: u64 = 1000;

/// A single operation against the translator page, in execution order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageStep {
    /// Load the target page, wait for network-idle, then the fixed
    /// page-load settle.
    Navigate,

    /// Clear the input textbox and wait the post-clear settle.
    ClearAndSettle,

    /// Write the whole string into the input in one operation.
    TypeText { text: String },

    /// Type character by character with an inter-keystroke delay, to
    /// exercise the page's debounced live-render path.
    TypeIncremental { text: String, per_char_delay_ms: u64 },

    /// Poll until some non-input element matching the output signature has
    /// non-empty trimmed text, then apply the render-grace settle.
    WaitForRenderedOutput { timeout_ms: u64 },

    /// Read the output text right now and emit it under `label`; tolerant
    /// of a missing or empty output element (emits the empty string).
    ProbeOutputText { label: String },

    /// Read the output text and emit it under `label`; a missing element
    /// is an error.
    ReadOutput { label: String },

    /// Fixed wait.
    Sleep { ms: u64 },
}

impl PageStep {
    /// Short name used in logs.
    pub fn name(&self) -> String {
        match self {
            PageStep::Navigate => "navigate".to_string(),
            PageStep::ClearAndSettle => "clear_and_settle".to_string(),
            PageStep::TypeText { text } => format!("type_text[{} chars]", text.chars().count()),
            PageStep::TypeIncremental { text, .. } => {
                format!("type_incremental[{} chars]", text.chars().count())
            }
            PageStep::WaitForRenderedOutput { timeout_ms } => {
                format!("wait_for_rendered_output[{timeout_ms} ms]")
            }
            PageStep::ProbeOutputText { label } => format!("probe_output[{label}]"),
            PageStep::ReadOutput { label } => format!("read_output[{label}]"),
            PageStep::Sleep { ms } => format!("sleep[{ms} ms]"),
        }
    }

    /// Failure kind reported when this step is the one that throws.
    fn kind(&self) -> &'static str {
        match self {
            PageStep::Navigate => "navigation",
            PageStep::WaitForRenderedOutput { .. } => "render_timeout",
            PageStep::ClearAndSettle
            | PageStep::TypeText { .. }
            | PageStep::TypeIncremental { .. }
            | PageStep::ProbeOutputText { .. }
            | PageStep::ReadOutput { .. } => "locator",
            PageStep::Sleep { .. } => "script",
        }
    }
}

/// Embed a Rust string as a JS string literal. JSON string syntax is valid
/// JS, so this handles quotes, newlines and non-ASCII text in one move.
fn js_str(s: &str) -> String {
    serde_json::to_string(s).expect("strings always serialize")
}

/// Compiles an ordered step plan into a self-contained Node.js script.
pub struct ScriptBuilder<'a> {
    config: &'a TargetConfig,
}

impl<'a> ScriptBuilder<'a> {
    pub fn new(config: &'a TargetConfig) -> Self {
        Self { config }
    }

    /// Build the session script. `session` names the failure screenshot.
    pub fn build(&self, session: &str, steps: &[PageStep]) -> String {
        let mut script = String::new();
        script.push_str(&self.header());

        for (i, step) in steps.iter().enumerate() {
            script.push_str(&format!("\n    // Step {}: {}\n", i + 1, step.name()));
            script.push_str(&format!("    kind = {};\n", js_str(step.kind())));
            script.push_str(&self.step_to_js(step));
        }

        script.push_str(&self.footer(session));
        script
    }

    fn header(&self) -> String {
        let c = self.config;
        format!(
            r#"const {{ chromium, firefox, webkit }} = require('playwright');

(async () => {{
  const browser = await {browser}.launch({{ headless: {headless} }});
  const context = await browser.newContext({{
    viewport: {{ width: {width}, height: {height} }}
  }});
  const page = await context.newPage();
  const inputBox = () => page.getByRole('textbox', {{ name: {label} }});
  const outputBox = () => page
    .locator({selector})
    .filter({{ hasNot: page.locator('textarea') }})
    .first();
  const readOutput = async (timeout) => ((await outputBox().textContent({{ timeout }})) ?? '').trim();
  const emits = {{}};
  let kind = 'script';

  try {{
"#,
            browser = c.browser.as_str(),
            headless = c.headless,
            width = c.viewport_width,
            height = c.viewport_height,
            label = js_str(&c.input_label),
            selector = js_str(&c.output_selector),
        )
    }

    fn step_to_js(&self, step: &PageStep) -> String {
        let t = &self.config.timeouts;
        match step {
            PageStep::Navigate => format!(
                r#"    await page.goto({url});
    await page.waitForLoadState('networkidle');
    await page.waitForTimeout({settle});
"#,
                url = js_str(&self.config.url),
                settle = t.page_load_ms,
            ),
            PageStep::ClearAndSettle => format!(
                r#"    await inputBox().clear();
    await page.waitForTimeout({settle});
"#,
                settle = t.after_clear_ms,
            ),
            PageStep::TypeText { text } => {
                format!("    await inputBox().fill({});\n", js_str(text))
            }
            PageStep::TypeIncremental {
                text,
                per_char_delay_ms,
            } => format!(
                "    await inputBox().pressSequentially({}, {{ delay: {} }});\n",
                js_str(text),
                per_char_delay_ms,
            ),
            PageStep::WaitForRenderedOutput { timeout_ms } => format!(
                r#"    await page.waitForFunction((sel) => {{
      const els = Array.from(document.querySelectorAll(sel));
      return els.some((el) => {{
        const editable = el.tagName === 'TEXTAREA' || el.getAttribute('role') === 'textbox';
        return !editable && el.textContent && el.textContent.trim().length > 0;
      }});
    }}, {selector}, {{ timeout: {timeout} }});
    await page.waitForTimeout({grace});
"#,
                selector = js_str(&self.config.output_selector),
                timeout = timeout_ms,
                grace = t.render_grace_ms,
            ),
            PageStep::ProbeOutputText { label } => format!(
                "    emits[{}] = await readOutput({PROBE_READ_TIMEOUT_MS}).catch(() => '');\n",
                js_str(label),
            ),
            PageStep::ReadOutput { label } => format!(
                "    emits[{}] = await readOutput({});\n",
                js_str(label),
                t.output_wait_ms,
            ),
            PageStep::Sleep { ms } => format!("    await page.waitForTimeout({ms});\n"),
        }
    }

    fn footer(&self, session: &str) -> String {
        let shot = self
            .config
            .artifacts_dir
            .join(format!("{session}-failure.png"));
        format!(
            r#"
    console.log(JSON.stringify({{ ok: true, emits }}));
  }} catch (error) {{
    try {{
      await page.screenshot({{ path: {shot}, fullPage: true }});
    }} catch (ignored) {{}}
    console.log(JSON.stringify({{ ok: false, kind, message: error.message }}));
    process.exitCode = 1;
  }} finally {{
    await browser.close();
  }}
}})();
"#,
            shot = js_str(&shot.to_string_lossy()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn build(steps: &[PageStep]) -> String {
        let config = TargetConfig::default();
        ScriptBuilder::new(&config).build("Pos_Fun_0001-s1", steps)
    }

    #[test]
    fn navigate_waits_for_idle_then_settles() {
        let js = build(&[PageStep::Navigate]);
        assert!(js.contains(r#"await page.goto("https://www.swifttranslator.com/");"#));
        assert!(js.contains("waitForLoadState('networkidle')"));
        assert!(js.contains("await page.waitForTimeout(2000);"));
    }

    #[test]
    fn clear_settles_for_the_debounce_cycle() {
        let js = build(&[PageStep::ClearAndSettle]);
        assert!(js.contains("await inputBox().clear();"));
        assert!(js.contains("await page.waitForTimeout(1000);"));
    }

    #[test]
    fn type_text_is_a_single_fill() {
        let js = build(&[PageStep::TypeText {
            text: "api dhaen Matara yamu.".into(),
        }]);
        assert!(js.contains(r#"await inputBox().fill("api dhaen Matara yamu.");"#));
        assert!(!js.contains("pressSequentially"));
    }

    #[test]
    fn incremental_typing_carries_keystroke_delay() {
        let js = build(&[PageStep::TypeIncremental {
            text: "adha bus".into(),
            per_char_delay_ms: 150,
        }]);
        assert!(js.contains(r#"pressSequentially("adha bus", { delay: 150 })"#));
    }

    #[test]
    fn wait_excludes_editable_controls_and_applies_grace() {
        let js = build(&[PageStep::WaitForRenderedOutput { timeout_ms: 10_000 }]);
        assert!(js.contains("el.tagName === 'TEXTAREA'"));
        assert!(js.contains("el.getAttribute('role') === 'textbox'"));
        assert!(js.contains("{ timeout: 10000 }"));
        // Grace settle after the first non-empty paint.
        assert!(js.contains("await page.waitForTimeout(3000);"));
    }

    #[test]
    fn output_locator_filters_out_the_textarea() {
        let js = build(&[PageStep::ReadOutput {
            label: "final".into(),
        }]);
        assert!(js.contains("hasNot: page.locator('textarea')"));
        assert!(js.contains(r#"emits["final"] = await readOutput(10000);"#));
    }

    #[test]
    fn probe_tolerates_missing_output() {
        let js = build(&[PageStep::ProbeOutputText {
            label: "partial".into(),
        }]);
        assert!(js.contains(r#"emits["partial"] = await readOutput(1000).catch(() => '');"#));
    }

    #[test]
    fn failure_kinds_track_the_running_step() {
        let js = build(&[
            PageStep::Navigate,
            PageStep::ClearAndSettle,
            PageStep::WaitForRenderedOutput { timeout_ms: 5000 },
        ]);
        let nav = js.find(r#"kind = "navigation";"#).unwrap();
        let loc = js.find(r#"kind = "locator";"#).unwrap();
        let wait = js.find(r#"kind = "render_timeout";"#).unwrap();
        assert!(nav < loc && loc < wait);
    }

    #[test]
    fn failure_path_screenshots_then_reports() {
        let js = build(&[PageStep::Navigate]);
        assert!(js.contains("Pos_Fun_0001-s1-failure.png"));
        assert!(js.contains(r#"JSON.stringify({ ok: false, kind, message: error.message })"#));
        assert!(js.contains("await browser.close();"));
    }

    #[test_case("line one\nline two"; "embedded newline")]
    #[test_case(r#"he said "yamu""#; "double quotes")]
    #[test_case("අද bus එකේ යමු ද?"; "sinhala text")]
    #[test_case("back\\slash"; "backslash")]
    fn js_str_round_trips_through_json(s: &str) {
        let embedded = js_str(s);
        let back: String = serde_json::from_str(&embedded).unwrap();
        assert_eq!(back, s);
        assert!(!embedded.contains('\n'));
    }

    #[test]
    fn step_names_are_stable() {
        assert_eq!(PageStep::Navigate.name(), "navigate");
        assert_eq!(
            PageStep::TypeText { text: "abc".into() }.name(),
            "type_text[3 chars]"
        );
        assert_eq!(
            PageStep::WaitForRenderedOutput { timeout_ms: 10_000 }.name(),
            "wait_for_rendered_output[10000 ms]"
        );
    }
}
