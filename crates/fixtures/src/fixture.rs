//! Fixture record types and classification tags.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shape shared by every test-case id: `{Pos|Neg}_{Fun|UI}_` + 4 digits.
static TC_ID_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(Pos|Neg)_(Fun|UI)_[0-9]{4}$").expect("tc_id regex"));

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("malformed tc_id {0:?} (expected {{Pos|Neg}}_{{Fun|UI}}_NNNN)")]
    MalformedId(String),

    #[error("fixture {tc_id}: {field} is empty")]
    EmptyField { tc_id: String, field: &'static str },

    #[error("duplicate tc_id: {0}")]
    DuplicateId(String),

    #[error("fixture {tc_id}: partial input {partial:?} is not a proper prefix of the full input")]
    NotAPrefix { tc_id: String, partial: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Broad scenario classification, mirroring the test plan's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    DailyLanguage,
    MixedSinglishEnglish,
    GreetingRequestResponse,
    PhrasePattern,
    PunctuationNumbers,
    SlangInformal,
    NamesPlaces,
    Formatting,
    TypoHandling,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::DailyLanguage => "daily language usage",
            Category::MixedSinglishEnglish => "mixed Singlish + English",
            Category::GreetingRequestResponse => "greeting / request / response",
            Category::PhrasePattern => "word combination / phrase pattern",
            Category::PunctuationNumbers => "punctuation / numbers",
            Category::SlangInformal => "slang / informal language",
            Category::NamesPlaces => "names / places / common English words",
            Category::Formatting => "formatting (spaces / line breaks)",
            Category::TypoHandling => "typographical error handling",
        };
        f.write_str(s)
    }
}

/// Grammatical construct the fixture exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Grammar {
    SimpleSentence,
    CompoundSentence,
    ComplexSentence,
    Interrogative,
    Imperative,
    Negation,
    PastTense,
    PresentTense,
    FutureTense,
    PronounVariation,
    PluralForm,
}

/// Rough input-length bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthClass {
    S,
    M,
    L,
}

/// One immutable functional test case: Singlish in, exact Sinhala out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub tc_id: String,
    pub name: String,
    pub input: String,
    pub expected: String,
    pub category: Category,
    pub grammar: Grammar,
    pub length: LengthClass,
}

impl Fixture {
    /// Display name used by the runner and report: `"<tc_id> - <name>"`.
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.tc_id, self.name)
    }

    /// True when the expected output differs from the raw input, i.e. the
    /// target is supposed to perform a non-trivial transformation.
    pub fn transforms_input(&self) -> bool {
        self.expected != self.input
    }

    pub fn validate(&self) -> Result<(), FixtureError> {
        if !TC_ID_SHAPE.is_match(&self.tc_id) {
            return Err(FixtureError::MalformedId(self.tc_id.clone()));
        }
        for (field, value) in [
            ("name", &self.name),
            ("input", &self.input),
            ("expected", &self.expected),
        ] {
            if value.is_empty() {
                return Err(FixtureError::EmptyField {
                    tc_id: self.tc_id.clone(),
                    field,
                });
            }
        }
        Ok(())
    }
}

/// The incremental-UI scenario: type a prefix, assert the page already shows
/// some output, finish typing, assert the exact final rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiFixture {
    #[serde(flatten)]
    pub fixture: Fixture,
    pub partial_input: String,
}

impl UiFixture {
    /// The keystrokes remaining after the partial prefix has been typed.
    pub fn remainder(&self) -> &str {
        &self.fixture.input[self.partial_input.len()..]
    }

    pub fn validate(&self) -> Result<(), FixtureError> {
        self.fixture.validate()?;
        let proper = !self.partial_input.is_empty()
            && self.partial_input.len() < self.fixture.input.len()
            && self.fixture.input.starts_with(&self.partial_input);
        if !proper {
            return Err(FixtureError::NotAPrefix {
                tc_id: self.fixture.tc_id.clone(),
                partial: self.partial_input.clone(),
            });
        }
        Ok(())
    }
}
