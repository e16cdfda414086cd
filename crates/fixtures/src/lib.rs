//! Fixture catalog for the Singlish-to-Sinhala translator E2E suite.
//!
//! A fixture is a single static test case: the Singlish text typed into the
//! translator, the exact Sinhala rendering the page is expected to produce,
//! and classification tags used for filtering and reporting. The built-in
//! catalog lives in [`catalog`]; supplemental fixtures can be loaded from
//! YAML files via [`loader`].
//!
//! Expected outputs are compared byte for byte by the runner, so catalog
//! entries preserve every doubled space, trailing space and embedded newline
//! on purpose.

pub mod catalog;
pub mod fixture;
pub mod loader;

pub use fixture::{Category, Fixture, FixtureError, Grammar, LengthClass, UiFixture};
