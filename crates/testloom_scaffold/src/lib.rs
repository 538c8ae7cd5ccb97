//! # testloom_scaffold
//!
//! Turns a [`FileAnalysisResult`](testloom_analysis::FileAnalysisResult)
//! into test-file boilerplate: a render smoke test and one stub per event
//! handler for every component, an invocation stub for every exported
//! function, and TODO markers where real assertions belong. The emitter
//! never invents business assertions; that is the author's job.

mod emit;
mod sample;
mod write;

use serde::{Deserialize, Serialize};

pub use emit::{render_test_file, scaffold_file_name};
pub use sample::sample_value;
pub use write::{write_scaffold, ScaffoldError};

/// Test file suffix convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suffix {
    #[default]
    Test,
    Spec,
}

impl Suffix {
    pub fn as_str(self) -> &'static str {
        match self {
            Suffix::Test => "test",
            Suffix::Spec => "spec",
        }
    }
}

/// Options controlling scaffold emission.
#[derive(Debug, Clone, Default)]
pub struct ScaffoldOptions {
    /// `name.test.tsx` vs `name.spec.tsx`.
    pub suffix: Suffix,
    /// Force a framework instead of the inferred one.
    pub framework: Option<testloom_analysis::Framework>,
}
