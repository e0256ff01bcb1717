//! Per-run results: tracked outputs, their reasons and per-candidate failures.

use crate::stats::PipelineStats;
use decorgen_codegen::GeneratedSource;
use decorgen_core::{HintName, TypeDescriptor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a tracked output appears in a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputReason {
    /// First time this identity produced output
    New,
    /// Descriptor changed, output was resynthesized
    Modified,
    /// Descriptor unchanged, previous output reused
    Cached,
    /// Identity no longer produces output
    Removed,
}

impl OutputReason {
    /// Lowercase name, as printed by hosts.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Modified => "modified",
            Self::Cached => "cached",
            Self::Removed => "removed",
        }
    }
}

impl fmt::Display for OutputReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// blake3 digest of an output's text, hex encoded.
///
/// # Examples
///
/// ```
/// use decorgen_pipeline::Fingerprint;
///
/// let a = Fingerprint::of("partial class A {}");
/// assert_eq!(a, Fingerprint::of("partial class A {}"));
/// assert_ne!(a, Fingerprint::of("partial class B {}"));
/// assert_eq!(a.as_str().len(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Fingerprints a source text.
    #[must_use]
    pub fn of(text: &str) -> Self {
        Self(blake3::hash(text.as_bytes()).to_hex().to_string())
    }

    /// Hex digest.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One per-type output of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedSource {
    /// Identity of the generating type
    pub target: TypeDescriptor,
    /// Stable unit name
    pub hint_name: HintName,
    /// Why the output is reported
    pub reason: OutputReason,
    /// Output text; for removed outputs, the last text emitted
    pub source_text: String,
    /// Fingerprint of `source_text`
    pub fingerprint: Fingerprint,
}

/// A candidate whose extraction or synthesis failed.
///
/// Its previous output, if any, stays in the cache untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateFailure {
    /// Identity of the failing type
    pub target: TypeDescriptor,
    /// Rendered error
    pub message: String,
}

/// Everything one pipeline run produced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunResult {
    /// Marker attribute source; only present on the first run
    pub marker: Option<GeneratedSource>,
    /// Per-type outputs: candidates in declaration order, then removals
    pub tracked: Vec<TrackedSource>,
    /// Candidates that failed this run
    pub failures: Vec<CandidateFailure>,
    /// Counts for this run
    pub stats: PipelineStats,
}

impl RunResult {
    /// Finds a tracked output by hint name.
    #[must_use]
    pub fn tracked_by_hint(&self, hint_name: &str) -> Option<&TrackedSource> {
        self.tracked.iter().find(|t| t.hint_name.as_str() == hint_name)
    }

    /// Tracked outputs with the given reason.
    pub fn with_reason(&self, reason: OutputReason) -> impl Iterator<Item = &TrackedSource> {
        self.tracked.iter().filter(move |t| t.reason == reason)
    }

    /// Every source unit that exists after this run: the marker (first run
    /// only) and all non-removed tracked outputs.
    pub fn generated_sources(&self) -> impl Iterator<Item = (&HintName, &str)> {
        self.marker
            .iter()
            .map(|m| (&m.hint_name, m.content.as_str()))
            .chain(
                self.tracked
                    .iter()
                    .filter(|t| t.reason != OutputReason::Removed)
                    .map(|t| (&t.hint_name, t.source_text.as_str())),
            )
    }
}
