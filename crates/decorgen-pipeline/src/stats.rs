//! Pipeline run statistics.
//!
//! Each run reports its own counts; the pipeline also keeps a cumulative
//! total across its lifetime.
//!
//! # Examples
//!
//! ```
//! use decorgen_pipeline::PipelineStats;
//!
//! let mut total = PipelineStats::default();
//! total.merge(&PipelineStats { runs: 1, new: 2, ..PipelineStats::default() });
//! total.merge(&PipelineStats { runs: 1, cached: 2, ..PipelineStats::default() });
//!
//! assert_eq!(total.runs, 2);
//! assert_eq!(total.cache_hit_rate(), Some(0.5));
//! ```

use serde::{Deserialize, Serialize};

/// Counts of outputs by reason, plus failures and cancellations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PipelineStats {
    /// Runs covered by these counts.
    pub runs: u32,

    /// Outputs reported as new.
    pub new: u32,

    /// Outputs resynthesized after a descriptor change.
    pub modified: u32,

    /// Outputs served from cache.
    pub cached: u32,

    /// Outputs removed.
    pub removed: u32,

    /// Candidates whose extraction or synthesis failed.
    pub failed: u32,

    /// Candidates abandoned because of cancellation.
    pub cancelled: u32,
}

impl PipelineStats {
    /// Adds another set of counts into this one.
    pub const fn merge(&mut self, other: &Self) {
        self.runs += other.runs;
        self.new += other.new;
        self.modified += other.modified;
        self.cached += other.cached;
        self.removed += other.removed;
        self.failed += other.failed;
        self.cancelled += other.cancelled;
    }

    /// Outputs that exist after the counted runs' synthesis step.
    #[must_use]
    pub const fn produced(&self) -> u32 {
        self.new + self.modified + self.cached
    }

    /// Share of produced outputs served from cache.
    ///
    /// Returns `None` if nothing was produced.
    #[must_use]
    pub fn cache_hit_rate(&self) -> Option<f64> {
        let produced = self.produced();
        if produced == 0 {
            return None;
        }
        Some(f64::from(self.cached) / f64::from(produced))
    }

    /// Returns `true` if any output changed (new, modified or removed).
    #[must_use]
    pub const fn has_changes(&self) -> bool {
        self.new + self.modified + self.removed > 0
    }
}
