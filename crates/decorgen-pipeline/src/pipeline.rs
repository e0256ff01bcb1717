//! The incremental generator pipeline.
//!
//! A [`GeneratorPipeline`] lives across recomputation passes. Each
//! [`run`](GeneratorPipeline::run) extracts a descriptor for every marked
//! type, compares it with the cached descriptor for the same identity and
//! only resynthesizes when they differ. Identities that stop producing a
//! descriptor are reported as removed.
//!
//! Work per candidate is independent and runs in parallel with the
//! `parallel` feature. The cache is read during that phase and only
//! written afterwards, sequentially, so a run never observes a partially
//! updated cache.

use crate::result::{CandidateFailure, Fingerprint, OutputReason, RunResult, TrackedSource};
use crate::stats::PipelineStats;
use decorgen_codegen::{DecoratorGenerator, GeneratedSource};
use decorgen_core::{CancellationToken, DecoratorDescriptor, Error, GeneratorConfig, Result, TypeDescriptor};
use decorgen_introspector::{Compilation, TypeSymbol, extract_decorator, target_descriptor};
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info, warn};

/// Cached state for one identity.
#[derive(Debug, Clone)]
struct CacheEntry {
    descriptor: DecoratorDescriptor,
    source: GeneratedSource,
    fingerprint: Fingerprint,
}

impl CacheEntry {
    fn tracked(&self, reason: OutputReason) -> TrackedSource {
        TrackedSource {
            target: self.descriptor.target.clone(),
            hint_name: self.source.hint_name.clone(),
            reason,
            source_text: self.source.content.clone(),
            fingerprint: self.fingerprint.clone(),
        }
    }
}

/// Outcome of the parallel phase for one candidate.
#[derive(Debug)]
enum Work {
    /// Preconditions not met; the identity produces nothing
    NoDescriptor,
    /// Descriptor equal to the cached one
    Unchanged,
    /// New or changed descriptor with its freshly synthesized output
    Synthesized(Box<CacheEntry>),
    /// Cancellation observed; previous state kept
    Cancelled,
    /// Extraction or synthesis failed; previous state kept
    Failed(Error),
}

/// Incremental generator with an owned output cache.
///
/// # Examples
///
/// ```
/// use decorgen_core::{CancellationToken, GeneratorConfig};
/// use decorgen_introspector::{Compilation, InterfaceSymbol, MethodSymbol, TypeRef, TypeSymbol, well_known};
/// use decorgen_pipeline::{GeneratorPipeline, OutputReason};
///
/// let mut pipeline = GeneratorPipeline::new(GeneratorConfig::default()).unwrap();
/// let cancel = CancellationToken::new();
///
/// let compilation = Compilation::new()
///     .with_interface(
///         InterfaceSymbol::new(Some("Shop"), "IStore")
///             .method(MethodSymbol::new("Count", well_known::int())),
///     )
///     .with_type(
///         TypeSymbol::class(Some("Shop"), "StoreDecorator")
///             .attribute("Decorgen.GenericDecoratorAttribute")
///             .implements(TypeRef::named(Some("Shop"), "IStore")),
///     );
///
/// let first = pipeline.run(&compilation, &cancel).unwrap();
/// assert!(first.marker.is_some());
/// assert_eq!(first.tracked[0].reason, OutputReason::New);
///
/// let second = pipeline.run(&compilation, &cancel).unwrap();
/// assert!(second.marker.is_none());
/// assert_eq!(second.tracked[0].reason, OutputReason::Cached);
/// ```
#[derive(Debug)]
pub struct GeneratorPipeline<'a> {
    generator: DecoratorGenerator<'a>,
    cache: BTreeMap<TypeDescriptor, CacheEntry>,
    marker_emitted: bool,
    totals: PipelineStats,
}

impl GeneratorPipeline<'_> {
    /// Creates a pipeline with an empty cache.
    ///
    /// # Errors
    ///
    /// Returns error if the configuration is invalid or template
    /// registration fails.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            generator: DecoratorGenerator::new(config)?,
            cache: BTreeMap::new(),
            marker_emitted: false,
            totals: PipelineStats::default(),
        })
    }

    /// Configuration the pipeline runs with.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        self.generator.config()
    }

    /// Cumulative statistics across all runs.
    #[must_use]
    pub const fn stats(&self) -> &PipelineStats {
        &self.totals
    }

    /// Number of identities with cached output.
    #[must_use]
    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }

    /// Cached output for an identity, if any.
    #[must_use]
    pub fn cached_source(&self, target: &TypeDescriptor) -> Option<&GeneratedSource> {
        self.cache.get(target).map(|entry| &entry.source)
    }

    /// Runs one recomputation pass over a snapshot.
    ///
    /// The marker attribute source is produced on the first run only.
    /// Per-candidate failures and cancellations are recorded in the result
    /// and never abort the other candidates.
    ///
    /// # Errors
    ///
    /// Returns error only if the marker attribute fails to render.
    pub fn run(&mut self, compilation: &Compilation, cancel: &CancellationToken) -> Result<RunResult> {
        let mut result = RunResult {
            stats: PipelineStats {
                runs: 1,
                ..PipelineStats::default()
            },
            ..RunResult::default()
        };

        if !self.marker_emitted {
            result.marker = Some(self.generator.marker_source()?);
            self.marker_emitted = true;
        }

        let candidates = self.collect_candidates(compilation);
        let work = self.process_candidates(compilation, &candidates, cancel);

        let mut live: HashSet<TypeDescriptor> = HashSet::with_capacity(candidates.len());
        for ((target, _), work) in candidates.into_iter().zip(work) {
            match work {
                Work::NoDescriptor => {}
                Work::Unchanged => {
                    if let Some(entry) = self.cache.get(&target) {
                        result.tracked.push(entry.tracked(OutputReason::Cached));
                        result.stats.cached += 1;
                    }
                    live.insert(target);
                }
                Work::Synthesized(entry) => {
                    let reason = if self.cache.contains_key(&target) {
                        result.stats.modified += 1;
                        OutputReason::Modified
                    } else {
                        result.stats.new += 1;
                        OutputReason::New
                    };
                    debug!(target_type = %target, %reason, "updated cache entry");
                    result.tracked.push(entry.tracked(reason));
                    self.cache.insert(target.clone(), *entry);
                    live.insert(target);
                }
                Work::Cancelled => {
                    result.stats.cancelled += 1;
                    live.insert(target);
                }
                Work::Failed(error) => {
                    warn!(target_type = %target, error = %error, "candidate failed, keeping previous output");
                    result.stats.failed += 1;
                    result.failures.push(CandidateFailure {
                        target: target.clone(),
                        message: error.to_string(),
                    });
                    live.insert(target);
                }
            }
        }

        let removed: Vec<TypeDescriptor> = self
            .cache
            .keys()
            .filter(|target| !live.contains(*target))
            .cloned()
            .collect();
        for target in removed {
            if let Some(entry) = self.cache.remove(&target) {
                debug!(target_type = %target, "removed cache entry");
                result.tracked.push(entry.tracked(OutputReason::Removed));
                result.stats.removed += 1;
            }
        }

        self.totals.merge(&result.stats);
        info!(
            new = result.stats.new,
            modified = result.stats.modified,
            cached = result.stats.cached,
            removed = result.stats.removed,
            failed = result.stats.failed,
            cancelled = result.stats.cancelled,
            "pipeline run complete"
        );
        Ok(result)
    }

    /// Marked types keyed by identity, first declaration wins.
    fn collect_candidates<'c>(&self, compilation: &'c Compilation) -> Vec<(TypeDescriptor, &'c TypeSymbol)> {
        let marker = self.config().marker_full_name();
        let mut seen = HashSet::new();
        let mut candidates = Vec::new();
        for ty in compilation.marked_types(&marker) {
            let target = target_descriptor(ty);
            if seen.insert(target.clone()) {
                candidates.push((target, ty));
            } else {
                warn!(target_type = %target, location = %ty.location, "duplicate declaration, skipping");
            }
        }
        candidates
    }

    #[cfg(feature = "parallel")]
    fn process_candidates(
        &self,
        compilation: &Compilation,
        candidates: &[(TypeDescriptor, &TypeSymbol)],
        cancel: &CancellationToken,
    ) -> Vec<Work> {
        use rayon::prelude::*;

        candidates
            .par_iter()
            .map(|(target, ty)| self.process(compilation, target, ty, cancel))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn process_candidates(
        &self,
        compilation: &Compilation,
        candidates: &[(TypeDescriptor, &TypeSymbol)],
        cancel: &CancellationToken,
    ) -> Vec<Work> {
        candidates
            .iter()
            .map(|(target, ty)| self.process(compilation, target, ty, cancel))
            .collect()
    }

    fn process(
        &self,
        compilation: &Compilation,
        target: &TypeDescriptor,
        ty: &TypeSymbol,
        cancel: &CancellationToken,
    ) -> Work {
        let descriptor = match extract_decorator(compilation, ty, self.config(), cancel) {
            Ok(Some(descriptor)) => descriptor,
            Ok(None) => return Work::NoDescriptor,
            Err(error) if error.is_cancelled() => {
                debug!(target_type = %target, "extraction cancelled");
                return Work::Cancelled;
            }
            Err(error) => return Work::Failed(error),
        };

        if self
            .cache
            .get(target)
            .is_some_and(|entry| entry.descriptor == descriptor)
        {
            return Work::Unchanged;
        }

        if cancel.is_cancelled() {
            return Work::Cancelled;
        }

        match self.generator.generate(&descriptor) {
            Ok(source) => {
                let fingerprint = Fingerprint::of(&source.content);
                Work::Synthesized(Box::new(CacheEntry {
                    descriptor,
                    source,
                    fingerprint,
                }))
            }
            Err(error) => Work::Failed(error),
        }
    }
}
