//! Resource tracking and allocation guards for search routines.
//!
//! Breadth-first frontiers can explode combinatorially. To avoid hard OOM aborts and
//! non-terminating runs on infinite state spaces, the engine uses:
//! - counter-based budgets ([`crate::problem::ResourceLimits`])
//! - an optional wall-clock deadline, checked between generations
//! - `try_reserve` wrappers to surface allocation failures as [`crate::problem::SearchError`]
//!
//! Budgets are approximate but correlate strongly with memory usage.

use std::time::Instant;

use crate::problem::{ResourceCounts, ResourceLimits, SearchError};

#[derive(Debug, Clone)]
/// Tracks budgets/counters during a search.
pub struct ResourceTracker {
    limits: ResourceLimits,
    counts: ResourceCounts,
    started: Instant,
}

impl ResourceTracker {
    #[inline]
    pub fn new(limits: ResourceLimits) -> Self {
        Self {
            limits,
            counts: ResourceCounts::default(),
            started: Instant::now(),
        }
    }

    #[inline]
    pub fn counts(&self) -> ResourceCounts {
        let mut counts = self.counts;
        counts.elapsed_ms = self.elapsed_ms();
        counts
    }

    #[inline]
    pub fn bump_states(&mut self, stage: &'static str, delta: usize) -> Result<(), SearchError> {
        self.bump(
            stage,
            "states",
            delta as u64,
            self.limits.max_states as u64,
            |c| &mut c.states,
        )
    }

    #[inline]
    pub fn bump_edges(&mut self, stage: &'static str, delta: usize) -> Result<(), SearchError> {
        self.bump(
            stage,
            "edges",
            delta as u64,
            self.limits.max_edges as u64,
            |c| &mut c.edges,
        )
    }

    #[inline]
    pub fn bump_generations(&mut self, stage: &'static str) -> Result<(), SearchError> {
        self.bump(
            stage,
            "generations",
            1,
            self.limits.max_generations as u64,
            |c| &mut c.generations,
        )
    }

    #[inline]
    pub fn bump_steps(&mut self, stage: &'static str, delta: u64) -> Result<(), SearchError> {
        self.bump(
            stage,
            "runtime_steps",
            delta,
            self.limits.max_runtime_steps,
            |c| &mut c.runtime_steps,
        )
    }

    /// Fails once the configured deadline (if any) has passed.
    pub fn check_deadline(&self, stage: &'static str) -> Result<(), SearchError> {
        let Some(limit) = self.limits.max_duration_ms else {
            return Ok(());
        };
        let observed = self.elapsed_ms();
        if observed > limit {
            return Err(SearchError::LimitExceeded {
                stage,
                metric: "elapsed_ms",
                limit,
                observed,
                counts: self.counts(),
            });
        }
        Ok(())
    }

    fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    fn bump(
        &mut self,
        stage: &'static str,
        metric: &'static str,
        delta: u64,
        limit: u64,
        field: impl FnOnce(&mut ResourceCounts) -> &mut u64,
    ) -> Result<(), SearchError> {
        let observed = {
            let v = field(&mut self.counts);
            *v = v.saturating_add(delta);
            *v
        };

        if observed > limit {
            return Err(SearchError::LimitExceeded {
                stage,
                metric,
                limit,
                observed,
                counts: self.counts(),
            });
        }

        Ok(())
    }

    pub fn try_reserve_vec<T>(
        &self,
        stage: &'static str,
        structure: &'static str,
        v: &mut Vec<T>,
        additional: usize,
    ) -> Result<(), SearchError> {
        v.try_reserve(additional)
            .map_err(|_| SearchError::AllocationFailed {
                stage,
                structure,
                counts: self.counts(),
            })
    }

    pub fn try_reserve_set<K>(
        &self,
        stage: &'static str,
        structure: &'static str,
        set: &mut rustc_hash::FxHashSet<K>,
        additional: usize,
    ) -> Result<(), SearchError>
    where
        K: std::hash::Hash + Eq,
    {
        set.try_reserve(additional)
            .map_err(|_| SearchError::AllocationFailed {
                stage,
                structure,
                counts: self.counts(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_budget_is_inclusive() {
        let mut t = ResourceTracker::new(ResourceLimits::default().with_max_generations(2));
        t.bump_generations("test").unwrap();
        t.bump_generations("test").unwrap();
        match t.bump_generations("test") {
            Err(SearchError::LimitExceeded {
                metric,
                limit,
                observed,
                ..
            }) => {
                assert_eq!(metric, "generations");
                assert_eq!(limit, 2);
                assert_eq!(observed, 3);
            }
            other => panic!("expected generation limit, got {other:?}"),
        }
    }

    #[test]
    fn counters_saturate_instead_of_overflowing() {
        let mut t = ResourceTracker::new(ResourceLimits::unbounded());
        t.bump_steps("test", u64::MAX).unwrap();
        t.bump_steps("test", 10).unwrap();
        assert_eq!(t.counts().runtime_steps, u64::MAX);
    }

    #[test]
    fn zero_deadline_trips_after_time_passes() {
        let t = ResourceTracker::new(ResourceLimits::default().with_max_duration_ms(Some(0)));
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(matches!(
            t.check_deadline("test"),
            Err(SearchError::LimitExceeded {
                metric: "elapsed_ms",
                ..
            })
        ));
    }
}
