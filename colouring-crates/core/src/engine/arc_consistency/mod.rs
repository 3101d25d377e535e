//! Arc-consistency preprocessing (AC-3) for the not-equal constraints along the edges of the
//! graph.
//!
//! The filtering is intentionally weak: a colour is only removed from a vertex when a neighbour
//! is left with exactly that colour (or with nothing). It catches cheap unsatisfiability, such as
//! an edge with a single colour available, before search is started; it does not replace search.
mod arc_queue;
mod revise;

pub use arc_queue::Arc;
pub(crate) use arc_queue::ArcQueue;
use log::trace;
pub use revise::revise;
pub use revise::RevisionOutcome;

use super::solver_statistics::ArcConsistencyStatistics;
use super::DomainStore;
use crate::basic_types::EmptyDomain;
use crate::basic_types::PropagationStatus;
use crate::colouring_assert_simple;
use crate::graph::Graph;

/// Runs AC-3 over the arcs of a graph.
///
/// The queue only lives for the duration of a single [`ArcConsistency::propagate`] call; the
/// statistics accumulate over all calls.
#[derive(Debug, Default, Clone)]
pub struct ArcConsistency {
    queue: ArcQueue,
    statistics: ArcConsistencyStatistics,
}

impl ArcConsistency {
    pub fn statistics(&self) -> &ArcConsistencyStatistics {
        &self.statistics
    }

    /// Propagates the domains to a fixed point.
    ///
    /// Returns an [`EmptyDomain`] as soon as a revision wipes out a domain; the domains are then
    /// left in the state they had just before that revision.
    pub fn propagate(&mut self, graph: &Graph, domains: &mut DomainStore) -> PropagationStatus {
        self.queue.clear();
        self.statistics.num_arcs_enqueued += self.queue.enqueue_all_arcs(graph) as u64;

        while let Some(arc) = self.queue.pop() {
            let size_before = domains.size_of_domain(arc.from);
            let outcome = revise(domains, arc.from, arc.to);
            self.statistics.num_revisions += 1;
            trace!(
                "Revised {arc}: {outcome:?}, {} arcs remaining",
                self.queue.len()
            );

            match outcome {
                RevisionOutcome::Wiped => {
                    self.statistics.num_wipeouts += 1;
                    self.queue.clear();
                    return Err(EmptyDomain { vertex: arc.from });
                }
                RevisionOutcome::Reduced => {
                    self.statistics.num_reductions += 1;
                    self.statistics.num_values_removed +=
                        (size_before - domains.size_of_domain(arc.from)) as u64;

                    // The support of the other neighbours of `arc.from` may have been the
                    // removed colour.
                    for &neighbour in graph.neighbours(arc.from) {
                        if neighbour != arc.to {
                            self.queue.enqueue(Arc::new(neighbour, arc.from));
                            self.statistics.num_arcs_enqueued += 1;
                        }
                    }
                }
                RevisionOutcome::Unchanged => {}
            }
        }

        colouring_assert_simple!(self.queue.is_empty());
        Ok(())
    }
}
