use crate::create_statistics_struct;

create_statistics_struct!(
    /// Statistics of a single [`ColouringSession`](crate::engine::ColouringSession), i.e. of the
    /// attempt to colour a graph with a fixed number of colours.
    SessionStatistics {
        /// The statistics of the arc-consistency preprocessing
        arc_consistency: ArcConsistencyStatistics,
        /// The statistics of the backtracking search
        search: SearchStatistics,
});

create_statistics_struct!(
    /// The statistics related to arc-consistency propagation.
    ArcConsistencyStatistics {
        /// The number of arcs which have been put on the propagation queue (including the initial
        /// arcs)
        num_arcs_enqueued: u64,
        /// The number of calls to revise
        num_revisions: u64,
        /// The number of revisions which removed at least one value
        num_reductions: u64,
        /// The number of values which have been removed from the domains
        num_values_removed: u64,
        /// The number of revisions which wiped out a domain
        num_wipeouts: u64,
});

create_statistics_struct!(
    /// The statistics related to the backtracking search.
    SearchStatistics {
        /// The number of colours which have been assigned to a vertex
        num_decisions: u64,
        /// The number of assignments which have been undone
        num_backtracks: u64,
        /// The number of (vertex, colour) pairs which have been checked against the neighbours
        num_consistency_checks: u64,
});

create_statistics_struct!(
    /// Statistics of the [`ColouringSolver`](crate::ColouringSolver) across all attempts.
    SolverStatistics {
        /// The number of attempts with a fixed number of colours
        num_attempts: u64,
        /// The number of attempts for which a colouring was found
        num_satisfiable: u64,
        /// The number of attempts which were refuted by arc consistency, without search
        num_refuted_by_propagation: u64,
        /// The number of attempts for which search exhausted the search space
        num_refuted_by_search: u64,
        /// The accumulated arc-consistency statistics
        arc_consistency: ArcConsistencyStatistics,
        /// The accumulated search statistics
        search: SearchStatistics,
});

impl ArcConsistencyStatistics {
    pub(crate) fn accumulate(&mut self, other: &ArcConsistencyStatistics) {
        self.num_arcs_enqueued += other.num_arcs_enqueued;
        self.num_revisions += other.num_revisions;
        self.num_reductions += other.num_reductions;
        self.num_values_removed += other.num_values_removed;
        self.num_wipeouts += other.num_wipeouts;
    }
}

impl SearchStatistics {
    pub(crate) fn accumulate(&mut self, other: &SearchStatistics) {
        self.num_decisions += other.num_decisions;
        self.num_backtracks += other.num_backtracks;
        self.num_consistency_checks += other.num_consistency_checks;
    }
}
