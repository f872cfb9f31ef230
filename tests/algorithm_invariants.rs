// ==============================================
// CROSS-ALGORITHM INVARIANT TESTS (integration)
// ==============================================
//
// Properties that hold across every algorithm sharing a run context. These
// span the graph, algorithm, cache and metrics modules and belong here
// rather than in any single source file.

use algoviz::algorithms::{
    StalePolicy, bfs, dfs, dfs_recursive, merge_sort, quick_sort, shortest_path,
};
use algoviz::context::RunContext;
use algoviz::graph::{Graph, GraphGenerator};
use algoviz::metrics::{MetricsSnapshotProvider, RunMetrics};
use proptest::prelude::*;

fn random_graph(seed: u64, nodes: usize, density: f64) -> Graph {
    GraphGenerator::seeded(seed).generate(nodes, density).unwrap()
}

// ==============================================
// Traversal Coverage
// ==============================================
//
// Every node reachable from the start is visited exactly once, and the
// visited table is true exactly for those nodes.

mod traversal_coverage {
    use super::*;

    proptest! {
        #[test]
        fn bfs_and_dfs_visit_reachable_set_once(
            seed in any::<u64>(),
            nodes in 1usize..30,
            density in 0.0f64..=1.0
        ) {
            let graph = random_graph(seed, nodes, density);
            let reachable = graph.reachable_from(0);
            let expected = reachable.iter().filter(|&&r| r).count();

            for traverse in [bfs, dfs, dfs_recursive] {
                let mut ctx = RunContext::new(4);
                let traversal = traverse(&graph, 0, &mut ctx).unwrap();

                prop_assert_eq!(&traversal.visited, &reachable);
                prop_assert_eq!(traversal.order.len(), expected);
                let mut sorted = traversal.order.clone();
                sorted.sort_unstable();
                sorted.dedup();
                prop_assert_eq!(sorted.len(), expected);

                let snap = ctx.metrics.snapshot();
                prop_assert_eq!(snap.visits, expected as u64);
                prop_assert_eq!(snap.cache_accesses(), expected as u64);
            }
        }
    }
}

// ==============================================
// Shared Context Accounting
// ==============================================
//
// The run context's metrics mirror its cache counters no matter how many
// algorithms touched it.

mod shared_context {
    use super::*;

    #[test]
    fn cache_and_metrics_agree_after_all_graph_phases() {
        let graph = random_graph(3, 20, 0.25);
        let mut ctx = RunContext::new(8);

        bfs(&graph, 0, &mut ctx).unwrap();
        dfs(&graph, 0, &mut ctx).unwrap();
        shortest_path(&graph, 0, &mut ctx, StalePolicy::Revisit).unwrap();

        let snap = ctx.metrics.snapshot();
        assert_eq!(snap.cache_hits, ctx.cache.hits());
        assert_eq!(snap.cache_misses, ctx.cache.misses());
        assert_eq!(snap.cache_accesses(), snap.visits);
        assert!(ctx.cache.len() <= 8);
        ctx.cache.check_invariants().unwrap();
    }

    #[test]
    fn second_traversal_hits_a_cache_that_holds_the_graph() {
        let graph = Graph::from_edges(4, &[(0, 1, 1), (1, 2, 1), (2, 3, 1)]).unwrap();
        let mut ctx = RunContext::new(4);

        bfs(&graph, 0, &mut ctx).unwrap();
        assert_eq!(ctx.metrics.snapshot().cache_hits, 0);
        dfs(&graph, 0, &mut ctx).unwrap();
        assert_eq!(ctx.metrics.snapshot().cache_hits, 4);
    }

    #[test]
    fn capacity_zero_never_hits() {
        let graph = random_graph(11, 12, 0.5);
        let mut ctx = RunContext::new(0);

        bfs(&graph, 0, &mut ctx).unwrap();
        dfs(&graph, 0, &mut ctx).unwrap();

        assert_eq!(ctx.metrics.snapshot().cache_hits, 0);
        assert!(ctx.cache.is_empty());
    }
}

// ==============================================
// Sort Agreement
// ==============================================

mod sort_agreement {
    use super::*;

    proptest! {
        #[test]
        fn merge_and_quick_sort_agree(values in prop::collection::vec(any::<i64>(), 0..100)) {
            let mut merged = values.clone();
            let mut quick = values.clone();
            let mut metrics = RunMetrics::new();
            merge_sort(&mut merged, &mut metrics);
            quick_sort(&mut quick, &mut metrics);

            prop_assert_eq!(&merged, &quick);
            prop_assert_eq!(merged.len(), values.len());
            prop_assert!(merged.windows(2).all(|w| w[0] <= w[1]));
            prop_assert_eq!(metrics.snapshot().visits, 0);
        }
    }
}
