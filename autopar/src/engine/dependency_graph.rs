//! The dependencies between the goals of a conjunction.
//!
//! The vertices of the graphs are the sequence numbers of the goals, which start at 1; goal `i`
//! of the conjunction (0-based) is vertex `i + 1`. An edge from `i` to `j` indicates that goal
//! `j` consumes a variable which is produced by goal `i`.

use fnv::FnvHashMap;
use itertools::Itertools;
use petgraph::graphmap::DiGraphMap;
use petgraph::visit::Dfs;

use crate::autopar_assert_moderate;
use crate::basic_types::Goal;
use crate::basic_types::Var;

/// The direct dependency graph of a conjunction together with its transitive closure.
#[derive(Debug, Clone)]
pub struct DependencyGraphs {
    graph: DiGraphMap<usize, ()>,
    closure: DiGraphMap<usize, ()>,
}

/// Converts a 0-based position in the conjunction to the vertex in the dependency graphs.
fn sequence_number(goal_index: usize) -> usize {
    goal_index + 1
}

impl DependencyGraphs {
    pub fn new(goals: &[Goal]) -> Self {
        let mut graph = DiGraphMap::new();
        let mut producers: FnvHashMap<Var, usize> = FnvHashMap::default();

        for (index, goal) in goals.iter().enumerate() {
            let current = sequence_number(index);
            let _ = graph.add_node(current);

            for var in goal.inst_map_info.consumed.iter() {
                // Variables without a producer are bound outside of the conjunction.
                if let Some(&producer) = producers.get(var) {
                    autopar_assert_moderate!(producer < current);
                    let _ = graph.add_edge(producer, current, ());
                }
            }

            for var in goal.inst_map_info.bound.iter() {
                let _ = producers.insert(*var, current);
            }
        }

        let closure = transitive_closure(&graph);

        Self { graph, closure }
    }

    pub fn num_goals(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns whether the goal at `consumer` depends, directly or indirectly, on the goal at
    /// `producer` (both 0-based positions).
    pub fn depends_on(&self, consumer: usize, producer: usize) -> bool {
        self.closure
            .contains_edge(sequence_number(producer), sequence_number(consumer))
    }

    /// Returns whether any goal in `later` depends on any goal in `earlier`.
    pub fn any_dependency_between(
        &self,
        earlier: impl IntoIterator<Item = usize> + Clone,
        later: impl IntoIterator<Item = usize>,
    ) -> bool {
        later.into_iter().any(|consumer| {
            earlier
                .clone()
                .into_iter()
                .any(|producer| self.depends_on(consumer, producer))
        })
    }

    /// The edges of the direct dependency graph as 1-based sequence numbers, sorted.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        self.graph
            .all_edges()
            .map(|(from, to, _)| (from, to))
            .sorted()
            .collect()
    }

    /// The edges of the transitive closure as 1-based sequence numbers, sorted.
    pub fn closure_edges(&self) -> Vec<(usize, usize)> {
        self.closure
            .all_edges()
            .map(|(from, to, _)| (from, to))
            .sorted()
            .collect()
    }
}

impl PartialEq for DependencyGraphs {
    fn eq(&self, other: &Self) -> bool {
        self.graph.nodes().sorted().eq(other.graph.nodes().sorted())
            && self.edges() == other.edges()
            && self.closure_edges() == other.closure_edges()
    }
}

fn transitive_closure(graph: &DiGraphMap<usize, ()>) -> DiGraphMap<usize, ()> {
    let mut closure = DiGraphMap::new();
    for node in graph.nodes() {
        let _ = closure.add_node(node);
    }

    for node in graph.nodes() {
        let mut dfs = Dfs::new(graph, node);
        while let Some(reachable) = dfs.next(graph) {
            if reachable != node {
                let _ = closure.add_edge(node, reachable, ());
            }
        }
    }

    closure
}
