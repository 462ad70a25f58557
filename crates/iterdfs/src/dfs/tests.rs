//! Traversal tests: fixed shapes plus properties against a recursive DFS.

use super::*;
use crate::graph::Graph;
use proptest::prelude::*;
use std::collections::{HashMap, HashSet, VecDeque};

fn strs(v: &[String]) -> Vec<&str> {
    v.iter().map(String::as_str).collect()
}

fn parents(t: &Traversal) -> HashMap<&str, &str> {
    t.parent
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect()
}

/// Recursive DFS exploring successors in adjacency order: (pre, post).
fn recursive_dfs(g: &Graph, start: &str) -> (Vec<String>, Vec<String>) {
    fn visit(
        g: &Graph,
        u: &str,
        seen: &mut HashSet<String>,
        pre: &mut Vec<String>,
        post: &mut Vec<String>,
    ) {
        seen.insert(u.to_owned());
        pre.push(u.to_owned());
        for v in g.neighbors(u) {
            if !seen.contains(v) {
                visit(g, v, seen, pre, post);
            }
        }
        post.push(u.to_owned());
    }
    let mut seen = HashSet::new();
    let (mut pre, mut post) = (Vec::new(), Vec::new());
    visit(g, start, &mut seen, &mut pre, &mut post);
    (pre, post)
}

fn reachable(g: &Graph, start: &str) -> HashSet<String> {
    let mut seen = HashSet::from([start.to_owned()]);
    let mut queue = VecDeque::from([start.to_owned()]);
    while let Some(u) = queue.pop_front() {
        for v in g.neighbors(&u) {
            if seen.insert(v.clone()) {
                queue.push_back(v.clone());
            }
        }
    }
    seen
}

#[test]
fn single_node_without_edges() {
    let g = Graph::new();
    let t = traverse(&g, "0");
    assert_eq!(strs(&t.pre_order), ["0"]);
    assert_eq!(strs(&t.post_order), ["0"]);
    assert!(t.parent.is_empty());
    assert_eq!(t.parent_of("0"), None);
}

#[test]
fn linear_chain() {
    let g = Graph::from_edges([("0", "1"), ("1", "2"), ("2", "3")]);
    let t = traverse(&g, "0");
    assert_eq!(strs(&t.pre_order), ["0", "1", "2", "3"]);
    assert_eq!(strs(&t.post_order), ["3", "2", "1", "0"]);
    assert_eq!(
        parents(&t),
        HashMap::from([("1", "0"), ("2", "1"), ("3", "2")])
    );
}

#[test]
fn diamond_finishes_shared_sink_once() {
    let g = Graph::from_edges([("0", "1"), ("0", "2"), ("1", "3"), ("2", "3")]);
    let t = traverse(&g, "0");
    assert_eq!(strs(&t.pre_order), ["0", "1", "3", "2"]);
    assert_eq!(strs(&t.post_order), ["3", "1", "2", "0"]);
    assert_eq!(
        parents(&t),
        HashMap::from([("1", "0"), ("2", "0"), ("3", "1")])
    );
}

#[test]
fn unreachable_nodes_never_appear() {
    let g = Graph::from_edges([("0", "1"), ("2", "3"), ("3", "0")]);
    let t = traverse(&g, "0");
    assert_eq!(strs(&t.pre_order), ["0", "1"]);
    assert_eq!(strs(&t.post_order), ["1", "0"]);
    assert!(!t.contains("2"));
    assert!(!t.contains("3"));
    assert_eq!(t.parent_of("3"), None);
}

#[test]
fn self_loop_is_ignored() {
    let g = Graph::from_edges([("0", "0"), ("0", "1"), ("1", "1")]);
    let t = traverse(&g, "0");
    assert_eq!(strs(&t.pre_order), ["0", "1"]);
    assert_eq!(strs(&t.post_order), ["1", "0"]);
    assert_eq!(parents(&t), HashMap::from([("1", "0")]));
}

#[test]
fn cycle_terminates() {
    let g = Graph::from_edges([("0", "1"), ("1", "2"), ("2", "0")]);
    let t = traverse(&g, "0");
    assert_eq!(strs(&t.pre_order), ["0", "1", "2"]);
    assert_eq!(strs(&t.post_order), ["2", "1", "0"]);
    assert_eq!(t.parent_of("0"), None);
}

#[test]
fn duplicate_edges_emit_each_node_once() {
    let g = Graph::from_edges([("0", "1"), ("0", "1"), ("0", "2"), ("1", "2")]);
    let t = traverse(&g, "0");
    assert_eq!(strs(&t.pre_order), ["0", "1", "2"]);
    assert_eq!(strs(&t.post_order), ["2", "1", "0"]);
}

#[test]
fn first_discoverer_keeps_parent() {
    // 0 pushes 2 before 1 reaches it; the recorded parent stays 0.
    let g = Graph::from_edges([("0", "1"), ("0", "2"), ("1", "2")]);
    let t = traverse(&g, "0");
    assert_eq!(strs(&t.pre_order), ["0", "1", "2"]);
    assert_eq!(t.parent_of("2"), Some("0"));
    assert_eq!(t.parent_of("1"), Some("0"));
}

#[test]
fn start_absent_from_graph_is_still_emitted() {
    let g = Graph::from_edges([("0", "1")]);
    let t = traverse(&g, "7");
    assert_eq!(strs(&t.pre_order), ["7"]);
    assert_eq!(strs(&t.post_order), ["7"]);
    assert_eq!(t.len(), 1);
}

#[test]
fn deep_chain_does_not_recurse() {
    let n = 100_000;
    let g = Graph::from_edges((0..n - 1).map(|i| (i.to_string(), (i + 1).to_string())));
    let t = traverse(&g, "0");
    assert_eq!(t.len(), n);
    assert_eq!(t.pre_order.first().map(String::as_str), Some("0"));
    assert_eq!(t.post_order.first().map(String::as_str), Some("99999"));
    assert_eq!(t.post_order.last().map(String::as_str), Some("0"));
}

#[test]
fn runner_matches_free_function() {
    let g = Graph::from_edges([("a", "b"), ("a", "c"), ("c", "a")]);
    assert_eq!(Dfs::new(&g).run("a"), traverse(&g, "a"));
}

fn arb_graph() -> impl Strategy<Value = (Graph, String)> {
    (1usize..12).prop_flat_map(|n| {
        (
            prop::collection::vec((0..n, 0..n), 0..40),
            0..n,
        )
            .prop_map(|(edges, s)| {
                let g = Graph::from_edges(
                    edges
                        .into_iter()
                        .map(|(u, v)| (u.to_string(), v.to_string())),
                );
                (g, s.to_string())
            })
    })
}

proptest! {
    #[test]
    fn orders_cover_exactly_the_reachable_set((g, s) in arb_graph()) {
        let t = traverse(&g, &s);
        let reach = reachable(&g, &s);
        prop_assert_eq!(t.pre_order.len(), reach.len());
        prop_assert_eq!(t.post_order.len(), reach.len());
        let pre: HashSet<String> = t.pre_order.iter().cloned().collect();
        let post: HashSet<String> = t.post_order.iter().cloned().collect();
        prop_assert_eq!(&pre, &reach);
        prop_assert_eq!(&post, &reach);
    }

    #[test]
    fn matches_recursive_dfs((g, s) in arb_graph()) {
        let t = traverse(&g, &s);
        let (pre, post) = recursive_dfs(&g, &s);
        prop_assert_eq!(t.pre_order, pre);
        prop_assert_eq!(t.post_order, post);
    }

    #[test]
    fn repeated_runs_agree((g, s) in arb_graph()) {
        prop_assert_eq!(traverse(&g, &s), traverse(&g, &s));
    }

    #[test]
    fn parents_are_earlier_predecessors((g, s) in arb_graph()) {
        let t = traverse(&g, &s);
        prop_assert_eq!(t.parent.len(), t.len() - 1);
        prop_assert!(t.parent_of(&s).is_none());
        let rank: HashMap<&str, usize> = t
            .pre_order
            .iter()
            .enumerate()
            .map(|(i, n)| (n.as_str(), i))
            .collect();
        for (child, parent) in &t.parent {
            prop_assert!(g.neighbors(parent).contains(child));
            prop_assert!(rank[parent.as_str()] < rank[child.as_str()]);
        }
    }
}
