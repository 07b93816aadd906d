//! Consolidation integration tests
//!
//! End-to-end runs of every strategy against the live graph, checking the
//! invariants the downstream simulation relies on: no entity lost or
//! duplicated, capacity limits honored, team parity, and structural errors
//! rejected without mutation.

use std::collections::BTreeSet;

use proptest::prelude::*;

use muster::consolidate::consolidate;
use muster::core::config::ConsolidateConfig;
use muster::core::types::{Camouflage, EntityId, ForceId, PlayerId, TeamId};
use muster::force::entity::CombatEntity;
use muster::force::graph::ForceGraph;
use muster::force::player::Player;
use muster::MusterError;

/// All entity IDs reachable from top-level forces, as a sorted multiset
fn reachable_entities(graph: &ForceGraph) -> Vec<EntityId> {
    let mut out: Vec<EntityId> = graph
        .top_level_forces()
        .iter()
        .flat_map(|&id| graph.entity_ids_recursive(id))
        .collect();
    out.sort();
    out
}

/// Entity partition by top-level force, order-insensitive
fn partition(graph: &ForceGraph) -> BTreeSet<Vec<EntityId>> {
    graph
        .top_level_forces()
        .iter()
        .map(|&id| {
            let mut entities = graph.entity_ids_recursive(id);
            entities.sort();
            entities
        })
        .collect()
}

fn add_player(graph: &mut ForceGraph, id: u32, team: u32) {
    graph.add_player(Player::new(PlayerId(id), format!("Player {id}"), TeamId(team)));
}

/// Force with `count` entities, IDs starting at `first`
fn add_leaf_force(
    graph: &mut ForceGraph,
    name: &str,
    owner: u32,
    parent: Option<ForceId>,
    first: u32,
    count: u32,
) -> ForceId {
    let force = graph.add_force(name, PlayerId(owner), Camouflage::default(), parent);
    for n in first..first + count {
        graph.add_entity(CombatEntity::new(EntityId(n), format!("Unit {n}"), PlayerId(owner)));
        graph.attach_entity(force, EntityId(n));
    }
    force
}

/// Two teams, nested sub-forces, 25 + 9 entities
fn battlefield() -> ForceGraph {
    let mut graph = ForceGraph::new();
    add_player(&mut graph, 1, 1);
    add_player(&mut graph, 2, 1);
    add_player(&mut graph, 3, 2);

    let alpha = add_leaf_force(&mut graph, "Alpha", 1, None, 0, 5);
    add_leaf_force(&mut graph, "Alpha-1", 1, Some(alpha), 5, 8);
    add_leaf_force(&mut graph, "Bravo", 2, None, 13, 12);
    let charlie = add_leaf_force(&mut graph, "Charlie", 3, None, 100, 4);
    add_leaf_force(&mut graph, "Charlie-1", 3, Some(charlie), 104, 5);
    graph
}

#[test]
fn test_conservation_for_every_strategy() {
    let configs = [
        ConsolidateConfig::balanced(),
        ConsolidateConfig::sort_valid(),
        ConsolidateConfig::flatten(),
        ConsolidateConfig::keep_current(),
        ConsolidateConfig::singleton(),
    ];
    for config in configs {
        let mut graph = battlefield();
        let before = reachable_entities(&graph);
        consolidate(&mut graph, &config).unwrap();
        let after = reachable_entities(&graph);
        assert_eq!(before, after, "strategy {:?} lost or duplicated entities", config.strategy);
    }
}

#[test]
fn test_balanced_capacity_invariants() {
    let mut graph = battlefield();
    consolidate(&mut graph, &ConsolidateConfig::balanced()).unwrap();

    for &top in graph.top_level_forces() {
        assert!(graph.entity_ids_recursive(top).len() <= 20);
        for sub in graph.sub_force_ids_recursive(top) {
            let node = graph.force(sub).unwrap();
            assert!(node.entities.len() <= 6);
            assert!(node.sub_forces.is_empty());
        }
        // Output is normalized: top-level forces are composite only
        assert!(graph.force(top).unwrap().entities.is_empty());
    }
}

#[test]
fn test_balanced_team_parity() {
    let mut graph = battlefield();
    consolidate(&mut graph, &ConsolidateConfig::balanced()).unwrap();

    let mut team1 = 0usize;
    let mut team2 = 0usize;
    for &top in graph.top_level_forces() {
        let owner = graph.force(top).unwrap().owner;
        match graph.team_of(owner).unwrap() {
            TeamId(1) => team1 += 1,
            TeamId(2) => team2 += 1,
            other => panic!("unexpected team {other:?}"),
        }
    }
    // Team 1 has 25 entities -> topCount = ceil(25/20) = 2
    assert_eq!(team1, 2);
    assert!(team1.abs_diff(team2) <= 1);
}

#[test]
fn test_balanced_example_from_the_rules() {
    // 25 entities across two players on one team, caps 6/20
    let mut graph = ForceGraph::new();
    add_player(&mut graph, 1, 1);
    add_player(&mut graph, 2, 1);
    add_leaf_force(&mut graph, "A", 1, None, 0, 13);
    add_leaf_force(&mut graph, "B", 2, None, 13, 12);

    consolidate(&mut graph, &ConsolidateConfig::balanced()).unwrap();

    assert_eq!(graph.top_level_forces().len(), 2);
    let sizes: Vec<usize> = graph
        .top_level_forces()
        .iter()
        .map(|&id| graph.entity_ids_recursive(id).len())
        .collect();
    assert_eq!(sizes.iter().sum::<usize>(), 25);
    assert!(sizes.iter().all(|&s| s <= 20));
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_keep_current_rejects_cycle_without_mutation() {
    init_tracing();
    let mut graph = battlefield();
    let top = graph.top_level_forces()[0];
    let sub = graph.force(top).unwrap().sub_forces[0];
    graph.force_mut(top).unwrap().parent = Some(sub);

    let forces_before = graph.force_count();
    let entities_before = reachable_entities(&graph);

    let result = consolidate(&mut graph, &ConsolidateConfig::keep_current());
    assert!(matches!(result, Err(MusterError::CycleDetected(_))));

    assert_eq!(graph.force_count(), forces_before);
    assert_eq!(reachable_entities(&graph), entities_before);
}

#[test]
fn test_keep_current_rejects_duplicate_assignment_without_mutation() {
    let mut graph = battlefield();
    let tops = graph.top_level_forces().to_vec();
    // Same entity in two different forces
    graph.attach_entity(tops[1], EntityId(0));

    let forces_before = graph.force_count();
    let result = consolidate(&mut graph, &ConsolidateConfig::keep_current());
    assert!(matches!(
        result,
        Err(MusterError::DuplicateEntityAssignment { entity: EntityId(0), .. })
    ));
    assert_eq!(graph.force_count(), forces_before);
}

#[test]
fn test_keep_current_preserves_names_and_nesting() {
    let mut graph = battlefield();
    consolidate(&mut graph, &ConsolidateConfig::keep_current()).unwrap();

    let names: BTreeSet<String> = graph
        .force_ids()
        .iter()
        .map(|&id| graph.force(id).unwrap().name.clone())
        .collect();
    for expected in ["Alpha", "Alpha-1", "Bravo", "Charlie", "Charlie-1"] {
        assert!(names.contains(expected), "missing force {expected}");
    }

    // Alpha still has a nested sub-force holding its 8 entities
    let alpha = graph
        .top_level_forces()
        .iter()
        .copied()
        .find(|&id| graph.force(id).unwrap().name == "Alpha")
        .unwrap();
    assert_eq!(graph.sub_force_ids_recursive(alpha).len(), 2); // normalized direct entities + Alpha-1
}

#[test]
fn test_flatten_is_idempotent_on_flat_forests() {
    let mut graph = battlefield();
    consolidate(&mut graph, &ConsolidateConfig::flatten()).unwrap();
    let first = partition(&graph);

    consolidate(&mut graph, &ConsolidateConfig::flatten()).unwrap();
    let second = partition(&graph);

    assert_eq!(first, second);
}

#[test]
fn test_singleton_gives_one_top_force_per_entity() {
    let mut graph = battlefield();
    let entity_total = reachable_entities(&graph).len();
    consolidate(&mut graph, &ConsolidateConfig::singleton()).unwrap();

    assert_eq!(graph.top_level_forces().len(), entity_total);
    for &top in graph.top_level_forces() {
        assert_eq!(graph.entity_ids_recursive(top).len(), 1);
        assert_eq!(graph.force(top).unwrap().sub_forces.len(), 1);
    }
}

#[test]
fn test_empty_forces_vanish() {
    for config in [ConsolidateConfig::balanced(), ConsolidateConfig::keep_current()] {
        let mut g = ForceGraph::new();
        add_player(&mut g, 1, 1);
        add_leaf_force(&mut g, "Alpha", 1, None, 0, 3);
        g.add_force("Ghost", PlayerId(1), Camouflage::default(), None);

        consolidate(&mut g, &config).unwrap();
        assert_eq!(reachable_entities(&g).len(), 3);
        for &top in g.top_level_forces() {
            assert!(!g.entity_ids_recursive(top).is_empty());
        }
    }
}

#[test]
fn test_materialization_clones_owner_camouflage() {
    let mut graph = ForceGraph::new();
    let mut player = Player::new(PlayerId(1), "Alice", TeamId(1));
    player.camouflage = Camouflage::new("woodland", "alice.png");
    graph.add_player(player);
    add_leaf_force(&mut graph, "Alpha", 1, None, 0, 4);

    consolidate(&mut graph, &ConsolidateConfig::balanced()).unwrap();

    for id in graph.force_ids() {
        assert_eq!(
            graph.force(id).unwrap().camouflage,
            Camouflage::new("woodland", "alice.png")
        );
    }
}

proptest! {
    /// Balanced consolidation conserves entities and honors capacities for
    /// arbitrary two-team splits.
    #[test]
    fn prop_balanced_conserves_and_bounds(team1 in 0u32..60, team2 in 0u32..60) {
        let mut graph = ForceGraph::new();
        add_player(&mut graph, 1, 1);
        add_player(&mut graph, 2, 2);
        if team1 > 0 {
            add_leaf_force(&mut graph, "T1", 1, None, 0, team1);
        }
        if team2 > 0 {
            add_leaf_force(&mut graph, "T2", 2, None, 1000, team2);
        }

        let before = reachable_entities(&graph);
        consolidate(&mut graph, &ConsolidateConfig::balanced()).unwrap();
        prop_assert_eq!(before, reachable_entities(&graph));

        for &top in graph.top_level_forces() {
            prop_assert!(graph.entity_ids_recursive(top).len() <= 20);
            for sub in graph.sub_force_ids_recursive(top) {
                prop_assert!(graph.force(sub).unwrap().entities.len() <= 6);
            }
        }
    }
}
