//! Property checks over seeded random fields.
//!
//! Each case is a fixed seed, so failures reproduce exactly.

use std::collections::{HashSet, VecDeque};

use fogwalk_harness::contract::Scenario;
use fogwalk_harness::policy::{RunConfig, SensingMode};
use fogwalk_harness::runner::{run_scenario, RunResult, RunStatus};
use fogwalk_harness::worlds::random_field::RandomField;
use fogwalk_kernel::grid::generate::GenerationConfig;
use fogwalk_kernel::grid::occupancy::OccupancyGrid;
use fogwalk_kernel::grid::position::Position;

fn bfs_distance(grid: &OccupancyGrid, start: Position, goal: Position) -> Option<usize> {
    let n = grid.dimension();
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([(start, 0)]);
    while let Some((at, d)) = queue.pop_front() {
        if at == goal {
            return Some(d);
        }
        for next in at.neighbors4(n) {
            if !grid.is_blocked(next) && seen.insert(next) {
                queue.push_back((next, d + 1));
            }
        }
    }
    None
}

fn cases() -> Vec<RandomField> {
    let mut out = Vec::new();
    for seed in 0..40u64 {
        for (size, density) in [(6, 0.25), (9, 0.3), (12, 0.35)] {
            out.push(RandomField {
                config: GenerationConfig {
                    size,
                    blocked_probability: density,
                    seed,
                },
            });
        }
    }
    out
}

fn run(world: &RandomField, config: &RunConfig) -> (OccupancyGrid, RunResult) {
    let truth = world.ground_truth().unwrap();
    let result = run_scenario(world, config).unwrap();
    (truth, result)
}

#[test]
fn success_iff_goal_reachable_in_ground_truth() {
    let mut outcomes = HashSet::new();
    for world in cases() {
        let (truth, result) = run(&world, &RunConfig::default());
        let reachable = bfs_distance(&truth, world.start(), world.goal()).is_some();
        assert_eq!(
            result.status == RunStatus::Success,
            reachable,
            "{:?}",
            world.config
        );
        outcomes.insert(reachable);
    }
    // The sample must exercise both outcomes.
    assert_eq!(outcomes.len(), 2);
}

#[test]
fn planning_rounds_bounded_by_cell_count() {
    for world in cases() {
        let (_, result) = run(&world, &RunConfig::default());
        let n = world.config.size;
        assert!(
            result.planning_rounds <= n * n,
            "{} rounds on {n}x{n}",
            result.planning_rounds
        );
        let final_search_failed = usize::from(result.status == RunStatus::Stuck);
        assert_eq!(
            result.path_history.len() + final_search_failed,
            result.planning_rounds
        );
    }
}

#[test]
fn trajectory_is_a_legal_walk_on_ground_truth() {
    for world in cases() {
        let (truth, result) = run(&world, &RunConfig::default());
        let walk = &result.trajectory;
        assert_eq!(walk.first(), Some(&world.start()));
        assert_eq!(result.steps_taken, walk.len() - 1);
        assert!(walk.windows(2).all(|w| w[0].is_adjacent(w[1])));
        assert!(walk.iter().all(|&at| !truth.is_blocked(at)));
        assert_eq!(
            walk.last() == Some(&world.goal()),
            result.status == RunStatus::Success
        );
    }
}

#[test]
fn successful_runs_are_never_shorter_than_bfs() {
    for world in cases() {
        let (truth, result) = run(&world, &RunConfig::default());
        if let Some(shortest) = bfs_distance(&truth, world.start(), world.goal()) {
            assert!(result.steps_taken >= shortest, "{:?}", world.config);
        }
    }
}

#[test]
fn knowledge_is_a_sound_superset_of_the_prior() {
    for world in cases() {
        let (truth, result) = run(&world, &RunConfig::default());
        let prior = world.prior_knowledge(world.config.size);
        assert!(result.final_knowledge.extends(&prior));
        assert!(result
            .final_knowledge
            .as_grid()
            .blocked_positions()
            .all(|p| truth.is_blocked(p)));
    }
}

#[test]
fn radius_sensing_keeps_the_reachability_contract() {
    let config = RunConfig {
        sensing: SensingMode::Radius(2),
        ..RunConfig::default()
    };
    for world in cases().into_iter().step_by(3) {
        let (truth, result) = run(&world, &config);
        let reachable = bfs_distance(&truth, world.start(), world.goal()).is_some();
        assert_eq!(result.status == RunStatus::Success, reachable);
    }
}
