//! End-to-end planning scenarios over the named maze layouts.

use forage_harness::replay::{replay_plan, ReplayVerdict};
use forage_harness::worlds::layouts;
use forage_harness::worlds::maze::MazeWorld;
use forage_kernel::grid::Direction;
use forage_search::graph::TerminationReason;
use forage_search::policy::SearchPolicy;
use forage_search::search::{plan_actions, search, SearchOutcome};

fn maze(id: &str) -> MazeWorld {
    lock_tests::init_test_tracing();
    MazeWorld::parse(id, layouts::by_id(id).unwrap()).unwrap()
}

#[test]
fn corridor_plans_two_east_moves() {
    let maze = maze("corridor");
    let outcome = plan_actions(maze.start(), &maze).unwrap();
    assert_eq!(
        outcome,
        SearchOutcome::Found(vec![Direction::East, Direction::East])
    );
}

#[test]
fn cleared_start_is_found_without_expanding() {
    let maze = maze("cleared");
    let result = search(maze.start(), &maze, &SearchPolicy::default()).unwrap();
    assert_eq!(result.outcome, SearchOutcome::Found(Vec::new()));
    assert_eq!(result.graph.metadata.total_expansions, 0);
    assert_eq!(result.graph.metadata.total_pops, 1);
    assert_eq!(
        result.graph.metadata.termination_reason,
        TerminationReason::GoalReached {
            creation_order: 0,
            path_len: 0
        }
    );
}

#[test]
fn walled_off_food_exhausts_after_reachable_cells() {
    let maze = maze("walled_off");
    let result = search(maze.start(), &maze, &SearchPolicy::default()).unwrap();
    assert_eq!(result.outcome, SearchOutcome::Exhausted);
    assert_eq!(result.graph.metadata.total_expansions, 2);
    assert_eq!(
        result.graph.metadata.termination_reason,
        TerminationReason::FrontierExhausted
    );
}

#[test]
fn small_room_plan_replays_to_goal() {
    let maze = maze("small_room");
    let outcome = plan_actions(maze.start(), &maze).unwrap();
    let actions = outcome.actions();
    // Both pellets are at least six moves apart from the start in total.
    assert!(actions.len() >= 6, "plan too short: {actions:?}");
    assert!(!actions.contains(&Direction::Stop));
    let verdict = replay_plan(&maze, maze.start(), actions).unwrap();
    assert!(verdict.is_goal(), "{verdict:?}");
}

#[test]
fn tiny_search_plan_replays_to_goal() {
    let maze = maze("tiny_search");
    let outcome = plan_actions(maze.start(), &maze).unwrap();
    assert!(outcome.is_found());
    let verdict = replay_plan(&maze, maze.start(), outcome.actions()).unwrap();
    assert_eq!(
        verdict,
        ReplayVerdict::GoalReached {
            steps: outcome.actions().len() as u64
        }
    );
}

#[test]
fn budget_cuts_off_tiny_search() {
    let maze = maze("tiny_search");
    let result = search(maze.start(), &maze, &SearchPolicy::with_budget(3)).unwrap();
    assert_eq!(result.outcome, SearchOutcome::BudgetExceeded);
    assert_eq!(result.graph.metadata.total_expansions, 3);
    assert_eq!(
        result.graph.metadata.termination_reason,
        TerminationReason::ExpansionBudgetExceeded
    );
}

#[test]
fn budget_of_one_still_finds_adjacent_goal() {
    // Expanding the start pushes the winning move; popping it is not an
    // expansion, so a budget of one is enough.
    let maze = MazeWorld::parse("adjacent", "P.\n").unwrap();
    let result = search(maze.start(), &maze, &SearchPolicy::with_budget(1)).unwrap();
    assert_eq!(result.outcome, SearchOutcome::Found(vec![Direction::East]));
}

#[test]
fn equal_cost_moves_resolve_in_successor_order() {
    // Food on both sides at equal distance: every first move ties, so the
    // first successor the world produced (East before West) wins.
    let maze = MazeWorld::parse("fork", ".P.\n").unwrap();
    let outcome = plan_actions(maze.start(), &maze).unwrap();
    assert_eq!(outcome.actions().first(), Some(&Direction::East));
}
