//! Drives `PlanningAgent` through mazes the way a game loop would.

use forage_harness::worlds::layouts;
use forage_harness::worlds::maze::{MazeConfig, MazeWorld};
use forage_kernel::grid::Direction;
use forage_search::agent::PlanningAgent;
use forage_search::contract::ForageWorld;
use forage_search::search::SearchOutcome;

fn apply(maze: &MazeWorld, config: &MazeConfig, action: Direction) -> MazeConfig {
    maze.successors(config)
        .unwrap()
        .into_iter()
        .find_map(|(next, d)| (d == action).then_some(next))
        .unwrap_or_else(|| panic!("agent issued illegal {action} at {}", config.position))
}

/// Run the agent until it says `Stop`; returns the final configuration and
/// the number of moves made.
fn drive(maze: &MazeWorld, agent: &mut PlanningAgent<&MazeWorld>) -> (MazeConfig, usize) {
    let mut config = maze.start().clone();
    let mut moves = 0;
    loop {
        let action = agent.next_action(&config).unwrap();
        if action == Direction::Stop {
            return (config, moves);
        }
        config = apply(maze, &config, action);
        moves += 1;
        assert!(moves < 1_000, "agent did not stop");
    }
}

#[test]
fn agent_clears_every_solvable_layout() {
    lock_tests::init_test_tracing();
    for id in ["corridor", "small_room", "tiny_search"] {
        let maze = MazeWorld::parse(id, layouts::by_id(id).unwrap()).unwrap();
        let mut agent = PlanningAgent::new(&maze);
        let (end, moves) = drive(&maze, &mut agent);
        assert!(maze.is_goal(&end), "{id}: food left after {moves} moves");
        // One search for the plan, one more from the goal once the cache ran dry.
        assert_eq!(agent.searches_run(), 2, "{id}");
        assert_eq!(agent.last_outcome(), Some(&SearchOutcome::Found(Vec::new())));
    }
}

#[test]
fn agent_stops_in_place_when_food_unreachable() {
    let maze = MazeWorld::parse("walled_off", layouts::WALLED_OFF).unwrap();
    let mut agent = PlanningAgent::new(&maze);
    let (end, moves) = drive(&maze, &mut agent);
    assert_eq!(moves, 0);
    assert_eq!(end, *maze.start());
    assert_eq!(agent.last_outcome(), Some(&SearchOutcome::Exhausted));
}

#[test]
fn agents_do_not_share_plans() {
    let maze = MazeWorld::parse("corridor", layouts::CORRIDOR).unwrap();
    let mut first = PlanningAgent::new(&maze);
    let mut second = PlanningAgent::new(&maze);
    assert_eq!(first.next_action(maze.start()).unwrap(), Direction::East);
    assert_eq!(second.searches_run(), 0);
    assert_eq!(second.next_action(maze.start()).unwrap(), Direction::East);
    assert_eq!(first.remaining_plan().count(), 1);
    assert_eq!(second.remaining_plan().count(), 1);
}
