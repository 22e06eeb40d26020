mod common;

use generations::block::Direction;
use generations::scenarios::{self, Scenario};
use generations::search::replay::verify_solution;
use generations::search::{goal_paths, shortest_path};

use common::reference_distance;

#[test]
fn level1_is_solved_in_seven_moves() {
    let Scenario::Block(problem) = scenarios::block_level1() else {
        panic!("block_level1 is a block scenario");
    };
    let path = shortest_path(&problem).unwrap().unwrap();
    assert_eq!(path.len(), 7);
    assert_eq!(reference_distance(&problem), Some(7));
    verify_solution(&problem, &path.moves()).unwrap();

    // A known optimal solution, checked independently of the search.
    use Direction::*;
    verify_solution(&problem, &[Right, Right, Down, Right, Right, Right, Down]).unwrap();
}

#[test]
fn four_nine_nineteen_measures_seventeen() {
    let Scenario::Pouring(problem) = scenarios::pouring_4_9_19_target_17() else {
        panic!("pouring_4_9_19_target_17 is a pouring scenario");
    };
    let path = shortest_path(&problem).unwrap().unwrap();
    assert_eq!(Some(path.len()), reference_distance(&problem));
    assert!(path.end().levels().contains(&17));
    verify_solution(&problem, &path.moves()).unwrap();
}

#[test]
fn every_builtin_scenario_is_solvable() {
    for name in scenarios::names() {
        let summary = scenarios::by_name(name).unwrap().run().unwrap();
        assert!(summary.solved, "{name} has no solution");
        assert_eq!(summary.length, Some(summary.moves.len()));
        assert_eq!(summary.depth_reached, summary.moves.len());
    }
}

#[test]
fn all_goal_paths_of_the_corridor_are_sorted() {
    let Scenario::Block(problem) = scenarios::block_corridor() else {
        panic!("block_corridor is a block scenario");
    };
    let lens: Vec<usize> = goal_paths(&problem).map(|p| p.unwrap().len()).collect();
    // The goal cell is a single state, so the explored set admits exactly one path to it.
    assert_eq!(lens, vec![3]);
}
