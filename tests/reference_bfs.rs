mod common;

use proptest::prelude::*;

use generations::pouring::Pouring;
use generations::problem::{LegalityLike, Problem};
use generations::search::replay::verify_solution;
use generations::search::shortest_path;

use common::{reference_distance, shortest_by_enumeration, OpenCells, GRID_STEPS};

fn grid_problem(
    n: i32,
    open: Vec<bool>,
) -> Problem<common::GridStep, OpenCells, impl Fn(&(i32, i32)) -> bool> {
    let goal = (n - 1, n - 1);
    Problem::new(
        "grid",
        (0, 0),
        GRID_STEPS.to_vec(),
        OpenCells { n, open },
        move |s: &(i32, i32)| *s == goal,
    )
}

fn arb_grid() -> impl Strategy<Value = (i32, Vec<bool>)> {
    (2i32..7).prop_flat_map(|n| {
        let cells = (n * n) as usize;
        (Just(n), prop::collection::vec(prop::bool::weighted(0.7), cells))
    })
}

proptest! {
    #[test]
    fn grid_walk_matches_reference_bfs((n, mut open) in arb_grid()) {
        open[0] = true;
        let problem = grid_problem(n, open);

        let found = shortest_path(&problem).unwrap();
        let expected = reference_distance(&problem);
        prop_assert_eq!(found.as_ref().map(|p| p.len()), expected);

        if let Some(path) = found {
            let states = verify_solution(&problem, &path.moves()).unwrap();
            prop_assert!(states.iter().all(|s| problem.legality.is_legal(s)));
            if path.len() <= 6 {
                prop_assert_eq!(shortest_by_enumeration(&problem, path.len()), Some(path.len()));
            }
        }
    }

    #[test]
    fn pouring_matches_reference_bfs(
        capacities in prop::collection::vec(1u32..8, 1..4),
        target in 0u32..9,
    ) {
        let problem = Pouring::new(capacities).problem("pour", target);

        let found = shortest_path(&problem).unwrap();
        prop_assert_eq!(found.as_ref().map(|p| p.len()), reference_distance(&problem));

        if let Some(path) = found {
            prop_assert!(path.end().levels().contains(&target));
            prop_assert!(verify_solution(&problem, &path.moves()).is_ok());
        }
    }

    #[test]
    fn search_is_deterministic((n, mut open) in arb_grid()) {
        open[0] = true;
        let problem = grid_problem(n, open);
        let a = shortest_path(&problem).unwrap().map(|p| p.moves());
        let b = shortest_path(&problem).unwrap().map(|p| p.moves());
        prop_assert_eq!(a, b);
    }
}
