//! Greedy and exhaustive solver behavior on hand-built levels

use vineclear::solver::cellset::CellSet;
use vineclear::{Direction, Level, Point, Solver, Vine};

fn vine(id: &str, direction: Direction, cells: &[(i32, i32)]) -> Vine {
    let path = cells.iter().map(|&(x, y)| Point::new(x, y)).collect();
    Vine::new(id.to_owned(), direction, path)
}

#[test]
fn test_single_vine_slides_off() {
    // The head passes through the vine's own body on the way out
    let level = Level::from_vines(
        [3, 1],
        vec![vine("solo", Direction::Left, &[(2, 0), (1, 0), (0, 0)])],
    );
    let solver = Solver::new(&level);

    assert!(solver.is_solvable_greedy());
    assert!(solver.is_solvable_bfs());
}

#[test]
fn test_mutual_deadlock_is_unsolvable() {
    let level = Level::from_vines(
        [3, 2],
        vec![
            vine("a", Direction::Right, &[(1, 0), (0, 0), (0, 1)]),
            vine("b", Direction::Left, &[(1, 1), (2, 1), (2, 0)]),
        ],
    );
    let solver = Solver::new(&level);

    assert!(!solver.is_solvable_greedy());
    assert!(!solver.is_solvable_bfs());
}

#[test]
fn test_nested_vines_clear_outside_in() {
    let level = Level::from_vines(
        [4, 1],
        vec![
            vine("inner", Direction::Right, &[(1, 0), (0, 0)]),
            vine("outer", Direction::Right, &[(3, 0), (2, 0)]),
        ],
    );
    let solver = Solver::new(&level);

    assert!(solver.is_solvable_greedy());
    assert!(solver.is_solvable_bfs());
}

#[test]
fn test_single_cell_vine_never_clears() {
    let level = Level::from_vines([2, 1], vec![
        vine("stub", Direction::Left, &[(0, 0)]),
        vine("pair", Direction::Right, &[(1, 0)]),
    ]);
    let solver = Solver::new(&level);

    assert!(!solver.is_solvable_greedy());
    assert!(!solver.is_solvable_bfs());
}

#[test]
fn test_empty_level_is_trivially_solved() {
    let level = Level::from_vines([3, 3], Vec::new());
    let solver = Solver::new(&level);

    assert!(solver.is_solvable_greedy());
    assert!(solver.is_solvable_bfs());
}

#[test]
fn test_can_vine_clear_is_deterministic() {
    let level = Level::from_vines(
        [4, 1],
        vec![
            vine("inner", Direction::Right, &[(1, 0), (0, 0)]),
            vine("outer", Direction::Right, &[(3, 0), (2, 0)]),
        ],
    );
    let solver = Solver::new(&level);

    let mut occupied = CellSet::new([4, 1]);
    for x in 0..4 {
        occupied.insert(Point::new(x, 0));
    }

    for _ in 0..10 {
        assert!(!solver.can_vine_clear(0, &occupied));
        assert!(solver.can_vine_clear(1, &occupied));
    }
}

#[test]
fn test_blocked_then_freed_vine_clears() {
    // "inner" is blocked only while "outer" is still present
    let level = Level::from_vines(
        [4, 1],
        vec![
            vine("inner", Direction::Right, &[(1, 0), (0, 0)]),
            vine("outer", Direction::Right, &[(3, 0), (2, 0)]),
        ],
    );
    let solver = Solver::new(&level);

    let mut full = CellSet::new([4, 1]);
    for x in 0..4 {
        full.insert(Point::new(x, 0));
    }
    let mut without_outer = CellSet::new([4, 1]);
    without_outer.insert(Point::new(0, 0));
    without_outer.insert(Point::new(1, 0));

    assert!(!solver.can_vine_clear(0, &full));
    assert!(solver.can_vine_clear(0, &without_outer));
}
