//! Blocking graph construction, cycle detection, and the sentinel score

use vineclear::{Direction, Point, Vine, fast_score_blocking};

const CYCLE_SENTINEL: f64 = -1_000_000.0;

fn vine(id: &str, direction: Direction, cells: &[(i32, i32)]) -> Vine {
    let path = cells.iter().map(|&(x, y)| Point::new(x, y)).collect();
    Vine::new(id.to_owned(), direction, path)
}

#[test]
fn test_unobstructed_rows_have_no_blocking() {
    let mut vines = vec![
        vine("row_0", Direction::Left, &[(0, 0), (1, 0), (2, 0)]),
        vine("row_1", Direction::Left, &[(0, 1), (1, 1), (2, 1)]),
    ];

    let (score, max_depth) = fast_score_blocking(&mut vines, [3, 2]);

    assert!(vines.iter().all(|v| v.blocks.is_empty()));
    assert_eq!(max_depth, 0);
    assert!((score - 0.0).abs() < f64::EPSILON);
}

#[test]
fn test_exit_path_obstruction_is_recorded_once() {
    // "inner" must slide right through both of "outer"'s cells
    let mut vines = vec![
        vine("inner", Direction::Right, &[(1, 0), (0, 0)]),
        vine("outer", Direction::Right, &[(3, 0), (2, 0)]),
    ];

    let (score, max_depth) = fast_score_blocking(&mut vines, [4, 1]);

    assert_eq!(vines.first().map(|v| v.blocks.clone()), Some(vec!["outer".to_owned()]));
    assert_eq!(vines.last().map(|v| v.blocks.clone()), Some(Vec::new()));
    assert_eq!(max_depth, 1);
    assert!(score > 0.0);
    assert!((score - CYCLE_SENTINEL).abs() > 1.0);
}

#[test]
fn test_mutual_blocking_forces_the_sentinel() {
    // Heads point into cells held by the other vine; no order clears this
    let mut vines = vec![
        vine("a", Direction::Right, &[(1, 0), (0, 0), (0, 1)]),
        vine("b", Direction::Left, &[(1, 1), (2, 1), (2, 0)]),
    ];

    let (score, max_depth) = fast_score_blocking(&mut vines, [3, 2]);

    assert_eq!(vines.first().map(|v| v.blocks.clone()), Some(vec!["b".to_owned()]));
    assert_eq!(vines.last().map(|v| v.blocks.clone()), Some(vec!["a".to_owned()]));
    assert!((score - CYCLE_SENTINEL).abs() < f64::EPSILON);
    assert_eq!(max_depth, 1);
}

#[test]
fn test_longer_chains_raise_the_score() {
    // Three nested vines in one row, each blocked by everything to its right
    let mut shallow = vec![
        vine("a", Direction::Right, &[(1, 0), (0, 0)]),
        vine("b", Direction::Right, &[(3, 0), (2, 0)]),
    ];
    let mut deep = vec![
        vine("a", Direction::Right, &[(1, 0), (0, 0)]),
        vine("b", Direction::Right, &[(3, 0), (2, 0)]),
        vine("c", Direction::Right, &[(5, 0), (4, 0)]),
    ];

    let (shallow_score, shallow_depth) = fast_score_blocking(&mut shallow, [4, 1]);
    let (deep_score, deep_depth) = fast_score_blocking(&mut deep, [6, 1]);

    assert!(deep_depth > shallow_depth);
    assert!(deep_score > shallow_score);
}
