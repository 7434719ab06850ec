use rand::{rngs::StdRng, SeedableRng};
use slider_puzzle::{Board, Heuristic, Pruning, Solver, SolverConfig};

fn board<const N: usize>(tiles: [[u32; N]; N]) -> Board {
    Board::new(&tiles).unwrap()
}

fn flatten(board: &Board) -> Vec<u32> {
    board.rows().flat_map(|row| row.iter().copied()).collect()
}

// Inversion-count parity, only used here to check the solver's answers.
fn solvable_by_parity(board: &Board) -> bool {
    let flat = flatten(board);
    let inversions: usize = flat
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            flat[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum();
    let (blank_row, _) = board.blank().unwrap();

    if board.dimension() % 2 == 1 {
        inversions % 2 == 0
    } else {
        (inversions + blank_row) % 2 == 1
    }
}

fn permutations(values: Vec<u32>) -> Vec<Vec<u32>> {
    if values.len() <= 1 {
        return vec![values];
    }
    let mut out = Vec::new();
    for i in 0..values.len() {
        let mut rest = values.clone();
        let head = rest.remove(i);
        for mut tail in permutations(rest) {
            tail.insert(0, head);
            out.push(tail);
        }
    }
    out
}

fn all_2x2_boards() -> Vec<Board> {
    permutations(vec![0, 1, 2, 3])
        .into_iter()
        .map(|p| board([[p[0], p[1]], [p[2], p[3]]]))
        .collect()
}

fn differing_cells(a: &Board, b: &Board) -> Vec<usize> {
    flatten(a)
        .into_iter()
        .zip(flatten(b))
        .enumerate()
        .filter(|(_, (x, y))| x != y)
        .map(|(i, _)| i)
        .collect()
}

fn is_single_slide(from: &Board, to: &Board) -> bool {
    let (Some((r1, c1)), Some((r2, c2))) = (from.blank(), to.blank()) else {
        return false;
    };
    let n = from.dimension();
    r1.abs_diff(r2) + c1.abs_diff(c2) == 1
        && differing_cells(from, to) == {
            let mut cells = vec![r1 * n + c1, r2 * n + c2];
            cells.sort();
            cells
        }
}

#[test]
fn solved_board_needs_no_moves() {
    let goal = board([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
    assert!(goal.is_goal());

    let solver = Solver::new(&goal);
    assert!(solver.is_solvable());
    assert_eq!(solver.moves(), Some(0));
    assert_eq!(solver.solution().unwrap(), &[goal]);
}

#[test]
fn one_move_from_goal() {
    let solver = Solver::new(&board([[1, 2, 3], [4, 5, 6], [7, 0, 8]]));
    assert_eq!(solver.moves(), Some(1));
}

#[test]
fn swapped_last_tiles_are_unsolvable() {
    let solver = Solver::new(&board([[1, 2, 3], [4, 5, 6], [8, 7, 0]]));
    assert!(!solver.is_solvable());
    assert_eq!(solver.moves(), None);
    assert!(solver.solution().is_none());
}

#[test]
fn text_round_trip_keeps_the_board() {
    let mut rng = StdRng::seed_from_u64(2024);
    for size in 2..=5 {
        let original = Board::random(size, &mut rng).unwrap();
        assert_eq!(original.dimension(), size);
        let reparsed: Board = original.to_string().parse().unwrap();
        assert_eq!(reparsed, original);
    }
}

#[test]
fn distances_vanish_only_at_goal() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut boards = all_2x2_boards();
    boards.extend((0..20).map(|_| Board::random(3, &mut rng).unwrap()));
    boards.push(Board::goal(4).unwrap());

    for b in &boards {
        assert_eq!(b.manhattan() == 0, b.is_goal(), "{}", b);
        assert_eq!(b.hamming() == 0, b.is_goal(), "{}", b);
        assert!(b.hamming() <= b.manhattan());
    }
}

#[test]
fn neighbors_are_single_slides() {
    let mut rng = StdRng::seed_from_u64(17);
    for size in 2..=4 {
        for _ in 0..10 {
            let b = Board::random(size, &mut rng).unwrap();
            let around: Vec<Board> = b.neighbors().collect();
            assert!((2..=4).contains(&around.len()));
            for n in &around {
                assert!(n.validate().is_ok());
                assert!(is_single_slide(&b, n), "{}\n->\n{}", b, n);
            }
        }
    }
}

#[test]
fn twin_swaps_two_tiles_and_flips_solvability() {
    for b in all_2x2_boards() {
        let twin = b.twin();
        let changed = differing_cells(&b, &twin);
        assert_eq!(changed.len(), 2);
        assert_eq!(twin.blank(), b.blank());
        assert_ne!(
            Solver::new(&b).is_solvable(),
            Solver::new(&twin).is_solvable(),
            "{}",
            b
        );
    }
}

#[test]
fn solvability_matches_inversion_parity() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut boards = all_2x2_boards();
    boards.extend((0..6).map(|_| Board::random(3, &mut rng).unwrap()));

    for b in boards {
        let solver = Solver::new(&b);
        assert_eq!(solver.is_solvable(), solvable_by_parity(&b), "{}", b);
        if !solver.is_solvable() {
            assert_eq!(solver.moves(), None);
            assert!(solver.solution().is_none());
        }
    }
}

#[test]
fn solution_walks_from_initial_to_goal() {
    let mut rng = StdRng::seed_from_u64(31);
    for (size, steps) in [(3, 30), (4, 18)] {
        let initial = Board::scrambled(size, steps, &mut rng).unwrap();
        let solver = Solver::new(&initial);
        assert!(solver.is_solvable());

        let moves = solver.moves().unwrap();
        assert!(moves <= steps);
        assert!(moves >= initial.manhattan());

        let path = solver.solution().unwrap();
        assert_eq!(path.len(), moves + 1);
        assert_eq!(path.first(), Some(&initial));
        assert!(path.last().unwrap().is_goal());
        for pair in path.windows(2) {
            assert!(is_single_slide(&pair[0], &pair[1]));
        }

        // restartable: a second read gives the same sequence
        assert_eq!(solver.solution().unwrap(), path);
        assert_eq!(solver.solution_moves().unwrap().len(), moves);
    }
}

#[test]
fn every_configuration_finds_the_same_move_count() {
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..3 {
        let initial = Board::scrambled(3, 16, &mut rng).unwrap();
        let expected = Solver::new(&initial).moves();

        for heuristic in [Heuristic::Manhattan, Heuristic::Hamming] {
            for pruning in [Pruning::Parent, Pruning::ClosedSet] {
                let config = SolverConfig::new()
                    .with_heuristic(heuristic)
                    .with_pruning(pruning);
                let solver = Solver::with_config(&initial, config);
                assert_eq!(solver.moves(), expected, "{:?}\n{}", config, initial);
            }
        }
    }
}
