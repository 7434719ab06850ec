//! A* search over sliding-puzzle boards.
//!
//! The solver runs two searches in lockstep: one from the initial board and one
//! from its [`twin`](Board::twin). Exchanging two tiles flips the permutation
//! parity, so exactly one of the two can reach the goal. Whichever frontier gets
//! there first decides solvability, and no inversion counting is needed.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::time::Instant;

use tracing::{debug, info};

use crate::board::{Board, Move};
use crate::min_pq::MinPq;

const PROGRESS_INTERVAL: usize = 10_000;

/// Estimate of the remaining moves, added to the moves so far to rank nodes.
///
/// Both are admissible, so the first goal popped is an optimal one.
/// Manhattan dominates Hamming and expands far fewer nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heuristic {
    #[default]
    Manhattan,
    Hamming,
}

impl Heuristic {
    pub fn estimate(&self, board: &Board) -> usize {
        match self {
            Heuristic::Manhattan => board.manhattan(),
            Heuristic::Hamming => board.hamming(),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Heuristic::Manhattan => write!(f, "manhattan"),
            Heuristic::Hamming => write!(f, "hamming"),
        }
    }
}

/// Which already-seen boards are kept out of the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pruning {
    /// Skip only the board the node was expanded from.
    #[default]
    Parent,
    /// Skip every board that has already been expanded.
    ClosedSet,
}

/// Knobs for a [`Solver`] run. Neither setting changes the result, only how
/// much of the search space gets explored on the way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolverConfig {
    pub heuristic: Heuristic,
    pub pruning: Pruning,
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    pub fn with_pruning(mut self, pruning: Pruning) -> Self {
        self.pruning = pruning;
        self
    }
}

type NodeId = usize;

// Nodes are never mutated once pushed; `previous` indexes into the same arena.
struct SearchNode {
    board: Board,
    moves: usize,
    previous: Option<NodeId>,
}

#[derive(Debug, Clone, Copy)]
struct FrontierEntry {
    priority: usize,
    estimate: usize,
    node: NodeId,
}

// Lowest moves + estimate first; among equals prefer the node closer to the goal.
fn by_priority(a: &FrontierEntry, b: &FrontierEntry) -> Ordering {
    a.priority
        .cmp(&b.priority)
        .then_with(|| a.estimate.cmp(&b.estimate))
}

type Frontier = MinPq<FrontierEntry, fn(&FrontierEntry, &FrontierEntry) -> Ordering>;

/// One A* run: the node arena plus its frontier.
struct Search {
    config: SolverConfig,
    nodes: Vec<SearchNode>,
    frontier: Frontier,
    closed: HashSet<Board>,
    expanded: usize,
}

impl Search {
    fn new(root: Board, config: SolverConfig) -> Self {
        let mut search = Self {
            config,
            nodes: Vec::new(),
            frontier: MinPq::new(by_priority as fn(&FrontierEntry, &FrontierEntry) -> Ordering),
            closed: HashSet::new(),
            expanded: 0,
        };
        search.push(root, 0, None);
        search
    }

    fn push(&mut self, board: Board, moves: usize, previous: Option<NodeId>) {
        let estimate = self.config.heuristic.estimate(&board);
        let node = self.nodes.len();
        self.nodes.push(SearchNode {
            board,
            moves,
            previous,
        });
        self.frontier.insert(FrontierEntry {
            priority: moves + estimate,
            estimate,
            node,
        });
    }

    fn is_exhausted(&self) -> bool {
        self.frontier.is_empty()
    }

    /// The frontier minimum, if it is a goal board.
    fn goal(&self) -> Option<NodeId> {
        self.frontier
            .min()
            .map(|entry| entry.node)
            .filter(|&id| self.nodes[id].board.is_goal())
    }

    fn min_priority(&self) -> Option<usize> {
        self.frontier.min().map(|entry| entry.priority)
    }

    /// Pops the minimum node and pushes its children.
    fn step(&mut self) {
        let Some(entry) = self.frontier.del_min() else {
            return;
        };
        let id = entry.node;

        if self.config.pruning == Pruning::ClosedSet
            && !self.closed.insert(self.nodes[id].board.clone())
        {
            return;
        }
        self.expanded += 1;

        let node = &self.nodes[id];
        let moves = node.moves + 1;
        let parent = node.previous.map(|p| &self.nodes[p].board);
        let children: Vec<Board> = node
            .board
            .neighbors()
            .filter(|child| Some(child) != parent)
            .filter(|child| !self.closed.contains(child))
            .collect();

        for child in children {
            self.push(child, moves, Some(id));
        }
    }

    /// Boards from the root to `id`, in forward order.
    fn path_to(&self, id: NodeId) -> Vec<Board> {
        let mut path = Vec::with_capacity(self.nodes[id].moves + 1);
        let mut current = Some(id);
        while let Some(node) = current {
            path.push(self.nodes[node].board.clone());
            current = self.nodes[node].previous;
        }
        path.reverse();
        path
    }
}

/// Solves a board on construction and caches the outcome.
///
/// Always check [`is_solvable`](Solver::is_solvable) before reading the
/// move count or the solution; both are `None` for unsolvable boards.
#[derive(Debug, Clone)]
pub struct Solver {
    moves: Option<usize>,
    solution: Option<Vec<Board>>,
    expanded: usize,
}

impl Solver {
    /// Runs the search with the default configuration.
    pub fn new(initial: &Board) -> Self {
        Self::with_config(initial, SolverConfig::default())
    }

    pub fn with_config(initial: &Board, config: SolverConfig) -> Self {
        let started = Instant::now();
        info!(
            event = "solve_start",
            dimension = initial.dimension(),
            heuristic = %config.heuristic,
            manhattan = initial.manhattan(),
            hamming = initial.hamming(),
        );

        let mut original = Search::new(initial.clone(), config);
        let mut twin = Search::new(initial.twin(), config);
        let mut steps = 0usize;

        while !original.is_exhausted()
            && !twin.is_exhausted()
            && original.goal().is_none()
            && twin.goal().is_none()
        {
            original.step();
            twin.step();
            steps += 1;

            if steps % PROGRESS_INTERVAL == 0 {
                debug!(
                    event = "progress",
                    steps = steps,
                    expanded = original.expanded + twin.expanded,
                    frontier = original.frontier.len(),
                    twin_frontier = twin.frontier.len(),
                    priority = original.min_priority().unwrap_or(0),
                );
            }
        }

        let goal = original.goal();
        let moves = goal.map(|id| original.nodes[id].moves);
        let solution = goal.map(|id| original.path_to(id));
        let expanded = original.expanded + twin.expanded;

        info!(
            event = "solve_end",
            solvable = goal.is_some(),
            moves = moves.map(|m| m as i64).unwrap_or(-1),
            expanded = expanded,
            duration_ms = started.elapsed().as_millis() as u64,
        );

        Self {
            moves,
            solution,
            expanded,
        }
    }

    pub fn is_solvable(&self) -> bool {
        self.solution.is_some()
    }

    /// Minimum number of moves to reach the goal, `None` if unsolvable.
    pub fn moves(&self) -> Option<usize> {
        self.moves
    }

    /// Boards from the initial board to the goal inclusive, `None` if unsolvable.
    pub fn solution(&self) -> Option<&[Board]> {
        self.solution.as_deref()
    }

    /// The blank's direction for each step of the solution.
    pub fn solution_moves(&self) -> Option<Vec<Move>> {
        let path = self.solution.as_ref()?;
        path.windows(2)
            .map(|pair| Move::between(pair[0].blank()?, pair[1].blank()?))
            .collect()
    }

    /// Nodes expanded across both searches.
    pub fn expanded(&self) -> usize {
        self.expanded
    }
}
