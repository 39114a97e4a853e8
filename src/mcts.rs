use crate::board::{Board, GameResult, Player};
use crate::error::SearchError;
use crate::mcts_node::MctsNode;
use crate::policy::SelectionPolicy;
use crate::random::{RandomGenerator, StandardRandomGenerator};
use ego_tree::{NodeId, NodeRef, Tree};
use log::{debug, trace};
use std::fmt;

/// The main struct for running the Monte Carlo Tree Search algorithm.
///
/// It owns the search tree, a private copy of the root board, the random number generator
/// and the configuration for the search. The legal moves and the player to move at the root
/// are captured once, when the search is created.
pub struct MonteCarloTreeSearch<T: Board, K: RandomGenerator> {
    tree: Tree<MctsNode<T::Move>>,
    root_id: NodeId,
    board: T,
    root_moves: Vec<T::Move>,
    initial_player: Player,
    random: K,
    policy: SelectionPolicy,
    verbose: bool,
}

/// A builder for creating instances of `MonteCarloTreeSearch`.
pub struct MonteCarloTreeSearchBuilder<T: Board, K: RandomGenerator> {
    board: T,
    random_generator: K,
    policy: SelectionPolicy,
    verbose: bool,
}

impl<T: Board> MonteCarloTreeSearchBuilder<T, StandardRandomGenerator> {
    /// Creates a new builder with the given root board, an OS-seeded generator and the UCT policy.
    pub fn new(board: T) -> Self {
        Self {
            board,
            random_generator: StandardRandomGenerator::default(),
            policy: SelectionPolicy::default(),
            verbose: false,
        }
    }
}

impl<T: Board, K: RandomGenerator> MonteCarloTreeSearchBuilder<T, K> {
    /// Sets the random number generator for the MCTS search.
    pub fn with_random_generator<R: RandomGenerator>(
        self,
        rg: R,
    ) -> MonteCarloTreeSearchBuilder<T, R> {
        MonteCarloTreeSearchBuilder {
            board: self.board,
            random_generator: rg,
            policy: self.policy,
            verbose: self.verbose,
        }
    }

    /// Sets the policy used to walk through already-explored children.
    pub fn with_policy(mut self, policy: SelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Prints the per-move report to stdout when [`MonteCarloTreeSearch::search`] finishes.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Builds the `MonteCarloTreeSearch` instance with the configured parameters.
    pub fn build(self) -> MonteCarloTreeSearch<T, K> {
        MonteCarloTreeSearch::new(
            self.board,
            self.random_generator,
            self.policy,
            self.verbose,
        )
    }
}

impl<T: Board> MonteCarloTreeSearch<T, StandardRandomGenerator> {
    /// Returns a new builder for `MonteCarloTreeSearch`.
    pub fn builder(board: T) -> MonteCarloTreeSearchBuilder<T, StandardRandomGenerator> {
        MonteCarloTreeSearchBuilder::new(board)
    }

    /// Creates a UCT search over `board` with an OS-seeded generator and default settings.
    pub fn from_board(board: T) -> Self {
        MonteCarloTreeSearchBuilder::new(board).build()
    }
}

impl<T: Board, K: RandomGenerator> MonteCarloTreeSearch<T, K> {
    /// Creates a new `MonteCarloTreeSearch` instance.
    ///
    /// It is recommended to use the builder pattern via `MonteCarloTreeSearch::builder()` instead.
    pub fn new(board: T, rg: K, policy: SelectionPolicy, verbose: bool) -> Self {
        let tree = Tree::new(MctsNode::new(None));
        let root_id = tree.root().id();
        let root_moves = board.get_valid_moves();
        let initial_player = board.get_current_player();

        Self {
            tree,
            root_id,
            board,
            root_moves,
            initial_player,
            random: rg,
            policy,
            verbose,
        }
    }

    /// Returns an immutable reference to the underlying search tree.
    pub fn get_tree(&self) -> &Tree<MctsNode<T::Move>> {
        &self.tree
    }

    /// Returns a reference to the root node of the search tree.
    pub fn get_root(&self) -> NodeRef<'_, MctsNode<T::Move>> {
        self.tree.root()
    }

    /// The legal moves of the root position, frozen before the first simulation.
    pub fn root_moves(&self) -> &[T::Move] {
        &self.root_moves
    }

    /// The player to move at the root. Every win is credited relative to this player.
    pub fn initial_player(&self) -> Player {
        self.initial_player
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Looks up the child of `parent` reached by `b_move`.
    pub fn find_child(&self, parent: NodeId, b_move: &T::Move) -> Option<NodeId> {
        child_of(&self.tree, parent, b_move)
    }

    /// Performs one simulation: selection/expansion, rollout and backpropagation.
    /// Returns the path of nodes that were credited, root excluded.
    pub fn do_iteration(&mut self) -> Result<Vec<NodeId>, SearchError> {
        let mut scratch = self.board.clone();
        let path = self.select_and_expand(&mut scratch)?;
        let result = self.simulate(scratch)?;
        self.backpropagate(&path, result)?;
        trace!("simulation finished with {result:?}, path length {}", path.len());
        Ok(path)
    }

    /// Runs the MCTS search for a specified number of simulations.
    pub fn iterate_n_times(&mut self, n: u32) -> Result<(), SearchError> {
        for _ in 0..n {
            self.do_iteration()?;
        }
        Ok(())
    }

    /// Runs `simulations` simulations and returns the most visited root move.
    ///
    /// When the search was built with `with_verbose(true)` the per-move report is printed first.
    pub fn search(&mut self, simulations: u32) -> Result<T::Move, SearchError> {
        if self.root_moves.is_empty() {
            return Err(SearchError::NoLegalMoves);
        }

        self.iterate_n_times(simulations)?;
        let report = self.report()?;
        debug!(
            "{:?} search: {} simulations, {} nodes, selected {}",
            self.policy,
            simulations,
            self.tree.nodes().count(),
            report.selected
        );
        if self.verbose {
            println!("{report}");
        }
        Ok(report.selected)
    }

    /// Returns the root move whose child has the most visits.
    ///
    /// Moves are scanned in the frozen root order and only a strictly greater visit count
    /// replaces the current best, so ties go to the earlier move. Without any explored child
    /// the first legal move is returned.
    pub fn best_move(&self) -> Result<T::Move, SearchError> {
        let mut best_move = *self.root_moves.first().ok_or(SearchError::NoLegalMoves)?;
        let mut most_visits = None;
        for b_move in &self.root_moves {
            if let Some(child) = self.root_child(b_move) {
                if most_visits.is_none_or(|most| child.visits > most) {
                    most_visits = Some(child.visits);
                    best_move = *b_move;
                }
            }
        }
        Ok(best_move)
    }

    /// Collects the statistics of every explored root move together with the selected move.
    pub fn report(&self) -> Result<SearchReport<T::Move>, SearchError> {
        let selected = self.best_move()?;
        let moves = self
            .root_moves
            .iter()
            .filter_map(|b_move| {
                self.root_child(b_move).map(|node| MoveStats {
                    b_move: *b_move,
                    visits: node.visits,
                    wins: node.wins,
                })
            })
            .collect();
        Ok(SearchReport { moves, selected })
    }

    fn root_child(&self, b_move: &T::Move) -> Option<&MctsNode<T::Move>> {
        self.tree
            .root()
            .children()
            .find(|child| child.value().prev_move.as_ref() == Some(b_move))
            .map(|child| child.value())
    }

    /// Walks down from the root on `board`, expanding at most one new node.
    ///
    /// Selection steps pass the turn after each move; the expansion move does not.
    fn select_and_expand(&mut self, board: &mut T) -> Result<Vec<NodeId>, SearchError> {
        let mut current = self.root_id;
        let mut path = Vec::new();

        loop {
            if board.get_result().is_some() {
                break;
            }

            let valid_moves = board.get_valid_moves();
            if valid_moves.is_empty() {
                break;
            }

            let mut explored = Vec::with_capacity(valid_moves.len());
            let mut unexplored = Vec::new();
            for b_move in valid_moves {
                match child_of(&self.tree, current, &b_move) {
                    Some(child_id) => explored.push((b_move, child_id)),
                    None => unexplored.push(b_move),
                }
            }

            if let Some(&b_move) = self.random.choose(&unexplored) {
                let child_id = self.attach_child(current, b_move)?;
                board.make_move(b_move)?;
                path.push(child_id);
                break;
            }

            let Some((b_move, child_id)) = self.select_child(current, &explored)? else {
                break;
            };
            board.make_move(b_move)?;
            path.push(child_id);
            current = child_id;
            board.switch_player();
        }

        Ok(path)
    }

    fn attach_child(&mut self, parent: NodeId, b_move: T::Move) -> Result<NodeId, SearchError> {
        let mut parent = self.tree.get_mut(parent).ok_or(SearchError::UnknownNode)?;
        let child = parent.append(MctsNode::new(Some(b_move)));
        Ok(child.id())
    }

    /// Scores every explored child with the selection policy and keeps the first strictly
    /// greater value. Falls back to a uniform pick if nothing scored above negative infinity.
    fn select_child(
        &mut self,
        parent: NodeId,
        explored: &[(T::Move, NodeId)],
    ) -> Result<Option<(T::Move, NodeId)>, SearchError> {
        let parent_visits = self
            .tree
            .get(parent)
            .ok_or(SearchError::UnknownNode)?
            .value()
            .visits;

        let mut best = None;
        let mut best_value = f64::NEG_INFINITY;
        for &(b_move, child_id) in explored {
            let child = self.tree.get(child_id).ok_or(SearchError::UnknownNode)?;
            let value = self
                .policy
                .score(child.value(), parent_visits, &mut self.random);
            if value > best_value {
                best_value = value;
                best = Some((b_move, child_id));
            }
        }

        if best.is_none() {
            trace!("no child scored above -inf, picking a random legal move");
            best = self.random.choose(explored).copied();
        }
        Ok(best)
    }

    /// Plays uniformly random moves until the game ends or no move is left.
    fn simulate(&mut self, mut board: T) -> Result<Option<GameResult>, SearchError> {
        while board.get_result().is_none() {
            let moves = board.get_valid_moves();
            let Some(&b_move) = self.random.choose(&moves) else {
                break;
            };
            board.make_move(b_move)?;
            board.switch_player();
        }
        Ok(board.get_result())
    }

    /// Credits one visit to every node on `path`, and one win when the initial player won.
    fn backpropagate(
        &mut self,
        path: &[NodeId],
        result: Option<GameResult>,
    ) -> Result<(), SearchError> {
        let is_win = result.is_some_and(|result| result.is_win_for(self.initial_player));

        for &node_id in path {
            let mut node = self.tree.get_mut(node_id).ok_or(SearchError::UnknownNode)?;
            let stats = node.value();
            stats.visits += 1;
            if is_win {
                stats.wins += 1.0;
            }
        }
        Ok(())
    }
}

fn child_of<M: PartialEq>(tree: &Tree<MctsNode<M>>, parent: NodeId, b_move: &M) -> Option<NodeId> {
    tree.get(parent)?
        .children()
        .find(|child| child.value().prev_move.as_ref() == Some(b_move))
        .map(|child| child.id())
}

/// Runs one search from `board` and returns the recommended move.
///
/// `random` may be a borrowed generator (`&mut rng`) so a caller can thread one seeded
/// generator through many searches. When `verbose` is set the per-move win rates are printed.
pub fn monte_carlo_search<T: Board, K: RandomGenerator>(
    board: &T,
    simulations: u32,
    verbose: bool,
    policy: SelectionPolicy,
    random: K,
) -> Result<T::Move, SearchError> {
    MonteCarloTreeSearch::new(board.clone(), random, policy, verbose).search(simulations)
}

/// Statistics of one explored root move.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveStats<M> {
    pub b_move: M,
    pub visits: u32,
    pub wins: f64,
}

impl<M> MoveStats<M> {
    pub fn win_rate(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.wins / (self.visits as f64)
        }
    }
}

/// The outcome of a search: root statistics in root-move order and the selected move.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport<M> {
    pub moves: Vec<MoveStats<M>>,
    pub selected: M,
}

impl<M: fmt::Display> fmt::Display for SearchReport<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stats in &self.moves {
            writeln!(f, "Column {}: {:.2}", stats.b_move, stats.win_rate())?;
        }
        writeln!(f)?;
        write!(f, "FINAL Move selected: {}", self.selected)
    }
}
