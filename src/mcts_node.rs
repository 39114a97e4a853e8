/// Represents a single node in the Monte Carlo search tree.
///
/// A node only carries bookkeeping: the move that led to it and the statistics of the
/// simulations that passed through it. Its children are the node's children in the
/// engine's `ego_tree::Tree`, at most one per move.
#[derive(Debug, Clone, PartialEq)]
pub struct MctsNode<M> {
    /// The move that led to this node from its parent. `None` for the root node.
    pub prev_move: Option<M>,
    /// The number of simulations that passed through this node.
    pub visits: u32,
    /// The number of those simulations won by the player to move at the root.
    pub wins: f64,
}

impl<M> Default for MctsNode<M> {
    fn default() -> Self {
        MctsNode::new(None)
    }
}

impl<M> MctsNode<M> {
    /// Creates a node with zeroed statistics.
    pub fn new(prev_move: Option<M>) -> Self {
        MctsNode {
            prev_move,
            visits: 0,
            wins: 0.0,
        }
    }

    /// Calculates the win rate of this node, `0.0` when it was never visited.
    pub fn wins_rate(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.wins / (self.visits as f64)
        }
    }
}
