use crate::mcts_node::MctsNode;
use crate::random::RandomGenerator;

/// Exploration constant of the confidence-bound policy.
pub const DEFAULT_EXPLORATION: f64 = 1.41;

/// How the engine scores already-explored children while walking down the tree.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum SelectionPolicy {
    /// Pure Monte Carlo game search: every candidate gets an independent uniform draw,
    /// so the walk through explored children is uniformly random.
    Light,
    /// UCB1 applied to trees.
    Uct {
        /// Weight of the exploration term.
        exploration: f64,
    },
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        SelectionPolicy::uct()
    }
}

impl SelectionPolicy {
    /// The confidence-bound policy with [`DEFAULT_EXPLORATION`].
    pub const fn uct() -> Self {
        SelectionPolicy::Uct {
            exploration: DEFAULT_EXPLORATION,
        }
    }

    /// Maps the "use confidence bound" flag onto a policy.
    pub const fn from_flag(use_uct: bool) -> Self {
        if use_uct {
            SelectionPolicy::uct()
        } else {
            SelectionPolicy::Light
        }
    }

    /// Scores one candidate child. Higher is better.
    ///
    /// `parent_visits` is the visit count of the node being walked through. The root is
    /// never credited, so at the root it is always zero and UCT degrades to the plain win rate.
    pub fn score<M, K: RandomGenerator>(
        &self,
        child: &MctsNode<M>,
        parent_visits: u32,
        random: &mut K,
    ) -> f64 {
        match *self {
            SelectionPolicy::Light => random.next_unit(),
            SelectionPolicy::Uct { exploration } => {
                ucb_value(parent_visits, child.wins, child.visits, exploration)
            }
        }
    }
}

/// Calculates the UCB1 (Upper Confidence Bound 1) value for a node.
fn ucb_value(total_visits: u32, node_wins: f64, node_visits: u32, exploration: f64) -> f64 {
    if node_visits == 0 {
        return f64::INFINITY;
    }

    let win_rate = node_wins / (node_visits as f64);
    let bonus = if total_visits > 0 {
        f64::sqrt(f64::ln(total_visits as f64) / (node_visits as f64))
    } else {
        0.0
    };
    win_rate + exploration * bonus
}

#[cfg(test)]
mod tests {
    use crate::mcts_node::MctsNode;
    use crate::policy::{DEFAULT_EXPLORATION, SelectionPolicy};
    use crate::random::{CustomNumberGenerator, RandomGenerator};

    fn node(visits: u32, wins: f64) -> MctsNode<usize> {
        MctsNode {
            prev_move: Some(0),
            visits,
            wins,
        }
    }

    #[test]
    fn flag_selects_policy() {
        assert_eq!(SelectionPolicy::from_flag(false), SelectionPolicy::Light);
        assert_eq!(
            SelectionPolicy::from_flag(true),
            SelectionPolicy::Uct {
                exploration: DEFAULT_EXPLORATION
            }
        );
    }

    #[test]
    fn uct_prefers_unvisited_children() {
        let mut rng = CustomNumberGenerator::default();
        let score = SelectionPolicy::uct().score(&node(0, 0.0), 10, &mut rng);
        assert_eq!(score, f64::INFINITY);
    }

    #[test]
    fn uct_without_parent_visits_is_win_rate() {
        let mut rng = CustomNumberGenerator::default();
        let score = SelectionPolicy::uct().score(&node(4, 1.0), 0, &mut rng);
        assert_eq!(score, 0.25);
    }

    #[test]
    fn uct_adds_exploration_bonus() {
        let mut rng = CustomNumberGenerator::default();
        let score = SelectionPolicy::uct().score(&node(4, 3.0), 10, &mut rng);
        let expected = 0.75 + 1.41 * (10f64.ln() / 4.0).sqrt();
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn uct_does_not_consume_randomness() {
        let mut used = CustomNumberGenerator::new(9);
        let mut untouched = CustomNumberGenerator::new(9);
        SelectionPolicy::uct().score(&node(2, 1.0), 5, &mut used);
        assert_eq!(used.next_range(1000), untouched.next_range(1000));
    }

    #[test]
    fn light_ignores_statistics() {
        // arrange
        let strong = node(100, 99.0);
        let weak = node(100, 1.0);
        let mut rng = CustomNumberGenerator::new(9);
        let mut mirror = CustomNumberGenerator::new(9);

        // act
        let mut weak_preferred = 0;
        for _ in 0..100 {
            let strong_score = SelectionPolicy::Light.score(&strong, 200, &mut rng);
            let weak_score = SelectionPolicy::Light.score(&weak, 200, &mut rng);
            assert_eq!(strong_score, mirror.next_unit());
            assert_eq!(weak_score, mirror.next_unit());
            if weak_score > strong_score {
                weak_preferred += 1;
            }
        }

        // assert
        assert!(weak_preferred > 0);
        assert!(weak_preferred < 100);
    }
}
