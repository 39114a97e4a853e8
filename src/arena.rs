use crate::board::{Board, GameResult, Player};
use crate::boards::connect_four::ConnectFourBoard;
use crate::error::{ArenaError, PositionError, SearchError};
use crate::mcts::monte_carlo_search;
use crate::policy::SelectionPolicy;
use crate::random::RandomGenerator;
use log::{debug, info};
use std::fmt;
use std::str::FromStr;

/// The move-selection algorithms an agent can play with.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Algorithm {
    /// Uniformly random legal move, no search.
    UniformRandom,
    /// Tree search with the light (random) selection policy.
    Pmcgs,
    /// Tree search with the confidence-bound selection policy.
    Uct,
}

impl Algorithm {
    /// The selection policy to search with, or `None` for the uniform random player.
    pub fn policy(self) -> Option<SelectionPolicy> {
        match self {
            Algorithm::UniformRandom => None,
            Algorithm::Pmcgs => Some(SelectionPolicy::Light),
            Algorithm::Uct => Some(SelectionPolicy::uct()),
        }
    }
}

impl FromStr for Algorithm {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "UR" => Ok(Algorithm::UniformRandom),
            "PMCGS" => Ok(Algorithm::Pmcgs),
            "UCT" => Ok(Algorithm::Uct),
            other => Err(PositionError::UnknownAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::UniformRandom => "UR",
            Algorithm::Pmcgs => "PMCGS",
            Algorithm::Uct => "UCT",
        };
        f.write_str(name)
    }
}

/// An algorithm together with its simulation budget.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Agent {
    pub algorithm: Algorithm,
    pub simulations: u32,
}

impl Agent {
    pub const fn new(algorithm: Algorithm, simulations: u32) -> Self {
        Self {
            algorithm,
            simulations,
        }
    }

    pub const fn uniform_random() -> Self {
        Agent::new(Algorithm::UniformRandom, 0)
    }

    pub const fn pmcgs(simulations: u32) -> Self {
        Agent::new(Algorithm::Pmcgs, simulations)
    }

    pub const fn uct(simulations: u32) -> Self {
        Agent::new(Algorithm::Uct, simulations)
    }

    /// Picks a move for the player to move on `board`.
    pub fn choose_move<B: Board, K: RandomGenerator>(
        &self,
        board: &B,
        verbose: bool,
        random: &mut K,
    ) -> Result<B::Move, ArenaError> {
        let b_move = match self.algorithm.policy() {
            None => random
                .choose(&board.get_valid_moves())
                .copied()
                .ok_or(SearchError::NoLegalMoves)?,
            Some(policy) => {
                monte_carlo_search(board, self.simulations, verbose, policy, &mut *random)?
            }
        };
        Ok(b_move)
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.algorithm {
            Algorithm::UniformRandom => write!(f, "{}", self.algorithm),
            _ => write!(f, "{}({})", self.algorithm, self.simulations),
        }
    }
}

/// Plays one game on an empty standard board, `first` moving first.
///
/// Returns the final result, or `None` if the ply limit ran out first.
pub fn play_game<K: RandomGenerator>(
    first: &Agent,
    second: &Agent,
    random: &mut K,
) -> Result<Option<GameResult>, ArenaError> {
    let mut board = ConnectFourBoard::default();
    let max_plies = board.rows() * board.columns() + 1;
    let mut plies = 0;

    while board.get_result().is_none() && plies < max_plies {
        let agent = match board.get_current_player() {
            Player::First => first,
            Player::Second => second,
        };

        let valid_moves = board.get_valid_moves();
        if valid_moves.is_empty() {
            break;
        }

        let b_move = agent.choose_move(&board, false, random)?;
        if !valid_moves.contains(&b_move) {
            return Err(ArenaError::IllegalMove {
                agent: agent.to_string(),
                column: b_move.0,
            });
        }

        board.make_move(b_move)?;
        board.switch_player();
        plies += 1;
    }

    debug!("{first} vs {second}: {:?} after {plies} plies", board.get_result());
    Ok(board.get_result())
}

/// Tally of a match, from the first agent's point of view.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub struct MatchSummary {
    pub games: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl MatchSummary {
    /// Wins plus half the draws, as a percentage of the games played.
    pub fn score_percentage(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / self.games as f64 * 100.0
    }

    fn record(&mut self, result: Option<GameResult>) {
        self.games += 1;
        match result {
            Some(GameResult::Win(Player::First)) => self.wins += 1,
            Some(GameResult::Win(Player::Second)) => self.losses += 1,
            Some(GameResult::Draw) | None => self.draws += 1,
        }
    }
}

/// Plays `games` games with `first` always moving first.
pub fn play_match<K: RandomGenerator>(
    first: &Agent,
    second: &Agent,
    games: u32,
    random: &mut K,
) -> Result<MatchSummary, ArenaError> {
    let mut summary = MatchSummary::default();
    for game in 0..games {
        if game % 10 == 0 {
            info!("{first} vs {second}: game {}/{games}", game + 1);
        }
        summary.record(play_game(first, second, random)?);
    }
    Ok(summary)
}
