//! Monte Carlo tree search move recommendation for Connect Four.
//!
//! Each call builds one search tree from scratch, runs a fixed budget of simulations
//! (selection, expansion of at most one node, uniformly random rollout, backpropagation)
//! and returns the most visited root move. Two selection policies are available: the light
//! policy (PMCGS), which walks explored children uniformly at random, and UCT.
//!
//! # Example
//!
//! ```rust
//! use connect_four_mcts::boards::connect_four::ConnectFourBoard;
//! use connect_four_mcts::mcts::MonteCarloTreeSearch;
//! use connect_four_mcts::policy::SelectionPolicy;
//! use connect_four_mcts::random::CustomNumberGenerator;
//!
//! // Create an empty 6x7 board, first player to move
//! let board = ConnectFourBoard::default();
//!
//! // Create and configure a new search using the builder
//! let mut mcts = MonteCarloTreeSearch::builder(board)
//!     .with_random_generator(CustomNumberGenerator::default())
//!     .with_policy(SelectionPolicy::uct())
//!     .with_verbose(false)
//!     .build();
//!
//! // Run 1000 simulations and take the most visited column
//! let best_move = mcts.search(1000).unwrap();
//!
//! println!("The best move is: {}", best_move);
//! ```

/// Agents, single games and matches between algorithms.
pub mod arena;
/// Contains the `Board` trait and the player/result types that define the interface for a game.
pub mod board;
/// Contains implementations of the `Board` trait.
pub mod boards;
/// Error types.
pub mod error;
/// The core module of the library, containing the `MonteCarloTreeSearch` implementation.
pub mod mcts;
/// Contains the `MctsNode` struct, which represents a node in the search tree.
pub mod mcts_node;
/// The light and confidence-bound selection policies.
pub mod policy;
/// Reads text positions: algorithm, player to move and grid.
pub mod position;
/// Contains traits and implementations for random number generation.
pub mod random;
