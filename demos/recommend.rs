use clap::{Parser, ValueEnum};
use connect_four_mcts::arena::Agent;
use connect_four_mcts::position::Position;
use connect_four_mcts::random::StandardRandomGenerator;
use flexi_logger::Logger;
use std::error::Error;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputMode {
    /// Per-column win rates followed by the selected move
    #[value(name = "Verbose")]
    Verbose,
    /// Only the selected move
    #[value(name = "Brief")]
    Brief,
    /// Nothing
    #[value(name = "None")]
    Silent,
}

/// Recommends a Connect Four move for the position stored in a file.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Position file: algorithm (UR, PMCGS, UCT), player to move (Y, R), then the grid rows
    input_file: PathBuf,
    #[arg(value_enum)]
    output_mode: OutputMode,
    /// Simulations per search
    simulations: u32,
}

fn main() -> Result<(), Box<dyn Error>> {
    let _logger = Logger::try_with_env_or_str("warn")?.start()?;
    let args = Args::parse();

    let position = Position::read(&args.input_file)?;
    let agent = Agent::new(position.algorithm, args.simulations);
    let verbose = args.output_mode == OutputMode::Verbose;

    let mut rng = StandardRandomGenerator::default();
    let best_move = agent.choose_move(&position.board, verbose, &mut rng)?;

    // the verbose search report already ends with the selected move
    let searched = position.algorithm.policy().is_some();
    if args.output_mode == OutputMode::Brief || (verbose && !searched) {
        println!("FINAL Move selected: {best_move}");
    }
    Ok(())
}
