use connect_four_mcts::board::Board;
use connect_four_mcts::boards::connect_four::ConnectFourBoard;
use connect_four_mcts::mcts::MonteCarloTreeSearch;
use connect_four_mcts::policy::SelectionPolicy;
use connect_four_mcts::random::StandardRandomGenerator;
use flexi_logger::Logger;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let _logger = Logger::try_with_env_or_str("info")?.start()?;

    // Create an empty Connect Four board
    let mut board = ConnectFourBoard::default();

    // Let two UCT searches play a few opening moves against each other
    for _ in 0..4 {
        let mut mcts = MonteCarloTreeSearch::builder(board.clone())
            .with_random_generator(StandardRandomGenerator::default())
            .with_policy(SelectionPolicy::uct())
            .with_verbose(true)
            .build();

        let best_move = mcts.search(2000)?;
        println!("{:?} plays column {}\n", board.get_current_player(), best_move);

        board.make_move(best_move)?;
        board.switch_player();
    }

    println!("{board}");
    Ok(())
}
