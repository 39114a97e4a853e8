use clap::Parser;
use connect_four_mcts::arena::{Agent, play_match};
use connect_four_mcts::random::StandardRandomGenerator;
use flexi_logger::Logger;
use std::error::Error;

/// Round robin between the uniform random player and both tree searches.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Games per pairing
    #[arg(short, long, default_value_t = 100)]
    games: u32,
    /// Seed for a reproducible tournament
    #[arg(short, long)]
    seed: Option<u64>,
}

const AGENT_COUNT: usize = 5;

const AGENTS: [Agent; AGENT_COUNT] = [
    Agent::uniform_random(),
    Agent::pmcgs(500),
    Agent::pmcgs(1000),
    Agent::uct(500),
    Agent::uct(1000),
];

fn main() -> Result<(), Box<dyn Error>> {
    let _logger = Logger::try_with_env_or_str("info")?.start()?;
    let args = Args::parse();
    let mut rng = match args.seed {
        Some(seed) => StandardRandomGenerator::seeded(seed),
        None => StandardRandomGenerator::default(),
    };

    println!("\nStarting tournament - {} games per match", args.games);
    println!("{}", "=".repeat(50));

    let mut table = [[0.0; AGENT_COUNT]; AGENT_COUNT];
    for (i, first) in AGENTS.iter().enumerate() {
        for (j, second) in AGENTS.iter().enumerate() {
            println!("\nPlaying: {first} vs {second}");
            let summary = play_match(first, second, args.games, &mut rng)?;
            table[i][j] = summary.score_percentage();
            println!(
                "Win percentage: {:.1}% ({}W {}D {}L)",
                table[i][j], summary.wins, summary.draws, summary.losses
            );
        }
    }

    println!("\nTournament Results (Win percentages)");
    println!("{}", "-".repeat(90));
    println!("{}", header_line(&AGENTS));
    for (agent, row) in AGENTS.iter().zip(&table) {
        println!("{}", score_line(agent, row));
    }
    Ok(())
}

/// Column headers, left-aligned in 15-wide cells after an empty label cell.
fn header_line(agents: &[Agent]) -> String {
    let mut line = format!("{:15}", "");
    for agent in agents {
        line.push_str(&format!("{:15}", agent.to_string()));
    }
    line
}

fn score_line(agent: &Agent, scores: &[f64]) -> String {
    let mut line = format!("{:15}", agent.to_string());
    for score in scores {
        line.push_str(&format!("{score:14.1}%"));
    }
    line
}
