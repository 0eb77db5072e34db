use blocky::{create_agents, generate_board, Agent};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

const SEED: u64 = 148;
const DEPTH_LIMIT: u8 = 4;
const BOARD_SIZE: u32 = 750;
const RANDOM_AGENTS: usize = 1;
const SMART_DIFFICULTIES: [usize; 2] = [3, 30];
const TURNS: usize = 12;

/// a few rounds of computer self-play, for watching the library work under `RUST_LOG=debug`
fn main() {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_env_filter(EnvFilter::from_default_env())
        .with_span_events(FmtSpan::CLOSE)
        .init();

    let mut rng = StdRng::seed_from_u64(SEED);
    let mut board = generate_board(DEPTH_LIMIT, BOARD_SIZE, &mut rng);
    let mut agents = create_agents(RANDOM_AGENTS, &SMART_DIFFICULTIES, &mut rng);
    for agent in &agents {
        info!(goal = %agent.goal(), "player");
    }

    for turn in 0..TURNS {
        let count = agents.len();
        let agent: &mut dyn Agent = agents[turn % count].as_mut();
        let Some(m) = agent.generate_move(&board) else {
            info!(turn, "no move");
            continue;
        };
        let colour = agent.goal().colour;
        let applied = m.apply(&mut board, colour, &mut rng);
        info!(turn, %m, applied, score = agent.goal().score(&board), "turn");
    }

    for agent in &agents {
        println!("{}: {}", agent.goal(), agent.goal().score(&board));
    }
}
