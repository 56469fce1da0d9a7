//! AI 自对弈演示
//!
//! 运行方式:
//! ```bash
//! cargo run -p chess-ai --example selfplay
//! ```

use chess_ai::{AiConfig, AiEngine, Difficulty};
use chess_core::{Color, GameState, Notation};

fn main() {
    // 初始化日志，RUST_LOG=debug 可以看到每步的搜索统计
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut white = AiEngine::new(AiConfig::with_side(Difficulty::Medium, Color::White));
    let mut black = AiEngine::new(AiConfig::with_side(Difficulty::Hard, Color::Black));

    let mut state = GameState::initial();

    for ply in 1.. {
        let engine = match state.current_player {
            Color::White => &mut white,
            Color::Black => &mut black,
        };

        let mv = match engine.choose_move(&state) {
            Some(mv) => mv,
            None => {
                println!("{:?} 无子可动，终止", state.current_player);
                break;
            }
        };

        let notation = Notation::format_move(&state.board, &mv).unwrap_or_default();
        let record = state.apply_move(mv.from, mv.to).expect("AI move should be legal");
        println!("{:3}. {:?} {}", ply, record.player, notation);

        if let Some(result) = state.result {
            println!("对局结束: {:?}", result);
            break;
        }

        // 防止两个 AI 无限兜圈子
        if ply >= 120 {
            println!("达到步数上限，终止");
            break;
        }
    }

    println!("{}", state.board);
    println!(
        "比分  白 {} : {} 黑",
        state.scores.of(Color::White),
        state.scores.of(Color::Black)
    );
}
