//! `marubatsu_core::ai::minimax` の性能計測（最善手探索）。

use core::hint::black_box;
use criterion::BenchmarkId;
use criterion::Criterion;
use marubatsu_core::ai::types::Ai;
use marubatsu_core::{ai, engine};

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 指定手数だけランダムに進めた局面を返す（途中で終局した場合はその時点で止める）。
fn position_after_plies(plies: u16) -> engine::Position {
    let mut cross_agent = ai::random::Agent::new(u64::MIN.wrapping_add(1));
    let mut game = engine::Game::initial();
    let mut nought_agent = ai::random::Agent::new(u64::MIN);

    for _turn in u16::MIN..plies {
        if game.is_game_over() {
            break;
        }

        let position = game.position();
        let side = game.side_to_move();

        let square_opt = match side {
            engine::Mark::Nought => nought_agent.select_move(position, side),
            engine::Mark::Cross => cross_agent.select_move(position, side),
            _ => None,
        };

        let square = match square_opt {
            Some(value) => value,
            None => break,
        };

        let play_result = game.play(square);
        if play_result.is_err() {
            break;
        }
    }

    game.position()
}

/// ベンチ用に代表局面をいくつか用意する。
///
/// 4手までは勝敗がつかないため、どの局面も非終局。
fn position_samples() -> [engine::Position; 3] {
    let p0 = engine::Position::empty();
    let p1 = position_after_plies(2);
    let p2 = position_after_plies(4);
    [p0, p1, p2]
}

/// `minimax::best_move` を計測する。
fn bench_best_move(criterion: &mut Criterion) {
    let samples = position_samples();
    let mut group = criterion.benchmark_group("ai/minimax/best_move");

    for (index, position) in samples.iter().enumerate() {
        let bench_id = BenchmarkId::new("pos", index);
        group.bench_with_input(bench_id, position, |bench, input| {
            bench.iter(|| black_box(ai::minimax::best_move(*input, engine::Mark::Cross)));
        });
    }

    group.finish();
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_best_move(&mut criterion);
    criterion.final_summary();
}
