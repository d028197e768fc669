//! `marubatsu_core::ai::random` の性能計測（1手選択）。

use core::hint::black_box;
use criterion::BatchSize;
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
fn position_samples() -> [engine::Position; 3] {
    let p0 = engine::Position::empty();
    let p1 = position_after_plies(3);
    let p2 = position_after_plies(6);
    [p0, p1, p2]
}

/// `random::Agent::select_move` を計測する。
fn bench_select_move(criterion: &mut Criterion) {
    let samples = position_samples();
    let mut group = criterion.benchmark_group("ai/random/select_move");

    for (index, position) in samples.iter().enumerate() {
        let bench_id = BenchmarkId::new("pos", index);
        group.bench_with_input(bench_id, position, |bench, input| {
            bench.iter_batched(
                || ai::random::Agent::new(u64::MIN),
                |mut agent| black_box(agent.select_move(*input, engine::Mark::Cross)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_select_move(&mut criterion);
    criterion.final_summary();
}
