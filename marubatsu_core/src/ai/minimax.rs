use crate::ai::types::Ai;
use crate::engine::position::Position;
use crate::engine::types::{Mark, Square};

/// 自分側が勝つ局面のスコア。
const SCORE_WIN: i32 = 1;

/// 相手側が勝つ局面のスコア。
const SCORE_LOSS: i32 = -1;

/// 引き分け局面のスコア。
const SCORE_DRAW: i32 = 0;

/// 全展開ミニマックス探索を行うAI。
///
/// 盤面が3×3と小さいため、枝刈り・深さ制限・置換表は使わず常に終局まで
/// 読み切る。走査順に依存する手選択を保つため、この探索は改良しないこと。
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct Agent;

impl Agent {
    /// 初期化する。
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Ai for Agent {
    #[inline]
    fn select_move(&mut self, position: Position, mark: Mark) -> Option<Square> {
        best_move(position, mark)
    }
}

/// 現局面から `mark` 側の最善手を探索して返す。
///
/// 空きマスが無い場合は `None` を返す。同点の手が複数ある場合は行優先順で
/// 最初に見つかった手を選ぶ（決定的）。
#[inline]
#[must_use]
pub fn best_move(position: Position, mark: Mark) -> Option<Square> {
    search_root(position, mark).map(|(square, _score)| square)
}

/// ルート探索。最善手とその評価値を返す。
fn search_root(position: Position, mark: Mark) -> Option<(Square, i32)> {
    let mut board = position;
    let mut best: Option<(Square, i32)> = None;
    let mut bb = board.empties();

    while bb != u16::MIN {
        let choice = bb & bb.wrapping_neg();
        bb &= bb.wrapping_sub(1);

        let square = match square_from_bit(choice) {
            Some(value) => value,
            None => continue,
        };

        board.place(square, mark);
        let score = minimax(&mut board, mark, false);
        board.clear(square);

        let improved = match best {
            Some((_best_square, best_score)) => score > best_score,
            None => true,
        };
        if improved {
            best = Some((square, score));
        }
    }

    if let Some((square, score)) = best {
        tracing::debug!(?square, score, "minimax root selected");
    }

    best
}

/// 1ビットのビットボードから `Square` を生成する。
fn square_from_bit(bit: u16) -> Option<Square> {
    if bit == u16::MIN {
        return None;
    }

    let index = match u8::try_from(bit.trailing_zeros()) {
        Ok(value) => value,
        Err(_conversion_error) => return None,
    };

    Some(Square::from_index_unchecked(index))
}

/// ミニマックス本体。
///
/// `is_maximizing` が真のとき `mark` 側が指す層（最大化）、偽のとき相手側が
/// 指す層（最小化）。仮着手は次の手を試す前に必ず `clear` で取り消す。
/// 再帰は空きマス数で抑えられるため深さは最大9。
fn minimax(board: &mut Position, mark: Mark, is_maximizing: bool) -> i32 {
    if board.has_won(mark) {
        return SCORE_WIN;
    }

    if board.has_won(mark.opponent()) {
        return SCORE_LOSS;
    }

    if board.is_full() {
        return SCORE_DRAW;
    }

    let side = if is_maximizing {
        mark
    } else {
        mark.opponent()
    };
    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };
    let mut bb = board.empties();

    while bb != u16::MIN {
        let choice = bb & bb.wrapping_neg();
        bb &= bb.wrapping_sub(1);

        let square = match square_from_bit(choice) {
            Some(value) => value,
            None => continue,
        };

        board.place(square, side);
        let score = minimax(board, mark, !is_maximizing);
        board.clear(square);

        if is_maximizing {
            best = best.max(score);
        } else {
            best = best.min(score);
        }
    }

    best
}
