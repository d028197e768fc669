use crate::engine::position::Position;
use crate::engine::types::{Mark, Square};

/// ゲームの状態。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Status {
    /// 引き分け（全マス占有で勝者なし）。
    Draw,
    /// 進行中。
    InProgress,
    /// 勝敗確定。
    Won {
        /// 勝利ラインを完成させた記号。
        winner: Mark,
    },
}

/// 手の適用に失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum PlayError {
    /// すでに終局している。
    GameOver,
    /// 指定マスが占有済み。
    IllegalMove,
}

/// 1ゲームの進行を管理する構造体。
///
/// 手番は○→×→○→…と厳密に交互で、終局後は一切の着手を受け付けない。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Game {
    /// 現在の盤面。
    position: Position,
    /// 現手番。
    turn: Mark,
}

impl Game {
    /// 空の盤面からゲームを開始する（先手は○）。
    #[inline]
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            position: Position::empty(),
            turn: Mark::Nought,
        }
    }

    /// 終局しているかどうかを返す。
    #[inline]
    #[must_use]
    pub fn is_game_over(self) -> bool {
        !matches!(self.status(), Status::InProgress)
    }

    /// 1手を適用する。
    ///
    /// # Errors
    ///
    /// 次の場合にエラーを返す：
    /// - `PlayError::GameOver`: すでにゲームが終局している場合
    /// - `PlayError::IllegalMove`: 指定されたマスが占有済みの場合
    ///
    #[inline]
    pub fn play(&mut self, square: Square) -> Result<Status, PlayError> {
        if self.is_game_over() {
            return Err(PlayError::GameOver);
        }

        if !self.position.is_available(square) {
            return Err(PlayError::IllegalMove);
        }

        self.position.place(square, self.turn);
        self.turn = self.turn.opponent();

        let status = self.status();
        if !matches!(status, Status::InProgress) {
            tracing::info!(?status, "game over");
        }

        Ok(status)
    }

    /// 現在の盤面を返す。
    #[inline]
    #[must_use]
    pub const fn position(self) -> Position {
        self.position
    }

    /// 現手番を返す。
    #[inline]
    #[must_use]
    pub const fn side_to_move(self) -> Mark {
        self.turn
    }

    /// 現在のゲーム状態を返す。
    ///
    /// 状態は盤面から毎回導出され、保持はしない。
    #[inline]
    #[must_use]
    pub fn status(self) -> Status {
        if self.position.has_won(Mark::Nought) {
            return Status::Won {
                winner: Mark::Nought,
            };
        }

        if self.position.has_won(Mark::Cross) {
            return Status::Won {
                winner: Mark::Cross,
            };
        }

        if self.position.is_full() {
            return Status::Draw;
        }

        Status::InProgress
    }
}
