use crate::engine::position::Position;
use crate::engine::types::{Mark, Square};

/// 手を選択するAI。
pub trait Ai {
    /// 現在局面から `mark` 側の次の手を選択する。
    ///
    /// 空きマスが無い場合は `None` を返す。
    fn select_move(&mut self, position: Position, mark: Mark) -> Option<Square>;
}
