/// ゲーム進行（手番、終局判定など）の実装。
pub mod game;
/// 盤面（ビットボード）と着手・勝敗判定の実装。
pub mod position;
pub mod types;

pub type Position = position::Position;
pub type Game = game::Game;
pub type Mark = types::Mark;
pub type Square = types::Square;
pub type GameStatus = game::Status;
pub type PlayError = game::PlayError;
