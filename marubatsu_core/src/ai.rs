/// 全展開ミニマックス探索AI。
pub mod minimax;
/// 空きマスからランダムに1手選ぶAI。
pub mod random;
pub mod types;
