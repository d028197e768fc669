use crate::engine::types::{Mark, Square};

/// 盤面の全マス（9ビット）を表すマスク。
const FULL_MASK: u16 = 0x01FF;

/// 勝利ラインの本数（横3・縦3・斜め2）。
const LINE_COUNT: usize = 8;

/// 勝利ラインのマスク。ビットは `y * 3 + x` の行優先順。
const LINES: [u16; LINE_COUNT] = [
    0b0_0000_0111, // 横（y = 0）
    0b0_0011_1000, // 横（y = 1）
    0b1_1100_0000, // 横（y = 2）
    0b0_0100_1001, // 縦（x = 0）
    0b0_1001_0010, // 縦（x = 1）
    0b1_0010_0100, // 縦（x = 2）
    0b1_0001_0001, // 斜め（左上から右下）
    0b0_0101_0100, // 斜め（右上から左下）
];

/// 盤面（ビットボード2枚）。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Position {
    /// ×（後手）のビットボード。
    crosses: u16,
    /// ○（先手）のビットボード。
    noughts: u16,
}

impl Position {
    /// 指定記号のビットボードを返す。
    #[inline]
    #[must_use]
    pub const fn bitboard(self, mark: Mark) -> u16 {
        match mark {
            Mark::Nought => self.noughts,
            Mark::Cross => self.crosses,
        }
    }

    /// 指定マスを空に戻す。
    ///
    /// 探索中の仮着手を取り消すための操作で、確定した手を取り消す用途には使わない。
    #[inline]
    pub fn clear(&mut self, square: Square) {
        let mask = !square.bit();
        self.crosses &= mask;
        self.noughts &= mask;
    }

    /// 空きマスのビットボードを返す。
    ///
    /// 下位ビットから走査すると行優先順（左上から右下）になる。
    #[inline]
    #[must_use]
    pub const fn empties(self) -> u16 {
        !self.occupied() & FULL_MASK
    }

    /// 空の盤面を返す。
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            crosses: u16::MIN,
            noughts: u16::MIN,
        }
    }

    /// 盤面を生のビットボードから生成する（テスト向け）。
    ///
    /// - `noughts` と `crosses` は重複しないこと（`noughts & crosses == 0`）
    /// - 盤面の妥当性（手数の釣り合い等）は呼び出し側が保証する
    #[cfg(test)]
    #[inline]
    #[must_use]
    pub(crate) const fn from_raw(noughts: u16, crosses: u16) -> Self {
        Self { crosses, noughts }
    }

    /// 指定記号が勝利ラインを完成させているかを返す。
    #[inline]
    #[must_use]
    pub fn has_won(self, mark: Mark) -> bool {
        let bb = self.bitboard(mark);
        LINES.into_iter().any(|line| bb & line == line)
    }

    /// 指定マスが空いているかを返す。
    #[inline]
    #[must_use]
    pub fn is_available(self, square: Square) -> bool {
        self.occupied() & square.bit() == u16::MIN
    }

    /// 全マスが占有されているかを返す。
    #[inline]
    #[must_use]
    pub const fn is_full(self) -> bool {
        self.occupied() == FULL_MASK
    }

    /// 指定マスの記号を返す。
    #[inline]
    #[must_use]
    pub fn mark_at(self, square: Square) -> Option<Mark> {
        let mask = square.bit();
        if self.noughts & mask != u16::MIN {
            Some(Mark::Nought)
        } else if self.crosses & mask != u16::MIN {
            Some(Mark::Cross)
        } else {
            None
        }
    }

    /// 盤面の占有ビットボードを返す。
    #[inline]
    #[must_use]
    pub const fn occupied(self) -> u16 {
        self.crosses | self.noughts
    }

    /// 指定マスへ記号を置く。
    ///
    /// 空きマスであることは呼び出し側が `is_available` で確認すること。
    /// 占有済みマスへの着手はデバッグビルドで検出される。
    #[inline]
    pub fn place(&mut self, square: Square, mark: Mark) {
        debug_assert!(
            self.is_available(square),
            "square must be empty, got={square:?}"
        );

        let bit = square.bit();
        match mark {
            Mark::Nought => self.noughts |= bit,
            Mark::Cross => self.crosses |= bit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FULL_MASK, Position};
    use crate::engine::types::{Mark, Square};

    /// 座標でビットボードの占有を調べる。
    fn occupied_at(bb: u16, x: u8, y: u8) -> bool {
        match Square::from_xy(x, y) {
            Some(square) => bb & square.bit() != u16::MIN,
            None => false,
        }
    }

    /// 8本の勝利ラインを座標ベースで素朴に判定する。
    fn naive_won(bb: u16) -> bool {
        for y in 0..Square::BOARD_LEN {
            if (0..Square::BOARD_LEN).all(|x| occupied_at(bb, x, y)) {
                return true;
            }
        }
        for x in 0..Square::BOARD_LEN {
            if (0..Square::BOARD_LEN).all(|y| occupied_at(bb, x, y)) {
                return true;
            }
        }
        if (0..Square::BOARD_LEN).all(|i| occupied_at(bb, i, i)) {
            return true;
        }
        (0..Square::BOARD_LEN).all(|i| occupied_at(bb, 2_u8.wrapping_sub(i), i))
    }

    /// 2^9 通りの占有パターン全てで `has_won` が素朴判定と一致する。
    #[test]
    fn has_won_matches_naive_for_all_occupancies() {
        for bb in u16::MIN..=FULL_MASK {
            let as_noughts = Position::from_raw(bb, u16::MIN);
            let as_crosses = Position::from_raw(u16::MIN, bb);

            assert_eq!(
                as_noughts.has_won(Mark::Nought),
                naive_won(bb),
                "nought bb={bb:#011b}"
            );
            assert_eq!(
                as_crosses.has_won(Mark::Cross),
                naive_won(bb),
                "cross bb={bb:#011b}"
            );

            // 自分のラインが相手の勝ちと判定されないこと。
            assert!(!as_noughts.has_won(Mark::Cross), "bb={bb:#011b}");
            assert!(!as_crosses.has_won(Mark::Nought), "bb={bb:#011b}");
        }
    }

    /// `is_full` は9マス全占有のときに限り真になる。
    #[test]
    fn is_full_iff_all_cells_occupied() {
        for bb in u16::MIN..=FULL_MASK {
            let split = Position::from_raw(bb, FULL_MASK & !bb);
            assert!(split.is_full(), "bb={bb:#011b}");

            let partial = Position::from_raw(bb, u16::MIN);
            assert_eq!(partial.is_full(), bb == FULL_MASK, "bb={bb:#011b}");
        }
    }

    /// `place` と `clear` が対になっている。
    #[test]
    fn place_then_clear_restores_empty_board() {
        let empty = Position::empty();

        for index in u8::MIN..9 {
            let square = Square::from_index_unchecked(index);
            let mut position = empty;

            assert!(position.is_available(square));
            position.place(square, Mark::Cross);
            assert!(!position.is_available(square));
            assert_eq!(position.mark_at(square), Some(Mark::Cross));

            position.clear(square);
            assert_eq!(position, empty, "index={index}");
        }
    }

    /// `mark_at` が置いた記号を区別して返す。
    #[test]
    fn mark_at_distinguishes_marks() {
        let mut position = Position::empty();
        let nought_square_opt = Square::from_xy(0, 0);
        let cross_square_opt = Square::from_xy(2, 2);
        assert!(nought_square_opt.is_some() && cross_square_opt.is_some());

        let (Some(nought_square), Some(cross_square)) = (nought_square_opt, cross_square_opt)
        else {
            return;
        };

        position.place(nought_square, Mark::Nought);
        position.place(cross_square, Mark::Cross);

        assert_eq!(position.mark_at(nought_square), Some(Mark::Nought));
        assert_eq!(position.mark_at(cross_square), Some(Mark::Cross));

        let center_opt = Square::from_xy(1, 1);
        let Some(center) = center_opt else { return };
        assert_eq!(position.mark_at(center), None);
    }
}
