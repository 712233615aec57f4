// src/bitboard.rs
// Bit masks and ray helpers shared by attack-table generation, move generation
// and evaluation.

use once_cell::sync::OnceCell;

pub const FILE_A: u64 = 0x0101_0101_0101_0101;
pub const FILE_B: u64 = FILE_A << 1;
pub const FILE_G: u64 = FILE_A << 6;
pub const FILE_H: u64 = FILE_A << 7;

pub const RANK_1: u64 = 0x0000_0000_0000_00FF;
pub const RANK_2: u64 = RANK_1 << 8;
pub const RANK_3: u64 = RANK_1 << 16;
pub const RANK_4: u64 = RANK_1 << 24;
pub const RANK_5: u64 = RANK_1 << 32;
pub const RANK_6: u64 = RANK_1 << 40;
pub const RANK_7: u64 = RANK_1 << 48;
pub const RANK_8: u64 = RANK_1 << 56;

/// Bit-twiddling helpers on raw `u64` bitboards.
pub trait BitboardExt {
    fn lsb(&self) -> u8;
    fn pop_lsb(&mut self) -> u8;
    fn popcount(&self) -> u32;
}

impl BitboardExt for u64 {
    #[inline(always)]
    fn lsb(&self) -> u8 {
        debug_assert_ne!(*self, 0, "lsb() called on an empty bitboard");
        self.trailing_zeros() as u8
    }

    #[inline(always)]
    fn pop_lsb(&mut self) -> u8 {
        let idx = self.lsb();
        *self &= *self - 1;
        idx
    }

    #[inline(always)]
    fn popcount(&self) -> u32 {
        self.count_ones()
    }
}

#[inline(always)]
pub fn north(bb: u64) -> u64 {
    bb << 8
}

#[inline(always)]
pub fn south(bb: u64) -> u64 {
    bb >> 8
}

#[inline(always)]
pub fn east(bb: u64) -> u64 {
    (bb & !FILE_H) << 1
}

#[inline(always)]
pub fn west(bb: u64) -> u64 {
    (bb & !FILE_A) >> 1
}

#[inline(always)]
pub fn north_east(bb: u64) -> u64 {
    (bb & !FILE_H) << 9
}

#[inline(always)]
pub fn north_west(bb: u64) -> u64 {
    (bb & !FILE_A) << 7
}

#[inline(always)]
pub fn south_east(bb: u64) -> u64 {
    (bb & !FILE_H) >> 7
}

#[inline(always)]
pub fn south_west(bb: u64) -> u64 {
    (bb & !FILE_A) >> 9
}

/// Squares strictly between `from` and `to` along a shared rank, file or
/// diagonal; 0 if the two squares are not aligned (or identical).
fn ray_between(from: u8, to: u8) -> u64 {
    let (fr, ff) = (from as i32 / 8, from as i32 % 8);
    let (tr, tf) = (to as i32 / 8, to as i32 % 8);

    let aligned = fr == tr || ff == tf || (tr - fr).abs() == (tf - ff).abs();
    if !aligned || from == to {
        return 0;
    }

    let dr = (tr - fr).signum();
    let df = (tf - ff).signum();

    let mut bb = 0u64;
    let mut r = fr + dr;
    let mut f = ff + df;
    while r != tr || f != tf {
        bb |= 1u64 << (r * 8 + f);
        r += dr;
        f += df;
    }
    bb
}

/// `squaresBetween[a][b]`: the capture-or-block mask for a check from `b`
/// against a king on `a` (and the general "ray between two squares" query
/// used by evasion generation).
pub fn squares_between(a: u8, b: u8) -> u64 {
    static TABLE: OnceCell<Box<[[u64; 64]; 64]>> = OnceCell::new();
    let table = TABLE.get_or_init(|| {
        let mut t = Box::new([[0u64; 64]; 64]);
        for i in 0..64u8 {
            for j in 0..64u8 {
                t[i as usize][j as usize] = ray_between(i, j);
            }
        }
        t
    });
    table[a as usize][b as usize]
}
