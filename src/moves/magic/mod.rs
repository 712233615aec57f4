pub mod attacks;
pub mod loader;
pub mod structs;

pub use loader::load_magic_tables;
pub use structs::{BishopMagicTables, MagicTables, PextEntry, RookMagicTables};

use crate::moves::king::KING_ATTACKS;
use crate::moves::knight::KNIGHT_ATTACKS;

#[inline(always)]
pub fn get_knight_attacks(square: usize) -> u64 {
    KNIGHT_ATTACKS[square]
}

#[inline(always)]
pub fn get_king_attacks(square: usize) -> u64 {
    KING_ATTACKS[square]
}
