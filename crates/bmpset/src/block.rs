//! Bit tables with a "vertical" layout.
//!
//! A table is 64 words. Value `v` is stored as bit `v >> 6` of word
//! `v & 0x3f`, so consecutive values land on the same bit position in
//! consecutive words. Words are `u32`, which limits values to `0..0x800`.

/// Number of words in a table, also the number of values per bit column.
pub(crate) const TABLE_WORDS: usize = 64;

/// Values per bit column, as a shift.
pub(crate) const COLUMN_SHIFT: u32 = 6;
pub(crate) const COLUMN_MASK: u32 = (1 << COLUMN_SHIFT) - 1;

/// Bit columns per word.
const COLUMNS: u32 = u32::BITS;

/// Offset of the mixed flag from the membership flag in the block summary.
/// Block summary columns are `c >> 12`, so only 16 columns are used and the
/// upper half of each word holds the mixed flags.
pub(crate) const MIXED_SHIFT: u32 = 16;

/// Membership flag together with its mixed flag.
pub(crate) const MIXED_PAIR: u32 = (1 << MIXED_SHIFT) | 1;

pub(crate) type BitTable = [u32; TABLE_WORDS];

/// Set the bits for all values in `start..limit`, `start < limit <= 0x800`.
///
/// The range covers a partial column at each end and any number of full
/// columns between them.
pub(crate) fn set_32x64_bits(table: &mut BitTable, start: u32, limit: u32) {
    debug_assert!(start < limit && limit <= COLUMNS << COLUMN_SHIFT);

    let mut lead = start >> COLUMN_SHIFT;
    let mut trail = (start & COLUMN_MASK) as usize;
    let bits = 1u32 << lead;

    if start + 1 == limit {
        table[trail] |= bits;
        return;
    }

    let limit_lead = limit >> COLUMN_SHIFT;
    let limit_trail = (limit & COLUMN_MASK) as usize;

    if lead == limit_lead {
        for word in &mut table[trail..limit_trail] {
            *word |= bits;
        }
        return;
    }

    if trail > 0 {
        for word in &mut table[trail..] {
            *word |= bits;
        }
        lead += 1;
        trail = 0;
    }

    if lead < limit_lead {
        // Columns lead..limit_lead are full
        let mut bits = !((1u32 << lead) - 1);
        if limit_lead < COLUMNS {
            bits &= (1u32 << limit_lead) - 1;
        }
        for word in table.iter_mut() {
            *word |= bits;
        }
    }

    // limit_lead can be COLUMNS only when limit_trail is 0
    if limit_trail > 0 {
        let bits = 1u32 << limit_lead;
        for word in &mut table[trail..limit_trail] {
            *word |= bits;
        }
    }
}

/// Test a single value in a vertical table.
#[inline(always)]
pub(crate) fn test_bit(table: &BitTable, v: u32) -> bool {
    table[(v & COLUMN_MASK) as usize] & (1 << (v >> COLUMN_SHIFT)) != 0
}

/// Summary of one 64 code point block of the BMP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockState {
    AllOut,
    AllIn,
    Mixed,
}

impl BlockState {
    /// Decode the summary of the block containing `c`, `0x800 <= c <= 0xffff`.
    #[inline(always)]
    pub(crate) fn of(table: &BitTable, c: u32) -> BlockState {
        let lead = c >> 12;
        let two_bits = (table[((c >> COLUMN_SHIFT) & COLUMN_MASK) as usize] >> lead) & MIXED_PAIR;
        match two_bits {
            0 => BlockState::AllOut,
            1 => BlockState::AllIn,
            _ => BlockState::Mixed,
        }
    }
}

/// Mark the block with index `block` (`c >> 6`) as mixed.
#[inline]
pub(crate) fn mark_mixed(table: &mut BitTable, block: u32) {
    table[(block & COLUMN_MASK) as usize] |= MIXED_PAIR << (block >> COLUMN_SHIFT);
}
