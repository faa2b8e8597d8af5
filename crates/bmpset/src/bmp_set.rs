use std::fmt;

use crate::{
    block::{self, BitTable, BlockState, COLUMN_MASK, COLUMN_SHIFT, TABLE_WORDS},
    error::InversionListError,
    inversion_list::{InversionList, CODE_POINT_LIMIT},
    span::{Span, SpanCondition},
    utf16,
};

const LATIN1_LIMIT: u32 = 0x100;
/// First code point that is not covered by `table_7ff`, also the first
/// 3-byte UTF-8 code point.
const TABLE_7FF_LIMIT: u32 = 0x800;
const BMP_LIMIT: u32 = 0x10000;
const SURROGATE_START: u32 = 0xd800;
const SURROGATE_END: u32 = 0xe000;
const MAX_CODE_POINT: u32 = CODE_POINT_LIMIT - 1;

/// Breakpoints per 4k: U+0800, U+1000..U+F000, U+10000 and the end of the list.
const LIST_4K_STARTS: usize = 18;
const SURROGATE_LEAD: usize = (SURROGATE_START >> 12) as usize;
const SUPPLEMENTARY_START: usize = 0x10;
const LIST_END: usize = 0x11;

/// Membership tables for a frozen code point set, optimized for the BMP.
///
/// - Latin-1: one `bool` per code point.
/// - U+0100..U+07FF: one bit per code point, organized vertically.
/// - U+0800..U+FFFF: two bits per 64 code point block. Either every code
///   point of the block has the same membership, or the block is mixed and
///   looked up in the inversion list.
/// - Supplementary code points: looked up in the inversion list.
///
/// Inversion list lookups are binary searches restricted to the 4k range
/// the code point is in.
#[derive(Clone)]
pub struct BmpSet<'a> {
    latin1: [bool; LATIN1_LIMIT as usize],

    /// With `lead = c >> 6` and `trail = c & 0x3f`, `c` is in the set iff
    /// bit `lead` of `table_7ff[trail]` is set. Only U+0100..U+07FF are
    /// used, Latin-1 lives in `latin1`.
    table_7ff: BitTable,

    /// With `lead = c >> 12` and `block = (c >> 6) & 0x3f`, bit `lead` of
    /// `bmp_block_bits[block]` says whether the whole block is in the set
    /// and bit `lead + 16` says it is mixed. Blocks below U+0800 are
    /// unused.
    bmp_block_bits: BitTable,

    /// `find_code_point` results for U+0800, U+1000, .., U+F000, U+10000
    /// followed by the last index of the list.
    list_4k_starts: [usize; LIST_4K_STARTS],

    list: InversionList<'a>,
}

impl<'a> BmpSet<'a> {
    /// Build the tables for an inversion list. The list is trusted: it must
    /// be strictly increasing and not go past U+10FFFF + 1. The terminating
    /// 0x110000 may be omitted.
    pub fn new(list: &'a [u32]) -> BmpSet<'a> {
        Self::from_list(InversionList::new(list))
    }

    /// Build from the first `len` entries of `list`.
    pub fn with_len(list: &'a [u32], len: usize) -> BmpSet<'a> {
        let len = len.min(list.len());
        Self::new(&list[..len])
    }

    /// Build after validating the inversion list.
    pub fn try_new(list: &'a [u32]) -> Result<BmpSet<'a>, InversionListError> {
        let list = InversionList::try_new(list)?;
        Ok(Self::from_list(list))
    }

    pub fn from_list(list: InversionList<'a>) -> BmpSet<'a> {
        let mut set = BmpSet {
            latin1: [false; LATIN1_LIMIT as usize],
            table_7ff: [0; TABLE_WORDS],
            bmp_block_bits: [0; TABLE_WORDS],
            list_4k_starts: [0; LIST_4K_STARTS],
            list,
        };

        let last = list.terminated_len() - 1;
        set.list_4k_starts[0] = list.find_code_point(TABLE_7FF_LIMIT, 0, last);
        for i in 1..=SUPPLEMENTARY_START {
            let prev = set.list_4k_starts[i - 1];
            set.list_4k_starts[i] = list.find_code_point((i as u32) << 12, prev, last);
        }
        set.list_4k_starts[LIST_END] = last;

        set.init_bits();

        log::trace!(
            "Built BMP set from {} boundaries, 4k starts {:?}",
            list.len(),
            set.list_4k_starts
        );
        set
    }

    /// The inversion list the set was built from.
    pub fn list(&self) -> InversionList<'a> {
        self.list
    }

    fn init_bits(&mut self) {
        let list = self.list;
        let mut index = 0;
        let mut next_range = || {
            let range = (list.get(index), list.get(index + 1));
            index += 2;
            range
        };

        // Latin-1
        let (mut start, mut limit) = next_range();
        while start < LATIN1_LIMIT {
            let end = limit.min(LATIN1_LIMIT) as usize;
            if let Some(flags) = self.latin1.get_mut(start as usize..end) {
                flags.fill(true);
            }

            if limit > LATIN1_LIMIT {
                start = LATIN1_LIMIT;
                break;
            }

            (start, limit) = next_range();
        }

        // U+0100..U+07FF
        while start < TABLE_7FF_LIMIT {
            let end = limit.min(TABLE_7FF_LIMIT);
            if start < end {
                block::set_32x64_bits(&mut self.table_7ff, start, end);
            }

            if limit > TABLE_7FF_LIMIT {
                start = TABLE_7FF_LIMIT;
                break;
            }

            (start, limit) = next_range();
        }

        // U+0800..U+FFFF in 64 code point blocks. Blocks partially covered
        // by a range are mixed. min_start skips the rest of a block that was
        // already marked mixed.
        let mut min_start = TABLE_7FF_LIMIT;
        while start < BMP_LIMIT {
            limit = limit.min(BMP_LIMIT);
            start = start.max(min_start);

            if start < limit {
                if start & COLUMN_MASK != 0 {
                    let block = start >> COLUMN_SHIFT;
                    block::mark_mixed(&mut self.bmp_block_bits, block);
                    start = (block + 1) << COLUMN_SHIFT;
                    min_start = start;
                }

                if start < limit {
                    if start < (limit & !COLUMN_MASK) {
                        block::set_32x64_bits(
                            &mut self.bmp_block_bits,
                            start >> COLUMN_SHIFT,
                            limit >> COLUMN_SHIFT,
                        );
                    }

                    if limit & COLUMN_MASK != 0 {
                        let block = limit >> COLUMN_SHIFT;
                        block::mark_mixed(&mut self.bmp_block_bits, block);
                        limit = (block + 1) << COLUMN_SHIFT;
                        min_start = limit;
                    }
                }
            }

            if limit == BMP_LIMIT {
                break;
            }

            (start, limit) = next_range();
        }
    }

    /// Membership in the inversion list, searching only `lo..=hi`.
    #[inline]
    fn contains_slow(&self, c: u32, lo: usize, hi: usize) -> bool {
        self.list.contains_in(c, lo, hi)
    }

    /// Membership of a U+0800..U+FFFF code point, surrogates included.
    #[inline(always)]
    fn contains_block(&self, c: u32) -> bool {
        match BlockState::of(&self.bmp_block_bits, c) {
            BlockState::AllOut => false,
            BlockState::AllIn => true,
            BlockState::Mixed => {
                let lead = (c >> 12) as usize;
                self.contains_slow(c, self.list_4k_starts[lead], self.list_4k_starts[lead + 1])
            }
        }
    }

    /// Membership of a single UTF-16 code unit, an unpaired surrogate is
    /// treated as a surrogate code point.
    #[inline(always)]
    fn contains_unit(&self, unit: u16) -> bool {
        let c = unit as u32;
        if c < LATIN1_LIMIT {
            self.latin1[c as usize]
        } else if c < TABLE_7FF_LIMIT {
            block::test_bit(&self.table_7ff, c)
        } else {
            self.contains_block(c)
        }
    }

    #[inline(always)]
    fn contains_supplementary(&self, c: u32) -> bool {
        self.contains_slow(
            c,
            self.list_4k_starts[SUPPLEMENTARY_START],
            self.list_4k_starts[LIST_END],
        )
    }

    pub fn contains(&self, c: u32) -> bool {
        if c < LATIN1_LIMIT {
            self.latin1[c as usize]
        } else if c < TABLE_7FF_LIMIT {
            block::test_bit(&self.table_7ff, c)
        } else if c < SURROGATE_START || (SURROGATE_END..BMP_LIMIT).contains(&c) {
            self.contains_block(c)
        } else if c <= MAX_CODE_POINT {
            self.contains_slow(
                c,
                self.list_4k_starts[SURROGATE_LEAD],
                self.list_4k_starts[LIST_END],
            )
        } else {
            false
        }
    }

    pub fn contains_char(&self, ch: char) -> bool {
        self.contains(ch as u32)
    }

    /// Span forward from `start` over code points whose membership matches
    /// `cond`. Returns the exclusive end of the span.
    pub fn span(&self, s: &[u16], start: usize, cond: SpanCondition) -> usize {
        self.span_counted(s, start, cond).end
    }

    /// Like `span` but also counts the code points spanned.
    pub fn span_counted(&self, s: &[u16], start: usize, cond: SpanCondition) -> Span {
        let want = cond.wants();
        let limit = s.len();
        let mut i = start;
        let mut supplementary = 0;

        while i < limit {
            let unit = s[i];
            if utf16::is_lead(unit) && i + 1 < limit && utf16::is_trail(s[i + 1]) {
                let c = utf16::combine(unit, s[i + 1]);
                if self.contains_supplementary(c) != want {
                    break;
                }
                supplementary += 1;
                i += 2;
            } else {
                if self.contains_unit(unit) != want {
                    break;
                }
                i += 1;
            }
        }

        Span {
            end: i,
            code_points: i - start - supplementary,
        }
    }

    /// Span backward from `limit` over code points whose membership matches
    /// `cond`. Returns the inclusive start of the span.
    pub fn span_back(&self, s: &[u16], limit: usize, cond: SpanCondition) -> usize {
        let want = cond.wants();
        let mut i = limit.min(s.len());

        while i > 0 {
            let unit = s[i - 1];
            if utf16::is_trail(unit) && i >= 2 && utf16::is_lead(s[i - 2]) {
                let c = utf16::combine(s[i - 2], unit);
                if self.contains_supplementary(c) != want {
                    break;
                }
                i -= 2;
            } else {
                if self.contains_unit(unit) != want {
                    break;
                }
                i -= 1;
            }
        }

        i
    }

    /// Span forward over UTF-8 text from byte offset `start`. Returns the
    /// exclusive end of the span as a byte offset.
    pub fn span_str(&self, s: &str, start: usize, cond: SpanCondition) -> usize {
        self.span_str_counted(s, start, cond).end
    }

    pub fn span_str_counted(&self, s: &str, start: usize, cond: SpanCondition) -> Span {
        let want = cond.wants();
        let rest = match s.get(start..) {
            Some(rest) => rest,
            None => {
                return Span {
                    end: start,
                    code_points: 0,
                }
            }
        };

        let mut span = Span {
            end: start,
            code_points: 0,
        };
        for ch in rest.chars() {
            if self.contains_char(ch) != want {
                break;
            }
            span.end += ch.len_utf8();
            span.code_points += 1;
        }

        span
    }

    /// Span backward over UTF-8 text from byte offset `limit`. Returns the
    /// inclusive start of the span as a byte offset.
    pub fn span_back_str(&self, s: &str, limit: usize, cond: SpanCondition) -> usize {
        let want = cond.wants();
        let head = match s.get(..limit) {
            Some(head) => head,
            None => return limit,
        };

        let mut start = head.len();
        for ch in head.chars().rev() {
            if self.contains_char(ch) != want {
                break;
            }
            start -= ch.len_utf8();
        }

        start
    }

    fn mixed_blocks(&self) -> u32 {
        self.bmp_block_bits
            .iter()
            .map(|word| (word >> block::MIXED_SHIFT).count_ones())
            .sum()
    }
}

impl<'a> fmt::Debug for BmpSet<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BmpSet")
            .field("boundaries", &self.list.len())
            .field("ranges", &self.list.ranges().count())
            .field("mixed_blocks", &self.mixed_blocks())
            .field("list_4k_starts", &self.list_4k_starts)
            .finish()
    }
}
