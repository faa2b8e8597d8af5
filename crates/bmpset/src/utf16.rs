//! UTF-16 surrogate helpers.

const LEAD_START: u16 = 0xd800;
const TRAIL_START: u16 = 0xdc00;
const SURROGATE_END: u16 = 0xe000;
const SUPPLEMENTARY_START: u32 = 0x10000;

/// High (leading) surrogate.
#[inline(always)]
pub fn is_lead(unit: u16) -> bool {
    (LEAD_START..TRAIL_START).contains(&unit)
}

/// Low (trailing) surrogate.
#[inline(always)]
pub fn is_trail(unit: u16) -> bool {
    (TRAIL_START..SURROGATE_END).contains(&unit)
}

/// Combine a surrogate pair into a supplementary code point. The units are
/// not checked.
#[inline(always)]
pub fn combine(lead: u16, trail: u16) -> u32 {
    (((lead as u32) - LEAD_START as u32) << 10)
        + ((trail as u32) - TRAIL_START as u32)
        + SUPPLEMENTARY_START
}
