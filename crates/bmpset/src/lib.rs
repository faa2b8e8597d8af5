//! Fast membership and span queries for frozen code point sets.
//!
//! A [`BmpSet`] is built once from an inversion list and answers
//! `contains` with table lookups for most BMP code points. Code points in
//! blocks that are only partially in the set, and supplementary code
//! points, fall back to a binary search restricted to the 4k range they
//! are in.
//!
//! ```
//! use uset_bmpset::{BmpSet, SpanCondition};
//!
//! let list = [0x41, 0x5b, 0x110000];
//! let set = BmpSet::new(&list);
//! assert!(set.contains('A' as u32));
//!
//! let text: Vec<u16> = "ABC123".encode_utf16().collect();
//! assert_eq!(3, set.span(&text, 0, SpanCondition::Contained));
//! ```

mod block;
mod bmp_set;
mod error;
mod inversion_list;
mod span;

pub mod utf16;

pub use bmp_set::BmpSet;
pub use error::InversionListError;
pub use inversion_list::{InversionList, Ranges, CODE_POINT_LIMIT};
pub use span::{Span, SpanCondition};
