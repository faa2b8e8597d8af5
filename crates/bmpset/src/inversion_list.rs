use std::ops::Range;

use crate::error::InversionListError;

/// One past the largest code point, the logical terminator of every
/// inversion list.
pub const CODE_POINT_LIMIT: u32 = 0x110000;

/// Borrowed view of an inversion list.
///
/// Boundaries alternate between the start of an included range and the
/// start of an excluded range: `[s0, s1, s2, s3]` contains `s0..s1` and
/// `s2..s3`. The list ends at `CODE_POINT_LIMIT`, which may be stored as
/// the last element or left out. Reads past the stored elements see the
/// terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InversionList<'a> {
    list: &'a [u32],
}

impl<'a> InversionList<'a> {
    /// Wrap a list without checking it. A malformed list gives wrong
    /// answers but never panics.
    pub fn new(list: &'a [u32]) -> InversionList<'a> {
        InversionList { list }
    }

    /// Wrap a list after checking that it is strictly increasing and that
    /// no boundary is past the terminator.
    pub fn try_new(list: &'a [u32]) -> Result<InversionList<'a>, InversionListError> {
        let mut previous: Option<u32> = None;
        for (index, &value) in list.iter().enumerate() {
            if value > CODE_POINT_LIMIT {
                return Err(InversionListError::OutOfRange { index, value });
            }

            if let Some(previous) = previous {
                if value <= previous {
                    return Err(InversionListError::NotAscending {
                        index,
                        previous,
                        value,
                    });
                }
            }

            previous = Some(value);
        }

        Ok(InversionList { list })
    }

    /// Stored boundaries, with the terminator only if the caller stored it.
    pub fn as_slice(&self) -> &'a [u32] {
        self.list
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Length of the list including the terminator, stored or not.
    pub fn terminated_len(&self) -> usize {
        match self.list.last() {
            Some(&CODE_POINT_LIMIT) => self.list.len(),
            _ => self.list.len() + 1,
        }
    }

    #[inline]
    pub fn get(&self, i: usize) -> u32 {
        match self.list.get(i) {
            Some(&cp) => cp,
            None => CODE_POINT_LIMIT,
        }
    }

    /// Smallest index `i` in `lo..=hi` such that `c < list[i]`.
    ///
    /// To search only for code points in `start..end` pass
    /// `lo = find(start)` and `hi = find(end)`, with
    /// `lo <= hi < terminated_len()`.
    ///
    /// ```text
    /// set        list            c = 0 1 3 4 7 8
    /// []         [110000]            0 0 0 0 0 0
    /// [0-3]      [0, 4, 110000]      1 1 1 2 2 2
    /// [4-7]      [4, 8, 110000]      0 0 0 1 1 2
    /// [all]      [0, 110000]         1 1 1 1 1 1
    /// ```
    #[inline]
    pub fn find_code_point(&self, c: u32, mut lo: usize, mut hi: usize) -> usize {
        if c < self.get(lo) {
            return lo;
        }

        if lo >= hi || c >= self.get(hi - 1) {
            return hi;
        }

        loop {
            let i = lo + (hi - lo) / 2;
            if i == lo {
                break;
            }

            if c < self.get(i) {
                hi = i;
            } else {
                lo = i;
            }
        }

        hi
    }

    /// Unrestricted `find_code_point`.
    pub fn find(&self, c: u32) -> usize {
        self.find_code_point(c, 0, self.terminated_len() - 1)
    }

    /// Membership by index parity, odd indexes are inside an included
    /// range.
    #[inline]
    pub fn contains_in(&self, c: u32, lo: usize, hi: usize) -> bool {
        self.find_code_point(c, lo, hi) & 1 == 1
    }

    /// Reference membership test over the whole list.
    pub fn contains(&self, c: u32) -> bool {
        c < CODE_POINT_LIMIT && self.find(c) & 1 == 1
    }

    /// Included ranges in ascending order.
    pub fn ranges(&self) -> Ranges<'a> {
        Ranges {
            list: *self,
            index: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Ranges<'a> {
    list: InversionList<'a>,
    index: usize,
}

impl<'a> Iterator for Ranges<'a> {
    type Item = Range<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.list.get(self.index);
        if start >= CODE_POINT_LIMIT {
            return None;
        }

        let end = self.list.get(self.index + 1);
        self.index += 2;
        Some(start..end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_code_point_examples() {
        let cases: [(&[u32], [usize; 6]); 4] = [
            (&[0x110000], [0, 0, 0, 0, 0, 0]),
            (&[0, 4, 0x110000], [1, 1, 1, 2, 2, 2]),
            (&[4, 8, 0x110000], [0, 0, 0, 1, 1, 2]),
            (&[0, 0x110000], [1, 1, 1, 1, 1, 1]),
        ];

        for (list, expected) in cases {
            let list = InversionList::new(list);
            for (c, exp) in [0, 1, 3, 4, 7, 8].into_iter().zip(expected) {
                assert_eq!(exp, list.find(c), "list {:?} c {c}", list.as_slice());
            }
        }
    }

    #[test]
    fn implicit_terminator() {
        let stored = InversionList::new(&[0x41, 0x5b, 0x110000]);
        let implicit = InversionList::new(&[0x41, 0x5b]);

        assert_eq!(3, stored.terminated_len());
        assert_eq!(3, implicit.terminated_len());
        assert_eq!(0x110000, implicit.get(2));

        for c in [0, 0x40, 0x41, 0x5a, 0x5b, 0x10ffff] {
            assert_eq!(stored.contains(c), implicit.contains(c));
        }
    }

    #[test]
    fn empty() {
        let list = InversionList::new(&[]);
        assert_eq!(1, list.terminated_len());
        assert!(!list.contains(0));
        assert!(!list.contains(0x10ffff));
        assert_eq!(0, list.ranges().count());
    }

    #[test]
    fn open_ended_range() {
        // Odd number of boundaries, last range runs to the end
        let list = InversionList::new(&[0x10000]);
        assert!(!list.contains(0xffff));
        assert!(list.contains(0x10000));
        assert!(list.contains(0x10ffff));
        assert!(!list.contains(0x110000));
        assert_eq!(vec![0x10000..0x110000], list.ranges().collect::<Vec<_>>());
    }

    #[test]
    fn ranges() {
        let list = InversionList::new(&[0, 4, 8, 10, 0x110000]);
        let ranges: Vec<_> = list.ranges().collect();
        assert_eq!(vec![0..4, 8..10], ranges);
    }

    #[test]
    fn try_new_rejects() {
        assert_eq!(
            Err(InversionListError::NotAscending {
                index: 2,
                previous: 8,
                value: 8
            }),
            InversionList::try_new(&[4, 8, 8, 0x110000])
        );

        assert_eq!(
            Err(InversionListError::OutOfRange {
                index: 2,
                value: 0x110001
            }),
            InversionList::try_new(&[4, 8, 0x110001])
        );

        assert!(InversionList::try_new(&[]).is_ok());
        assert!(InversionList::try_new(&[0, 0x110000]).is_ok());
    }
}
