//! List processing that never mutates the receiver.
//!
//! Every result is a freshly allocated list built through `add`, so nothing
//! here touches the buffer of `self` other than reading its live slots.

use crate::{
    capacity_policy::CapacityPolicy,
    errors::OutOfRange,
};

use super::ArrayList;

impl<T, Pol> ArrayList<T, Pol>
    where
        T: Default + Clone,
        Pol: CapacityPolicy,
{

    /// `result[i] == self[size - 1 - i]`.
    pub fn reverse(&self) -> Self {
        let mut r = Self::with_policy(self.size());
        for value in self.iter().rev() {
            r.add(value.clone());
        }
        r
    }

    /// The first `n` elements. Requires `n <= size`.
    pub fn take(&self, n: usize) -> Result<Self, OutOfRange> {
        if n > self.size() {
            return Err(OutOfRange::Take { n, len: self.size() })
        }
        let mut t = Self::with_policy(n);
        for value in &self.as_slice()[..n] {
            t.add(value.clone());
        }
        Ok(t)
    }

    /// Everything after the first `n` elements. Requires `n <= size`.
    pub fn drop(&self, n: usize) -> Result<Self, OutOfRange> {
        if n > self.size() {
            return Err(OutOfRange::Drop { n, len: self.size() })
        }
        let mut d = Self::with_policy(self.size() - n);
        for value in &self.as_slice()[n..] {
            d.add(value.clone());
        }
        Ok(d)
    }

    /// `count` elements starting at `start`, i.e. `drop(start)` then `take(count)`.
    ///
    /// Requires `start < size` and `count <= size - start`, so an empty list
    /// rejects every call.
    pub fn mid(&self, start: usize, count: usize) -> Result<Self, OutOfRange> {
        if start >= self.size() || count > self.size() - start {
            return Err(OutOfRange::Mid { start, count, len: self.size() })
        }
        self.drop(start)?.take(count)
    }

    /// The `n`th largest element, `n == 1` being the maximum.
    ///
    /// Sorts a copy of the live elements and indexes from the back. Elements
    /// are assumed distinct; with duplicates the result is whatever lands at
    /// that sorted position.
    pub fn nth_largest(&self, n: usize) -> Result<T, OutOfRange>
        where
            T: Ord
    {
        if n == 0 || n > self.size() {
            return Err(OutOfRange::NthLargest { n, len: self.size() })
        }
        let mut sorted = self.as_slice().to_vec();
        sorted.sort_unstable();
        let index = sorted.len() - n;
        Ok(sorted.swap_remove(index))
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use pretty_assertions::assert_eq;

    fn list(values: &[i32]) -> ArrayList<i32> {
        ArrayList::from(values)
    }

    #[test]
    fn nth_largest() {
        let a = list(&[18, 8, 2, 5, 6, 3, 4]);
        assert_eq!(a.nth_largest(2), Ok(8));
        assert_eq!(a.nth_largest(1), Ok(18));
        assert_eq!(a.nth_largest(7), Ok(2));
        assert_eq!(a.as_slice(), &[18, 8, 2, 5, 6, 3, 4]);
    }

    #[test]
    fn nth_largest_out_of_range() {
        let a = list(&[3, 1, 2]);
        assert_eq!(a.nth_largest(0), Err(OutOfRange::NthLargest { n: 0, len: 3 }));
        assert_eq!(a.nth_largest(4), Err(OutOfRange::NthLargest { n: 4, len: 3 }));
        assert!(list(&[]).nth_largest(1).is_err());
    }

    #[test]
    fn reverse() {
        let a = list(&[1, 3, 2]);
        let b = a.reverse();
        assert_eq!(b.as_slice(), &[2, 3, 1]);
        assert_eq!(b.get(2), Ok(&1));
        assert_eq!(a.as_slice(), &[1, 3, 2]);
        assert_eq!(list(&[]).reverse(), list(&[]));
    }

    #[test]
    fn take() {
        let a = list(&[1, 3, 2, 5, 6, 7, 4]);
        let b = a.take(6).unwrap();
        assert_eq!(b.size(), 6);
        assert_eq!(b, list(&[1, 3, 2, 5, 6, 7]));
        assert_eq!(a.take(0).unwrap().size(), 0);
        assert_eq!(a.take(7).unwrap(), a);
        assert_eq!(a.take(8), Err(OutOfRange::Take { n: 8, len: 7 }));
    }

    #[test]
    fn drop() {
        let a = list(&[1, 3, 2, 5, 6, 7, 4, 23, 18]);
        let b = a.drop(6).unwrap();
        assert_eq!(b.size(), 3);
        assert_eq!(b, list(&[4, 23, 18]));
        assert_eq!(a.drop(0).unwrap(), a);
        assert!(a.drop(9).unwrap().is_empty());
        assert_eq!(a.drop(10), Err(OutOfRange::Drop { n: 10, len: 9 }));
    }

    #[test]
    fn mid() {
        let a = list(&[1, 3, 2, 5, 6, 7, 4]);
        let b = a.mid(2, 3).unwrap();
        assert_eq!(b.size(), 3);
        assert_eq!(b, list(&[2, 5, 6]));
        assert_eq!(a.mid(6, 1).unwrap(), list(&[4]));
        assert!(a.mid(3, 0).unwrap().is_empty());
    }

    #[test]
    fn mid_out_of_range() {
        let a = list(&[1, 3, 2, 5, 6, 7, 4]);
        assert_eq!(a.mid(7, 0), Err(OutOfRange::Mid { start: 7, count: 0, len: 7 }));
        assert_eq!(a.mid(2, 6), Err(OutOfRange::Mid { start: 2, count: 6, len: 7 }));
        assert!(list(&[]).mid(0, 0).is_err());
    }

    #[test]
    fn results_are_independent() {
        let a = list(&[1, 2, 3]);
        let mut r = a.reverse();
        let mut t = a.take(2).unwrap();
        r.add(9);
        t.set(0, 9).unwrap();
        assert_eq!(a.as_slice(), &[1, 2, 3]);
    }
}
