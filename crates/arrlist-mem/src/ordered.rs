use core::{
    fmt::{self, Debug, Display, Formatter},
    slice,
};

use crate::{
    errors::OutOfRange,
    list::ArrayList,
};

/// An [`ArrayList`] kept in ascending order.
///
/// Equal elements keep their insertion order.
#[derive(Clone, PartialEq, Eq)]
pub struct OrderedList<T> {
    list: ArrayList<T>,
}

impl<T> OrderedList<T>
    where
        T: Ord + Default + Clone,
{

    pub fn new() -> Self {
        Self {
            list: ArrayList::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            list: ArrayList::with_capacity(capacity),
        }
    }

    /// Inserts `value` after every element not greater than it.
    pub fn add(&mut self, value: T) {
        let pos = self.list
            .as_slice()
            .partition_point(|x| x <= &value);
        let inserted = self.list.insert(pos, value);
        debug_assert!(inserted.is_ok());
    }

    #[inline(always)]
    pub fn remove(&mut self, pos: usize) -> Result<T, OutOfRange> {
        self.list.remove(pos)
    }
}

impl<T> OrderedList<T> {

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.list.size()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    #[inline(always)]
    pub fn get(&self, pos: usize) -> Result<&T, OutOfRange> {
        self.list.get(pos)
    }

    /// Position of the first element equal to `value`.
    pub fn find(&self, value: &T) -> Option<usize>
        where
            T: Ord
    {
        let slice = self.list.as_slice();
        let pos = slice.partition_point(|x| x < value);
        (pos < slice.len() && &slice[pos] == value).then_some(pos)
    }

    #[inline(always)]
    pub fn clear(&mut self) {
        self.list.clear()
    }

    #[inline(always)]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.list.iter()
    }

    #[inline(always)]
    pub fn as_list(&self) -> &ArrayList<T> {
        &self.list
    }
}

impl<T> Default for OrderedList<T>
    where
        T: Ord + Default + Clone,
{

    fn default() -> Self {
        Self::new()
    }
}

impl<T, Pol> From<&ArrayList<T, Pol>> for OrderedList<T>
    where
        T: Ord + Default + Clone,
{

    fn from(value: &ArrayList<T, Pol>) -> Self {
        let mut ordered = Self::with_capacity(value.size());
        for x in value {
            ordered.add(x.clone());
        }
        ordered
    }
}

impl<T> Extend<T> for OrderedList<T>
    where
        T: Ord + Default + Clone,
{

    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T> FromIterator<T> for OrderedList<T>
    where
        T: Ord + Default + Clone,
{

    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut ordered = Self::new();
        ordered.extend(iter);
        ordered
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {

    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Display> Display for OrderedList<T> {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.list, f)
    }
}

impl<T: Debug> Debug for OrderedList<T> {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.list, f)
    }
}

/// The `n`th largest element of `list`, resolved through an [`OrderedList`].
///
/// Requires `1 <= n <= list.size()`.
pub fn nth_largest<T, Pol>(n: usize, list: &ArrayList<T, Pol>) -> Result<T, OutOfRange>
    where
        T: Ord + Default + Clone,
{
    if n == 0 || n > list.size() {
        return Err(OutOfRange::NthLargest { n, len: list.size() })
    }
    let ordered = OrderedList::from(list);
    ordered
        .get(ordered.size() - n)
        .cloned()
}
