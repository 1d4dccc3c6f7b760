mod derived;

use core::{
    fmt::{self, Debug, Display, Formatter},
    marker::PhantomData,
    ops::Index,
    slice,
};

use crate::{
    array::Array,
    capacity_policy::{CapacityPolicy, Doubling},
    errors::OutOfRange,
};

/// Capacity given to lists built with [`ArrayList::new`].
pub const DEFAULT_CAPACITY: usize = 100;

/// Ordered, index-addressable list stored in an [`Array`].
///
/// Slots `[0, size)` hold the elements; slots `[size, capacity)` hold stale
/// values that are never observed. Capacity only ever grows, by the rule of
/// `Pol`.
///
/// # Example
/// ```rust
/// use arrlist_mem::ArrayList;
///
/// let mut list = ArrayList::new();
/// list.add(1);
/// list.add(3);
/// list.insert(1, 2).unwrap();
///
/// assert_eq!(list.to_string(), "[ 1 2 3 ]");
/// assert_eq!(list.remove(0), Ok(1));
/// assert!(list.get(2).is_err());
/// ```
pub struct ArrayList<T, Pol = Doubling> {
    data: Array<T>,
    count: usize,
    _policy: PhantomData<Pol>,
}

impl<T> ArrayList<T, Doubling>
    where
        T: Default + Clone,
{

    #[inline(always)]
    pub fn new() -> Self {
        Self::with_policy(DEFAULT_CAPACITY)
    }

    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_policy(capacity)
    }
}

impl<T, Pol> ArrayList<T, Pol>
    where
        T: Default + Clone,
        Pol: CapacityPolicy,
{

    /// Creates a list with `capacity` slots that grows by the rule of `Pol`.
    pub fn with_policy(capacity: usize) -> Self {
        Self {
            data: Array::new(capacity),
            count: 0,
            _policy: PhantomData,
        }
    }

    /// Appends `value`. Same as `insert(self.size(), value)`, which cannot fail.
    #[inline(always)]
    pub fn add(&mut self, value: T) {
        self.insert_unchecked(self.count, value)
    }

    /// Inserts `value` at `pos`, shifting `[pos, size)` one slot right.
    ///
    /// `pos == size` appends.
    pub fn insert(&mut self, pos: usize, value: T) -> Result<(), OutOfRange> {
        if pos > self.count {
            return Err(OutOfRange::Position { pos, len: self.count })
        }
        self.insert_unchecked(pos, value);
        Ok(())
    }

    /// Removes the element at `pos`, shifting `(pos, size)` one slot left.
    pub fn remove(&mut self, pos: usize) -> Result<T, OutOfRange> {
        if pos >= self.count {
            return Err(OutOfRange::Position { pos, len: self.count })
        }
        let live = &mut self.data.as_mut_slice()[pos..self.count];
        live.rotate_left(1);
        self.count -= 1;
        Ok(core::mem::take(&mut self.data[self.count]))
    }

    fn insert_unchecked(&mut self, pos: usize, value: T) {
        debug_assert!(pos <= self.count);
        if let Some(capacity) = Pol::grow(self.data.len(), self.count + 1) {
            self.data.resize(capacity);
        }
        self.data[self.count] = value;
        self.data.as_mut_slice()[pos..=self.count].rotate_right(1);
        self.count += 1;
    }
}

impl<T, Pol> ArrayList<T, Pol> {

    #[inline(always)]
    pub fn size(&self) -> usize {
        self.count
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub fn get(&self, pos: usize) -> Result<&T, OutOfRange> {
        if pos >= self.count {
            return Err(OutOfRange::Position { pos, len: self.count })
        }
        Ok(&self.data[pos])
    }

    /// Overwrites the element at `pos` and returns the old one.
    #[inline(always)]
    pub fn set(&mut self, pos: usize, value: T) -> Result<T, OutOfRange> {
        if pos >= self.count {
            return Err(OutOfRange::Position { pos, len: self.count })
        }
        Ok(core::mem::replace(&mut self.data[pos], value))
    }

    /// Position of the first element equal to `value`.
    pub fn find(&self, value: &T) -> Option<usize>
        where
            T: PartialEq
    {
        self.iter().position(|x| x == value)
    }

    /// Logically empties the list. Capacity is kept.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.count = 0;
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.data.as_slice()[..self.count]
    }

    #[inline(always)]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }
}

impl<T, Pol> Default for ArrayList<T, Pol>
    where
        T: Default + Clone,
        Pol: CapacityPolicy,
{

    #[inline(always)]
    fn default() -> Self {
        Self::with_policy(DEFAULT_CAPACITY)
    }
}

impl<T: Clone, Pol> Clone for ArrayList<T, Pol> {

    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            count: self.count,
            _policy: PhantomData,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.count = source.count;
    }
}

impl<T, P, Q> PartialEq<ArrayList<T, Q>> for ArrayList<T, P>
    where
        T: PartialEq,
{

    fn eq(&self, other: &ArrayList<T, Q>) -> bool {
        self.size() == other.size() &&
            self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq, Pol> Eq for ArrayList<T, Pol> {}

impl<T, Pol> Index<usize> for ArrayList<T, Pol> {

    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &Self::Output {
        if index >= self.count {
            panic!("index {} out of bounds for length {}", index, self.count)
        }
        &self.data[index]
    }
}

impl<T: Display, Pol> Display for ArrayList<T, Pol> {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        for value in self {
            write!(f, "{} ", value)?;
        }
        write!(f, "]")
    }
}

impl<T: Debug, Pol> Debug for ArrayList<T, Pol> {

    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, Pol> IntoIterator for &'a ArrayList<T, Pol> {

    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, Pol> Extend<T> for ArrayList<T, Pol>
    where
        T: Default + Clone,
        Pol: CapacityPolicy,
{

    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T, Pol> FromIterator<T> for ArrayList<T, Pol>
    where
        T: Default + Clone,
        Pol: CapacityPolicy,
{

    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_policy(iter.size_hint().0);
        list.extend(iter);
        list
    }
}

impl<T, Pol> From<&[T]> for ArrayList<T, Pol>
    where
        T: Default + Clone,
        Pol: CapacityPolicy,
{

    fn from(value: &[T]) -> Self {
        value.iter().cloned().collect()
    }
}

impl<T, Pol> From<Vec<T>> for ArrayList<T, Pol>
    where
        T: Default + Clone,
        Pol: CapacityPolicy,
{

    fn from(value: Vec<T>) -> Self {
        let count = value.len();
        Self {
            data: Array::from(value),
            count,
            _policy: PhantomData,
        }
    }
}
