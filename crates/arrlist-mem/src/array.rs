use core::{
    ops::{Index, IndexMut},
    slice,
};

use crate::errors::BoundsError;

/// Fixed-length owned storage.
///
/// Every slot is always initialized, so growing fills the new tail with
/// `T::default()`. The length only changes through [`Array::resize`].
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Array<T> {
    data: Box<[T]>,
}

impl<T> Array<T>
    where
        T: Default + Clone,
{

    pub fn new(len: usize) -> Self {
        Self {
            data: vec![T::default(); len].into_boxed_slice(),
        }
    }

    /// Reallocates to exactly `len` slots, keeping the first `min(old, len)` values.
    pub fn resize(&mut self, len: usize) {
        if len == self.data.len() { return }
        let mut data = core::mem::take(&mut self.data).into_vec();
        data.resize(len, T::default());
        self.data = data.into_boxed_slice();
    }
}

impl<T> Array<T> {

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline(always)]
    pub fn get(&self, index: usize) -> Result<&T, BoundsError> {
        let len = self.data.len();
        self.data
            .get(index)
            .ok_or(BoundsError { index, len })
    }

    #[inline(always)]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, BoundsError> {
        let len = self.data.len();
        self.data
            .get_mut(index)
            .ok_or(BoundsError { index, len })
    }

    /// Overwrites slot `index` and hands back what was there.
    #[inline(always)]
    pub fn set(&mut self, index: usize, value: T) -> Result<T, BoundsError> {
        self.get_mut(index)
            .map(|slot| core::mem::replace(slot, value))
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline(always)]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    #[inline(always)]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> Index<usize> for Array<T> {

    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &Self::Output {
        if index >= self.data.len() {
            panic!("index {} out of bounds for length {}", index, self.data.len())
        }
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Array<T> {

    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        if index >= self.data.len() {
            panic!("index {} out of bounds for length {}", index, self.data.len())
        }
        &mut self.data[index]
    }
}

impl<T> From<Vec<T>> for Array<T> {

    fn from(value: Vec<T>) -> Self {
        Self {
            data: value.into_boxed_slice(),
        }
    }
}
