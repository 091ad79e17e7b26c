//! sort/uint32.rs
//! `Sortable` adapter over a borrowed `[u32]`, increasing numeric order.

use std::ops::Deref;

use crate::sort::{self, Sortable};

/// Borrowed `u32` sequence sortable in increasing order.
///
/// Wraps the caller's slice; never copies or reallocates it.
#[derive(Debug, PartialEq, Eq)]
pub struct Uint32Slice<'a>(pub &'a mut [u32]);

impl<'a> Uint32Slice<'a> {
    pub fn new(values: &'a mut [u32]) -> Self {
        Self(values)
    }

    /// Sort the wrapped slice in place.
    pub fn sort(&mut self) {
        sort::sort(self)
    }

    pub fn is_sorted(&self) -> bool {
        sort::is_sorted(self)
    }

    pub fn into_inner(self) -> &'a mut [u32] {
        self.0
    }
}

impl<'a> From<&'a mut [u32]> for Uint32Slice<'a> {
    fn from(values: &'a mut [u32]) -> Self {
        Self(values)
    }
}

impl<'a> From<&'a mut Vec<u32>> for Uint32Slice<'a> {
    fn from(values: &'a mut Vec<u32>) -> Self {
        Self(values.as_mut_slice())
    }
}

impl Deref for Uint32Slice<'_> {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        self.0
    }
}

impl Sortable for Uint32Slice<'_> {
    #[inline]
    fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    fn less(&self, i: usize, j: usize) -> bool {
        self.0[i] < self.0[j]
    }

    #[inline]
    fn swap(&mut self, i: usize, j: usize) {
        self.0.swap(i, j)
    }
}
