//! sort/mod.rs
//! Index-based sorting over caller-owned sequences.
//!
//! `Sortable` is the minimal surface a comparison sort needs: length, a
//! less-than between two positions, and a swap. `sort` orders any
//! implementor in place without copying it.

pub mod uint32;

pub use uint32::Uint32Slice;

/// Positions below this length are insertion-sorted.
const INSERTION_SORT_MAX: usize = 12;

pub trait Sortable {
    fn len(&self) -> usize;

    /// True if the element at `i` must sort before the element at `j`.
    fn less(&self, i: usize, j: usize) -> bool;

    fn swap(&mut self, i: usize, j: usize);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Sortable + ?Sized> Sortable for &mut T {
    fn len(&self) -> usize {
        (**self).len()
    }
    fn less(&self, i: usize, j: usize) -> bool {
        (**self).less(i, j)
    }
    fn swap(&mut self, i: usize, j: usize) {
        (**self).swap(i, j)
    }
}

/// Sort `data` in place, ascending by `less`.
///
/// Not stable: equal elements end up in unspecified relative order.
/// Runs in O(n log n) comparisons and swaps, no allocation.
pub fn sort<T: Sortable + ?Sized>(data: &mut T) {
    let n = data.len();
    if n <= INSERTION_SORT_MAX {
        insertion_sort(data, 0, n);
    } else {
        heap_sort(data, n);
    }
}

/// True if no element sorts before its predecessor.
pub fn is_sorted<T: Sortable + ?Sized>(data: &T) -> bool {
    (1..data.len()).all(|i| !data.less(i, i - 1))
}

fn insertion_sort<T: Sortable + ?Sized>(data: &mut T, lo: usize, hi: usize) {
    for i in lo + 1..hi {
        let mut j = i;
        while j > lo && data.less(j, j - 1) {
            data.swap(j, j - 1);
            j -= 1;
        }
    }
}

fn heap_sort<T: Sortable + ?Sized>(data: &mut T, n: usize) {
    for root in (0..n / 2).rev() {
        sift_down(data, root, n);
    }
    for end in (1..n).rev() {
        data.swap(0, end);
        sift_down(data, 0, end);
    }
}

// Max-heap over positions [0, end).
fn sift_down<T: Sortable + ?Sized>(data: &mut T, mut root: usize, end: usize) {
    loop {
        let mut child = 2 * root + 1;
        if child >= end {
            return;
        }
        if child + 1 < end && data.less(child, child + 1) {
            child += 1;
        }
        if !data.less(root, child) {
            return;
        }
        data.swap(root, child);
        root = child;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Descending order through the same trait.
    struct Reversed<'a>(&'a mut [i64]);

    impl Sortable for Reversed<'_> {
        fn len(&self) -> usize {
            self.0.len()
        }
        fn less(&self, i: usize, j: usize) -> bool {
            self.0[i] > self.0[j]
        }
        fn swap(&mut self, i: usize, j: usize) {
            self.0.swap(i, j)
        }
    }

    #[test]
    fn sorts_any_implementor() {
        let mut v: Vec<i64> = (0..50).map(|i| (i * 37) % 23 - 11).collect();
        let mut r = Reversed(&mut v);
        sort(&mut r);
        assert!(is_sorted(&r));
        assert!(v.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn small_and_empty_inputs() {
        let mut empty: Vec<i64> = Vec::new();
        let mut r = Reversed(&mut empty);
        assert!(r.is_empty());
        sort(&mut r);

        let mut one = vec![5i64];
        sort(&mut Reversed(&mut one));
        assert_eq!(one, [5]);

        let mut few = vec![1i64, 3, 2];
        sort(&mut Reversed(&mut few));
        assert_eq!(few, [3, 2, 1]);
    }
}
