//! Query and transform operations layered on the vector's primitives.
//!
//! Everything here is expressed in terms of the slice view and the mutation
//! operations of [`AlgoVec`]; nothing below touches the storage directly.

use core::fmt;
use core::ops::{AddAssign, Range};

use rand::Rng;

use crate::vec::AlgoVec;

impl<T> AlgoVec<T> {
    /// Returns the index of the first element equal to `target`, or `None`.
    /// O(n).
    pub fn find(&self, target: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| item == target)
    }

    pub fn contains(&self, target: &T) -> bool
    where
        T: PartialEq,
    {
        self.find(target).is_some()
    }

    /// Counts the elements equal to `target`. O(n).
    pub fn count(&self, target: &T) -> usize
    where
        T: PartialEq,
    {
        self.iter().filter(|&item| item == target).count()
    }

    /// Removes every element equal to `target`.
    ///
    /// Each removal shifts the tail left, so this is O(n²) in the worst
    /// case (all elements match).
    pub fn remove_all(&mut self, target: &T)
    where
        T: PartialEq,
    {
        let mut i = 0;
        while i < self.len() {
            if self[i] == *target {
                self.remove(i);
            } else {
                i += 1;
            }
        }
    }

    /// Removes every element that `other` contains. O(n·m) scanning plus the
    /// same shifting cost as [`remove_all`](Self::remove_all).
    pub fn remove_found_in(&mut self, other: &AlgoVec<T>)
    where
        T: PartialEq,
    {
        let mut i = 0;
        while i < self.len() {
            if other.contains(&self[i]) {
                self.remove(i);
            } else {
                i += 1;
            }
        }
    }

    /// Removes every later occurrence of a value that already appeared
    /// earlier, keeping first occurrences in order. Returns whether anything
    /// was removed. O(n²).
    pub fn remove_duplicates(&mut self) -> bool
    where
        T: PartialEq,
    {
        let mut removed = false;
        let mut i = 0;
        while i < self.len() {
            let mut j = i + 1;
            while j < self.len() {
                if self[j] == self[i] {
                    self.remove(j);
                    removed = true;
                } else {
                    j += 1;
                }
            }
            i += 1;
        }
        removed
    }

    /// Returns the index of the first element of `self` that `other` also
    /// contains, or `None`.
    pub fn first_match(&self, other: &AlgoVec<T>) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|item| other.contains(item))
    }

    /// Returns `true` if every element of `other` is found somewhere in
    /// `self`. Set inclusion, not multiset: duplicates in `other` do not
    /// require duplicates in `self`. O(n·m).
    pub fn contains_all(&self, other: &AlgoVec<T>) -> bool
    where
        T: PartialEq,
    {
        other.iter().all(|item| self.contains(item))
    }

    /// Returns the index and a reference to the greatest element, or `None`
    /// if the vector is empty. The first occurrence wins on ties.
    pub fn max(&self) -> Option<(usize, &T)>
    where
        T: PartialOrd,
    {
        let mut iter = self.iter().enumerate();
        let (mut best_idx, mut best) = iter.next()?;
        for (i, item) in iter {
            if *best < *item {
                best_idx = i;
                best = item;
            }
        }
        Some((best_idx, best))
    }

    /// Returns the index and a reference to the smallest element, or `None`
    /// if the vector is empty. The first occurrence wins on ties.
    pub fn min(&self) -> Option<(usize, &T)>
    where
        T: PartialOrd,
    {
        let mut iter = self.iter().enumerate();
        let (mut best_idx, mut best) = iter.next()?;
        for (i, item) in iter {
            if *best > *item {
                best_idx = i;
                best = item;
            }
        }
        Some((best_idx, best))
    }

    /// Left-to-right fold of all elements onto a default-constructed
    /// accumulator.
    pub fn sum(&self) -> T
    where
        T: Default + AddAssign + Clone,
    {
        let mut acc = T::default();
        for item in self.iter() {
            acc += item.clone();
        }
        acc
    }

    /// Returns a new, independent vector holding a deep copy of the elements
    /// in `range`. Does not mutate `self`.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds.
    pub fn sub_vector(&self, range: Range<usize>) -> AlgoVec<T>
    where
        T: Clone,
    {
        AlgoVec::from_slice(&self.as_slice()[range])
    }

    /// Uniformly permutes the elements in place (Fisher-Yates) using the
    /// provided random source. Seed the source to make the permutation
    /// reproducible.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        let mut counter = self.len();
        while counter > 1 {
            let idx = rng.gen_range(0..counter);
            counter -= 1;
            self.swap(counter, idx);
        }
    }
}

impl<T: fmt::Display> fmt::Display for AlgoVec<T> {
    /// Diagnostic rendering: `[e0 e1 e2 ... en]`, space-separated, with a
    /// trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{item}")?;
        }
        writeln!(f, "]")
    }
}

#[test]
fn find_returns_first_occurrence() {
    let v = AlgoVec::from_slice(&[3, 1, 4, 1, 5]);
    assert_eq!(v.find(&1), Some(1));
    assert_eq!(v.find(&5), Some(4));
    assert_eq!(v.find(&9), None);
    assert!(v.contains(&4));
    assert!(!v.contains(&9));
}

#[test]
fn count_equal_elements() {
    let v = AlgoVec::from_slice(&[3, 1, 4, 1, 5]);
    assert_eq!(v.count(&1), 2);
    assert_eq!(v.count(&3), 1);
    assert_eq!(v.count(&9), 0);
}

#[test]
fn remove_all_matching() {
    let mut v = AlgoVec::from_slice(&[3, 1, 4, 1, 5]);
    v.remove_all(&1);
    assert_eq!(v, [3, 4, 5]);

    // Adjacent matches do not hide each other.
    let mut v = AlgoVec::from_slice(&[7, 7, 7, 1, 7]);
    v.remove_all(&7);
    assert_eq!(v, [1]);
}

#[test]
fn remove_found_in_other() {
    let mut v = AlgoVec::from_slice(&[1, 2, 3, 4, 5, 2]);
    let bad = AlgoVec::from_slice(&[2, 4]);
    v.remove_found_in(&bad);
    assert_eq!(v, [1, 3, 5]);
}

#[test]
fn remove_duplicates_keeps_first_occurrences() {
    let mut v = AlgoVec::from_slice(&[1, 2, 2, 3, 1]);
    assert!(v.remove_duplicates());
    assert_eq!(v, [1, 2, 3]);

    let mut unique = AlgoVec::from_slice(&[1, 2, 3]);
    assert!(!unique.remove_duplicates());
    assert_eq!(unique, [1, 2, 3]);
}

#[test]
fn first_match_and_contains_all() {
    let v = AlgoVec::from_slice(&[1, 2, 3]);
    let other = AlgoVec::from_slice(&[9, 3, 2]);
    assert_eq!(v.first_match(&other), Some(1));
    assert_eq!(v.first_match(&AlgoVec::from_slice(&[8, 9])), None);

    assert!(v.contains_all(&AlgoVec::from_slice(&[3, 1])));
    // Set inclusion: duplicates in the operand need no duplicates here.
    assert!(v.contains_all(&AlgoVec::from_slice(&[2, 2, 2])));
    assert!(!v.contains_all(&AlgoVec::from_slice(&[1, 4])));
    // Everything matches the empty set.
    assert!(v.contains_all(&AlgoVec::new()));
}

#[test]
fn min_max_first_occurrence_wins() {
    let v = AlgoVec::from_slice(&[2, 5, 5, 1]);
    assert_eq!(v.max(), Some((1, &5)));
    assert_eq!(v.min(), Some((3, &1)));

    let ties = AlgoVec::from_slice(&[4, 2, 2, 4]);
    assert_eq!(ties.max(), Some((0, &4)));
    assert_eq!(ties.min(), Some((1, &2)));

    let empty = AlgoVec::<i32>::new();
    assert_eq!(empty.max(), None);
    assert_eq!(empty.min(), None);
}

#[test]
fn sum_folds_left_to_right() {
    let v = AlgoVec::from_slice(&[1, 2, 3, 4]);
    assert_eq!(v.sum(), 10);

    let empty = AlgoVec::<i32>::new();
    assert_eq!(empty.sum(), 0);
}

#[test]
fn sub_vector_is_independent() {
    let v = AlgoVec::from_slice(&[10, 20, 30, 40]);
    let mut sub = v.sub_vector(1..3);
    assert_eq!(sub, [20, 30]);

    sub.push(99);
    sub[0] = 0;
    assert_eq!(v, [10, 20, 30, 40]);

    assert_eq!(v.sub_vector(0..0).len(), 0);
    assert_eq!(v.sub_vector(0..4), v);
}

#[test]
#[should_panic]
fn sub_vector_out_of_range_panics() {
    let v = AlgoVec::from_slice(&[1, 2, 3]);
    let _ = v.sub_vector(1..5);
}

#[test]
fn shuffle_preserves_the_multiset() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut v = AlgoVec::from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
    let mut rng = StdRng::seed_from_u64(42);
    v.shuffle(&mut rng);

    assert_eq!(v.len(), 8);
    let mut sorted: Vec<i32> = v.iter().copied().collect();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn shuffle_is_reproducible_with_a_seed() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut a = AlgoVec::from_slice(&[1, 2, 3, 4, 5, 6, 7, 8]);
    let mut b = a.clone();

    a.shuffle(&mut StdRng::seed_from_u64(7));
    b.shuffle(&mut StdRng::seed_from_u64(7));
    assert_eq!(a, b);
}

#[test]
fn shuffle_degenerate_sizes() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut rng = StdRng::seed_from_u64(0);

    let mut empty = AlgoVec::<i32>::new();
    empty.shuffle(&mut rng);
    assert!(empty.is_empty());

    let mut one = AlgoVec::from_slice(&[1]);
    one.shuffle(&mut rng);
    assert_eq!(one, [1]);
}

#[test]
fn display_renders_bracketed_and_newline_terminated() {
    let v = AlgoVec::from_slice(&[3, 1, 4, 1, 5]);
    assert_eq!(format!("{v}"), "[3 1 4 1 5]\n");

    let one = AlgoVec::from_slice(&[7]);
    assert_eq!(format!("{one}"), "[7]\n");

    let empty = AlgoVec::<i32>::new();
    assert_eq!(format!("{empty}"), "[]\n");
}
