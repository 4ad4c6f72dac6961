use algo_vec::AlgoVec;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
    Insert(usize, i32),
    Remove(usize),
    SetCapacity(usize),
    Resize(usize, i32),
    Truncate(usize),
    Clear,
    RemoveAll(i32),
    Dedup,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::Push),
        Just(Op::Pop),
        (any::<usize>(), any::<i32>()).prop_map(|(i, x)| Op::Insert(i, x)),
        any::<usize>().prop_map(Op::Remove),
        (0usize..40).prop_map(Op::SetCapacity),
        ((0usize..40), any::<i32>()).prop_map(|(n, x)| Op::Resize(n, x)),
        (0usize..40).prop_map(Op::Truncate),
        Just(Op::Clear),
        (0..10i32).prop_map(Op::RemoveAll),
        Just(Op::Dedup),
    ]
}

proptest! {
    // The bookkeeping invariant holds after every operation in any sequence.
    #[test]
    fn len_never_exceeds_capacity(ops in proptest::collection::vec(op_strategy(), 0..64)) {
        let mut v = AlgoVec::new();
        for op in ops {
            match op {
                Op::Push(x) => v.push(x),
                Op::Pop => {
                    v.pop();
                }
                Op::Insert(i, x) => {
                    let i = i % (v.len() + 1);
                    v.insert(i, x);
                }
                Op::Remove(i) => {
                    if !v.is_empty() {
                        let i = i % v.len();
                        v.remove(i);
                    }
                }
                Op::SetCapacity(c) => v.set_capacity(c),
                Op::Resize(n, x) => v.resize(n, x),
                Op::Truncate(n) => v.truncate(n),
                Op::Clear => v.clear(),
                Op::RemoveAll(x) => v.remove_all(&x),
                Op::Dedup => {
                    v.remove_duplicates();
                }
            }
            prop_assert!(v.len() <= v.capacity());
        }
    }

    #[test]
    fn push_then_pop_restores_contents(items in proptest::collection::vec(any::<i32>(), 0..40), x in any::<i32>()) {
        let mut v = AlgoVec::from_slice(&items);
        v.push(x);
        v.pop();
        prop_assert_eq!(v.as_slice(), items.as_slice());
    }

    #[test]
    fn clone_is_independent(items in proptest::collection::vec(any::<i32>(), 0..40), extra in any::<i32>()) {
        let a = AlgoVec::from_slice(&items);
        let mut b = a.clone();
        prop_assert!(a == b && b == a);

        b.push(extra);
        prop_assert_eq!(a.as_slice(), items.as_slice());
    }

    #[test]
    fn shuffle_is_a_permutation(mut items in proptest::collection::vec(any::<i32>(), 0..40), seed in any::<u64>()) {
        let mut v = AlgoVec::from_slice(&items);
        v.shuffle(&mut StdRng::seed_from_u64(seed));

        prop_assert_eq!(v.len(), items.len());
        let mut shuffled: Vec<i32> = v.iter().copied().collect();
        shuffled.sort_unstable();
        items.sort_unstable();
        prop_assert_eq!(shuffled, items);
    }

    #[test]
    fn dedup_keeps_ordered_first_occurrences(items in proptest::collection::vec(0..10i32, 0..40)) {
        let mut v = AlgoVec::from_slice(&items);
        v.remove_duplicates();

        let mut expected: Vec<i32> = Vec::new();
        for x in &items {
            if !expected.contains(x) {
                expected.push(*x);
            }
        }
        prop_assert_eq!(v.as_slice(), expected.as_slice());

        // A second pass finds nothing.
        prop_assert!(!v.remove_duplicates());
    }

    #[test]
    fn sub_vector_matches_source_range(items in proptest::collection::vec(any::<i32>(), 1..40), a in any::<usize>(), b in any::<usize>()) {
        let v = AlgoVec::from_slice(&items);
        let mut start = a % items.len();
        let mut end = b % items.len();
        if start > end {
            std::mem::swap(&mut start, &mut end);
        }

        let sub = v.sub_vector(start..end);
        prop_assert_eq!(sub.as_slice(), &items[start..end]);
        prop_assert_eq!(v.as_slice(), items.as_slice());
    }
}
