use arrlist_mem::{ArrayList, nth_largest};
use proptest::prelude::*;

fn from_vec(values: &[i32]) -> ArrayList<i32> {
    let mut list = ArrayList::with_capacity(0);
    list.extend(values.iter().copied());
    list
}

/// A list plus a count in `0..=len`.
fn list_and_count() -> impl Strategy<Value = (Vec<i32>, usize)> {
    prop::collection::vec(any::<i32>(), 0..64)
        .prop_flat_map(|v| {
            let len = v.len();
            (Just(v), 0..=len)
        })
}

/// A non-empty list plus a valid `(start, count)` for `mid`.
fn list_and_window() -> impl Strategy<Value = (Vec<i32>, usize, usize)> {
    prop::collection::vec(any::<i32>(), 1..64)
        .prop_flat_map(|v| {
            let len = v.len();
            (Just(v), 0..len)
        })
        .prop_flat_map(|(v, start)| {
            let rest = v.len() - start;
            (Just(v), Just(start), 0..=rest)
        })
}

proptest! {
    #[test]
    fn take_then_drop_reconstructs((values, n) in list_and_count()) {
        let list = from_vec(&values);
        let mut taken = list.take(n).unwrap();
        let dropped = list.drop(n).unwrap();
        prop_assert_eq!(taken.size(), n);
        prop_assert_eq!(dropped.size(), list.size() - n);
        taken.extend(dropped.iter().copied());
        prop_assert_eq!(taken, list);
    }

    #[test]
    fn reverse_twice_is_identity(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let list = from_vec(&values);
        let reversed = list.reverse();
        prop_assert_eq!(reversed.size(), list.size());
        for i in 0..list.size() {
            prop_assert_eq!(reversed[i], list[list.size() - 1 - i]);
        }
        prop_assert_eq!(reversed.reverse(), list);
    }

    #[test]
    fn mid_is_drop_then_take((values, start, count) in list_and_window()) {
        let list = from_vec(&values);
        let mid = list.mid(start, count).unwrap();
        prop_assert_eq!(mid, list.drop(start).unwrap().take(count).unwrap());
    }

    #[test]
    fn insert_then_remove_restores((values, pos) in list_and_count(), x in any::<i32>()) {
        let mut list = from_vec(&values);
        let before = list.clone();
        list.insert(pos, x).unwrap();
        prop_assert_eq!(list.get(pos), Ok(&x));
        prop_assert_eq!(list.size(), before.size() + 1);
        prop_assert_eq!(list.remove(pos), Ok(x));
        prop_assert_eq!(list, before);
    }

    #[test]
    fn equality_is_order_sensitive(values in prop::collection::hash_set(any::<i32>(), 2..32)) {
        let values: Vec<i32> = values.into_iter().collect();
        let list = from_vec(&values);
        prop_assert_eq!(&list, &list.clone());
        prop_assert_ne!(&list, &list.reverse());
        prop_assert_ne!(&list, &list.take(values.len() - 1).unwrap());
    }

    #[test]
    fn nth_largest_strategies_agree(
        values in prop::collection::hash_set(any::<i32>(), 1..32),
        pick in any::<prop::sample::Index>(),
    ) {
        let values: Vec<i32> = values.into_iter().collect();
        let list = from_vec(&values);
        let n = pick.index(values.len()) + 1;
        let mut sorted = values.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(list.nth_largest(n), Ok(sorted[n - 1]));
        prop_assert_eq!(nth_largest(n, &list), Ok(sorted[n - 1]));
        prop_assert_eq!(list.as_slice(), &values[..]);
    }
}
