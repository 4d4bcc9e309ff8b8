use bankers::binom::choose;
use bankers::{from, next, succ, to, BitPattern, Codec, Error};
use proptest::prelude::*;

fn pattern() -> impl Strategy<Value = BitPattern> {
    (1u32..=64).prop_flat_map(|n| {
        let max = if n == 64 { u64::MAX } else { (1 << n) - 1 };
        (0..=max).prop_map(move |bits| BitPattern::new(bits, n).unwrap())
    })
}

proptest! {
    #[test]
    fn pascal_identity(n in 2u32..=64, k in 1u32..64) {
        prop_assume!(k < n);
        prop_assert_eq!(
            choose(n, k).unwrap(),
            choose(n - 1, k - 1).unwrap() + choose(n - 1, k).unwrap()
        );
    }

    #[test]
    fn rank_round_trip(n in 1u32..=64, seed in any::<u64>()) {
        let rank = if n == 64 { seed } else { seed % (1 << n) };
        let b = to(rank, Some(n)).unwrap();
        prop_assert_eq!(b.len(), n);
        prop_assert_eq!(from(&b.to_string()), Ok(rank));
    }

    #[test]
    fn pattern_round_trip(b in pattern()) {
        let rank = from(&b.to_string()).unwrap();
        prop_assert_eq!(to(rank, Some(b.len())), Ok(b));
    }

    #[test]
    fn population_orders_ranks(a in pattern(), bits in any::<u64>()) {
        let codec = Codec::new(a.len()).unwrap();
        let mask = if a.len() == 64 { u64::MAX } else { (1 << a.len()) - 1 };
        let b = BitPattern::new(bits & mask, a.len()).unwrap();
        let (ra, rb) = (codec.rank(&a).unwrap(), codec.rank(&b).unwrap());
        if a.count_ones() < b.count_ones() {
            prop_assert!(ra < rb);
        }
        if a.count_ones() == b.count_ones() {
            prop_assert_eq!(ra.cmp(&rb), a.cmp(&b));
        }
    }

    #[test]
    fn successor_preserves_population(b in pattern()) {
        match next(&b) {
            Ok(s) => {
                prop_assert_eq!(s.len(), b.len());
                prop_assert_eq!(s.count_ones(), b.count_ones());
                prop_assert!(from(&s.to_string()).unwrap() > from(&b.to_string()).unwrap());
            }
            Err(e) => {
                prop_assert_eq!(e, Error::NoSuccessor);
                // Only the top pattern of each class has no successor.
                let k = b.count_ones();
                let top = if k == 0 { 0 } else { u64::MAX << (64 - k) >> (64 - b.len()) };
                prop_assert_eq!(b.bits(), top);
            }
        }
    }

    #[test]
    fn succ_is_rank_plus_one(b in pattern()) {
        let rank = from(&b.to_string()).unwrap();
        match succ(&b) {
            Ok(s) => prop_assert_eq!(from(&s.to_string()), Ok(rank + 1)),
            Err(_) => prop_assert_eq!(b.count_ones(), b.len()),
        }
    }
}

#[test]
fn version_is_exposed() {
    assert!(!bankers::VERSION.is_empty());
}
