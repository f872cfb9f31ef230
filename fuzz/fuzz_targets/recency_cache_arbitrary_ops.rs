#![no_main]

use algoviz::ds::{Access, RecencyCache};
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary access/pop_lru/clear sequences on RecencyCache
//
// The model is a Vec ordered from least to most recently used.
fuzz_target!(|data: &[u8]| {
    let Some((&capacity, ops)) = data.split_first() else {
        return;
    };
    let capacity = usize::from(capacity % 16);
    let mut cache: RecencyCache<u8> = RecencyCache::new(capacity);
    let mut model: Vec<u8> = Vec::new();

    for chunk in ops.chunks_exact(2) {
        let op = chunk[0] % 4;
        let key = chunk[1] % 32;

        match op {
            0 | 1 => {
                let access = cache.access(key);
                if let Some(pos) = model.iter().position(|&k| k == key) {
                    assert_eq!(access, Access::Hit);
                    model.remove(pos);
                    model.push(key);
                } else if capacity == 0 {
                    assert_eq!(access, Access::Miss { evicted: None });
                } else {
                    let expected = if model.len() == capacity {
                        Some(model.remove(0))
                    } else {
                        None
                    };
                    assert_eq!(access, Access::Miss { evicted: expected });
                    model.push(key);
                }
            },
            2 => {
                let popped = cache.pop_lru();
                let expected = if model.is_empty() {
                    None
                } else {
                    Some(model.remove(0))
                };
                assert_eq!(popped, expected);
            },
            3 => {
                if key == 0 {
                    cache.clear();
                    model.clear();
                }
            },
            _ => unreachable!(),
        }

        assert!(cache.len() <= capacity);
        assert_eq!(cache.keys().copied().collect::<Vec<_>>(), model);
        cache.check_invariants().unwrap();
    }
});
