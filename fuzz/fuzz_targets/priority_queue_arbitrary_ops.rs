#![no_main]

use algoviz::ds::PriorityQueue;
use algoviz::error::VizError;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary push/pop/peek/clear sequences on PriorityQueue
//
// A sorted Vec serves as the model; every pop must return the model's
// minimum priority.
fuzz_target!(|data: &[u8]| {
    let mut queue: PriorityQueue<u8, u8> = PriorityQueue::new();
    let mut model: Vec<u8> = Vec::new();

    for chunk in data.chunks_exact(2) {
        let op = chunk[0] % 5;
        let value = chunk[1];

        match op {
            0 | 1 => {
                // push (twice as likely as pop)
                queue.push(value, value);
                model.push(value);
            },
            2 => {
                // pop
                match queue.pop() {
                    Ok((item, priority)) => {
                        assert_eq!(item, priority);
                        let min = *model.iter().min().unwrap();
                        assert_eq!(priority, min);
                        let pos = model.iter().position(|&p| p == min).unwrap();
                        model.swap_remove(pos);
                    },
                    Err(err) => {
                        assert_eq!(err, VizError::EmptyQueue);
                        assert!(model.is_empty());
                    },
                }
            },
            3 => {
                // peek
                let peeked = queue.peek().map(|entry| entry.priority);
                assert_eq!(peeked, model.iter().min().copied());
            },
            4 => {
                if value % 16 == 0 {
                    queue.clear();
                    model.clear();
                }
            },
            _ => unreachable!(),
        }

        assert_eq!(queue.len(), model.len());
        assert_eq!(queue.is_empty(), model.is_empty());
        queue.check_invariants().unwrap();
    }
});
