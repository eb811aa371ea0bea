//! Property tests for the callback registry
//!
//! Drives the registry through arbitrary register/unregister/notify
//! sequences and checks delivery counts against a set-based model: an
//! observer receives a notification exactly when it is in the model set at
//! the moment of delivery, and never more than once per notification.

use chorus_aggregator::CallbackRegistry;
use proptest::prelude::*;
use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

trait Ping: Send + Sync {
    fn ping(&self);
}

struct Counter(AtomicUsize);

impl Ping for Counter {
    fn ping(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Debug, Clone)]
enum Op {
    Register(usize),
    Unregister(usize),
    Notify,
}

fn op_strategy(observers: usize) -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..observers).prop_map(Op::Register),
        (0..observers).prop_map(Op::Unregister),
        Just(Op::Notify),
    ]
}

proptest! {
    #[test]
    fn delivery_matches_set_model(ops in proptest::collection::vec(op_strategy(4), 1..64)) {
        let registry: Arc<CallbackRegistry<dyn Ping>> = Arc::new(CallbackRegistry::new());
        let observers: Vec<Arc<Counter>> =
            (0..4).map(|_| Arc::new(Counter(AtomicUsize::new(0)))).collect();
        let handles: Vec<Arc<dyn Ping>> =
            observers.iter().map(|o| o.clone() as Arc<dyn Ping>).collect();

        let mut model: HashSet<usize> = HashSet::new();
        let mut expected = vec![0usize; observers.len()];

        for op in ops {
            match op {
                Op::Register(i) => {
                    let newly = registry.register(&handles[i]);
                    prop_assert_eq!(newly, model.insert(i));
                }
                Op::Unregister(i) => {
                    registry.unregister(&handles[i]);
                    model.remove(&i);
                }
                Op::Notify => {
                    registry.notify(|o| o.ping());
                    for &i in &model {
                        expected[i] += 1;
                    }
                }
            }
            prop_assert_eq!(registry.len(), model.len());
        }

        for (observer, want) in observers.iter().zip(&expected) {
            prop_assert_eq!(observer.0.load(Ordering::SeqCst), *want);
        }
    }
}
