use crate::compare::*;
use crate::error::QueueError;
use crate::heap::*;

mod size_test;
mod merge_test;
mod drop_test;

pub mod counter {
    use std::cell::Cell;
    use std::cmp::Ordering;
    use std::rc::Rc;

    /// Number of `Tracked` values alive for one test.
    #[derive(Clone, Default)]
    pub struct Ledger(Rc<Cell<usize>>);

    impl Ledger {
        pub fn live(&self) -> usize {
            self.0.get()
        }

        pub fn track(&self, key: i32) -> Tracked {
            self.0.set(self.0.get() + 1);
            Tracked {
                key,
                ledger: self.clone(),
            }
        }
    }

    pub struct Tracked {
        pub key: i32,
        ledger: Ledger,
    }

    impl Clone for Tracked {
        fn clone(&self) -> Self {
            self.ledger.track(self.key)
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            let live = &self.ledger.0;
            live.set(live.get() - 1);
        }
    }

    impl PartialEq for Tracked {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Tracked {}

    impl PartialOrd for Tracked {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Tracked {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }
}
