//! One-element lookahead shared by cursors that must pull ahead to answer
//! `has_more`.
//!
//! The pulled element is parked in a mutex so that `has_more` can stay a
//! `&self` read. Once the source reports its end the slot stays `Ended`.

use parking_lot::Mutex;

use crate::error::{Failure, Result};

enum Slot<T> {
    Unknown,
    Ready(T),
    Failed(Failure),
    Ended,
}

struct State<S, T> {
    source: S,
    slot: Slot<T>,
}

impl<S, T> State<S, T> {
    fn fill<P>(&mut self, pull: P)
    where
        P: FnOnce(&mut S) -> Result<Option<T>>,
    {
        if matches!(self.slot, Slot::Unknown) {
            self.slot = match pull(&mut self.source) {
                Ok(Some(item)) => Slot::Ready(item),
                Ok(None) => Slot::Ended,
                Err(failure) => Slot::Failed(failure),
            };
        }
    }
}

pub(crate) struct Lookahead<S, T> {
    state: Mutex<State<S, T>>,
}

impl<S, T> Lookahead<S, T> {
    pub(crate) fn new(source: S) -> Self {
        Self {
            state: Mutex::new(State {
                source,
                slot: Slot::Unknown,
            }),
        }
    }

    /// Pulls one element ahead if needed and reports whether one is parked.
    ///
    /// A parked failure is reported here and stays parked until `advance`
    /// hands it out.
    pub(crate) fn has_more<P>(&self, pull: P) -> Result<bool>
    where
        P: FnOnce(&mut S) -> Result<Option<T>>,
    {
        let mut state = self.state.lock();
        state.fill(pull);
        match &state.slot {
            Slot::Ready(_) => Ok(true),
            Slot::Ended => Ok(false),
            Slot::Failed(failure) => Err(failure.clone()),
            Slot::Unknown => unreachable!("slot is filled before it is read"),
        }
    }

    pub(crate) fn advance<P>(&mut self, pull: P) -> Result<T>
    where
        P: FnOnce(&mut S) -> Result<Option<T>>,
    {
        let state = self.state.get_mut();
        state.fill(pull);
        match std::mem::replace(&mut state.slot, Slot::Unknown) {
            Slot::Ready(item) => Ok(item),
            Slot::Failed(failure) => Err(failure),
            Slot::Ended | Slot::Unknown => {
                state.slot = Slot::Ended;
                #[cfg(feature = "tracing")]
                tracing::trace!("cursor: advance past the end");
                Err(Failure::Exhausted)
            }
        }
    }

    pub(crate) fn into_source(self) -> S {
        self.state.into_inner().source
    }
}

impl<S: std::fmt::Debug, T> std::fmt::Debug for Lookahead<S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.lock();
        let slot = match state.slot {
            Slot::Unknown => "unknown",
            Slot::Ready(_) => "ready",
            Slot::Failed(_) => "failed",
            Slot::Ended => "ended",
        };
        f.debug_struct("Lookahead")
            .field("source", &state.source)
            .field("slot", &slot)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn pull_from(iter: &mut std::vec::IntoIter<i32>) -> Result<Option<i32>> {
        Ok(iter.next())
    }

    #[test]
    fn test_has_more_pulls_once() {
        let pulls = Cell::new(0);
        let lookahead = Lookahead::new(vec![1, 2].into_iter());

        for _ in 0..3 {
            let more = lookahead.has_more(|it| {
                pulls.set(pulls.get() + 1);
                pull_from(it)
            });
            assert!(more.unwrap());
        }
        assert_eq!(pulls.get(), 1);
    }

    #[test]
    fn test_end_is_permanent() {
        let mut lookahead = Lookahead::new(Vec::<i32>::new().into_iter());
        assert!(!lookahead.has_more(pull_from).unwrap());
        assert!(lookahead.advance(pull_from).unwrap_err().is_exhausted());
        // A source that would resume is never asked again.
        assert!(lookahead.advance(|_| Ok(Some(99))).unwrap_err().is_exhausted());
        assert!(!lookahead.has_more(|_| Ok(Some(99))).unwrap());
    }

    #[test]
    fn test_parked_failure_is_handed_out_once() {
        let mut lookahead = Lookahead::new(vec![7].into_iter());
        let failing = |_: &mut std::vec::IntoIter<i32>| Err(Failure::other("flaky"));

        assert!(lookahead.has_more(failing).is_err());
        assert!(lookahead.has_more(pull_from).is_err());
        assert!(lookahead.advance(pull_from).is_err());
        assert_eq!(lookahead.advance(pull_from).unwrap(), 7);
    }
}
