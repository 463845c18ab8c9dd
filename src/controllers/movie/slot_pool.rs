//! Counting token pool that gates how many frame jobs run at once.
//!
//! The pool is owned by whoever drives the batch and lent to the scheduler by
//! reference. A slot is taken with [`SlotPool::acquire`] and handed back when
//! the returned [`SlotPermit`] is dropped, on success, failure and unwind alike.

use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};

use crate::core::errors::ConfigError;

#[derive(Debug, Default)]
struct SlotState {
    active: usize,
    peak: usize,
}

#[derive(Debug)]
pub struct SlotPool {
    capacity: usize,
    state: Mutex<SlotState>,
    released: Condvar,
}

impl SlotPool {
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroConcurrency);
        }

        Ok(Self {
            capacity,
            state: Mutex::new(SlotState::default()),
            released: Condvar::new(),
        })
    }

    /// Blocks until a slot is free, then takes it.
    pub fn acquire(&self) -> SlotPermit<'_> {
        let mut state = self.lock();
        while state.active >= self.capacity {
            state = self
                .released
                .wait(state)
                .unwrap_or_else(PoisonError::into_inner);
        }
        self.take(&mut state);

        SlotPermit { pool: self }
    }

    /// Takes a slot only if one is free right now.
    pub fn try_acquire(&self) -> Option<SlotPermit<'_>> {
        let mut state = self.lock();
        if state.active >= self.capacity {
            return None;
        }
        self.take(&mut state);

        Some(SlotPermit { pool: self })
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slots currently held.
    #[must_use]
    pub fn active(&self) -> usize {
        self.lock().active
    }

    /// Highest number of slots ever held at the same time.
    #[must_use]
    pub fn peak(&self) -> usize {
        self.lock().peak
    }

    fn take(&self, state: &mut SlotState) {
        state.active += 1;
        state.peak = state.peak.max(state.active);
        debug_assert!(state.active <= self.capacity);
    }

    fn release(&self) {
        let mut state = self.lock();
        state.active -= 1;
        drop(state);
        self.released.notify_one();
    }

    // Counters stay consistent across a panic, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, SlotState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// One held slot. Dropping it frees the slot.
#[derive(Debug)]
#[must_use = "the slot is released as soon as the permit is dropped"]
pub struct SlotPermit<'a> {
    pool: &'a SlotPool,
}

impl Drop for SlotPermit<'_> {
    fn drop(&mut self) {
        self.pool.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_zero_capacity_is_rejected() {
        assert_eq!(SlotPool::new(0).err(), Some(ConfigError::ZeroConcurrency));
    }

    #[test]
    fn test_permits_are_counted_and_released_on_drop() {
        let pool = SlotPool::new(2).unwrap();

        let first = pool.acquire();
        let second = pool.acquire();
        assert_eq!(pool.active(), 2);
        assert!(pool.try_acquire().is_none());

        drop(first);
        assert_eq!(pool.active(), 1);
        assert!(pool.try_acquire().is_some());

        drop(second);
        assert_eq!(pool.active(), 0);
        assert_eq!(pool.peak(), 2);
    }

    #[test]
    fn test_acquire_blocks_until_a_slot_is_released() {
        let pool = SlotPool::new(1).unwrap();
        let held = pool.acquire();
        let entered = AtomicUsize::new(0);

        thread::scope(|scope| {
            scope.spawn(|| {
                let _permit = pool.acquire();
                entered.fetch_add(1, Ordering::SeqCst);
            });

            thread::sleep(Duration::from_millis(50));
            assert_eq!(entered.load(Ordering::SeqCst), 0);
            drop(held);
        });

        assert_eq!(entered.load(Ordering::SeqCst), 1);
        assert_eq!(pool.active(), 0);
    }

    #[test]
    fn test_panicking_holder_still_releases() {
        let pool = SlotPool::new(1).unwrap();

        let result = thread::scope(|scope| {
            scope
                .spawn(|| {
                    let _permit = pool.acquire();
                    panic!("job blew up");
                })
                .join()
        });

        assert!(result.is_err());
        assert_eq!(pool.active(), 0);
        let _again = pool.acquire();
    }

    #[test]
    fn test_contended_pool_never_exceeds_capacity() {
        let pool = SlotPool::new(3).unwrap();

        thread::scope(|scope| {
            for _ in 0..16 {
                scope.spawn(|| {
                    for _ in 0..20 {
                        let _permit = pool.acquire();
                        assert!(pool.active() <= 3);
                        thread::yield_now();
                    }
                });
            }
        });

        assert_eq!(pool.active(), 0);
        assert!(pool.peak() <= 3);
    }
}
