use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use crate::error::{Error, Result};

/// where a buffer should live
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PoolKind {
    Tcm,
    #[default]
    RamInt,
    RamExt,
}

impl PoolKind {
    fn idx(self) -> usize {
        match self {
            PoolKind::Tcm => 0,
            PoolKind::RamInt => 1,
            PoolKind::RamExt => 2,
        }
    }
}

// sizes are rounded up to a 4-byte grid, like the firmware allocator
const ALIGN: usize = 4;

fn aligned(bytes: usize) -> usize {
    (bytes + ALIGN - 1) & !(ALIGN - 1)
}

struct Ledger {
    capacity: [Option<usize>; 3],
    in_use: [usize; 3],
}

/// Byte accounting for the design pipeline and the filter contexts.
///
/// The handle is cheap to clone, all clones share one ledger. Reservations
/// are only ever taken at setup time, never on the processing path, so the
/// lock is never contended by the audio thread.
#[derive(Clone)]
pub struct MemPool {
    ledger: Arc<Mutex<Ledger>>,
}

impl MemPool {
    /// no limits, only bookkeeping
    pub fn unbounded() -> Self {
        MemPool {
            ledger: Arc::new(Mutex::new(Ledger {
                capacity: [None; 3],
                in_use: [0; 3],
            })),
        }
    }

    /// fixed budgets (in bytes) per pool kind
    pub fn with_capacity(tcm: usize, ram_int: usize, ram_ext: usize) -> Self {
        MemPool {
            ledger: Arc::new(Mutex::new(Ledger {
                capacity: [Some(tcm), Some(ram_int), Some(ram_ext)],
                in_use: [0; 3],
            })),
        }
    }

    pub fn reserve(&self, bytes: usize, kind: PoolKind) -> Result<Reservation> {
        let bytes = aligned(bytes);
        let mut ledger = self.ledger.lock();
        let i = kind.idx();
        if let Some(cap) = ledger.capacity[i] {
            if ledger.in_use[i] + bytes > cap {
                log::warn!(
                    "pool {:?} exhausted: {} requested, {} of {} in use",
                    kind,
                    bytes,
                    ledger.in_use[i],
                    cap
                );
                return Err(Error::Allocation {
                    requested: bytes,
                    pool: kind,
                });
            }
        }
        ledger.in_use[i] += bytes;
        Ok(Reservation {
            ledger: Arc::clone(&self.ledger),
            kind,
            bytes,
        })
    }

    /// Zero-initialized buffer of `len` elements, accounted against `kind`.
    pub fn alloc_zeroed<T: Copy + Default>(&self, len: usize, kind: PoolKind) -> Result<PoolBuf<T>> {
        let requested = len * std::mem::size_of::<T>();
        let lease = self.reserve(requested, kind)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|_| Error::Allocation {
            requested,
            pool: kind,
        })?;
        data.resize(len, T::default());
        Ok(PoolBuf {
            data,
            _lease: lease,
        })
    }

    pub fn in_use(&self, kind: PoolKind) -> usize {
        self.ledger.lock().in_use[kind.idx()]
    }
}

impl Default for MemPool {
    fn default() -> Self {
        MemPool::unbounded()
    }
}

/// Bytes taken from a pool, handed back on drop.
pub struct Reservation {
    ledger: Arc<Mutex<Ledger>>,
    kind: PoolKind,
    bytes: usize,
}

impl Reservation {
    pub fn bytes(&self) -> usize {
        self.bytes
    }

    pub fn kind(&self) -> PoolKind {
        self.kind
    }
}

impl Drop for Reservation {
    fn drop(&mut self) {
        let mut ledger = self.ledger.lock();
        let i = self.kind.idx();
        ledger.in_use[i] = ledger.in_use[i].saturating_sub(self.bytes);
    }
}

/// a buffer that keeps its pool reservation alive
pub struct PoolBuf<T> {
    data: Vec<T>,
    _lease: Reservation,
}

impl<T> Deref for PoolBuf<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.data
    }
}

impl<T> DerefMut for PoolBuf<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for PoolBuf<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reservation_released_on_drop() {
        let pool = MemPool::unbounded();
        {
            let buf = pool.alloc_zeroed::<i32>(10, PoolKind::Tcm).unwrap();
            assert_eq!(buf.len(), 10);
            assert!(buf.iter().all(|x| *x == 0));
            assert_eq!(pool.in_use(PoolKind::Tcm), 40);
            assert_eq!(pool.in_use(PoolKind::RamExt), 0);
        }
        assert_eq!(pool.in_use(PoolKind::Tcm), 0);
    }

    #[test]
    fn test_sizes_are_aligned() {
        let pool = MemPool::unbounded();
        let r = pool.reserve(5, PoolKind::RamInt).unwrap();
        assert_eq!(r.bytes(), 8);
        assert_eq!(pool.in_use(PoolKind::RamInt), 8);
    }

    #[test]
    fn test_exhausted_pool_fails() {
        let pool = MemPool::with_capacity(16, 0, 0);
        let _a = pool.reserve(12, PoolKind::Tcm).unwrap();
        let err = pool.alloc_zeroed::<f32>(2, PoolKind::Tcm).unwrap_err();
        assert_eq!(
            err,
            Error::Allocation {
                requested: 8,
                pool: PoolKind::Tcm
            }
        );
        // failed request leaves the ledger untouched
        assert_eq!(pool.in_use(PoolKind::Tcm), 12);
    }
}
