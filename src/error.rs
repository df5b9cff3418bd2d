use core::alloc::Layout;

use thiserror::Error;

/// The error type for `try_put` and `try_reserve` on
/// [`HashTable`](crate::HashTable).
///
/// Both variants are raised before the table is modified: a failed growth
/// leaves every entry where it was.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum TryReserveError {
    /// The requested number of home slots cannot be addressed by the hash
    /// function, or the slot array would not fit in the address space.
    #[error("hash table capacity overflow")]
    CapacityOverflow,

    /// The allocator returned an error.
    #[error("failed to allocate {} bytes for the slot array", .layout.size())]
    AllocError {
        /// The layout of the allocation request that failed.
        layout: Layout,
    },
}

/// Whether allocation failures are returned to the caller or diverge.
#[derive(Clone, Copy)]
pub(crate) enum Fallibility {
    Fallible,
    Infallible,
}

impl Fallibility {
    #[cold]
    pub(crate) fn capacity_overflow(self) -> TryReserveError {
        match self {
            Fallibility::Fallible => TryReserveError::CapacityOverflow,
            Fallibility::Infallible => panic!("hash table capacity overflow"),
        }
    }

    #[cold]
    pub(crate) fn alloc_err(self, layout: Layout) -> TryReserveError {
        match self {
            Fallibility::Fallible => TryReserveError::AllocError { layout },
            Fallibility::Infallible => alloc::alloc::handle_alloc_error(layout),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn fallible_returns_errors() {
        assert_eq!(
            Fallibility::Fallible.capacity_overflow(),
            TryReserveError::CapacityOverflow
        );

        let layout = Layout::array::<u64>(16).unwrap();
        assert_eq!(
            Fallibility::Fallible.alloc_err(layout),
            TryReserveError::AllocError { layout }
        );
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn infallible_overflow_panics() {
        let _ = Fallibility::Infallible.capacity_overflow();
    }

    #[test]
    fn messages() {
        assert_eq!(
            TryReserveError::CapacityOverflow.to_string(),
            "hash table capacity overflow"
        );

        let layout = Layout::array::<u64>(4).unwrap();
        assert_eq!(
            TryReserveError::AllocError { layout }.to_string(),
            "failed to allocate 32 bytes for the slot array"
        );
    }
}
