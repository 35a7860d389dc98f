//! Error types for fallible growth.

use core::alloc::Layout;

/// The error returned by the `try_*` insertion methods when the table could
/// not grow.
///
/// The table is left exactly as it was before the failing call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TryReserveError {
    /// Doubling the bucket store would overflow `usize`, or the store would
    /// exceed `isize::MAX` bytes.
    #[error("capacity overflow while growing the bucket store")]
    CapacityOverflow,

    /// The allocator refused to provide memory for the new bucket store.
    #[error("memory allocation of {} bytes failed", .layout.size())]
    AllocError {
        /// The layout of the allocation that failed.
        layout: Layout,
    },
}
