//! Minimal capacity strategies.
//!
//! These never allocate a slot that the current operation does not need:
//!
//! - head: grows by the requested head capacity and relocates the content so
//!   exactly that many free slots precede it,
//! - tail: grows by the missing tail capacity, content stays put,
//! - split: shifts the right part in place when the tail slack suffices,
//!   otherwise grows by the missing tail capacity.
//!
//! Repeated single-slot growth therefore reallocates every time. Callers that
//! know the final size should ask for it once.

growth_strategies!(super::growth::exact =>
    MinimalInitialCapacityStrategy,
    MinimalHeadCapacityStrategy,
    MinimalTailCapacityStrategy,
    MinimalSplitCapacityStrategy,
);
