//! Doubling capacity strategies.
//!
//! Same item placement and range bookkeeping as the [minimal](super::minimal)
//! strategies, but a reallocation adds at least the current capacity again.
//! Repeated single-slot growth at the tail or at a split point then costs
//! amortized constant moves per slot. Head growth keeps the requested head
//! slack exact and puts the surplus after the content.
//!
//! Initialization is exact: the final size is known up front.

growth_strategies!(super::growth::at_least_double =>
    DoublingInitialCapacityStrategy,
    DoublingHeadCapacityStrategy,
    DoublingTailCapacityStrategy,
    DoublingSplitCapacityStrategy,
);
