// Purpose: Closed-form correction of the middle reference after a mutation at one end.

// =====================
// Type Definitions
// =====================

/// A structural change that may move the middle element to a neighbouring node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutation {
    PushFront,
    PushBack,
    PopFront,
    PopBack,
    /// Removal of the middle node itself. The shift names the neighbour that takes its place.
    PopMiddle,
    /// In-place reversal, evaluated on the orientation before the flip.
    Reverse,
}

/// How far, and in which direction, `body` has to step to stay at index `len / 2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shift {
    Stay,
    TowardFront,
    TowardBack,
}

// =====================
// Functions
// =====================

/// Returns the one-step adjustment of the middle reference for a deque that held
/// `old_count` elements right before `mutation`.
///
/// Mutating one end shifts the logical index of every other element by one. Whether the
/// target index `count / 2` follows the node currently pointed to depends only on the
/// parity of `old_count`:
///
/// | mutation    | even `old_count` | odd `old_count` |
/// |-------------|------------------|-----------------|
/// | `PushFront` | `TowardFront`    | `Stay`          |
/// | `PushBack`  | `Stay`           | `TowardBack`    |
/// | `PopFront`  | `Stay`           | `TowardBack`    |
/// | `PopBack`   | `TowardFront`    | `Stay`          |
/// | `PopMiddle` | `TowardFront`    | `TowardBack`    |
/// | `Reverse`   | `TowardFront`    | `Stay`          |
///
/// Not meaningful for `old_count == 0` (every operation initializes the chain instead)
/// nor for pops with `old_count == 1` (the chain is torn down).
pub const fn body_shift(old_count: usize, mutation: Mutation) -> Shift {
    let even = old_count % 2 == 0;
    match (mutation, even) {
        (Mutation::PushFront, true) => Shift::TowardFront,
        (Mutation::PushFront, false) => Shift::Stay,
        (Mutation::PushBack, true) => Shift::Stay,
        (Mutation::PushBack, false) => Shift::TowardBack,
        (Mutation::PopFront, true) => Shift::Stay,
        (Mutation::PopFront, false) => Shift::TowardBack,
        (Mutation::PopBack, true) => Shift::TowardFront,
        (Mutation::PopBack, false) => Shift::Stay,
        (Mutation::PopMiddle, true) => Shift::TowardFront,
        (Mutation::PopMiddle, false) => Shift::TowardBack,
        (Mutation::Reverse, true) => Shift::TowardFront,
        (Mutation::Reverse, false) => Shift::Stay,
    }
}

/// Zero-based index of the element reported by `peek_middle` for a deque of `count` elements.
pub const fn middle_index(count: usize) -> usize {
    count / 2
}

/// Zero-based index at which `push_middle` places a new element into a deque of `count` elements.
pub const fn insertion_index(count: usize) -> usize {
    (count + 1) / 2
}

// =====================
// Tests
// =====================
