//! Pipeline Latch Interface.
//!
//! Common operations on the inter-stage latches used by the stall and
//! flush logic.

/// Represents a pipeline latch (inter-stage buffer).
pub trait PipelineLatch {
    /// Clears the latch to a bubble.
    fn flush(&mut self);

    /// Clears the latch, reporting whether an instruction was discarded.
    ///
    /// Used on control-hazard flushes, where discarded instructions are counted.
    fn squash(&mut self) -> bool;

    /// Checks if the latch holds a bubble.
    fn is_empty(&self) -> bool;
}
