/*!
# Errors

Failures raised by the sequence containers. Tables, heaps and the adapters built on
them report absence through `Option` instead; the graph engine silently ignores
mutations that refer to unknown vertices or duplicate edges.
*/

use thiserror::Error;

/// The three failure kinds of a positional container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// A 1-based position outside `1..=max`.
    #[error("position {pos} is outside the valid range 1..={max}")]
    InvalidPosition { pos: usize, max: usize },

    /// The operation needs at least one element.
    #[error("operation requires a non-empty container")]
    EmptyContainer,

    /// A required argument (e.g. the element count of a sublist) is absent.
    #[error("required element is absent")]
    NullElement,
}

/// Shorthand used throughout the container layer.
pub type Result<T> = std::result::Result<T, ContainerError>;
