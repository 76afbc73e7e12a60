/*!
# Sequence Containers

A [`Sequence`] is a resizable, **1-indexed** ordered container: position `1` is the first
element and position `size()` the last, position `0` is never valid.
Every other structure of this crate is built on top of it.

Provided implementations:
- [`ArrayList`]: contiguous storage with amortized `O(1)` appends,
- [`VecDeque`](std::collections::VecDeque): `O(1)` at both ends,

and two adapters with restricted interfaces:
- [`Stack`]: last-in first-out,
- [`Queue`]: first-in first-out.

# Errors
Positional operations validate their arguments and fail with a [`ContainerError`]:
operations that need an existing element report [`ContainerError::EmptyContainer`] on an
empty container before looking at the position, and [`ContainerError::InvalidPosition`]
otherwise.
*/

use crate::error::{ContainerError, Result};

mod adapters;
mod array_list;
mod deque;

pub use adapters::*;
pub use array_list::*;

/// Validates the position of an existing element and returns its 0-based index.
pub(crate) fn element_index(pos: usize, size: usize) -> Result<usize> {
    if size == 0 {
        return Err(ContainerError::EmptyContainer);
    }
    if pos == 0 || pos > size {
        return Err(ContainerError::InvalidPosition { pos, max: size });
    }
    Ok(pos - 1)
}

/// Validates an insertion position (`1..=size + 1`) and returns its 0-based index.
pub(crate) fn insertion_index(pos: usize, size: usize) -> Result<usize> {
    if pos == 0 || pos > size + 1 {
        return Err(ContainerError::InvalidPosition { pos, max: size + 1 });
    }
    Ok(pos - 1)
}

/// Resizable, 1-indexed ordered container.
pub trait Sequence<T>: Sized {
    /// Creates an empty container with room for `capacity` elements.
    fn with_capacity(capacity: usize) -> Self;

    /// Returns the number of elements
    fn size(&self) -> usize;

    /// Returns *true* if the container holds no element
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Inserts `element` in front of the first element.
    fn add_first(&mut self, element: T);

    /// Appends `element` after the last element.
    fn add_last(&mut self, element: T);

    /// Inserts `element` so that it ends up at position `pos`, shifting later elements back.
    ///
    /// # Errors
    /// Fails with [`ContainerError::InvalidPosition`] unless `1 <= pos <= size() + 1`.
    fn insert_element(&mut self, element: T, pos: usize) -> Result<()>;

    /// Removes and returns the element at `pos`.
    ///
    /// # Errors
    /// Fails with [`ContainerError::EmptyContainer`] if empty and with
    /// [`ContainerError::InvalidPosition`] unless `1 <= pos <= size()`.
    fn delete_element(&mut self, pos: usize) -> Result<T>;

    /// Removes and returns the first element.
    ///
    /// # Errors
    /// Fails with [`ContainerError::EmptyContainer`] if empty.
    fn remove_first(&mut self) -> Result<T> {
        self.delete_element(1)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    /// Fails with [`ContainerError::EmptyContainer`] if empty.
    fn remove_last(&mut self) -> Result<T> {
        self.delete_element(self.size())
    }

    /// Returns a reference to the element at `pos`.
    ///
    /// # Errors
    /// Same validation as [`Sequence::delete_element`].
    fn get_element(&self, pos: usize) -> Result<&T>;

    /// Returns the first element.
    fn first_element(&self) -> Result<&T> {
        self.get_element(1)
    }

    /// Returns the last element.
    fn last_element(&self) -> Result<&T> {
        self.get_element(self.size())
    }

    /// Replaces the element at `pos` and returns the old one.
    ///
    /// # Errors
    /// Same validation as [`Sequence::delete_element`].
    fn change_info(&mut self, pos: usize, element: T) -> Result<T>;

    /// Swaps the elements at `pos1` and `pos2`.
    ///
    /// # Errors
    /// Same validation as [`Sequence::delete_element`], applied to both positions.
    fn exchange(&mut self, pos1: usize, pos2: usize) -> Result<()>;

    /// Returns the position of the first element equal to `element`,
    /// scanning front to back, or `None` if there is none.
    ///
    /// # Errors
    /// Fails with [`ContainerError::EmptyContainer`] if empty.
    fn is_present(&self, element: &T) -> Result<Option<usize>>
    where
        T: PartialEq,
    {
        if self.is_empty() {
            return Err(ContainerError::EmptyContainer);
        }
        for pos in 1..=self.size() {
            if self.get_element(pos)? == element {
                return Ok(Some(pos));
            }
        }
        Ok(None)
    }

    /// Returns a new container holding the `n` elements starting at `pos`.
    /// If `n >= size()` the result holds the whole container regardless of `pos`.
    ///
    /// The result never aliases `self`.
    ///
    /// # Errors
    /// - [`ContainerError::NullElement`] if `n == 0`,
    /// - [`ContainerError::EmptyContainer`] / [`ContainerError::InvalidPosition`] if `pos`
    ///   is not a valid element position or the range ends after the last element.
    fn sublist(&self, pos: usize, n: usize) -> Result<Self>
    where
        T: Clone,
    {
        if n == 0 {
            return Err(ContainerError::NullElement);
        }

        let size = self.size();
        let (start, len) = if n >= size {
            (1, size)
        } else {
            element_index(pos, size)?;
            let last = pos + n - 1;
            if last > size {
                return Err(ContainerError::InvalidPosition {
                    pos: last,
                    max: size,
                });
            }
            (pos, n)
        };

        let mut sub = Self::with_capacity(len);
        for p in start..start + len {
            sub.add_last(self.get_element(p)?.clone());
        }
        Ok(sub)
    }
}
