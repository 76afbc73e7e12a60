use std::fmt::{Debug, Display};

use itertools::Itertools;

use super::*;

/// Contiguous [`Sequence`] with amortized `O(1)` appends.
/// Inserting or deleting at an arbitrary position costs `O(n)`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ArrayList<T> {
    elements: Vec<T>,
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ArrayList<T> {
    /// Creates an empty list
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Returns the number of elements the list can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Iterates from the first to the last element
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Iterates mutably from the first to the last element
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.elements.iter_mut()
    }

    /// Returns the elements as a 0-indexed slice
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns the elements as a mutable 0-indexed slice
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.elements
    }

    /// Consumes the list and returns its elements in order
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T> Sequence<T> for ArrayList<T> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    fn size(&self) -> usize {
        self.elements.len()
    }

    fn add_first(&mut self, element: T) {
        self.elements.insert(0, element);
    }

    fn add_last(&mut self, element: T) {
        self.elements.push(element);
    }

    fn insert_element(&mut self, element: T, pos: usize) -> Result<()> {
        let index = insertion_index(pos, self.size())?;
        self.elements.insert(index, element);
        Ok(())
    }

    fn delete_element(&mut self, pos: usize) -> Result<T> {
        let index = element_index(pos, self.size())?;
        Ok(self.elements.remove(index))
    }

    fn remove_last(&mut self) -> Result<T> {
        self.elements.pop().ok_or(ContainerError::EmptyContainer)
    }

    fn get_element(&self, pos: usize) -> Result<&T> {
        let index = element_index(pos, self.size())?;
        Ok(&self.elements[index])
    }

    fn change_info(&mut self, pos: usize, element: T) -> Result<T> {
        let index = element_index(pos, self.size())?;
        Ok(std::mem::replace(&mut self.elements[index], element))
    }

    fn exchange(&mut self, pos1: usize, pos2: usize) -> Result<()> {
        let i = element_index(pos1, self.size())?;
        let j = element_index(pos2, self.size())?;
        self.elements.swap(i, j);
        Ok(())
    }

    fn is_present(&self, element: &T) -> Result<Option<usize>>
    where
        T: PartialEq,
    {
        if self.elements.is_empty() {
            return Err(ContainerError::EmptyContainer);
        }
        Ok(self
            .elements
            .iter()
            .position(|x| x == element)
            .map(|i| i + 1))
    }
}

impl<T: Debug> Debug for ArrayList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.elements.iter()).finish()
    }
}

impl<T: Display> Display for ArrayList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.elements.iter().join(", "))
    }
}

impl<T> From<Vec<T>> for ArrayList<T> {
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.extend(iter);
    }
}

impl<T> IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
