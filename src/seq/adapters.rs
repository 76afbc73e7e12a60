use std::collections::VecDeque;

use super::*;

/// Last-in first-out adapter over an [`ArrayList`].
///
/// Algorithms return stacks when the natural reading order is the pop order,
/// e.g. [`Graph::topological_order`](crate::graph::Graph::topological_order) or
/// [`Graph::shortest_path`](crate::graph::Graph::shortest_path).
#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    list: ArrayList<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self {
            list: ArrayList::new(),
        }
    }

    /// Puts `element` on top
    pub fn push(&mut self, element: T) {
        self.list.add_last(element);
    }

    /// Removes the top element, `None` if empty
    pub fn pop(&mut self) -> Option<T> {
        self.list.remove_last().ok()
    }

    /// Returns the top element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.list.last_element().ok()
    }

    pub fn size(&self) -> usize {
        self.list.size()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Iterates from the top to the bottom, i.e. in pop order
    pub fn iter(&self) -> std::iter::Rev<std::slice::Iter<'_, T>> {
        self.list.iter().rev()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = std::iter::Rev<std::vec::IntoIter<T>>;

    /// Drains the stack in pop order
    fn into_iter(self) -> Self::IntoIter {
        self.list.into_vec().into_iter().rev()
    }
}

/// First-in first-out adapter over a [`VecDeque`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Queue<T> {
    deque: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            deque: VecDeque::new(),
        }
    }

    /// Appends `element` at the back
    pub fn enqueue(&mut self, element: T) {
        self.deque.add_last(element);
    }

    /// Removes the front element, `None` if empty
    pub fn dequeue(&mut self) -> Option<T> {
        self.deque.remove_first().ok()
    }

    /// Returns the front element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.deque.first_element().ok()
    }

    pub fn size(&self) -> usize {
        self.deque.size()
    }

    pub fn is_empty(&self) -> bool {
        self.deque.is_empty()
    }

    /// Iterates from front to back
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, T> {
        self.deque.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn stack_is_lifo() {
        let mut stack = Stack::new();
        assert!(stack.pop().is_none());
        assert!(stack.peek().is_none());

        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.size(), 3);
        assert_eq!(stack.peek(), Some(&3));
        assert_eq!(stack.iter().copied().collect_vec(), vec![3, 2, 1]);
        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.into_iter().collect_vec(), vec![2, 1]);
    }

    #[test]
    fn queue_is_fifo() {
        let mut queue = Queue::new();
        assert!(queue.dequeue().is_none());

        queue.enqueue('a');
        queue.enqueue('b');
        assert_eq!(queue.peek(), Some(&'a'));
        assert_eq!(queue.dequeue(), Some('a'));
        queue.enqueue('c');
        assert_eq!(queue.iter().collect::<String>(), "bc");
        assert_eq!(queue.size(), 2);
    }
}
