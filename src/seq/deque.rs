use std::collections::VecDeque;

use super::*;

impl<T> Sequence<T> for VecDeque<T> {
    fn with_capacity(capacity: usize) -> Self {
        VecDeque::with_capacity(capacity)
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn add_first(&mut self, element: T) {
        self.push_front(element);
    }

    fn add_last(&mut self, element: T) {
        self.push_back(element);
    }

    fn insert_element(&mut self, element: T, pos: usize) -> Result<()> {
        let index = insertion_index(pos, self.len())?;
        self.insert(index, element);
        Ok(())
    }

    fn delete_element(&mut self, pos: usize) -> Result<T> {
        let index = element_index(pos, self.len())?;
        self.remove(index).ok_or(ContainerError::EmptyContainer)
    }

    fn remove_first(&mut self) -> Result<T> {
        self.pop_front().ok_or(ContainerError::EmptyContainer)
    }

    fn remove_last(&mut self) -> Result<T> {
        self.pop_back().ok_or(ContainerError::EmptyContainer)
    }

    fn get_element(&self, pos: usize) -> Result<&T> {
        let index = element_index(pos, self.len())?;
        self.get(index).ok_or(ContainerError::EmptyContainer)
    }

    fn change_info(&mut self, pos: usize, element: T) -> Result<T> {
        let index = element_index(pos, self.len())?;
        Ok(std::mem::replace(&mut self[index], element))
    }

    fn exchange(&mut self, pos1: usize, pos2: usize) -> Result<()> {
        let i = element_index(pos1, self.len())?;
        let j = element_index(pos2, self.len())?;
        self.swap(i, j);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deque_is_a_sequence() {
        let mut deque: VecDeque<u32> = Sequence::with_capacity(4);
        deque.add_last(2);
        deque.add_first(1);
        deque.insert_element(3, 3).unwrap();

        assert_eq!(deque.size(), 3);
        assert_eq!(deque.get_element(3), Ok(&3));
        assert_eq!(deque.is_present(&2), Ok(Some(2)));

        let tail = deque.sublist(2, 2).unwrap();
        assert_eq!(tail, VecDeque::from([2, 3]));

        assert_eq!(deque.remove_first(), Ok(1));
        assert_eq!(deque.remove_last(), Ok(3));
        assert_eq!(deque.delete_element(1), Ok(2));
        assert_eq!(deque.delete_element(1), Err(ContainerError::EmptyContainer));
    }
}
