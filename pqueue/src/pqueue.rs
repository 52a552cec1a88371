use super::element::Element;
use super::error::PQueueError;
use super::growth::grown_capacity;
use super::heap;
use log::{debug, trace};

/// Max-heap priority queue.
///
/// `capacity` is tracked separately from the backing `Vec` so that growth
/// follows [`grown_capacity`] rather than the allocator's own strategy.
///
/// The plain operations treat misuse (popping or peeking an empty queue,
/// failing to allocate) as a broken contract and panic. The `try_*`
/// operations report the same conditions as [`PQueueError`].
#[derive(Debug)]
pub struct PQueue<V> {
    elements: Vec<Element<V>>,
    capacity: usize,
}

impl<V> PQueue<V> {
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(queue) => queue,
            Err(err) => panic!("priority queue initialization: {err}"),
        }
    }

    pub fn try_with_capacity(capacity: usize) -> Result<Self, PQueueError> {
        let mut elements = Vec::new();
        elements.try_reserve_exact(capacity)?;
        Ok(Self { elements, capacity })
    }

    pub fn push(&mut self, priority: usize, value: V) {
        if let Err(err) = self.try_push(priority, value) {
            panic!("priority queue push: {err}");
        }
    }

    /// On allocation failure the queue is left exactly as it was.
    pub fn try_push(&mut self, priority: usize, value: V) -> Result<(), PQueueError> {
        if self.len() == self.capacity {
            self.grow()?;
        }
        self.elements.push(Element::new(priority, value));
        self.sift_up(self.len() - 1);
        trace!("pushed priority {priority}, len {}", self.len());
        Ok(())
    }

    // assumes self isn't empty
    pub fn pop(&mut self) -> Element<V> {
        match self.try_pop() {
            Ok(element) => element,
            Err(err) => panic!("priority queue pop: {err}"),
        }
    }

    pub fn try_pop(&mut self) -> Result<Element<V>, PQueueError> {
        if self.is_empty() {
            return Err(PQueueError::Empty);
        }
        // the last leaf takes the root's place before sifting down
        let element = self.elements.swap_remove(heap::root());
        self.sift_down(heap::root());
        trace!("popped priority {}, len {}", element.priority, self.len());
        Ok(element)
    }

    // assumes self isn't empty
    pub fn peek(&self) -> &Element<V> {
        match self.try_peek() {
            Ok(element) => element,
            Err(err) => panic!("priority queue peek: {err}"),
        }
    }

    pub fn try_peek(&self) -> Result<&Element<V>, PQueueError> {
        self.elements.get(heap::root()).ok_or(PQueueError::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Releases the backing storage. Any values still queued are dropped.
    pub fn cleanup(self) {
        debug!(
            "releasing priority queue storage: {} live of {} slots",
            self.len(),
            self.capacity
        );
    }

    fn grow(&mut self) -> Result<(), PQueueError> {
        let capacity = grown_capacity(self.capacity);
        self.elements.try_reserve_exact(capacity - self.elements.len())?;
        debug!("growing priority queue from {} to {capacity}", self.capacity);
        self.capacity = capacity;
        Ok(())
    }

    fn priority(&self, node: usize) -> usize {
        self.elements[node].priority
    }

    // equal priorities stay put
    fn sift_up(&mut self, mut node: usize) {
        while let Some(parent) = heap::parent(node) {
            if self.priority(node) <= self.priority(parent) {
                break;
            }
            self.elements.swap(node, parent);
            node = parent;
        }
    }

    fn sift_down(&mut self, mut node: usize) {
        loop {
            let mut larger = node;
            let (left, right) = heap::children(node, self.len());
            if let Some(left) = left {
                if self.priority(larger) < self.priority(left) {
                    larger = left;
                }
            }
            if let Some(right) = right {
                if self.priority(larger) < self.priority(right) {
                    larger = right;
                }
            }
            if larger == node {
                break;
            }
            self.elements.swap(node, larger);
            node = larger;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PQueue;
    use crate::heap;

    fn assert_heap<V>(queue: &PQueue<V>) {
        for node in 0..queue.len() {
            if let Some(parent) = heap::parent(node) {
                assert!(queue.priority(node) <= queue.priority(parent));
            }
        }
    }

    #[test]
    fn sift_up_moves_larger_to_root() {
        let mut queue = PQueue::with_capacity(8);
        for priority in [3, 1, 2, 9] {
            queue.push(priority, ());
            assert_heap(&queue);
        }
        assert_eq!(queue.priority(heap::root()), 9);
    }

    #[test]
    fn sift_up_leaves_equal_priorities_in_place() {
        let mut queue = PQueue::with_capacity(4);
        queue.push(5, "first");
        queue.push(5, "second");
        assert_eq!(queue.elements[0].value, "first");
        assert_eq!(queue.elements[1].value, "second");
    }

    #[test]
    fn sift_down_prefers_larger_child() {
        let mut queue = PQueue::with_capacity(8);
        for priority in [10, 4, 8, 1, 2, 7] {
            queue.push(priority, priority);
        }
        queue.pop();
        assert_heap(&queue);
        assert_eq!(queue.priority(heap::root()), 8);
    }

    #[test]
    fn heap_holds_through_interleaved_operations() {
        let mut queue = PQueue::with_capacity(0);
        for round in 0..50usize {
            queue.push((round * 37) % 23, round);
            queue.push((round * 11) % 17, round);
            queue.pop();
            assert_heap(&queue);
        }
        assert_eq!(queue.len(), 50);
    }

    #[test]
    fn growth_keeps_elements_in_place() {
        let mut queue = PQueue::with_capacity(2);
        queue.push(1, 'a');
        queue.push(2, 'b');
        let before: Vec<_> = queue.elements.clone();
        queue.push(0, 'c');
        assert_eq!(queue.capacity(), 4);
        assert_eq!(&queue.elements[..2], &before[..]);
    }
}
