/// A single queue entry. Only `priority` takes part in ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Element<V> {
    pub priority: usize,
    pub value: V,
}

impl<V> Element<V> {
    pub fn new(priority: usize, value: V) -> Self {
        Self { priority, value }
    }
}

impl<V> From<(usize, V)> for Element<V> {
    fn from((priority, value): (usize, V)) -> Self {
        Self::new(priority, value)
    }
}

impl<V> From<Element<V>> for (usize, V) {
    fn from(element: Element<V>) -> Self {
        (element.priority, element.value)
    }
}
