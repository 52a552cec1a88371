//! A priority queue backed by an array-based binary max-heap.
//!
//! Elements pair a `usize` priority with an arbitrary value that the queue
//! stores and hands back but never looks at. Insertion and extraction are
//! O(log n); storage grows by half again plus one whenever it fills up and
//! never shrinks.

mod element;
mod error;
mod growth;
mod heap;
mod pqueue;

pub use element::Element;
pub use error::PQueueError;
pub use growth::grown_capacity;
pub use pqueue::PQueue;
