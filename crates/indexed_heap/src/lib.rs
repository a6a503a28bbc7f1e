mod error;
mod heap;
pub mod policy;

pub use error::HeapError;
pub use heap::IndexedHeap;
pub use policy::{HeapOrder, MaxOrder, MinOrder};
