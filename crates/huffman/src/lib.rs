mod codec;
mod error;
mod tree;

pub use codec::{HuffmanEncoder, decode};
pub use error::HuffmanError;
pub use tree::{HuffmanTree, Node, frequencies};
