pub mod error;
pub mod linked_list;

pub use error::Error;
pub use linked_list::{IntoIter, Iter, LinkedList};
