mod algo;
mod list;
mod raw;


pub use list::DEFAULT_CAPACITY;
pub use list::FlexList;
