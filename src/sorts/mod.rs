pub mod bubble;
pub mod selection;
