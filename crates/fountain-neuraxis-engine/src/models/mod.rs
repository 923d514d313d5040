pub mod document;
pub mod element;
pub mod title_page;

pub use document::Document;
pub use element::{Element, ElementType};
pub use title_page::{TitleEntry, TitlePage};
