pub mod form;
pub mod list;
pub mod page;

pub use page::ProductoPage;
