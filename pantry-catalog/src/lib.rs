pub mod paging;
pub mod product;
pub mod selection;

pub use paging::{fetch_next_page, page_slice, PageCursor, DEFAULT_PAGE_SIZE};
pub use product::{CatalogError, Category, Product, ProductFeed};
pub use selection::Selection;
