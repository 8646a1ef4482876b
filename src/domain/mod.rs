pub mod page_sum;
pub mod page_url;

pub use page_sum::*;
pub use page_url::*;
