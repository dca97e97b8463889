//! Display model: nodes, regions, and the page that holds them.

pub mod node;
pub mod page;
pub mod region;

pub use node::{escape_html, Element, Node};
pub use page::{Page, CONTENT_REGION_ID, TITLE_REGION_ID};
pub use region::Region;
