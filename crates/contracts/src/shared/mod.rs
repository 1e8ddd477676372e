pub mod api_response;
pub mod template_vars;
pub mod validation;

pub use api_response::{ApiResponse, Page, PageQuery};
