pub mod field_error;
pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;

pub use field_error::FieldError;
pub use page_header::PageHeader;
pub use stat_card::StatCard;
