pub mod state;
pub mod view;

pub use state::{FilterSelectorState, SelectionState};
pub use view::ColumnFilterSelector;
