//! Search panel: search input, filter toggle, and the expandable filter panel.

mod back_button;
mod option_group;
mod search_filter;

pub use search_filter::SearchFilter;
