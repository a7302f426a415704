pub mod feature_table;
pub mod map_view;
pub mod pager;
