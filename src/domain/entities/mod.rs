pub mod feature;
pub mod pagination;
pub mod popup;
pub mod search;
