pub mod hit_test;
pub mod projection;
pub mod viewport;
