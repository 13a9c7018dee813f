pub mod category;
pub mod competitor;
