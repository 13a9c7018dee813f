pub mod categories;
pub mod competitors;
