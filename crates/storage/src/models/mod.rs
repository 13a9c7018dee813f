pub mod category;
pub mod competitor;

pub use category::{Category, CategoryWithCompetitors};
pub use competitor::{Competitor, CompetitorWithCategory};
pub(crate) use competitor::CompetitorCategoryRow;
