pub mod normalize;
pub mod row;

pub use normalize::normalize;
pub use row::FeatureRow;
