pub mod model;

pub use model::{GbtModel, MODEL_FORMAT, TreeNode};
