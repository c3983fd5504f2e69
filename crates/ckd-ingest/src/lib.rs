pub mod paths;
pub mod reference;

pub use paths::{DATA_ENV_VAR, data_root, default_model_path, default_reference_path};
pub use reference::{LABEL_COLUMN, load_reference_stats};
