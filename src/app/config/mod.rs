//! Project configuration loaders.

mod load_project_config;

pub use load_project_config::{
    ConfigFormat, load_project_config, parse_project_config,
};
