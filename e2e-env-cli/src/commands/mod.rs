//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `show`: Show the resolved environment
//! - `image_path`: Print image references
//! - `cluster_name`: Print the resolved cluster name
//! - `cluster_region`: Print the resolved cluster region
//! - `languages`: Print or check the language allow-list
//! - `validate`: Validate the flag values
//! - `completions`: Generate shell completion scripts

pub mod cluster_name;
pub mod cluster_region;
pub mod completions;
pub mod image_path;
pub mod languages;
pub mod show;
pub mod validate;

pub use cluster_name::ClusterNameCommand;
pub use cluster_region::ClusterRegionCommand;
pub use completions::CompletionsCommand;
pub use image_path::ImagePathCommand;
pub use languages::LanguagesCommand;
pub use show::ShowCommand;
pub use validate::ValidateCommand;
