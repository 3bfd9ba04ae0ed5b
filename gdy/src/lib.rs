//! DependabotGen - per-branch dependabot configuration
//!
//! Dependabot only watches one target branch per update entry. A template
//! lists each update once; this crate copies every entry once per maintained
//! branch of its ecosystem and writes the result.
//!
//! # Example
//!
//! ```ignore
//! use dependabotgen::{BranchMatrix, Template, expand_updates};
//!
//! let template = Template::load(".github/dependabot-template.yml")?;
//! let matrix = BranchMatrix::from_inputs("1.0.x,main", "main");
//! let expansion = expand_updates(template.updates(), &matrix);
//! let yaml = template.with_updates(expansion.updates).to_yaml()?;
//! ```

pub mod cli;
pub mod config;
pub mod expand;
pub mod generate;
pub mod template;

pub use config::Config;
pub use expand::{BranchMatrix, DroppedRule, Expansion, expand_rule, expand_template, expand_updates};
pub use generate::{GenerateError, GenerateOptions, Generated, generate, write_output};
pub use template::{Ecosystem, Template, TemplateError, UpdateRule};

/// Name used for config file discovery
pub const APP_NAME: &str = "dependabotgen";

/// Where the expanded configuration is written by default
pub const DEFAULT_OUTPUT_PATH: &str = ".github/dependabot.yml";
