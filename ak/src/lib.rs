//! ActionKit - glue shared by the release automation actions
//!
//! Both actions run as single-shot CI steps. This crate holds the pieces
//! that talk to the hosting platform rather than to git or YAML:
//!
//! - [`inputs`] - parsing of action inputs (comma lists, boolean strings, refs)
//! - [`workflow`] - workflow commands on stdout (`::error::`, `::warning::`)
//! - [`config`] - YAML config discovery with a fallback chain
//! - [`logging`] - tracing subscriber setup

pub mod config;
pub mod inputs;
pub mod logging;
pub mod workflow;

pub use config::load_config;
pub use inputs::{InputError, branch_from_ref, parse_flag, parse_list};
pub use logging::setup_logging;
pub use workflow::{escape_data, fail, format_command};
