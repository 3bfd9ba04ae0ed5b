//! Template-to-file generation

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::expand::{BranchMatrix, DroppedRule, expand_template};
use crate::template::{Template, TemplateError};

/// Errors that abort generation
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// What to read, how to expand it and where to write it
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub template_file: PathBuf,
    pub output_path: PathBuf,
    pub matrix: BranchMatrix,
}

/// Summary of a finished generation
#[derive(Debug, Clone)]
pub struct Generated {
    pub output_path: PathBuf,
    pub update_count: usize,
    pub dropped: Vec<DroppedRule>,
    pub yaml: String,
}

/// Load the template, expand it, and replace the output file
pub fn generate(options: &GenerateOptions) -> Result<Generated, GenerateError> {
    debug!(?options, "generate: called");
    let template = Template::load(&options.template_file)?;

    let (expanded, dropped) = expand_template(&template, &options.matrix);
    let update_count = expanded.updates().len();
    info!(
        "Resolved {} updates from {} template entries",
        update_count,
        template.updates().len()
    );
    for update in expanded.updates() {
        debug!(
            ecosystem = update.classifier().unwrap_or_default(),
            target_branch = update.target_branch().unwrap_or_default(),
            "generate: resolved update"
        );
    }

    let yaml = expanded.to_yaml()?;
    info!("Final template:\n{}", yaml);

    info!("Writing to {}", options.output_path.display());
    write_output(&options.output_path, &yaml)?;

    Ok(Generated {
        output_path: options.output_path.clone(),
        update_count,
        dropped,
        yaml,
    })
}

/// Replace `path` with `content`, creating missing parent directories
pub fn write_output(path: &Path, content: &str) -> Result<(), GenerateError> {
    let write_err = |source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, content).map_err(write_err)
}
