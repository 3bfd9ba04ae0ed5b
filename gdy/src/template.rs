//! Dependabot template documents
//!
//! The document is kept as a YAML mapping so keys this crate does not know
//! about (`version`, `registries`, ...) pass through untouched and in order.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use thiserror::Error;
use tracing::debug;

/// Field naming the package ecosystem of an update
pub const PACKAGE_ECOSYSTEM: &str = "package-ecosystem";

/// Field naming the branch an update targets
pub const TARGET_BRANCH: &str = "target-branch";

/// Top-level key holding the update list
pub const UPDATES: &str = "updates";

/// Errors from reading or writing templates
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Failed to read template {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Template must be a mapping at the top level")]
    NotAMapping,

    #[error("Template has no 'updates' sequence")]
    MissingUpdates,

    #[error("Update #{index} is not a mapping")]
    UpdateNotAMapping { index: usize },
}

/// Ecosystems that have a branch list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ecosystem {
    Gradle,
    GithubActions,
}

impl Ecosystem {
    pub const ALL: [Ecosystem; 2] = [Ecosystem::Gradle, Ecosystem::GithubActions];

    /// Match a `package-ecosystem` value exactly
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "gradle" => Some(Self::Gradle),
            "github-actions" => Some(Self::GithubActions),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gradle => "gradle",
            Self::GithubActions => "github-actions",
        }
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of `updates`; opaque apart from the ecosystem and target branch
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateRule {
    fields: Mapping,
}

impl UpdateRule {
    pub fn from_mapping(fields: Mapping) -> Self {
        Self { fields }
    }

    /// Raw `package-ecosystem` value, if it is a string
    pub fn classifier(&self) -> Option<&str> {
        self.fields.get(PACKAGE_ECOSYSTEM).and_then(Value::as_str)
    }

    pub fn ecosystem(&self) -> Option<Ecosystem> {
        self.classifier().and_then(Ecosystem::parse)
    }

    pub fn target_branch(&self) -> Option<&str> {
        self.fields.get(TARGET_BRANCH).and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Copy of this rule aimed at `branch`
    ///
    /// An existing `target-branch` keeps its position; otherwise the field is
    /// appended.
    pub fn with_target_branch(&self, branch: &str) -> Self {
        let mut fields = self.fields.clone();
        fields.insert(
            Value::String(TARGET_BRANCH.to_string()),
            Value::String(branch.to_string()),
        );
        Self { fields }
    }

    pub fn into_value(self) -> Value {
        Value::Mapping(self.fields)
    }
}

/// A dependabot document plus its parsed update list
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    document: Mapping,
    updates: Vec<UpdateRule>,
}

impl Template {
    /// Read and parse a template file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        debug!(?path, "Template::load: called");
        let content = fs::read_to_string(path).map_err(|source| TemplateError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parse template YAML
    pub fn parse(content: &str) -> Result<Self, TemplateError> {
        let mut value: Value = serde_yaml::from_str(content)?;
        // `<<` keys stay literal unless resolved
        value.apply_merge()?;
        let document = match value {
            Value::Mapping(document) => document,
            _ => return Err(TemplateError::NotAMapping),
        };

        let entries = match document.get(UPDATES) {
            Some(Value::Sequence(entries)) => entries,
            _ => return Err(TemplateError::MissingUpdates),
        };

        let updates = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| match entry {
                Value::Mapping(fields) => Ok(UpdateRule::from_mapping(fields.clone())),
                _ => Err(TemplateError::UpdateNotAMapping { index }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(updates = updates.len(), "Template::parse: parsed");
        Ok(Self { document, updates })
    }

    pub fn updates(&self) -> &[UpdateRule] {
        &self.updates
    }

    /// Same document with `updates` replaced
    pub fn with_updates(&self, updates: Vec<UpdateRule>) -> Self {
        Self {
            document: self.document.clone(),
            updates,
        }
    }

    /// The full document with the current update list in place
    pub fn to_document(&self) -> Mapping {
        let mut document = self.document.clone();
        let updates = self.updates.iter().cloned().map(UpdateRule::into_value).collect();
        document.insert(Value::String(UPDATES.to_string()), Value::Sequence(updates));
        document
    }

    pub fn to_yaml(&self) -> Result<String, TemplateError> {
        Ok(serde_yaml::to_string(&self.to_document())?)
    }
}
