//! Expansion of template updates into per-branch updates

use tracing::{debug, warn};

use crate::template::{Ecosystem, Template, UpdateRule};

/// Maintained branches per ecosystem
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchMatrix {
    pub gradle: Vec<String>,
    pub github_actions: Vec<String>,
}

impl BranchMatrix {
    pub fn new(gradle: Vec<String>, github_actions: Vec<String>) -> Self {
        Self { gradle, github_actions }
    }

    /// Build from the two comma separated action inputs
    pub fn from_inputs(gradle: &str, github_actions: &str) -> Self {
        Self::new(actionkit::parse_list(gradle), actionkit::parse_list(github_actions))
    }

    pub fn branches_for(&self, ecosystem: Ecosystem) -> &[String] {
        match ecosystem {
            Ecosystem::Gradle => &self.gradle,
            Ecosystem::GithubActions => &self.github_actions,
        }
    }
}

/// A template update that produced no output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedRule {
    /// Position in the template's update list
    pub index: usize,
    /// The `package-ecosystem` value, if there was a string one
    pub classifier: Option<String>,
}

/// Result of expanding an update list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expansion {
    pub updates: Vec<UpdateRule>,
    pub dropped: Vec<DroppedRule>,
}

/// One copy of `rule` per branch, in branch order
pub fn expand_rule(rule: &UpdateRule, branches: &[String]) -> Vec<UpdateRule> {
    branches.iter().map(|branch| rule.with_target_branch(branch)).collect()
}

/// Expand every rule, keeping template order with each rule's copies together
///
/// Rules without a recognized ecosystem are dropped and reported, never an error.
pub fn expand_updates(rules: &[UpdateRule], matrix: &BranchMatrix) -> Expansion {
    debug!(rules = rules.len(), ?matrix, "expand_updates: called");
    let mut expansion = Expansion::default();
    for (index, rule) in rules.iter().enumerate() {
        match rule.ecosystem() {
            Some(ecosystem) => {
                let branches = matrix.branches_for(ecosystem);
                debug!(index, %ecosystem, branches = branches.len(), "expand_updates: expanding rule");
                expansion.updates.extend(expand_rule(rule, branches));
            }
            None => {
                warn!(
                    "Dropping update #{} with unrecognized package-ecosystem {:?}",
                    index,
                    rule.classifier().unwrap_or("<missing>")
                );
                expansion.dropped.push(DroppedRule {
                    index,
                    classifier: rule.classifier().map(String::from),
                });
            }
        }
    }
    expansion
}

/// Expand a whole template
pub fn expand_template(template: &Template, matrix: &BranchMatrix) -> (Template, Vec<DroppedRule>) {
    let expansion = expand_updates(template.updates(), matrix);
    (template.with_updates(expansion.updates), expansion.dropped)
}
