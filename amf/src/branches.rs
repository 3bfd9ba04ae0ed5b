//! Ordered branch chains

use tracing::debug;

use crate::error::CascadeError;

/// Ordered chain of at least two branches; index order is merge-forward order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchList {
    branches: Vec<String>,
}

impl BranchList {
    /// Validate a chain, rejecting fewer than two branches
    pub fn new(branches: Vec<String>) -> Result<Self, CascadeError> {
        debug!(?branches, "BranchList::new: called");
        if branches.len() < 2 {
            return Err(CascadeError::TooFewBranches { count: branches.len() });
        }
        Ok(Self { branches })
    }

    /// Parse a comma separated input such as `1.0.x, 1.1.x, main`
    pub fn parse(raw: &str) -> Result<Self, CascadeError> {
        Self::new(actionkit::parse_list(raw))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.branches.iter().map(String::as_str)
    }

    /// Adjacent `(previous, current)` pairs in chain order
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.branches.windows(2).map(|w| (w[0].as_str(), w[1].as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_short_lists() {
        for raw in ["", "main", " main , "] {
            let err = BranchList::parse(raw).unwrap_err();
            assert!(err.is_validation(), "{raw:?} should fail validation");
        }
    }

    #[test]
    fn test_pairs_follow_input_order() {
        let list = BranchList::parse("1.0.x,1.1.x, main").unwrap();
        assert_eq!(list.iter().count(), 3);
        let pairs: Vec<_> = list.pairs().collect();
        assert_eq!(pairs, vec![("1.0.x", "1.1.x"), ("1.1.x", "main")]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let list = BranchList::parse("a,a").unwrap();
        assert_eq!(list.pairs().collect::<Vec<_>>(), vec![("a", "a")]);
    }
}
