//! Level specifications indexed by structural level.

use super::types::LevelSpec;
use crate::types::Level;

/// One [`LevelSpec`] for every [`Level`].
#[derive(Debug, Clone)]
pub struct HierarchyRegistry {
    specs: [LevelSpec; Level::ALL.len()],
}

impl HierarchyRegistry {
    /// Build the registry by configuring a fresh spec for each level.
    #[must_use]
    pub fn new(configure: impl Fn(LevelSpec) -> LevelSpec) -> Self {
        Self {
            specs: Level::ALL.map(|level| configure(LevelSpec::new(level))),
        }
    }

    /// Specification of a level.
    #[must_use]
    pub fn spec(&self, level: Level) -> &LevelSpec {
        // `Level::ALL` lists the variants in declaration order
        &self.specs[level as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_level_has_its_own_spec() {
        let registry = HierarchyRegistry::new(|spec| {
            let leaf = spec.level == Level::Point;
            spec.with_text_content(leaf)
        });

        for level in Level::ALL {
            assert_eq!(registry.spec(level).level, level);
        }
        assert!(registry.spec(Level::Point).accepts_text);
        assert!(!registry.spec(Level::Article).accepts_text);
    }
}
