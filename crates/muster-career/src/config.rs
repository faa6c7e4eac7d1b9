//! Configuration for a lifetime career run.

/// Configuration for a career path run.
#[derive(Debug, Clone)]
pub struct PathConfig {
    /// RNG seed for reproducible dice and random choices.
    pub seed: u64,
    /// Age at which the character starts their first career.
    pub starting_age: u32,
    /// Maximum careers in one lifetime. 0 = unlimited.
    pub max_careers: usize,
    /// Whether a failed qualification may fall back to the draft.
    pub allow_draft: bool,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            starting_age: 18,
            max_careers: 0,
            allow_draft: true,
        }
    }
}

impl PathConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the starting age.
    pub fn with_starting_age(mut self, age: u32) -> Self {
        self.starting_age = age;
        self
    }

    /// Set the career limit (0 = unlimited).
    pub fn with_max_careers(mut self, max: usize) -> Self {
        self.max_careers = max;
        self
    }

    /// Enable or disable the draft fallback.
    pub fn with_draft(mut self, allow: bool) -> Self {
        self.allow_draft = allow;
        self
    }

    /// Returns true if `count` careers have used up the limit.
    pub fn careers_exhausted(&self, count: usize) -> bool {
        self.max_careers != 0 && count >= self.max_careers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = PathConfig::default();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.starting_age, 18);
        assert_eq!(cfg.max_careers, 0);
        assert!(cfg.allow_draft);
    }

    #[test]
    fn builder_methods() {
        let cfg = PathConfig::default()
            .with_seed(123)
            .with_starting_age(22)
            .with_max_careers(2)
            .with_draft(false);
        assert_eq!(cfg.seed, 123);
        assert_eq!(cfg.starting_age, 22);
        assert_eq!(cfg.max_careers, 2);
        assert!(!cfg.allow_draft);
    }

    #[test]
    fn career_limit() {
        let unlimited = PathConfig::default();
        assert!(!unlimited.careers_exhausted(50));
        let two = PathConfig::default().with_max_careers(2);
        assert!(!two.careers_exhausted(1));
        assert!(two.careers_exhausted(2));
    }
}
