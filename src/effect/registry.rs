//! Capability-scored registry of editor effects
//!
//! Effects declare how well they can operate on a given editing context and
//! the registry resolves the best match. The registry is passed explicitly to
//! whoever needs to dispatch; there is no global instance.

/// Kind of view an effect would operate in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// 2D slice view of a volume
    Slice,
    /// 3D rendering
    ThreeD,
}

/// Editing context an effect is asked to score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectTarget {
    pub view: ViewKind,
    /// Whether a label volume is available to edit
    pub has_label: bool,
}

/// An editor tool that can score and claim an editing context
pub trait EditorEffect {
    /// Display name of the effect
    fn name(&self) -> &str;

    /// Confidence in [0, 1] that this effect can operate on the target.
    /// Zero or negative declines the target.
    fn can_handle(&self, target: &EffectTarget) -> f64;
}

/// Ordered collection of effects with highest-score resolution
#[derive(Default)]
pub struct EffectRegistry {
    effects: Vec<Box<dyn EditorEffect>>,
}

impl EffectRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { effects: Vec::new() }
    }

    /// Add an effect; registration order breaks score ties
    pub fn register(&mut self, effect: Box<dyn EditorEffect>) {
        self.effects.push(effect);
    }

    /// Number of registered effects
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Check if no effects are registered
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Effect with the highest positive score for the target, if any.
    /// Earlier registrations win ties.
    pub fn resolve(&self, target: &EffectTarget) -> Option<&dyn EditorEffect> {
        let mut best: Option<(&dyn EditorEffect, f64)> = None;
        for effect in &self.effects {
            let score = effect.can_handle(target);
            if score <= 0.0 {
                continue;
            }
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((effect.as_ref(), score)),
            }
        }
        best.map(|(effect, _)| effect)
    }

    /// Look up an effect by name
    pub fn by_name(&self, name: &str) -> Option<&dyn EditorEffect> {
        self.effects
            .iter()
            .map(|e| e.as_ref())
            .find(|e| e.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedEffect {
        name: &'static str,
        score: f64,
    }

    impl EditorEffect for FixedEffect {
        fn name(&self) -> &str {
            self.name
        }

        fn can_handle(&self, _target: &EffectTarget) -> f64 {
            self.score
        }
    }

    fn target() -> EffectTarget {
        EffectTarget { view: ViewKind::Slice, has_label: true }
    }

    #[test]
    fn test_empty_registry() {
        let registry = EffectRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.resolve(&target()).is_none());
    }

    #[test]
    fn test_highest_score_wins() {
        let mut registry = EffectRegistry::new();
        registry.register(Box::new(FixedEffect { name: "low", score: 0.3 }));
        registry.register(Box::new(FixedEffect { name: "high", score: 0.9 }));

        let resolved = registry.resolve(&target()).unwrap();
        assert_eq!(resolved.name(), "high");
    }

    #[test]
    fn test_zero_score_declines() {
        let mut registry = EffectRegistry::new();
        registry.register(Box::new(FixedEffect { name: "never", score: 0.0 }));
        assert!(registry.resolve(&target()).is_none());
    }

    #[test]
    fn test_tie_prefers_first_registered() {
        let mut registry = EffectRegistry::new();
        registry.register(Box::new(FixedEffect { name: "first", score: 0.5 }));
        registry.register(Box::new(FixedEffect { name: "second", score: 0.5 }));
        assert_eq!(registry.resolve(&target()).unwrap().name(), "first");
    }

    #[test]
    fn test_by_name() {
        let mut registry = EffectRegistry::new();
        registry.register(Box::new(FixedEffect { name: "paint", score: 0.5 }));
        assert!(registry.by_name("paint").is_some());
        assert!(registry.by_name("erase").is_none());
    }
}
