//! Registry pattern for dynamic integrator management
//!
//! The registry serves as a discovery and factory mechanism for integrators.
//! Each integrator is self-describing, providing its own name, aliases, and
//! convergence order. The registry queries this metadata when an integrator
//! is registered to build its lookup table.

use super::Integrator;
use std::collections::{BTreeSet, HashMap};

/// Registry for runtime integrator lookup by name or alias
pub struct IntegratorRegistry {
    /// Maps names (canonical and aliases) to integrator instances
    integrators: HashMap<String, Box<dyn Integrator>>,
}

impl IntegratorRegistry {
    /// Create an empty registry without any pre-registered integrators.
    pub fn new() -> Self {
        Self {
            integrators: HashMap::new(),
        }
    }

    /// Register all integrators that ship with the application.
    pub fn with_standard_integrators(mut self) -> Self {
        use super::{ExplicitEuler, Heun, RungeKuttaFourthOrder};

        self.register_integrator(Box::new(ExplicitEuler));
        self.register_integrator(Box::new(Heun));
        self.register_integrator(Box::new(RungeKuttaFourthOrder));

        self
    }

    pub fn with_integrator(mut self, integrator: Box<dyn Integrator>) -> Self {
        self.register_integrator(integrator);
        self
    }

    pub fn register_integrator(&mut self, integrator: Box<dyn Integrator>) {
        for alias in integrator.aliases() {
            self.integrators
                .insert(alias.to_string(), integrator.clone_box());
        }

        self.integrators
            .insert(integrator.name().to_string(), integrator);
    }

    pub fn create(&self, name: &str) -> Result<Box<dyn Integrator>, String> {
        self.integrators
            .get(name)
            .map(|integrator| integrator.clone_box())
            .ok_or_else(|| {
                let alias_names: Vec<String> = self
                    .list_aliases()
                    .into_iter()
                    .map(|(alias, _)| alias)
                    .collect();
                format!(
                    "Unknown integrator: '{}'. Available integrators: {}. Aliases: {}",
                    name,
                    self.list_available().join(", "),
                    alias_names.join(", ")
                )
            })
    }

    /// Canonical names, sorted
    pub fn list_available(&self) -> Vec<String> {
        self.integrators
            .values()
            .map(|integrator| integrator.name().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// `(alias, canonical)` pairs, sorted by alias
    pub fn list_aliases(&self) -> Vec<(String, String)> {
        let mut aliases: Vec<(String, String)> = self
            .integrators
            .iter()
            .filter(|(key, integrator)| key.as_str() != integrator.name())
            .map(|(key, integrator)| (key.clone(), integrator.name().to_string()))
            .collect();

        aliases.sort_by(|a, b| a.0.cmp(&b.0));
        aliases
    }
}

impl Default for IntegratorRegistry {
    fn default() -> Self {
        Self::new().with_standard_integrators()
    }
}
