//! Roster — the fixed set of expert agents the orchestrator can delegate to.

use std::sync::Arc;

use crate::agent::Agent;
use crate::error::RegistryError;

/// Expert agents keyed by identifier, in registration order.
///
/// Built once at startup, then shared read-only behind an `Arc`.
#[derive(Debug, Default)]
pub struct Roster {
    experts: Vec<(String, Arc<Agent>)>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an expert under `id`. Identifiers are unique.
    pub fn add(&mut self, id: impl Into<String>, agent: Agent) -> Result<(), RegistryError> {
        let id = id.into();
        if self.get(&id).is_some() {
            return Err(RegistryError::DuplicateExpert(id));
        }
        self.experts.push((id, Arc::new(agent)));
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Arc<Agent>> {
        self.experts
            .iter()
            .find(|(expert_id, _)| expert_id == id)
            .map(|(_, agent)| agent)
    }

    pub fn ids(&self) -> Vec<&str> {
        self.experts.iter().map(|(id, _)| id.as_str()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Arc<Agent>)> {
        self.experts.iter().map(|(id, agent)| (id.as_str(), agent))
    }

    pub fn len(&self) -> usize {
        self.experts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.experts.is_empty()
    }
}
