//! The engine facade: one immutable registry plus tuning config, shared
//! read-only across any number of callers.

use crate::assign::{assign_kind, MappingResult};
use crate::classify::{classify_node, ClassificationResult};
use crate::config::EngineConfig;
use crate::error::RegistryError;
use crate::kind::ComponentKind;
use crate::node::DesignNode;
use crate::registry::KindRegistry;
use tracing::instrument;

/// Classification and slot-mapping engine.
///
/// Construction validates the kind table once and fails fast on wiring
/// problems; after that every operation is infallible, synchronous, and
/// side-effect free. Distinct subtrees map independently, so `&self` access
/// from multiple threads needs no coordination.
pub struct MappingEngine {
    registry: KindRegistry,
    config: EngineConfig,
}

impl MappingEngine {
    /// Standard registry, default tuning.
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_config(EngineConfig::default())
    }

    /// Standard registry with overridden tuning values.
    pub fn with_config(config: EngineConfig) -> Result<Self, RegistryError> {
        Ok(Self { registry: KindRegistry::standard()?, config })
    }

    /// A custom, already-validated registry.
    pub fn with_registry(registry: KindRegistry, config: EngineConfig) -> Self {
        Self { registry, config }
    }

    /// Classify one node. Total: always yields a kind, `Unknown` at worst.
    #[instrument(skip(self, node), fields(node = %node.name))]
    pub fn classify(&self, node: &DesignNode) -> ClassificationResult {
        classify_node(&self.registry, &self.config, node)
    }

    /// Classify one node and map its descendants onto the matched kind's
    /// slot structure.
    #[instrument(skip(self, node), fields(node = %node.name))]
    pub fn map(&self, node: &DesignNode) -> MappingResult {
        let classification = self.classify(node);
        assign_kind(&self.registry, &self.config, classification.kind, node)
    }

    /// Map a node whose kind is already known, skipping classification.
    pub fn map_as(&self, node: &DesignNode, kind: ComponentKind) -> MappingResult {
        assign_kind(&self.registry, &self.config, kind, node)
    }

    /// Map a batch of independent roots. Results depend only on each node
    /// and its descendants; callers may shard this across threads instead.
    pub fn map_all(&self, nodes: &[DesignNode]) -> Vec<MappingResult> {
        nodes.iter().map(|n| self.map(n)).collect()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn registry(&self) -> &KindRegistry {
        &self.registry
    }
}
