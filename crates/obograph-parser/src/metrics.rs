use serde::{Deserialize, Serialize};

/// Counts collected while assembling one ontology
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadStats {
    /// `[Typedef]` stanzas read
    pub typedefs: usize,

    /// `[Term]` stanzas read, obsolete ones included
    pub terms: usize,

    /// `[Instance]` stanzas read
    pub instances: usize,

    /// Terms left out because they are obsolete
    pub obsolete_skipped: usize,

    /// Nodes in the finished graph, dangling edge targets included
    pub nodes: usize,

    /// Distinct keyed edges in the finished graph
    pub edges: usize,
}

impl ReadStats {
    /// Terms that became nodes
    pub fn terms_added(&self) -> usize {
        self.terms.saturating_sub(self.obsolete_skipped)
    }

    /// Nodes created only as edge targets
    pub fn dangling_nodes(&self) -> usize {
        self.nodes.saturating_sub(self.terms_added())
    }
}
