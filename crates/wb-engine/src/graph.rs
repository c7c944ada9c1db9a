//! The node registry and graph navigator.
//!
//! The registry is built once from the content set and injected wherever it
//! is needed; nothing here is global. Nodes reference each other by id only,
//! so cycles and shared destinations cost nothing.

use std::collections::HashMap;

use wb_core::{NodeId, PlayerState};

use crate::error::{EngineError, EngineResult};
use crate::node::StoryNode;

/// Default cap on background-redirect hops before a chain is declared
/// cyclic. Real content chains are a handful of hops at most.
pub const DEFAULT_REDIRECT_CAP: usize = 64;

/// The read-only registry of story nodes.
#[derive(Debug, Clone, Default)]
pub struct StoryGraph {
    nodes: HashMap<NodeId, StoryNode>,
}

impl StoryGraph {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node. Ids must be unique.
    pub fn insert(&mut self, node: StoryNode) -> EngineResult<()> {
        if self.nodes.contains_key(&node.id) {
            return Err(EngineError::DuplicateNode(node.id));
        }
        self.nodes.insert(node.id, node);
        Ok(())
    }

    /// Look up a node by id.
    pub fn get(&self, id: NodeId) -> EngineResult<&StoryNode> {
        self.nodes.get(&id).ok_or(EngineError::UnknownNode(id))
    }

    /// Whether a node is registered under this id.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Resolves ids to nodes, follows background-redirect chains, and drives
/// the simulate-ahead preview.
#[derive(Debug, Clone)]
pub struct Navigator<'a> {
    graph: &'a StoryGraph,
    redirect_cap: usize,
}

impl<'a> Navigator<'a> {
    /// Create a navigator over a registry.
    pub fn new(graph: &'a StoryGraph) -> Self {
        Self {
            graph,
            redirect_cap: DEFAULT_REDIRECT_CAP,
        }
    }

    /// Override the redirect hop cap.
    pub fn with_redirect_cap(mut self, cap: usize) -> Self {
        self.redirect_cap = cap.max(1);
        self
    }

    /// Look up a node by id.
    pub fn find(&self, id: NodeId) -> EngineResult<&'a StoryNode> {
        self.graph.get(id)
    }

    /// Follow background redirects from `id` until a node lets itself be
    /// shown, and return that node's id.
    ///
    /// Redirect-only nodes carry no visible text; they exist to branch on
    /// state before anything is displayed. Content has no business
    /// redirecting in a cycle, so the chain is capped and a cap overrun is
    /// reported as [`EngineError::CyclicRedirect`]. An unknown id ends the
    /// chain (the caller degrades it to a placeholder).
    pub fn background_chain(&self, id: NodeId, state: &PlayerState) -> EngineResult<NodeId> {
        let mut current = id;
        let mut hops = 0usize;
        loop {
            let Ok(node) = self.graph.get(current) else {
                return Ok(current);
            };
            let Some(next) = node.background.and_then(|hook| hook(state)) else {
                return Ok(current);
            };
            hops += 1;
            if hops > self.redirect_cap {
                return Err(EngineError::CyclicRedirect {
                    at: current,
                    limit: self.redirect_cap,
                });
            }
            current = next;
        }
    }

    /// Look at a hypothetical future without committing to it.
    ///
    /// Runs the background chain and the target node's event hook against a
    /// copy of the state and returns the resulting node's display text. The
    /// live state is never touched; everything the copy accumulates is
    /// discarded here.
    pub fn simulate_future(&self, id: NodeId, state: &PlayerState) -> EngineResult<String> {
        let mut copy = state.clone();
        let final_id = self.background_chain(id, &copy)?;
        match self.graph.get(final_id) {
            Ok(node) => {
                if let Some(event) = node.event {
                    event(&mut copy);
                }
                Ok(node.text.clone())
            }
            Err(_) => Ok(StoryNode::placeholder(final_id).text),
        }
    }
}
