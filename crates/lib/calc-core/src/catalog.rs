use std::collections::HashSet;
use std::{error::Error, fmt};

use calc_registry::schema::ROUTE_PREFIX;
use calc_registry::{CALCULATOR_TOOLS, ToolDescriptor};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Empty,
    DuplicateId(&'static str),
    InvalidPath { id: &'static str, path: &'static str },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "tool catalog is empty"),
            Self::DuplicateId(id) => write!(f, "duplicate tool id: {id}"),
            Self::InvalidPath { id, path } => {
                write!(f, "tool {id} has path outside {ROUTE_PREFIX}: {path}")
            }
        }
    }
}

impl Error for CatalogError {}

/// Read-only view over an ordered set of tool descriptors.
#[derive(Debug, Clone, Copy)]
pub struct ToolCatalog {
    tools: &'static [ToolDescriptor],
}

impl Default for ToolCatalog {
    fn default() -> Self {
        Self::new(CALCULATOR_TOOLS)
    }
}

impl ToolCatalog {
    #[must_use]
    pub const fn new(tools: &'static [ToolDescriptor]) -> Self {
        Self { tools }
    }

    #[must_use]
    pub const fn all(&self) -> &'static [ToolDescriptor] {
        self.tools
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.tools.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'static ToolDescriptor> {
        self.tools.iter().find(|tool| tool.id == id)
    }

    #[must_use]
    pub fn find_by_path(&self, path: &str) -> Option<&'static ToolDescriptor> {
        let trimmed = path.trim_end_matches('/');
        self.tools.iter().find(|tool| tool.path == trimmed)
    }

    /// Checks the authoring invariants of the catalog.
    ///
    /// # Errors
    /// Returns the first `CatalogError` found, in catalog order.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.tools.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(self.tools.len());
        for tool in self.tools {
            if !seen.insert(tool.id) {
                return Err(CatalogError::DuplicateId(tool.id));
            }
            if tool.slug().is_none() {
                return Err(CatalogError::InvalidPath {
                    id: tool.id,
                    path: tool.path,
                });
            }
        }

        debug!(tools = self.tools.len(), "tool catalog validated");
        Ok(())
    }
}
