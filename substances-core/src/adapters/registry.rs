//! Name-keyed extension registry
//!
//! Default [`ExtensionResolver`]: the host registers each installed economy
//! extension under its plugin name, and lookups by provider kind go through
//! the kind's extension name, case-insensitively.

use std::collections::HashMap;

use crate::domain::ProviderKind;
use crate::ports::{ExtensionResolver, ProviderHandle};

/// Installed extensions keyed by lowercased name
#[derive(Debug, Clone, Default)]
pub struct ExtensionRegistry {
    extensions: HashMap<String, ProviderHandle>,
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an installed extension under its plugin name
    pub fn register(&mut self, name: &str, handle: ProviderHandle) -> &mut Self {
        self.extensions.insert(name.to_lowercase(), handle);
        self
    }

    /// Builder-style variant of [`register`](Self::register)
    pub fn with(mut self, name: &str, handle: ProviderHandle) -> Self {
        self.register(name, handle);
        self
    }

    /// Look up an extension by plugin name
    pub fn lookup(&self, name: &str) -> Option<&ProviderHandle> {
        self.extensions.get(&name.to_lowercase())
    }
}

impl ExtensionResolver for ExtensionRegistry {
    fn resolve(&self, kind: &ProviderKind) -> Option<ProviderHandle> {
        kind.extension_name()
            .and_then(|name| self.lookup(name))
            .cloned()
    }
}
