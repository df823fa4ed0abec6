//! Extension lookup port
//!
//! The host runtime knows which extensions are installed. The gateway asks
//! it once, at construction, for the back end the configuration names.

use crate::domain::ProviderKind;

use super::economy::ProviderHandle;

/// Looks up the installed back end for a provider kind
pub trait ExtensionResolver {
    /// Return the live handle for `kind`, or None if it is not installed
    fn resolve(&self, kind: &ProviderKind) -> Option<ProviderHandle>;
}

impl<F> ExtensionResolver for F
where
    F: Fn(&ProviderKind) -> Option<ProviderHandle>,
{
    fn resolve(&self, kind: &ProviderKind) -> Option<ProviderHandle> {
        self(kind)
    }
}
