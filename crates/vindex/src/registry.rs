//! Vindex factory registry
//!
//! Every vindex implementation registers a constructor under a unique
//! vindex type name. The schema loader later creates instances by type
//! name, once per configured vindex.
//!
//! ## Lifecycle
//!
//! ```text
//! Empty --register--> Populated --create_vindex--> Populated ...
//! ```
//!
//! There is no unregister. Registration is expected to finish during
//! startup, before any request traffic, but the backing map is guarded by
//! an `RwLock` so concurrent registration is still safe.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let registry = Registry::new();
//! registry.register("hash", HashVindex::create)?;
//! registry.register("lookup_hash", LookupHash::create)?;
//!
//! // One call per configured mapping, made by the schema loader
//! let user_idx = registry.create_vindex("hash", "user_idx", &Params::new())?;
//! ```

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

use shardmap_core::{VindexError, VindexResult};

use crate::params::Params;
use crate::vindex::Vindex;

/// Constructor registered for a vindex type
///
/// Called with the instance name and its parameters. Parameter validation
/// failures are reported as `MissingParam` / `InvalidParam`. Plain
/// functions and closures that capture state both qualify.
pub type NewVindexFn = Arc<dyn Fn(&str, &Params) -> VindexResult<Arc<dyn Vindex>> + Send + Sync>;

/// Registry of vindex constructors, keyed by vindex type name
///
/// An explicit value rather than a process global: build one at startup,
/// register every implementation into it, then hand it to the loader.
/// Tests construct their own empty registry.
pub struct Registry {
    constructors: RwLock<HashMap<String, NewVindexFn>>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Registry {
            constructors: RwLock::new(HashMap::new()),
        }
    }

    /// Register a constructor under `vindex_type`
    ///
    /// # Errors
    ///
    /// `AlreadyRegistered` if the type name is taken. The existing
    /// constructor is kept. This is a startup defect; callers normally
    /// abort initialization on it.
    pub fn register<F>(&self, vindex_type: impl Into<String>, ctor: F) -> VindexResult<()>
    where
        F: Fn(&str, &Params) -> VindexResult<Arc<dyn Vindex>> + Send + Sync + 'static,
    {
        let vindex_type = vindex_type.into();
        let mut constructors = self.constructors.write();
        if constructors.contains_key(&vindex_type) {
            warn!(vindex_type = %vindex_type, "Rejected duplicate vindex registration");
            return Err(VindexError::AlreadyRegistered { vindex_type });
        }
        info!(vindex_type = %vindex_type, "Registered vindex type");
        constructors.insert(vindex_type, Arc::new(ctor));
        Ok(())
    }

    /// Create a vindex instance of type `vindex_type` named `name`
    ///
    /// `params` is passed to the constructor unchanged. The new instance's
    /// capability set is checked before it is returned.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no constructor is registered for `vindex_type`
    /// - whatever the constructor returns, unchanged
    /// - `InvalidCapabilities` if the instance breaks the capability rules
    ///
    /// A failed creation leaves the registry untouched.
    pub fn create_vindex(
        &self,
        vindex_type: &str,
        name: &str,
        params: &Params,
    ) -> VindexResult<Arc<dyn Vindex>> {
        // Clone the constructor out so it runs without the lock.
        let ctor = self.constructors.read().get(vindex_type).cloned();
        let Some(ctor) = ctor else {
            warn!(vindex_type, name, "Unknown vindex type");
            return Err(VindexError::NotFound {
                vindex_type: vindex_type.to_string(),
            });
        };

        let vindex = ctor(name, params).inspect_err(|e| {
            warn!(vindex_type, name, error = %e, "Vindex constructor rejected params");
        })?;
        let capabilities = vindex.capabilities();
        capabilities.validate(vindex.name())?;

        debug!(
            vindex_type,
            name,
            cost = vindex.cost(),
            capabilities = %capabilities,
            "Created vindex"
        );
        Ok(vindex)
    }

    /// Whether a constructor is registered for `vindex_type`
    pub fn contains(&self, vindex_type: &str) -> bool {
        self.constructors.read().contains_key(vindex_type)
    }

    /// Registered type names, sorted
    pub fn vindex_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self.constructors.read().keys().cloned().collect();
        types.sort();
        types
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.constructors.read().len()
    }

    /// True before anything is registered
    pub fn is_empty(&self) -> bool {
        self.constructors.read().is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("vindex_types", &self.vindex_types())
            .finish()
    }
}
