//! Application Context
//!
//! Shared signals provided via Leptos Context API. Mutating operations
//! invalidate the catalog here; list views reload in an Effect keyed on the
//! version counter instead of each call site re-triggering a fetch.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped whenever the sweet catalog changes on the server - read
    pub catalog_version: ReadSignal<u32>,
    /// Bumped whenever the sweet catalog changes on the server - write
    set_catalog_version: WriteSignal<u32>,
}

impl AppContext {
    pub fn new(catalog_version: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            catalog_version: catalog_version.0,
            set_catalog_version: catalog_version.1,
        }
    }

    /// Mark the catalog stale; listing views refetch on the next tick
    pub fn invalidate_catalog(&self) {
        self.set_catalog_version.update(|v| *v += 1);
    }
}

/// Get the app context from context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
