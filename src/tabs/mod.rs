//! Terminal tab lifecycle: identity and theme allocation, the tab registry,
//! and the shared manager handle consumed by the web surface.

mod allocator;
mod manager;
mod model;
mod registry;

pub use allocator::{theme_at, TabAllocator, THEME_PALETTE};
pub use manager::TabManager;
pub use model::{ShellConfig, Tab, TabError, TabsSnapshot};
pub use registry::{TabRegistry, MAX_TABS};
