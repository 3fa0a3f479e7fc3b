//! Plugin discovery
//!
//! The [`Registry`] holds every known class. [`ClassClassifier`] filters it
//! by scan root and capability, [`PluginLoader`] instantiates the survivors
//! into a [`Plugin`], and [`PluginCache`] keeps one plugin per scan root for
//! the life of the process.

pub mod cache;
pub mod classify;
pub mod descriptor;
pub mod loader;
pub mod registry;


pub use cache::PluginCache;
pub use classify::{ClassClassifier, ScanRoot};
pub use descriptor::{Plugin, PluginClassDescriptor};
pub use loader::PluginLoader;
pub use registry::{in_namespace, ClassEntry, Registry, Visibility};
