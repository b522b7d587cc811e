//! Scoped "outside press" listeners
//!
//! An open popup must close when the user presses anywhere outside its node.
//! That needs a global listener, but only while the popup is open. The hub
//! hands out a `ListenerGuard` per open popup; the guard is stored inside the
//! owning `MountedNode`, so dropping it (popup closed, ancestor collapsed,
//! tree regenerated, renderer torn down) always unregisters the listener.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use crate::mount::NodePath;

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    listeners: BTreeMap<u64, NodePath>,
}

/// Global pointer-listener registry for one mounted tree
#[derive(Debug, Clone, Default)]
pub struct PointerHub {
    registry: Rc<RefCell<Registry>>,
}

impl PointerHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a listener on behalf of the node at `path`.
    pub fn register(&self, path: NodePath) -> ListenerGuard {
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.insert(id, path);

        ListenerGuard {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Number of listeners currently installed
    pub fn active_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }

    /// Owners of the installed listeners, in registration order
    pub fn active_paths(&self) -> Vec<NodePath> {
        self.registry.borrow().listeners.values().cloned().collect()
    }

    /// Owners whose listener fires for a press that landed on `hit`
    /// (`None` means the press hit no node at all).
    pub fn outside_of(&self, hit: Option<&NodePath>) -> Vec<NodePath> {
        self.registry
            .borrow()
            .listeners
            .values()
            .filter(|owner| Some(*owner) != hit)
            .cloned()
            .collect()
    }
}

/// Registration handle; the listener is removed when this is dropped.
#[derive(Debug)]
pub struct ListenerGuard {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        // Hub already gone: nothing left to unregister from
        if let Some(registry) = self.registry.upgrade() {
            registry.borrow_mut().listeners.remove(&self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_drop_unregisters() {
        let hub = PointerHub::new();
        let guard = hub.register(NodePath::root());
        assert_eq!(hub.active_count(), 1);

        drop(guard);
        assert_eq!(hub.active_count(), 0);
    }

    #[test]
    fn test_outside_of_excludes_hit_owner() {
        let hub = PointerHub::new();
        let _a = hub.register(NodePath::from(vec![0]));
        let _b = hub.register(NodePath::from(vec![1]));

        let hit = NodePath::from(vec![1]);
        assert_eq!(hub.outside_of(Some(&hit)), vec![NodePath::from(vec![0])]);
        assert_eq!(hub.outside_of(None).len(), 2);
    }

    #[test]
    fn test_guard_outliving_hub_is_harmless() {
        let hub = PointerHub::new();
        let guard = hub.register(NodePath::root());
        drop(hub);
        drop(guard);
    }
}
