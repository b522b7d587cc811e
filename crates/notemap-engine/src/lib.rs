//! Rendering core for notemap mind maps.
//!
//! Everything in this crate is synchronous and free of I/O:
//! - `connector`: which spine/branch segments join a parent to each child
//! - `mount`: the mounted node tree and its expand/popup state
//! - `pointer`: scoped "outside press" listeners owned by open popups
//! - `layout`: left-to-right character-cell layout of a mounted tree

pub mod connector;
pub mod layout;
pub mod mount;
pub mod pointer;

pub use connector::{Connector, ConnectorRole, Segment, connectors, role_for};
pub use layout::{
    Fragment, Hit, HitTarget, LayoutOptions, LayoutRow, TOGGLE_WIDTH, TreeLayout, glyph, layout,
    truncate_to_width,
};
pub use mount::{DepthClass, MountTree, MountedNode, NodePath};
pub use pointer::{ListenerGuard, PointerHub};
