//! Connector Geometry
//!
//! Children of a node hang off a shared vertical spine. Which spine segments
//! a child slot draws depends only on its ordinal position and the sibling
//! count, never on measured geometry or label content:
//!
//! ```text
//! only:    parent ──── child
//!
//! first:   parent ─┬── child      (spine down)
//! middle:          ├── child      (spine up + down)
//! last:            └── child      (spine up)
//! ```

/// Structural role of a child slot among its siblings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectorRole {
    /// Sole child: a straight line from the parent, no spine
    Only,
    /// Topmost of several siblings
    First,
    /// Between the first and last siblings
    Middle,
    /// Bottommost of several siblings
    Last,
}

/// One line segment implied by a connector role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Straight horizontal run from the parent stem into the child card
    Direct,
    /// Short horizontal run from the spine to the child card
    Branch,
    /// Spine segment from the previous sibling's level down to this child
    SpineUp,
    /// Spine segment from this child down to the next sibling's level
    SpineDown,
}

/// Connector descriptor for a single child slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connector {
    pub index: usize,
    pub role: ConnectorRole,
    pub segments: Vec<Segment>,
}

impl Connector {
    pub fn has_spine_up(&self) -> bool {
        self.segments.contains(&Segment::SpineUp)
    }

    pub fn has_spine_down(&self) -> bool {
        self.segments.contains(&Segment::SpineDown)
    }
}

impl ConnectorRole {
    /// Segments drawn for this role, ordered top to bottom then left to right.
    pub fn segments(self) -> Vec<Segment> {
        match self {
            ConnectorRole::Only => vec![Segment::Direct],
            ConnectorRole::First => vec![Segment::SpineDown, Segment::Branch],
            ConnectorRole::Middle => vec![Segment::SpineUp, Segment::SpineDown, Segment::Branch],
            ConnectorRole::Last => vec![Segment::SpineUp, Segment::Branch],
        }
    }
}

/// Role of the child at `index` in a sibling group of `count`.
///
/// `count` must be at least 1 and `index < count`; out-of-range indices are
/// clamped to the last slot.
pub fn role_for(index: usize, count: usize) -> ConnectorRole {
    if count <= 1 {
        return ConnectorRole::Only;
    }
    match index {
        0 => ConnectorRole::First,
        i if i + 1 >= count => ConnectorRole::Last,
        _ => ConnectorRole::Middle,
    }
}

/// Connector descriptors for a sibling group of `count` children.
pub fn connectors(count: usize) -> Vec<Connector> {
    (0..count)
        .map(|index| {
            let role = role_for(index, count);
            Connector {
                index,
                role,
                segments: role.segments(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_child_is_only() {
        let result = connectors(1);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].role, ConnectorRole::Only);
        assert_eq!(result[0].segments, vec![Segment::Direct]);
        assert!(!result[0].has_spine_up());
        assert!(!result[0].has_spine_down());
    }

    #[test]
    fn test_two_children_have_no_middle() {
        let roles: Vec<_> = connectors(2).into_iter().map(|c| c.role).collect();
        assert_eq!(roles, vec![ConnectorRole::First, ConnectorRole::Last]);
    }

    #[test]
    fn test_role_counts_for_all_group_sizes() {
        for count in 1..=32 {
            let result = connectors(count);
            assert_eq!(result.len(), count);

            let count_of = |role| result.iter().filter(|c| c.role == role).count();
            if count == 1 {
                assert_eq!(count_of(ConnectorRole::Only), 1);
                continue;
            }
            assert_eq!(count_of(ConnectorRole::Only), 0);
            assert_eq!(count_of(ConnectorRole::First), 1);
            assert_eq!(count_of(ConnectorRole::Last), 1);
            assert_eq!(count_of(ConnectorRole::Middle), count - 2);
            assert_eq!(result[0].role, ConnectorRole::First);
            assert_eq!(result[count - 1].role, ConnectorRole::Last);
        }
    }

    #[test]
    fn test_spine_is_continuous() {
        // Every downward segment must meet an upward one on the next sibling
        for count in 2..=8 {
            let result = connectors(count);
            assert!(!result[0].has_spine_up());
            assert!(!result[count - 1].has_spine_down());
            for pair in result.windows(2) {
                assert!(pair[0].has_spine_down());
                assert!(pair[1].has_spine_up());
            }
        }
    }

    #[test]
    fn test_role_for_clamps_out_of_range_index() {
        assert_eq!(role_for(7, 3), ConnectorRole::Last);
        assert_eq!(role_for(0, 0), ConnectorRole::Only);
    }
}
