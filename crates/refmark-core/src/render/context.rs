//! Rendering context threaded through recursive calls

/// Depth and table-row state for a single render call
///
/// The context is a plain value: every recursive call receives its own copy
/// and never observes changes made by siblings or descendants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    depth: usize,
    table_row: bool,
}

impl RenderContext {
    /// Create a context at the given depth (clamped to at least 1)
    pub const fn new(depth: usize) -> Self {
        Self {
            depth: if depth == 0 { 1 } else { depth },
            table_row: false,
        }
    }

    /// Context for the members of a group
    pub const fn root() -> Self {
        Self::new(1)
    }

    /// Current depth
    pub const fn depth(self) -> usize {
        self.depth
    }

    /// Whether properties should render as table rows
    pub const fn table_row(self) -> bool {
        self.table_row
    }

    /// Context one level deeper, with table-row mode cleared
    pub const fn child(self) -> Self {
        Self {
            depth: self.depth.saturating_add(1),
            table_row: false,
        }
    }

    /// Same depth, rendering properties as table rows
    pub const fn as_table_row(self) -> Self {
        Self {
            depth: self.depth,
            table_row: true,
        }
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::root()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_is_at_least_one() {
        assert_eq!(RenderContext::new(0).depth(), 1);
        assert_eq!(RenderContext::default(), RenderContext::root());
    }

    #[test]
    fn test_child_clears_table_row() {
        let row = RenderContext::new(3).as_table_row();
        assert!(row.table_row());
        assert_eq!(row.depth(), 3);

        let child = row.child();
        assert_eq!(child.depth(), 4);
        assert!(!child.table_row());
    }

    #[test]
    fn test_child_depth_saturates() {
        let deepest = RenderContext::new(usize::MAX);
        assert_eq!(deepest.child().depth(), usize::MAX);
    }
}
