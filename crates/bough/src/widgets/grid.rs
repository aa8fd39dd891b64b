use std::collections::BTreeMap;

use crate::{
    Context, NodeId,
    error::{Error, Result},
    geom::{Expanse, Point},
    widget::{Layout, Widget},
};

/// Places assigned children into fixed-size cells.
///
/// Each child is placed at its cell's corner and sized to the cell minus
/// its margins. Children without a cell are
/// left where they are.
#[derive(Debug, Clone)]
pub struct Grid {
    /// Column widths, left to right.
    columns: Vec<u32>,
    /// Row heights, top to bottom.
    rows: Vec<u32>,
    /// Cell assignments as (column, row).
    cells: BTreeMap<NodeId, (usize, usize)>,
    /// A layout pass is pending.
    dirty: bool,
}

impl Grid {
    /// A grid with the given column widths and row heights.
    pub fn new(columns: Vec<u32>, rows: Vec<u32>) -> Self {
        Self {
            columns,
            rows,
            cells: BTreeMap::new(),
            dirty: true,
        }
    }

    /// Put a child into a cell.
    pub fn set_cell(&mut self, child: impl Into<NodeId>, column: usize, row: usize) -> Result<()> {
        if column >= self.columns.len() || row >= self.rows.len() {
            return Err(Error::Invalid(format!("grid cell ({column}, {row})")));
        }
        self.cells.insert(child.into(), (column, row));
        self.dirty = true;
        Ok(())
    }

    /// Release a child from its cell.
    pub fn clear_cell(&mut self, child: impl Into<NodeId>) {
        if self.cells.remove(&child.into()).is_some() {
            self.dirty = true;
        }
    }

    /// The cell a child occupies.
    pub fn cell(&self, child: impl Into<NodeId>) -> Option<(usize, usize)> {
        self.cells.get(&child.into()).copied()
    }

    /// Total size of every cell.
    pub fn extent(&self) -> Expanse {
        Expanse::new(self.columns.iter().sum(), self.rows.iter().sum())
    }

    /// Top-left corner of a cell.
    fn origin(&self, column: usize, row: usize) -> Point {
        let x: u32 = self.columns[..column].iter().sum();
        let y: u32 = self.rows[..row].iter().sum();
        Point::new(x as i32, y as i32)
    }
}

impl Layout for Grid {
    fn needs_update(&self) -> bool {
        self.dirty
    }

    fn invalidate(&mut self) {
        self.dirty = true;
    }

    fn clear_update(&mut self) {
        self.dirty = false;
    }

    fn arrange(&mut self, ctx: &mut dyn Context) -> Result<()> {
        let children = ctx.children()?;
        self.cells.retain(|child, _| children.contains(child));

        let cells: Vec<_> = self.cells.iter().map(|(c, cell)| (*c, *cell)).collect();
        for (child, (column, row)) in cells {
            let margins = ctx.core().node(child)?.margins();
            let origin = self.origin(column, row);
            let size = Expanse::new(
                self.columns[column].saturating_sub(margins.left + margins.right),
                self.rows[row].saturating_sub(margins.up + margins.down),
            );
            let core = ctx.core_mut();
            core.set_size(child, size)?;
            core.set_position(child, origin)?;
        }
        let extent = self.extent();
        ctx.set_size(extent)
    }
}

impl Widget for Grid {
    fn layout(&mut self) -> Option<&mut dyn Layout> {
        Some(self)
    }
}
