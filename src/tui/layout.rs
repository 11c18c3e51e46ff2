use ratatui::layout::Rect;

use crate::model::cell::SLOTS_PER_DAY;

/// Width of the staff column, including its right border
pub const NAME_COL_WIDTH: u16 = 12;
/// Width of one hourly column, including its right border
pub const CELL_WIDTH: u16 = 7;
/// Lines per staff row
pub const ROW_HEIGHT: u16 = 2;
/// Revenue line + slot label line
pub const HEADER_HEIGHT: u16 = 2;
/// The "add row" line under the last staff row
pub const ADD_ROW_HEIGHT: u16 = 1;

/// What a screen position inside the grid points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridHit {
    Cell { row: usize, slot: usize },
    RowHeader { row: usize },
    AddRow,
}

/// Geometry of the grid as last rendered, used to map mouse positions back to cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridLayout {
    pub area: Rect,
    pub first_slot: usize,
    pub visible_slots: usize,
    pub first_row: usize,
    /// Rows that fit on screen
    pub visible_rows: usize,
    /// Rows actually drawn (fewer when the roster ends early)
    pub rendered_rows: usize,
}

/// How many hourly columns fit in `width`
pub fn slot_capacity(width: u16) -> usize {
    let cols = width.saturating_sub(NAME_COL_WIDTH) / CELL_WIDTH;
    (cols as usize).clamp(1, SLOTS_PER_DAY)
}

/// How many staff rows fit in `height`
pub fn row_capacity(height: u16) -> usize {
    let rows = height.saturating_sub(HEADER_HEIGHT + ADD_ROW_HEIGHT) / ROW_HEIGHT;
    (rows as usize).max(1)
}

impl GridLayout {
    pub fn new(area: Rect, first_slot: usize, first_row: usize, row_count: usize) -> Self {
        let visible_slots = slot_capacity(area.width).min(SLOTS_PER_DAY - first_slot.min(SLOTS_PER_DAY));
        let visible_rows = row_capacity(area.height);
        let rendered_rows = row_count.saturating_sub(first_row).min(visible_rows);
        GridLayout {
            area,
            first_slot,
            visible_slots,
            first_row,
            visible_rows,
            rendered_rows,
        }
    }

    /// Screen line of the add-row button
    pub fn add_row_y(&self) -> u16 {
        self.area.y + HEADER_HEIGHT + self.rendered_rows as u16 * ROW_HEIGHT
    }

    /// Rect of a cell on screen, if visible
    pub fn cell_rect(&self, row: usize, slot: usize) -> Option<Rect> {
        if row < self.first_row
            || row >= self.first_row + self.rendered_rows
            || slot < self.first_slot
            || slot >= self.first_slot + self.visible_slots
        {
            return None;
        }
        let x = self.area.x + NAME_COL_WIDTH + (slot - self.first_slot) as u16 * CELL_WIDTH;
        let y = self.area.y + HEADER_HEIGHT + (row - self.first_row) as u16 * ROW_HEIGHT;
        Some(Rect::new(x, y, CELL_WIDTH, ROW_HEIGHT))
    }

    /// Map a terminal position to a grid target
    pub fn hit(&self, x: u16, y: u16) -> Option<GridHit> {
        let area = self.area;
        if x < area.x || x >= area.x + area.width || y < area.y || y >= area.y + area.height {
            return None;
        }
        let rows_top = area.y + HEADER_HEIGHT;
        if y < rows_top {
            return None;
        }
        if y == self.add_row_y() {
            return Some(GridHit::AddRow);
        }
        let row_offset = ((y - rows_top) / ROW_HEIGHT) as usize;
        if row_offset >= self.rendered_rows {
            return None;
        }
        let row = self.first_row + row_offset;

        let rel_x = x - area.x;
        if rel_x < NAME_COL_WIDTH {
            return Some(GridHit::RowHeader { row });
        }
        let col = ((rel_x - NAME_COL_WIDTH) / CELL_WIDTH) as usize;
        if col >= self.visible_slots {
            return None;
        }
        Some(GridHit::Cell {
            row,
            slot: self.first_slot + col,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn layout(row_count: usize) -> GridLayout {
        // 12 + 4*7 = 40 wide; 2 header + 3 rows + add line = 9 high
        GridLayout::new(Rect::new(0, 1, 40, 9), 8, 0, row_count)
    }

    #[test]
    fn capacities() {
        assert_eq!(slot_capacity(40), 4);
        assert_eq!(slot_capacity(5), 1);
        assert_eq!(slot_capacity(1000), 24);
        assert_eq!(row_capacity(9), 3);
        assert_eq!(row_capacity(2), 1);
    }

    #[test]
    fn visible_slots_stop_at_end_of_day() {
        let l = GridLayout::new(Rect::new(0, 0, 200, 20), 20, 0, 1);
        assert_eq!(l.visible_slots, 4);
    }

    #[test]
    fn hits_cells_and_headers() {
        let l = layout(2);
        // header lines
        assert_eq!(l.hit(15, 1), None);
        assert_eq!(l.hit(15, 2), None);
        // first row, both lines
        assert_eq!(l.hit(3, 3), Some(GridHit::RowHeader { row: 0 }));
        assert_eq!(l.hit(12, 3), Some(GridHit::Cell { row: 0, slot: 8 }));
        assert_eq!(l.hit(18, 4), Some(GridHit::Cell { row: 0, slot: 8 }));
        assert_eq!(l.hit(19, 4), Some(GridHit::Cell { row: 0, slot: 9 }));
        // second row
        assert_eq!(l.hit(39, 5), Some(GridHit::Cell { row: 1, slot: 11 }));
        // add-row line right after the last rendered row
        assert_eq!(l.add_row_y(), 7);
        assert_eq!(l.hit(5, 7), Some(GridHit::AddRow));
        // below everything
        assert_eq!(l.hit(5, 8), None);
        // outside the area
        assert_eq!(l.hit(40, 3), None);
    }

    #[test]
    fn scrolled_rows_offset_hits() {
        let l = GridLayout::new(Rect::new(0, 0, 40, 9), 0, 2, 10);
        assert_eq!(l.rendered_rows, 3);
        assert_eq!(l.hit(0, 2), Some(GridHit::RowHeader { row: 2 }));
        assert_eq!(l.hit(12, 6), Some(GridHit::Cell { row: 4, slot: 0 }));
    }

    #[test]
    fn cell_rect_matches_hit() {
        let l = layout(3);
        let rect = l.cell_rect(1, 10).unwrap();
        assert_eq!(rect, Rect::new(26, 5, CELL_WIDTH, ROW_HEIGHT));
        assert_eq!(l.hit(rect.x, rect.y), Some(GridHit::Cell { row: 1, slot: 10 }));
        assert_eq!(l.cell_rect(1, 7), None);
        assert_eq!(l.cell_rect(1, 12), None);
        assert_eq!(l.cell_rect(3, 8), None);
    }
}
