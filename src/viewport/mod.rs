//! Windowing model for the booking table: which court columns are visible,
//! how wide each one is, and the one-column pan controls.

pub mod resize;

use std::cell::Cell;
use std::ops::Range;
use std::rc::Rc;

use crate::core::types::Direction;
use resize::{ResizeSource, ResizeSubscription};

/// Most court columns shown at once.
pub const MAX_VISIBLE_COLUMNS: usize = 4;
/// Width reserved for the leading time-axis column.
pub const TIME_COLUMN_WIDTH: u32 = 60;
/// Narrowest a court column may get.
pub const MIN_COLUMN_WIDTH: u32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportLayout {
    pub max_visible_columns: usize,
    pub time_column_width: u32,
    pub min_column_width: u32,
}

impl Default for ViewportLayout {
    fn default() -> Self {
        Self {
            max_visible_columns: MAX_VISIBLE_COLUMNS,
            time_column_width: TIME_COLUMN_WIDTH,
            min_column_width: MIN_COLUMN_WIDTH,
        }
    }
}

/// Snapshot of the mutable part of a [`TableViewport`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableViewportState {
    pub visible_start: usize,
    pub container_width: Option<u32>,
}

/// Invariant: `visible_start <= max_start()`.
#[derive(Debug)]
pub struct TableViewport {
    layout: ViewportLayout,
    total_columns: usize,
    visible_start: usize,
    table_width: Rc<Cell<Option<u32>>>,
    subscription: Option<ResizeSubscription>,
}

impl TableViewport {
    pub fn new(total_columns: usize) -> Self {
        Self::with_layout(total_columns, ViewportLayout::default())
    }

    /// A `max_visible_columns` of zero is raised to one.
    pub fn with_layout(total_columns: usize, layout: ViewportLayout) -> Self {
        Self {
            layout: ViewportLayout {
                max_visible_columns: layout.max_visible_columns.max(1),
                ..layout
            },
            total_columns,
            visible_start: 0,
            table_width: Rc::new(Cell::new(None)),
            subscription: None,
        }
    }

    /// Starts observing `source`. Does nothing when already mounted.
    pub fn mount(&mut self, source: Rc<dyn ResizeSource>) {
        if self.subscription.is_some() {
            return;
        }
        let width = Rc::clone(&self.table_width);
        self.subscription = Some(ResizeSubscription::new(
            source,
            Box::new(move |w| width.set(Some(w))),
        ));
    }

    /// Releases the subscription and forgets the measured width. Safe to
    /// call when not mounted.
    pub fn unmount(&mut self) {
        self.subscription = None;
        self.table_width.set(None);
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn layout(&self) -> ViewportLayout {
        self.layout
    }

    pub fn set_layout(&mut self, layout: ViewportLayout) {
        self.layout = ViewportLayout {
            max_visible_columns: layout.max_visible_columns.max(1),
            ..layout
        };
        self.visible_start = self.visible_start.min(self.max_start());
    }

    pub fn total_columns(&self) -> usize {
        self.total_columns
    }

    pub fn set_total_columns(&mut self, total_columns: usize) {
        self.total_columns = total_columns;
        self.visible_start = self.visible_start.min(self.max_start());
    }

    pub fn table_width(&self) -> Option<u32> {
        self.table_width.get()
    }

    pub fn visible_start(&self) -> usize {
        self.visible_start
    }

    pub fn state(&self) -> TableViewportState {
        TableViewportState {
            visible_start: self.visible_start,
            container_width: self.table_width(),
        }
    }

    pub fn max_start(&self) -> usize {
        self.total_columns
            .saturating_sub(self.layout.max_visible_columns)
    }

    /// Shifts the window by one column, clamped to `0..=max_start()`.
    /// Returns the new start.
    pub fn navigate(&mut self, direction: Direction) -> usize {
        self.visible_start = match direction {
            Direction::Left => self.visible_start.saturating_sub(1),
            Direction::Right => (self.visible_start + 1).min(self.max_start()),
        };
        self.visible_start
    }

    pub fn can_navigate(&self, direction: Direction) -> bool {
        match direction {
            Direction::Left => self.visible_start > 0,
            Direction::Right => self.visible_start < self.max_start(),
        }
    }

    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.visible_start + self.layout.max_visible_columns).min(self.total_columns);
        self.visible_start..end
    }

    /// Width per visible column. `0` while no width has been measured or
    /// when there are no columns.
    pub fn column_width(&self) -> u32 {
        let Some(width) = self.table_width() else {
            return 0;
        };
        let shown = self.layout.max_visible_columns.min(self.total_columns);
        if shown == 0 {
            return 0;
        }
        let usable = width.saturating_sub(self.layout.time_column_width);
        (usable / shown as u32).max(self.layout.min_column_width)
    }
}
