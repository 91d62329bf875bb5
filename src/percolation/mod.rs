//! An N-by-N grid of sites that are opened one at a time, answering whether the grid percolates
//! (an open path joins the top row to the bottom row) and whether a site is full (joined to the
//! top row through open sites).
//!
//! Sites are addressed with 1-indexed `(row, col)` coordinates and stored row-major in flat
//! vectors. Two union-find structures track connectivity between open sites:
//! * `connectivity` also holds a virtual top and a virtual bottom node, so `percolates()` is a
//!   single root comparison.
//! * `fullness` only holds the virtual top. Answering `is_full` from `connectivity` would report
//!   bottom-row sites as full once any path percolates, since they all share the virtual bottom.

use crate::error::ConnError;
use crate::union_find::UnionFind;
use itertools::Itertools;
use log::{debug, trace};

pub mod stats;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Site {
    Blocked,
    Open,
}

#[derive(Debug, Clone)]
pub struct Percolation {
    grid_size: usize,
    sites: Vec<Site>,
    open_count: usize,
    connectivity: UnionFind,
    fullness: UnionFind,
}

impl Percolation {
    /// Creates a `grid_size`-by-`grid_size` grid with every site blocked.
    ///
    /// Memory grows with `grid_size²`: one site plus two union-find entries per cell. A grid whose
    /// storage cannot be allocated is reported as a construction error.
    pub fn new(grid_size: usize) -> Result<Self, ConnError> {
        if grid_size < 1 {
            return Err(ConnError::InvalidGridSize(grid_size));
        }
        // Two extra elements are reserved for the virtual top and bottom.
        let cell_count = grid_size
            .checked_mul(grid_size)
            .filter(|cells| cells.checked_add(2).is_some())
            .ok_or(ConnError::InvalidGridSize(grid_size))?;
        debug!("Creating {}x{} percolation grid", grid_size, grid_size);
        let mut sites = Vec::new();
        sites
            .try_reserve_exact(cell_count)
            .map_err(|_| ConnError::OutOfMemory("grid sites", cell_count))?;
        sites.resize(cell_count, Site::Blocked);
        Ok(Self {
            grid_size,
            sites,
            open_count: 0,
            connectivity: UnionFind::try_new(cell_count + 2)?,
            fullness: UnionFind::try_new(cell_count + 1)?,
        })
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Opens the site at `(row, col)`. Opening an already open site does nothing.
    pub fn open(&mut self, row: usize, col: usize) -> Result<(), ConnError> {
        let index = self.site_index(row, col)?;
        if self.sites[index] == Site::Open {
            return Ok(());
        }
        self.sites[index] = Site::Open;
        self.open_count += 1;
        trace!("Opened site ({}, {}), {} open", row, col, self.open_count);

        if row == 1 {
            let top = self.virtual_top();
            self.connectivity.merge(index, top);
            self.fullness.merge(index, top);
        }
        if row == self.grid_size {
            let bottom = self.virtual_bottom();
            self.connectivity.merge(index, bottom);
        }

        let n = self.grid_size;
        let neighbors = [
            (row > 1).then(|| index - n),
            (row < n).then(|| index + n),
            (col > 1).then(|| index - 1),
            (col < n).then(|| index + 1),
        ];
        for neighbor in neighbors.iter().flatten() {
            if self.sites[*neighbor] == Site::Open {
                self.connectivity.merge(index, *neighbor);
                self.fullness.merge(index, *neighbor);
            }
        }
        Ok(())
    }

    pub fn is_open(&self, row: usize, col: usize) -> Result<bool, ConnError> {
        let index = self.site_index(row, col)?;
        Ok(self.sites[index] == Site::Open)
    }

    /// Whether the site at `(row, col)` is open and joined to some open site in the top row.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool, ConnError> {
        let index = self.site_index(row, col)?;
        if self.sites[index] == Site::Blocked {
            return Ok(false);
        }
        let top = self.virtual_top();
        Ok(self.fullness.same_set(index, top))
    }

    pub fn percolates(&mut self) -> bool {
        let (top, bottom) = (self.virtual_top(), self.virtual_bottom());
        self.connectivity.same_set(top, bottom)
    }

    #[inline]
    fn site_index(&self, row: usize, col: usize) -> Result<usize, ConnError> {
        let n = self.grid_size;
        if (1..=n).contains(&row) && (1..=n).contains(&col) {
            Ok((row - 1) * n + (col - 1))
        } else {
            Err(ConnError::SiteOutOfRange(row, col, n))
        }
    }

    #[inline]
    fn virtual_top(&self) -> usize {
        self.sites.len()
    }

    #[inline]
    fn virtual_bottom(&self) -> usize {
        self.sites.len() + 1
    }
}

impl std::fmt::Display for Percolation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let rows = self.sites.chunks(self.grid_size).map(|row| {
            row.iter()
                .map(|site| match site {
                    Site::Blocked => '#',
                    Site::Open => '.',
                })
                .collect::<String>()
        });
        write!(f, "{}", rows.format("\n"))
    }
}
