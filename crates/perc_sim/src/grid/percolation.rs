//! The percolation grid data type.

use perc_core::collections::{DisjointSet, WeightedUnionFind};

use super::anchors::Anchors;
use super::error::GridError;

/// An n×n percolation system.
///
/// Sites are addressed by 1-indexed `(row, col)` with row 1 at the top.
/// Every site starts blocked; [`open`](Percolation::open) is the only
/// mutation and opening is permanent. Connectivity between open sites is
/// maintained incrementally in a disjoint-set forest, so
/// [`percolates`](Percolation::percolates) and
/// [`open_site_count`](Percolation::open_site_count) are O(1) and
/// [`is_full`](Percolation::is_full) costs one amortized-O(α(n)) root
/// lookup.
///
/// The forest is a type parameter bounded by
/// [`DisjointSet`], defaulting to [`WeightedUnionFind`]; the grid only
/// relies on the union/find capability.
///
/// # Site Labels
///
/// Internally each site maps to the label `(row − 1)·n + (col − 1)`, the
/// row-major bijection between 1-indexed coordinates and `0..n²`.
///
/// # Examples
///
/// ```rust
/// use perc_sim::grid::Percolation;
///
/// let mut grid = Percolation::new(4).unwrap();
/// grid.open(1, 1).unwrap();
/// grid.open(2, 1).unwrap();
///
/// assert!(grid.is_full(2, 1).unwrap());
/// assert_eq!(grid.open_site_count(), 2);
/// assert!(!grid.percolates());
/// ```
#[derive(Debug, Clone)]
pub struct Percolation<U: DisjointSet = WeightedUnionFind> {
    /// Side length n, fixed at construction.
    side: usize,
    /// Open/blocked state per label. Open is permanent.
    open_sites: Vec<bool>,
    /// Number of open sites, monotonically non-decreasing.
    open_count: usize,
    /// Connectivity forest over the n² site labels.
    forest: U,
    /// Per-label anchor masks, meaningful only at current forest roots.
    anchors: Vec<Anchors>,
    /// Latched the instant some component spans top and bottom.
    percolated: bool,
}

impl Percolation {
    /// Creates an n×n grid with every site blocked, using the default
    /// [`WeightedUnionFind`] forest.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSideLength`] if `side` is zero.
    pub fn new(side: usize) -> Result<Self, GridError> {
        Self::with_disjoint_set(side)
    }
}

impl<U: DisjointSet> Percolation<U> {
    /// Creates an n×n grid backed by a caller-chosen forest implementation.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSideLength`] if `side` is zero.
    pub fn with_disjoint_set(side: usize) -> Result<Self, GridError> {
        if side == 0 {
            return Err(GridError::InvalidSideLength(side));
        }
        let sites = side * side;
        Ok(Self {
            side,
            open_sites: vec![false; sites],
            open_count: 0,
            forest: U::new(sites),
            anchors: vec![Anchors::NONE; sites],
            percolated: false,
        })
    }

    /// Returns the side length n.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Returns the number of open sites, O(1).
    #[inline]
    pub fn open_site_count(&self) -> usize {
        self.open_count
    }

    /// Returns `true` if an open path connects the top row to the bottom
    /// row, O(1).
    ///
    /// The flag is latched during [`open`](Percolation::open) the moment a
    /// merged component's anchors span both rows; it is never recomputed by
    /// scanning the grid.
    #[inline]
    pub fn percolates(&self) -> bool {
        self.percolated
    }

    /// Opens the site at `(row, col)` if it is not open already.
    ///
    /// Opening connects the site with its up/down/left/right open
    /// neighbours, accumulating their components' anchor masks, and writes
    /// the combined mask to the root of the fully merged component. Calling
    /// `open` on an already-open site is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::SiteOutOfBounds`] if `row` or `col` is outside
    /// `[1, side]`; the grid is left unchanged.
    pub fn open(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        self.validate(row, col)?;

        let site = self.label(row, col);
        if self.open_sites[site] {
            return Ok(());
        }
        self.open_sites[site] = true;
        self.open_count += 1;

        // The site's own contribution. On a 1×1 grid both bits are set, so
        // the degenerate case percolates without special handling below.
        let mut status = Anchors::NONE;
        if row == 1 {
            status |= Anchors::TOP;
        }
        if row == self.side {
            status |= Anchors::BOTTOM;
        }

        // Fixed neighbour order: up, down, left, right. Each neighbour's
        // component anchors are read at its current root before the union,
        // so no mask is lost when roots change underneath.
        if row > 1 && self.open_sites[site - self.side] {
            status |= self.root_anchors(site - self.side);
            self.forest.union(site, site - self.side);
        }
        if row < self.side && self.open_sites[site + self.side] {
            status |= self.root_anchors(site + self.side);
            self.forest.union(site, site + self.side);
        }
        if col > 1 && self.open_sites[site - 1] {
            status |= self.root_anchors(site - 1);
            self.forest.union(site, site - 1);
        }
        if col < self.side && self.open_sites[site + 1] {
            status |= self.root_anchors(site + 1);
            self.forest.union(site, site + 1);
        }

        // Write the accumulated mask to the root of the merged component.
        // Stale masks left at labels that stopped being roots are harmless:
        // every read resolves through `find` first.
        let root = self.forest.find(site);
        self.anchors[root] = status;

        if status.spans() {
            self.percolated = true;
        }
        Ok(())
    }

    /// Returns `true` if the site at `(row, col)` is open.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::SiteOutOfBounds`] if `row` or `col` is outside
    /// `[1, side]`.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.validate(row, col)?;
        Ok(self.open_sites[self.label(row, col)])
    }

    /// Returns `true` if the site at `(row, col)` is full: open and
    /// connected to the top row through open sites.
    ///
    /// Fullness is a one-sided fact about top-row reachability. A component
    /// touching only the bottom row is never full, regardless of whether
    /// the system percolates. Blocked sites are never full; their labels
    /// are singleton roots whose anchor mask is still empty.
    ///
    /// Takes `&mut self` because the root lookup compresses paths in the
    /// forest; the observable grid state is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::SiteOutOfBounds`] if `row` or `col` is outside
    /// `[1, side]`.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        self.validate(row, col)?;
        let status = self.root_anchors(self.label(row, col));
        Ok(status.touches_top())
    }

    /// Maps 1-indexed coordinates to the row-major forest label.
    #[inline]
    fn label(&self, row: usize, col: usize) -> usize {
        (row - 1) * self.side + (col - 1)
    }

    /// Reads the anchor mask of the component containing `label`, resolved
    /// at its current root.
    fn root_anchors(&mut self, label: usize) -> Anchors {
        let root = self.forest.find(label);
        self.anchors[root]
    }

    fn validate(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row < 1 || row > self.side || col < 1 || col > self.side {
            return Err(GridError::SiteOutOfBounds {
                row,
                col,
                side: self.side,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_fully_blocked() {
        let mut grid = Percolation::new(5).unwrap();
        assert_eq!(grid.side(), 5);
        assert_eq!(grid.open_site_count(), 0);
        assert!(!grid.percolates());
        for row in 1..=5 {
            for col in 1..=5 {
                assert!(!grid.is_open(row, col).unwrap());
                assert!(!grid.is_full(row, col).unwrap());
            }
        }
    }

    #[test]
    fn test_zero_side_rejected() {
        assert_eq!(
            Percolation::new(0).unwrap_err(),
            GridError::InvalidSideLength(0)
        );
    }

    #[test]
    fn test_open_marks_site_and_counts() {
        let mut grid = Percolation::new(3).unwrap();
        grid.open(2, 2).unwrap();
        assert!(grid.is_open(2, 2).unwrap());
        assert_eq!(grid.open_site_count(), 1);
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut grid = Percolation::new(3).unwrap();
        grid.open(2, 2).unwrap();
        grid.open(2, 2).unwrap();
        assert_eq!(grid.open_site_count(), 1);
    }

    #[test]
    fn test_out_of_bounds_rejected_everywhere() {
        for side in [1, 2, 5] {
            let mut grid = Percolation::new(side).unwrap();
            for (row, col) in [(0, 1), (side + 1, 1), (1, 0), (1, side + 1)] {
                let expected = GridError::SiteOutOfBounds { row, col, side };
                assert_eq!(grid.open(row, col).unwrap_err(), expected);
                assert_eq!(grid.is_open(row, col).unwrap_err(), expected);
                assert_eq!(grid.is_full(row, col).unwrap_err(), expected);
            }
            // A rejected call must not mutate anything.
            assert_eq!(grid.open_site_count(), 0);
        }
    }

    #[test]
    fn test_top_row_site_is_full_when_opened() {
        let mut grid = Percolation::new(4).unwrap();
        grid.open(1, 3).unwrap();
        assert!(grid.is_full(1, 3).unwrap());
    }

    #[test]
    fn test_fullness_propagates_down_open_path() {
        let mut grid = Percolation::new(4).unwrap();
        grid.open(3, 2).unwrap();
        assert!(!grid.is_full(3, 2).unwrap());

        grid.open(2, 2).unwrap();
        grid.open(1, 2).unwrap();
        // The whole column connects to the top once the top site opens.
        assert!(grid.is_full(1, 2).unwrap());
        assert!(grid.is_full(2, 2).unwrap());
        assert!(grid.is_full(3, 2).unwrap());
    }

    #[test]
    fn test_blocked_site_is_never_full() {
        let mut grid = Percolation::new(3).unwrap();
        grid.open(1, 1).unwrap();
        grid.open(2, 1).unwrap();
        // (2, 2) is adjacent to a full site but still blocked.
        assert!(!grid.is_full(2, 2).unwrap());
    }

    #[test]
    fn test_vertical_path_percolates_on_final_open() {
        let mut grid = Percolation::new(3).unwrap();
        grid.open(1, 3).unwrap();
        grid.open(2, 3).unwrap();
        assert!(!grid.percolates());
        grid.open(3, 3).unwrap();
        assert!(grid.percolates());
    }

    #[test]
    fn test_single_site_grid_percolates_on_open() {
        let mut grid = Percolation::new(1).unwrap();
        assert!(!grid.percolates());
        grid.open(1, 1).unwrap();
        assert!(grid.percolates());
        assert!(grid.is_full(1, 1).unwrap());
    }

    #[test]
    fn test_bottom_component_is_not_full() {
        // Open a component touching only the bottom row.
        let mut grid = Percolation::new(4).unwrap();
        grid.open(4, 1).unwrap();
        grid.open(3, 1).unwrap();
        assert!(!grid.is_full(4, 1).unwrap());
        assert!(!grid.is_full(3, 1).unwrap());
        assert!(!grid.percolates());
    }

    #[test]
    fn test_no_backwash_after_percolation() {
        // Percolate down column 1, then open a separate bottom-connected
        // component in column 3. The virtual-node design would report the
        // column-3 sites full through the bottom; anchor tracking must not.
        let mut grid = Percolation::new(3).unwrap();
        grid.open(1, 1).unwrap();
        grid.open(2, 1).unwrap();
        grid.open(3, 1).unwrap();
        assert!(grid.percolates());

        grid.open(3, 3).unwrap();
        grid.open(2, 3).unwrap();
        assert!(!grid.is_full(3, 3).unwrap());
        assert!(!grid.is_full(2, 3).unwrap());
    }

    #[test]
    fn test_merging_components_combines_anchor_masks() {
        // A top-connected component and a bottom-connected component merge
        // through a middle site; the merged component spans.
        let mut grid = Percolation::new(5).unwrap();
        grid.open(1, 2).unwrap();
        grid.open(2, 2).unwrap();
        grid.open(4, 2).unwrap();
        grid.open(5, 2).unwrap();
        assert!(!grid.percolates());

        grid.open(3, 2).unwrap();
        assert!(grid.percolates());
        assert!(grid.is_full(5, 2).unwrap());
    }

    #[test]
    fn test_lateral_connections_spread_fullness() {
        let mut grid = Percolation::new(3).unwrap();
        grid.open(2, 1).unwrap();
        grid.open(2, 2).unwrap();
        grid.open(2, 3).unwrap();
        assert!(!grid.is_full(2, 2).unwrap());

        grid.open(1, 1).unwrap();
        assert!(grid.is_full(2, 3).unwrap());
    }

    #[test]
    fn test_percolation_flag_stays_latched() {
        let mut grid = Percolation::new(2).unwrap();
        grid.open(1, 1).unwrap();
        grid.open(2, 1).unwrap();
        assert!(grid.percolates());
        grid.open(2, 2).unwrap();
        assert!(grid.percolates());
    }
}
