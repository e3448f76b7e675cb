use glam::DVec2;

// Lattice layout tuning.

// Logical columns spanning the viewport at rest
pub const COLUMNS_AT_REST: f64 = 4.0;

// Edge-proximity smoothstep band, as fractions of cell width
pub const EDGE_GLOW_NEAR_FRAC: f64 = 0.15;
pub const EDGE_GLOW_FAR_FRAC: f64 = 0.55;

const SQRT3_OVER_2: f64 = 0.866_025_403_784_438_6;

/// Triangular-lattice layout for one viewport size. Recomputed every
/// frame; nothing here survives a resize.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lattice {
    pub column_width: f64,
    pub cell_width: f64,
    pub cell_height: f64,
    pub row_height: f64,
    pub columns: u32,
    pub rows: u32,
}

/// One repeat unit of the lattice. `x`/`y` are the cell origin before
/// the alternating row offset is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
    pub x: f64,
    pub y: f64,
    pub offset: f64,
}

impl Cell {
    #[inline]
    pub fn center(&self, lattice: &Lattice) -> DVec2 {
        DVec2::new(
            self.offset + self.x + lattice.cell_width,
            self.y + lattice.cell_height * 0.75,
        )
    }
}

impl Lattice {
    pub fn for_viewport(width: f64, height: f64) -> Self {
        let column_width = width / COLUMNS_AT_REST;
        let cell_width = column_width / 2.0;
        // equilateral triangle height-to-width ratio
        let cell_height = 2.0 * cell_width / 3.0_f64.sqrt();
        let row_height = cell_height * 1.5;
        let (columns, rows) = if width > 0.0 && height > 0.0 {
            (
                (width / column_width).ceil() as u32 + 2,
                (height / row_height).ceil() as u32 + 2,
            )
        } else {
            (0, 0)
        };
        Self {
            column_width,
            cell_width,
            cell_height,
            row_height,
            columns,
            rows,
        }
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }

    /// Yields every cell covering the viewport plus a one-cell margin
    /// on all sides; iteration starts one column/row before the
    /// visible origin so edge cells are fully drawn.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let rows = if self.is_degenerate() { 0 } else { self.rows + 1 };
        let cols = if self.is_degenerate() { 0 } else { self.columns + 1 };
        (0..rows).flat_map(move |row| {
            (0..cols).map(move |col| Cell {
                row,
                col,
                x: (col as f64 - 1.0) * self.column_width,
                y: (row as f64 - 1.0) * self.row_height,
                offset: (row % 2) as f64 * self.cell_width,
            })
        })
    }

    /// Distance to the nearest triangle edge line: project onto the
    /// vertical axis and the two ±60° diagonals, reduce modulo the
    /// axis spacing, fold around the midpoint, take the minimum.
    /// Zero exactly on lattice boundaries, maximal at triangle centers.
    pub fn edge_distance(&self, p: DVec2) -> f64 {
        let h = self.cell_height;
        let axes = [
            (p.y, h),
            (0.5 * p.y + SQRT3_OVER_2 * p.x, 2.0 * h),
            (0.5 * p.y - SQRT3_OVER_2 * p.x, 2.0 * h),
        ];
        axes.iter()
            .map(|&(proj, spacing)| {
                let m = proj.rem_euclid(spacing);
                spacing * 0.5 - (m - spacing * 0.5).abs()
            })
            .fold(f64::MAX, f64::min)
    }

    /// Smoothed edge-proximity factor in [0,1]: 1 on a triangle edge,
    /// falling to 0 past `EDGE_GLOW_FAR_FRAC` of the cell width.
    pub fn edge_proximity(&self, p: DVec2) -> f64 {
        1.0 - smoothstep(
            EDGE_GLOW_NEAR_FRAC * self.cell_width,
            EDGE_GLOW_FAR_FRAC * self.cell_width,
            self.edge_distance(p),
        )
    }
}

#[inline]
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
