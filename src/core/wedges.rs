// The twelve wedge presets of the p6m rosette. Each lattice cell is
// assembled from twelve clipped, rigidly transformed copies of the
// same sampled source rectangle; the presets are geometric constants
// of the symmetry group and are kept as one fixed table so the
// arrangement can be audited and tested in isolation.

use std::f64::consts::{FRAC_PI_3, PI};

// Overdraw tolerance (px) padded around clip polygons and blits to
// avoid seam gaps between adjacent wedges.
pub const TOL: f64 = 1.0;

const ROT_60: f64 = FRAC_PI_3;
const ROT_120: f64 = 2.0 * FRAC_PI_3;

/// One clip-vertex coordinate pair: cell-dimension multiples plus
/// tolerance multiples, resolved against a concrete cell size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipPoint {
    pub wx: f64,
    pub tx: f64,
    pub hy: f64,
    pub ty: f64,
}

/// One wedge: a triangular clip region in cell-local coordinates and
/// the rigid transform (translate, rotate, then optional axis flip)
/// under which the sampled rectangle is blitted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wedge {
    pub clip: [ClipPoint; 3],
    pub shift: (f64, f64),
    pub rotation: f64,
    pub flip: (f64, f64),
}

impl Wedge {
    /// Clip triangle for a concrete cell size, tolerance included.
    pub fn clip_path(&self, w: f64, h: f64, tol: f64) -> [[f64; 2]; 3] {
        self.clip
            .map(|p| [p.wx * w + p.tx * tol, p.hy * h + p.ty * tol])
    }

    /// Cell-local translation applied before rotation and flip.
    #[inline]
    pub fn translation(&self, w: f64, h: f64) -> (f64, f64) {
        (self.shift.0 * w, self.shift.1 * h)
    }
}

const fn cp(wx: f64, tx: f64, hy: f64, ty: f64) -> ClipPoint {
    ClipPoint { wx, tx, hy, ty }
}

pub const WEDGES: [Wedge; 12] = [
    Wedge {
        clip: [cp(0.0, -1.0, 0.0, -1.0), cp(1.0, 1.0, 0.5, 0.0), cp(0.5, 0.0, 0.75, 1.0)],
        shift: (0.0, 0.0),
        rotation: 0.0,
        flip: (1.0, 1.0),
    },
    Wedge {
        clip: [cp(0.0, -1.0, 0.0, -2.0), cp(0.5, 1.0, 0.75, 0.0), cp(0.0, -1.0, 1.0, 1.0)],
        shift: (0.0, 0.0),
        rotation: -ROT_60,
        flip: (-1.0, 1.0),
    },
    Wedge {
        clip: [cp(1.0, 1.0, 1.5, 1.0), cp(0.0, -1.0, 1.0, 0.0), cp(0.5, 0.0, 0.75, -1.0)],
        shift: (1.0, 1.5),
        rotation: PI,
        flip: (1.0, 1.0),
    },
    Wedge {
        clip: [cp(1.0, 1.0, 1.5, 2.0), cp(0.5, -1.0, 0.75, 0.0), cp(1.0, 1.0, 0.5, -1.0)],
        shift: (1.0, 1.5),
        rotation: -ROT_60,
        flip: (1.0, -1.0),
    },
    Wedge {
        clip: [cp(0.0, -2.0, 0.0, -1.0), cp(1.0, 1.0, 0.0, -1.0), cp(1.0, 1.0, 0.5, 1.0)],
        shift: (0.0, 0.0),
        rotation: ROT_60,
        flip: (1.0, -1.0),
    },
    Wedge {
        clip: [cp(0.0, -2.0, 0.0, 1.0), cp(1.0, 1.0, 0.0, 1.0), cp(1.0, 1.0, -0.5, -1.0)],
        shift: (0.0, 0.0),
        rotation: -ROT_60,
        flip: (1.0, 1.0),
    },
    Wedge {
        clip: [cp(2.0, 2.0, 0.0, -1.0), cp(1.0, -1.0, 0.0, -1.0), cp(1.0, -1.0, 0.5, 1.0)],
        shift: (2.0, 0.0),
        rotation: ROT_120,
        flip: (1.0, 1.0),
    },
    Wedge {
        clip: [cp(2.0, 2.0, 0.0, 1.0), cp(1.0, -1.0, 0.0, 1.0), cp(1.0, -1.0, -0.5, -1.0)],
        shift: (2.0, 0.0),
        rotation: -ROT_120,
        flip: (1.0, -1.0),
    },
    Wedge {
        clip: [cp(1.0, -1.0, 0.5, 0.0), cp(2.0, 2.0, 0.0, -2.0), cp(1.5, 0.0, 0.75, 1.0)],
        shift: (2.0, 0.0),
        rotation: 0.0,
        flip: (-1.0, 1.0),
    },
    Wedge {
        clip: [cp(2.0, 1.0, 1.0, 1.0), cp(2.0, 1.0, 0.0, -2.0), cp(1.5, -1.0, 0.75, 0.0)],
        shift: (2.0, 0.0),
        rotation: ROT_60,
        flip: (1.0, 1.0),
    },
    Wedge {
        clip: [cp(1.0, -1.0, 0.5, -2.0), cp(1.5, 1.0, 0.75, -1.0), cp(1.0, -1.0, 1.5, 2.0)],
        shift: (1.0, 1.5),
        rotation: -ROT_120,
        flip: (1.0, 1.0),
    },
    Wedge {
        clip: [cp(2.0, 1.0, 1.0, 0.0), cp(1.5, 0.0, 0.75, -1.0), cp(1.0, -2.0, 1.5, 2.0)],
        shift: (1.0, 1.5),
        rotation: PI,
        flip: (-1.0, 1.0),
    },
];
