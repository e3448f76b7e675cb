// Host-side tests for the lattice geometry engine.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod lattice {
    include!("../src/core/lattice.rs");
}

use glam::DVec2;
use lattice::*;

#[test]
fn derives_cell_dimensions_from_viewport() {
    let l = Lattice::for_viewport(800.0, 600.0);
    assert!((l.column_width - 200.0).abs() < 1e-9);
    assert!((l.cell_width - 100.0).abs() < 1e-9);
    // equilateral ratio: height = 2 * width / sqrt(3)
    assert!((l.cell_height - 200.0 / 3.0_f64.sqrt()).abs() < 1e-9);
    assert!((l.row_height - 1.5 * l.cell_height).abs() < 1e-9);
    assert_eq!(l.columns, 6);
    assert_eq!(l.rows, (600.0 / l.row_height).ceil() as u32 + 2);
}

#[test]
fn cells_cover_viewport_with_margin() {
    for &(w, h) in &[(800.0, 600.0), (1920.0, 1080.0), (333.0, 777.0), (40.0, 40.0)] {
        let l = Lattice::for_viewport(w, h);
        let cells: Vec<Cell> = l.cells().collect();
        assert_eq!(cells.len(), ((l.rows + 1) * (l.columns + 1)) as usize);

        let min_x = cells.iter().map(|c| c.x).fold(f64::MAX, f64::min);
        let min_y = cells.iter().map(|c| c.y).fold(f64::MAX, f64::min);
        let max_x = cells.iter().map(|c| c.x).fold(f64::MIN, f64::max);
        let max_y = cells.iter().map(|c| c.y).fold(f64::MIN, f64::max);

        // one full column/row of margin before the origin
        assert!((min_x + l.column_width).abs() < 1e-9, "viewport {w}x{h}");
        assert!((min_y + l.row_height).abs() < 1e-9);
        // and the last origins reach past the far edges
        assert!(max_x >= w, "viewport {w}x{h}: max_x {max_x}");
        assert!(max_y >= h, "viewport {w}x{h}: max_y {max_y}");
    }
}

#[test]
fn rows_alternate_half_cell_offset() {
    let l = Lattice::for_viewport(800.0, 600.0);
    for cell in l.cells() {
        let expected = (cell.row % 2) as f64 * l.cell_width;
        assert_eq!(cell.offset, expected);
    }
}

#[test]
fn cell_center_sits_inside_the_tile() {
    let l = Lattice::for_viewport(800.0, 600.0);
    let cell = l.cells().nth(8).unwrap();
    let c = cell.center(&l);
    assert!((c.x - (cell.offset + cell.x + l.cell_width)).abs() < 1e-9);
    assert!((c.y - (cell.y + 0.75 * l.cell_height)).abs() < 1e-9);
}

#[test]
fn degenerate_viewport_yields_no_cells() {
    assert_eq!(Lattice::for_viewport(0.0, 600.0).cells().count(), 0);
    assert_eq!(Lattice::for_viewport(800.0, 0.0).cells().count(), 0);
    assert_eq!(Lattice::for_viewport(-5.0, -5.0).cells().count(), 0);
}

#[test]
fn edge_distance_is_zero_on_lattice_lines() {
    let l = Lattice::for_viewport(800.0, 600.0);
    let h = l.cell_height;
    // horizontal lattice lines, any x
    for k in -2i32..=3 {
        for &x in &[-450.0, 0.0, 17.3, 612.0] {
            let d = l.edge_distance(DVec2::new(x, k as f64 * h));
            assert!(d.abs() < 1e-9, "x={x} k={k}: d={d}");
        }
    }
    // a diagonal lattice line: 0.5*y + (sqrt(3)/2)*x = 2h
    let y = 0.5 * h;
    let x = (2.0 * h - 0.25 * h) / (3.0_f64.sqrt() / 2.0);
    let d = l.edge_distance(DVec2::new(x, y));
    assert!(d.abs() < 1e-9, "diagonal: d={d}");
}

#[test]
fn edge_distance_peaks_between_the_lattice_lines() {
    let l = Lattice::for_viewport(800.0, 600.0);
    let h = l.cell_height;
    // the vertical fold caps the minimum at h/2, reached where both
    // diagonal folds clear it, e.g. at (cell_width, h/2)
    let peak = DVec2::new(l.cell_width, 0.5 * h);
    let d = l.edge_distance(peak);
    assert!((d - 0.5 * h).abs() < 1e-9, "d={d}, h/2={}", 0.5 * h);

    // nothing in the plane beats that cap
    let mut max_d: f64 = 0.0;
    for yi in 0..200 {
        for xi in 0..200 {
            let p = DVec2::new(xi as f64 * 0.02 * h, yi as f64 * 0.02 * h);
            max_d = max_d.max(l.edge_distance(p));
        }
    }
    assert!(max_d <= 0.5 * h + 1e-9, "max_d={max_d}");

    // triangle interiors sit strictly between the extremes
    let centroid = DVec2::new(l.cell_width, h / 3.0);
    let dc = l.edge_distance(centroid);
    assert!(dc > 0.25 * h && dc <= 0.5 * h, "dc={dc}");
}

#[test]
fn edge_proximity_is_one_on_edges_and_bounded() {
    let l = Lattice::for_viewport(800.0, 600.0);
    let h = l.cell_height;
    assert!((l.edge_proximity(DVec2::new(123.0, 0.0)) - 1.0).abs() < 1e-9);
    for yi in 0..50 {
        for xi in 0..50 {
            let p = DVec2::new(xi as f64 * 0.07 * h, yi as f64 * 0.07 * h);
            let e = l.edge_proximity(p);
            assert!((0.0..=1.0).contains(&e), "proximity out of range: {e}");
        }
    }
    // far interior glows less than the seam
    let interior = l.edge_proximity(DVec2::new(0.0, 2.0 * h / 3.0));
    assert!(interior < 1.0);
}

#[test]
fn smoothstep_clamps_and_interpolates() {
    assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
    assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
    assert!((smoothstep(0.0, 1.0, 0.5) - 0.5).abs() < 1e-9);
    let a = smoothstep(10.0, 20.0, 12.0);
    let b = smoothstep(10.0, 20.0, 18.0);
    assert!(a < b);
}
