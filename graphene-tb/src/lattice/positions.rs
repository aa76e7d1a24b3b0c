use log::warn;
use ndarray::Array2;

use crate::Error;
use super::{Convention, Lattice};

/// Get the Cartesian positions of the atoms in a `nx × ny` graphene supercell
/// with lattice constant `a`, using the [`Convention::Legacy`] convention.
///
/// See [`positions_with_convention`] for more information.
pub fn positions(nx: usize, ny: usize, a: f64) -> Result<Array2<f64>, Error> {
    positions_with_convention(nx, ny, a, Convention::Legacy)
}

/// Get the Cartesian positions of the atoms in a `nx × ny` graphene supercell
/// with lattice constant `a` (the distance between first neighbors).
///
/// The lattice vectors are `a1 = a/2 (3, √3)` and `a2 = a/2 (3, -√3)`, and the
/// two atoms of the unit cell at `R = x a1 + y a2` are located at `R` (A) and
/// `R + (a, 0)` (B). Each row of the returned array contains the `(x, y)`
/// coordinates of one atom.
///
/// With [`Convention::Legacy`], unit cells are visited with `x` in the outer
/// loop and `y` in the inner loop, and both loops go up to `nx`: the output
/// contains `2 nx nx` rows, independently of `ny`. With
/// [`Convention::Geometric`], the output contains one row per basis site, and
/// row `i` contains the position of the site with basis index `i`.
pub fn positions_with_convention(nx: usize, ny: usize, a: f64, convention: Convention) -> Result<Array2<f64>, Error> {
    let lattice = Lattice::new(nx, ny)?;
    if !a.is_finite() {
        return Err(Error::InvalidParameter(format!(
            "lattice constant must be a finite number, got {}", a
        )));
    }

    let sqrt_3 = f64::sqrt(3.0);
    let a1 = [1.5 * a, 0.5 * sqrt_3 * a];
    let a2 = [1.5 * a, -0.5 * sqrt_3 * a];
    let tau_b = [a, 0.0];

    let cell_origin = |x: usize, y: usize| {
        let (x, y) = (x as f64, y as f64);
        [x * a1[0] + y * a2[0], x * a1[1] + y * a2[1]]
    };

    let positions = match convention {
        Convention::Legacy => {
            if nx != ny {
                warn!(
                    "legacy positions for a {}x{} supercell are generated on a {}x{} grid of cells",
                    nx, ny, nx, nx
                );
            }

            let n_rows = nx.checked_mul(nx).and_then(|cells| cells.checked_mul(2)).ok_or_else(|| {
                Error::InvalidParameter(format!("a {}x{} grid of cells is too large", nx, nx))
            })?;

            let mut positions = Array2::zeros((n_rows, 2));
            let mut row = 0;
            for x in 0..nx {
                for y in 0..nx {
                    let origin = cell_origin(x, y);
                    positions[[row, 0]] = origin[0];
                    positions[[row, 1]] = origin[1];
                    positions[[row + 1, 0]] = origin[0] + tau_b[0];
                    positions[[row + 1, 1]] = origin[1] + tau_b[1];
                    row += 2;
                }
            }
            positions
        }
        Convention::Geometric => {
            let mut positions = Array2::zeros((lattice.size(), 2));
            for site in lattice.sites() {
                let index = lattice.site_index(site.x, site.y, site.sublattice);
                let origin = cell_origin(site.x, site.y);
                let offset = tau_b[0] * site.sublattice.index() as f64;
                positions[[index, 0]] = origin[0] + offset;
                positions[[index, 1]] = origin[1];
            }
            positions
        }
    };

    return Ok(positions);
}
