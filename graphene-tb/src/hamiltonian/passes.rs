use log::warn;
use ndarray::Array2;

use crate::lattice::{site_index, wrap};
use crate::{Convention, Error, Lattice, Sublattice};

/// Maximal neighbor order for which hopping passes are implemented
pub const MAX_NEIGHBOR_ORDER: usize = 2;

/// A `HoppingPass` adds the couplings between one class of neighbors to a
/// Hamiltonian matrix.
///
/// Passes are applied in sequence to the same matrix, starting from a matrix
/// full of zeros, to build Hamiltonians including multiple orders of
/// neighbors.
pub trait HoppingPass {
    /// Get a human readable name for this pass
    fn name(&self) -> &'static str;

    /// Get the neighbor order (1 for first neighbors, 2 for second neighbors,
    /// etc.) of the couplings added by this pass
    fn order(&self) -> usize;

    /// Set the couplings handled by this pass in `hamiltonian` to `-hopping`.
    ///
    /// The hamiltonian must have the shape `(N, N)` where `N` is the number of
    /// sites in the `lattice`. Implementations must keep the matrix symmetric,
    /// and must not modify its diagonal.
    fn apply(&self, lattice: &Lattice, hopping: f64, hamiltonian: &mut Array2<f64>) -> Result<(), Error>;
}

/// Get the list of passes to apply to build a Hamiltonian including all
/// neighbors up to (and including) the given `order`.
pub fn hopping_passes(order: usize, convention: Convention) -> Result<Vec<Box<dyn HoppingPass>>, Error> {
    if order == 0 || order > MAX_NEIGHBOR_ORDER {
        return Err(Error::UnsupportedNeighborOrder(order));
    }

    let mut passes: Vec<Box<dyn HoppingPass>> = vec![Box::new(FirstNeighbors)];
    if order >= 2 {
        passes.push(Box::new(SecondNeighbors { convention }));
    }

    return Ok(passes);
}

/// Couple sites `i` and `j` with the given amplitude, writing both `H[i, j]`
/// and `H[j, i]`. This overwrites any previous value.
#[inline]
fn couple(hamiltonian: &mut Array2<f64>, i: usize, j: usize, value: f64) {
    hamiltonian[[i, j]] = value;
    hamiltonian[[j, i]] = value;
}

/// Nearest neighbors hopping, between A and B sites.
///
/// The A site in cell `(x, y)` is coupled to the B sites in cells `(x, y)`,
/// `(x - 1, y)` and `(x - 1, y + 1)`, with periodic boundary conditions in
/// both directions.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstNeighbors;

impl HoppingPass for FirstNeighbors {
    fn name(&self) -> &'static str {
        "first neighbors"
    }

    fn order(&self) -> usize {
        1
    }

    fn apply(&self, lattice: &Lattice, hopping: f64, hamiltonian: &mut Array2<f64>) -> Result<(), Error> {
        for (x, y) in lattice.cells() {
            let (xi, yi) = (x as isize, y as isize);
            let a_site = lattice.site_index(x, y, Sublattice::A);

            let neighbors = [
                lattice.site_index(x, y, Sublattice::B),
                lattice.wrapped_index(xi - 1, yi, Sublattice::B),
                lattice.wrapped_index(xi - 1, yi + 1, Sublattice::B),
            ];

            for b_site in neighbors {
                couple(hamiltonian, a_site, b_site, -hopping);
            }
        }

        Ok(())
    }
}

/// Second neighbors hopping. The exact set of couplings depends on the
/// [`Convention`] used.
///
/// With [`Convention::Legacy`], the A site in cell `(x, y)` is coupled to the
/// B sites in cells `(x - 2, y)`, `(x, y + 1)` and `(x, y - 1)`, where `x` is
/// wrapped with `nx` and `y` is also wrapped with `nx`. If `nx > ny`, some of
/// these sites do not exist and the pass fails.
///
/// With [`Convention::Geometric`], each site is coupled to the six sites of
/// the same sublattice sharing a first neighbor with it, located in the cells
/// at `(x ± 1, y)`, `(x, y ± 1)` and `(x ± 1, y ∓ 1)`. A site is never coupled
/// to one of its own periodic images.
#[derive(Debug, Clone, Copy, Default)]
pub struct SecondNeighbors {
    pub convention: Convention,
}

impl SecondNeighbors {
    fn apply_legacy(lattice: &Lattice, hopping: f64, hamiltonian: &mut Array2<f64>) -> Result<(), Error> {
        let nx = lattice.nx();
        if nx != lattice.ny() {
            warn!(
                "legacy second neighbors wrap the y direction with nx={} instead of ny={}",
                nx, lattice.ny()
            );
        }

        let size = lattice.size();
        for (x, y) in lattice.cells() {
            let (xi, yi) = (x as isize, y as isize);
            let a_site = lattice.site_index(x, y, Sublattice::A);

            let neighbors = [
                site_index(wrap(xi - 2, nx), y, Sublattice::B.index(), nx),
                site_index(x, wrap(yi + 1, nx), Sublattice::B.index(), nx),
                site_index(x, wrap(yi - 1, nx), Sublattice::B.index(), nx),
            ];

            for site in neighbors {
                if site >= size {
                    return Err(Error::IndexOutOfBounds { index: site, size: size });
                }
                couple(hamiltonian, a_site, site, -hopping);
            }
        }

        Ok(())
    }

    fn apply_geometric(lattice: &Lattice, hopping: f64, hamiltonian: &mut Array2<f64>) -> Result<(), Error> {
        // the other three neighbors are set by the symmetric writes
        const SHIFTS: [(isize, isize); 3] = [(1, 0), (0, 1), (1, -1)];

        for (x, y) in lattice.cells() {
            let (xi, yi) = (x as isize, y as isize);
            for sublattice in [Sublattice::A, Sublattice::B] {
                let site = lattice.site_index(x, y, sublattice);
                for (dx, dy) in SHIFTS {
                    let neighbor = lattice.wrapped_index(xi + dx, yi + dy, sublattice);
                    if neighbor == site {
                        continue;
                    }
                    couple(hamiltonian, site, neighbor, -hopping);
                }
            }
        }

        Ok(())
    }
}

impl HoppingPass for SecondNeighbors {
    fn name(&self) -> &'static str {
        match self.convention {
            Convention::Legacy => "second neighbors (legacy)",
            Convention::Geometric => "second neighbors",
        }
    }

    fn order(&self) -> usize {
        2
    }

    fn apply(&self, lattice: &Lattice, hopping: f64, hamiltonian: &mut Array2<f64>) -> Result<(), Error> {
        match self.convention {
            Convention::Legacy => SecondNeighbors::apply_legacy(lattice, hopping, hamiltonian),
            Convention::Geometric => SecondNeighbors::apply_geometric(lattice, hopping, hamiltonian),
        }
    }
}
