//! The `Lattice` type describes a periodic graphene supercell, and maps the
//! atoms it contains onto a linear basis index.
use crate::Error;

mod positions;
pub use self::positions::{positions, positions_with_convention};

/// The two atoms of a graphene unit cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sublattice {
    /// First atom in the unit cell, at the origin of the cell
    A,
    /// Second atom in the unit cell
    B,
}

impl Sublattice {
    /// Get the index (0 for A, 1 for B) of this sublattice inside a unit cell
    pub fn index(self) -> usize {
        match self {
            Sublattice::A => 0,
            Sublattice::B => 1,
        }
    }

    /// Get the sublattice with the given index inside a unit cell, if any
    pub fn from_index(index: usize) -> Option<Sublattice> {
        match index {
            0 => Some(Sublattice::A),
            1 => Some(Sublattice::B),
            _ => None,
        }
    }
}

/// Periodic conventions used when wrapping cell indexes around the supercell.
///
/// Some of the historical formulas wrap the second lattice direction with the
/// number of cells along the first direction. `Legacy` reproduces them as-is,
/// and `Geometric` wraps each direction with its own number of cells. First
/// neighbors hopping does not depend on the convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[derive(serde::Deserialize, serde::Serialize, schemars::JsonSchema)]
pub enum Convention {
    /// Reproduce the historical behavior: positions are generated on a
    /// `nx × nx` grid of cells, and second neighbors hopping is wrapped along
    /// `y` with `nx`, connecting A sites to B sites.
    #[default]
    Legacy,
    /// Positions are generated in basis order on the `nx × ny` grid, and
    /// second neighbors hopping connects each site to the six sites of the
    /// same sublattice sharing one of its first neighbors.
    Geometric,
}

/// A single atom in the supercell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Site {
    /// index of the unit cell along the first lattice direction
    pub x: usize,
    /// index of the unit cell along the second lattice direction
    pub y: usize,
    /// which atom in the unit cell this is
    pub sublattice: Sublattice,
}

/// Get the basis index of the atom `s` (0 for A, 1 for B) in the unit cell at
/// `(x, y)`, for a supercell with `nx` unit cells along the first direction.
///
/// This function does not check bounds nor apply periodic boundary
/// conditions: callers are expected to wrap `x` and `y` inside the supercell
/// before calling it.
#[inline]
pub fn site_index(x: usize, y: usize, s: usize, nx: usize) -> usize {
    (y * nx + x) * 2 + s
}

/// Wrap a (possibly negative) cell index inside `[0, period)`. This follows
/// Python convention for the remainder, which always has the same sign as
/// `period`.
pub(crate) fn wrap(value: isize, period: usize) -> usize {
    debug_assert!(period > 0 && period < (isize::MAX as usize));
    let period = period as isize;
    let mut remainder = value % period;
    if remainder < 0 {
        remainder += period;
    }
    return remainder as usize;
}

/// A periodic graphene supercell made of `nx × ny` unit cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lattice {
    nx: usize,
    ny: usize,
}

impl Lattice {
    /// Create a new supercell with `nx` unit cells along the first lattice
    /// direction and `ny` along the second one.
    ///
    /// The supercell must be small enough for its `N × N` Hamiltonian to be
    /// addressable in memory.
    pub fn new(nx: usize, ny: usize) -> Result<Lattice, Error> {
        if nx == 0 || ny == 0 {
            return Err(Error::InvalidLatticeSize { nx, ny });
        }

        let matrix_bytes = nx.checked_mul(ny)
            .and_then(|cells| cells.checked_mul(2))
            .and_then(|size| size.checked_mul(size))
            .and_then(|elements| elements.checked_mul(std::mem::size_of::<f64>()));

        match matrix_bytes {
            Some(bytes) if bytes <= isize::MAX as usize => Ok(Lattice { nx, ny }),
            _ => Err(Error::InvalidParameter(format!(
                "a {}x{} supercell is too large, its hamiltonian can not be allocated", nx, ny
            ))),
        }
    }

    /// Number of unit cells along the first lattice direction
    pub fn nx(&self) -> usize {
        self.nx
    }

    /// Number of unit cells along the second lattice direction
    pub fn ny(&self) -> usize {
        self.ny
    }

    /// Total number of unit cells in the supercell
    pub fn n_cells(&self) -> usize {
        self.nx * self.ny
    }

    /// Total number of sites in the supercell, i.e. the size of the basis
    pub fn size(&self) -> usize {
        2 * self.n_cells()
    }

    /// Get the basis index of the given atom in the unit cell at `(x, y)`.
    /// The cell indexes must already be inside the supercell.
    pub fn site_index(&self, x: usize, y: usize, sublattice: Sublattice) -> usize {
        debug_assert!(x < self.nx && y < self.ny);
        site_index(x, y, sublattice.index(), self.nx)
    }

    /// Get the basis index of the given atom in the unit cell at `(x, y)`,
    /// applying periodic boundary conditions in both directions.
    pub fn wrapped_index(&self, x: isize, y: isize, sublattice: Sublattice) -> usize {
        let x = wrap(x, self.nx);
        let y = wrap(y, self.ny);
        self.site_index(x, y, sublattice)
    }

    /// Get the site corresponding to the given basis index, or `None` if the
    /// index is outside of this supercell.
    pub fn site(&self, index: usize) -> Option<Site> {
        if index >= self.size() {
            return None;
        }

        let cell = index / 2;
        let sublattice = Sublattice::from_index(index % 2)?;
        return Some(Site {
            x: cell % self.nx,
            y: cell / self.nx,
            sublattice: sublattice,
        });
    }

    /// Iterate over all the sites in this supercell, in basis order
    pub fn sites(&self) -> impl Iterator<Item=Site> + '_ {
        (0..self.size()).filter_map(|index| self.site(index))
    }

    /// Iterate over the `(x, y)` indexes of all unit cells in this supercell
    pub(crate) fn cells(&self) -> impl Iterator<Item=(usize, usize)> {
        let ny = self.ny;
        (0..self.nx).flat_map(move |x| (0..ny).map(move |y| (x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_size() {
        let error = Lattice::new(0, 3).unwrap_err();
        assert!(matches!(error, Error::InvalidLatticeSize { nx: 0, ny: 3 }));

        let error = Lattice::new(4, 0).unwrap_err();
        assert!(matches!(error, Error::InvalidLatticeSize { nx: 4, ny: 0 }));

        let error = Lattice::new(usize::MAX, 2).unwrap_err();
        assert!(matches!(error, Error::InvalidParameter(_)));
    }

    #[test]
    fn hamiltonian_too_large() {
        // 2 nx ny fits in usize, but not (2 nx ny)^2
        let error = Lattice::new(1 << 17, 1 << 17).unwrap_err();
        assert!(matches!(error, Error::InvalidParameter(_)));

        // the matrix elements fit in usize, but not the bytes
        let nx = 1 << ((usize::BITS - 4) / 2);
        assert!(matches!(Lattice::new(nx, 1), Err(Error::InvalidParameter(_))));

        let error = crate::pristine_hamiltonian(1 << 17, 1 << 17, 1.0, 1).unwrap_err();
        assert!(matches!(error, Error::InvalidParameter(_)));

        assert!(Lattice::new(1 << 6, 1 << 6).is_ok());
    }

    #[test]
    fn sizes() {
        let lattice = Lattice::new(3, 5).unwrap();
        assert_eq!(lattice.nx(), 3);
        assert_eq!(lattice.ny(), 5);
        assert_eq!(lattice.n_cells(), 15);
        assert_eq!(lattice.size(), 30);
    }

    #[test]
    fn index_formula() {
        assert_eq!(site_index(0, 0, 0, 2), 0);
        assert_eq!(site_index(0, 0, 1, 2), 1);
        assert_eq!(site_index(1, 0, 0, 2), 2);
        assert_eq!(site_index(0, 1, 0, 2), 4);
        assert_eq!(site_index(1, 1, 1, 2), 7);
        assert_eq!(site_index(2, 3, 1, 4), 29);
    }

    #[test]
    fn index_is_a_bijection() {
        let lattice = Lattice::new(3, 4).unwrap();
        let mut seen = vec![false; lattice.size()];
        for x in 0..3 {
            for y in 0..4 {
                for sublattice in [Sublattice::A, Sublattice::B] {
                    let index = lattice.site_index(x, y, sublattice);
                    assert!(index < lattice.size());
                    assert!(!seen[index], "index {} was produced twice", index);
                    seen[index] = true;

                    assert_eq!(lattice.site(index), Some(Site { x, y, sublattice }));
                }
            }
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn inverse_mapping() {
        let lattice = Lattice::new(2, 3).unwrap();
        assert_eq!(lattice.site(9), Some(Site { x: 0, y: 2, sublattice: Sublattice::B }));
        assert_eq!(lattice.site(12), None);

        let sites = lattice.sites().collect::<Vec<_>>();
        assert_eq!(sites.len(), 12);
        for (index, site) in sites.iter().enumerate() {
            assert_eq!(lattice.site_index(site.x, site.y, site.sublattice), index);
        }
    }

    #[test]
    fn periodic_wrapping() {
        assert_eq!(wrap(-1, 3), 2);
        assert_eq!(wrap(-4, 3), 2);
        assert_eq!(wrap(3, 3), 0);
        assert_eq!(wrap(7, 3), 1);
        assert_eq!(wrap(-1, 1), 0);

        let lattice = Lattice::new(3, 2).unwrap();
        assert_eq!(lattice.wrapped_index(-1, 0, Sublattice::B), lattice.site_index(2, 0, Sublattice::B));
        assert_eq!(lattice.wrapped_index(0, 2, Sublattice::A), lattice.site_index(0, 0, Sublattice::A));
        assert_eq!(lattice.wrapped_index(4, -3, Sublattice::A), lattice.site_index(1, 1, Sublattice::A));
    }

    #[test]
    fn cells() {
        let lattice = Lattice::new(2, 3).unwrap();
        let cells = lattice.cells().collect::<Vec<_>>();
        assert_eq!(cells, [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn sublattices() {
        assert_eq!(Sublattice::A.index(), 0);
        assert_eq!(Sublattice::B.index(), 1);
        assert_eq!(Sublattice::from_index(1), Some(Sublattice::B));
        assert_eq!(Sublattice::from_index(2), None);
    }
}
