use log::debug;
use ndarray::Array2;

use crate::{Convention, Error, Lattice};
use super::{HoppingPass, hopping_passes};

/// Build the tight-binding Hamiltonian of a pristine `nx × ny` graphene
/// supercell, with periodic boundary conditions in both directions and using
/// the [`Convention::Legacy`] convention.
///
/// All couplings between neighbors up to the given order (`neighbors` must be
/// 1 or 2) are set to `-hopping`. The returned matrix is symmetric, with a
/// zero diagonal.
pub fn pristine_hamiltonian(nx: usize, ny: usize, hopping: f64, neighbors: usize) -> Result<Array2<f64>, Error> {
    pristine_hamiltonian_with_convention(nx, ny, hopping, neighbors, Convention::Legacy)
}

/// Build the tight-binding Hamiltonian of a pristine `nx × ny` graphene
/// supercell, using the given `convention` for second neighbors.
#[time_graph::instrument(name = "pristine_hamiltonian")]
pub fn pristine_hamiltonian_with_convention(
    nx: usize,
    ny: usize,
    hopping: f64,
    neighbors: usize,
    convention: Convention,
) -> Result<Array2<f64>, Error> {
    let lattice = Lattice::new(nx, ny)?;
    check_hopping(hopping)?;
    let passes = hopping_passes(neighbors, convention)?;
    return assemble(&lattice, hopping, &passes);
}

pub(crate) fn check_hopping(hopping: f64) -> Result<(), Error> {
    if !hopping.is_finite() {
        return Err(Error::InvalidParameter(format!(
            "hopping parameter must be a finite number, got {}", hopping
        )));
    }
    Ok(())
}

/// Apply all `passes` in order to a new zero matrix
pub(crate) fn assemble(lattice: &Lattice, hopping: f64, passes: &[Box<dyn HoppingPass>]) -> Result<Array2<f64>, Error> {
    let size = lattice.size();
    let mut hamiltonian = Array2::zeros((size, size));
    for pass in passes {
        debug!("applying {} hopping on a {}x{} supercell", pass.name(), lattice.nx(), lattice.ny());
        pass.apply(lattice, hopping, &mut hamiltonian)?;
    }
    return Ok(hamiltonian);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hamiltonian::{coordination, is_symmetric};
    use crate::site_index;

    #[test]
    fn two_by_two() {
        let hamiltonian = pristine_hamiltonian(2, 2, 1.0, 1).unwrap();
        assert_eq!(hamiltonian.shape(), [8, 8]);

        let a = site_index(0, 0, 0, 2);
        let b = site_index(0, 0, 1, 2);
        assert_eq!(hamiltonian[[a, b]], -1.0);
        assert_eq!(hamiltonian[[b, a]], -1.0);
        assert_eq!(hamiltonian[[a, a]], 0.0);
    }

    #[test]
    fn single_cell_does_not_accumulate() {
        let hamiltonian = pristine_hamiltonian(1, 1, 2.5, 1).unwrap();
        assert_eq!(hamiltonian.shape(), [2, 2]);
        assert_eq!(hamiltonian[[0, 1]], -2.5);
        assert_eq!(hamiltonian[[1, 0]], -2.5);
        assert_eq!(hamiltonian[[0, 0]], 0.0);
        assert_eq!(hamiltonian[[1, 1]], 0.0);
    }

    #[test]
    fn three_neighbors() {
        for &(nx, ny) in &[(2, 2), (3, 2), (2, 5), (4, 4), (7, 3)] {
            let hamiltonian = pristine_hamiltonian(nx, ny, 2.7, 1).unwrap();
            assert!(is_symmetric(&hamiltonian));
            assert!(coordination(&hamiltonian).iter().all(|&c| c == 3));
            assert!(hamiltonian.iter().all(|&v| v == 0.0 || v == -2.7));
        }
    }

    #[test]
    fn second_neighbors() {
        let first = pristine_hamiltonian(4, 4, 1.0, 1).unwrap();
        let second = pristine_hamiltonian(4, 4, 1.0, 2).unwrap();
        assert!(is_symmetric(&second));
        assert!(second.diag().iter().all(|&v| v == 0.0));

        // second neighbors only add couplings
        for ((i, j), &value) in first.indexed_iter() {
            if value != 0.0 {
                assert_eq!(second[[i, j]], value);
            }
        }
        assert!(coordination(&second).iter().sum::<usize>() > coordination(&first).iter().sum::<usize>());

        let geometric = pristine_hamiltonian_with_convention(4, 4, 1.0, 2, Convention::Geometric).unwrap();
        assert!(coordination(&geometric).iter().all(|&c| c == 9));
    }

    #[test]
    fn errors() {
        assert!(matches!(pristine_hamiltonian(2, 2, 1.0, 0), Err(Error::UnsupportedNeighborOrder(0))));
        assert!(matches!(pristine_hamiltonian(2, 2, 1.0, 3), Err(Error::UnsupportedNeighborOrder(3))));
        assert!(matches!(pristine_hamiltonian(0, 2, 1.0, 1), Err(Error::InvalidLatticeSize { nx: 0, ny: 2 })));
        assert!(matches!(pristine_hamiltonian(2, 0, 1.0, 1), Err(Error::InvalidLatticeSize { nx: 2, ny: 0 })));
        assert!(matches!(pristine_hamiltonian(2, 2, f64::INFINITY, 1), Err(Error::InvalidParameter(_))));
    }
}
