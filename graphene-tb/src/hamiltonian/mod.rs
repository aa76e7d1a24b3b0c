//! Assembly of the real-space tight-binding Hamiltonian of graphene
//! supercells, with and without vacancies.
use ndarray::Array2;

mod passes;
pub use self::passes::{HoppingPass, FirstNeighbors, SecondNeighbors};
pub use self::passes::{hopping_passes, MAX_NEIGHBOR_ORDER};

mod pristine;
pub use self::pristine::{pristine_hamiltonian, pristine_hamiltonian_with_convention};

mod vacancy;
pub use self::vacancy::{vacancy_hamiltonian, vacancy_hamiltonian_with_convention};
pub use self::vacancy::remove_sites;

mod builder;
pub use self::builder::{HamiltonianBuilder, HamiltonianParameters};

/// Count the number of non-zero couplings of each site in `hamiltonian`,
/// excluding the diagonal.
pub fn coordination(hamiltonian: &Array2<f64>) -> Vec<usize> {
    hamiltonian.outer_iter()
        .enumerate()
        .map(|(i, row)| {
            row.iter().enumerate().filter(|&(j, &value)| i != j && value != 0.0).count()
        })
        .collect()
}

/// Check if `hamiltonian` is a square symmetric matrix, up to a few ULPs.
pub fn is_symmetric(hamiltonian: &Array2<f64>) -> bool {
    if hamiltonian.nrows() != hamiltonian.ncols() {
        return false;
    }

    for ((i, j), &value) in hamiltonian.indexed_iter() {
        if j <= i {
            continue;
        }

        if !approx::ulps_eq!(value, hamiltonian[[j, i]], max_ulps = 4) {
            return false;
        }
    }

    return true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn symmetry() {
        assert!(is_symmetric(&array![[0.0, -1.0], [-1.0, 0.0]]));
        assert!(!is_symmetric(&array![[0.0, -1.0], [0.0, 0.0]]));
        assert!(!is_symmetric(&Array2::<f64>::zeros((2, 3))));
    }

    #[test]
    fn coordination_numbers() {
        let hamiltonian = array![
            [3.0, -1.0, 0.0],
            [-1.0, 0.0, -1.0],
            [0.0, -1.0, 0.0],
        ];
        assert_eq!(coordination(&hamiltonian), [1, 2, 1]);
    }
}
