use indexmap::IndexSet;
use log::debug;
use ndarray::Array2;

use crate::{Convention, Error};
use super::pristine_hamiltonian_with_convention;

/// Build the tight-binding Hamiltonian of a `nx × ny` graphene supercell
/// where the sites in `vacancies` have been removed, using the
/// [`Convention::Legacy`] convention.
///
/// Removed sites keep their basis index: the Hamiltonian has the same size as
/// the pristine one, but the rows and columns corresponding to vacancies are
/// set to zero.
pub fn vacancy_hamiltonian(
    nx: usize,
    ny: usize,
    vacancies: &[usize],
    hopping: f64,
    neighbors: usize,
) -> Result<Array2<f64>, Error> {
    vacancy_hamiltonian_with_convention(nx, ny, vacancies, hopping, neighbors, Convention::Legacy)
}

/// Build the tight-binding Hamiltonian of a `nx × ny` graphene supercell
/// with vacancies, using the given `convention` for second neighbors.
#[time_graph::instrument(name = "vacancy_hamiltonian")]
pub fn vacancy_hamiltonian_with_convention(
    nx: usize,
    ny: usize,
    vacancies: &[usize],
    hopping: f64,
    neighbors: usize,
    convention: Convention,
) -> Result<Array2<f64>, Error> {
    let mut hamiltonian = pristine_hamiltonian_with_convention(nx, ny, hopping, neighbors, convention)?;
    remove_sites(&mut hamiltonian, vacancies)?;
    return Ok(hamiltonian);
}

/// Remove all couplings to and from the sites in `vacancies`, by setting the
/// corresponding rows and columns of `hamiltonian` to zero.
///
/// All indexes are checked before modifying the matrix, and the matrix is
/// left untouched if any of them is out of bounds.
pub fn remove_sites(hamiltonian: &mut Array2<f64>, vacancies: &[usize]) -> Result<(), Error> {
    let size = hamiltonian.nrows();
    if hamiltonian.ncols() != size {
        return Err(Error::InvalidParameter(format!(
            "expected a square hamiltonian, got a {}x{} matrix", size, hamiltonian.ncols()
        )));
    }

    let mut unique = IndexSet::with_capacity(vacancies.len());
    for &site in vacancies {
        if site >= size {
            return Err(Error::IndexOutOfBounds { index: site, size: size });
        }

        if !unique.insert(site) {
            debug!("site {} is listed more than once in the vacancies", site);
        }
    }

    for &site in &unique {
        hamiltonian.row_mut(site).fill(0.0);
        hamiltonian.column_mut(site).fill(0.0);
    }

    Ok(())
}
