//! Real-space tight-binding Hamiltonians for periodic graphene supercells.
//!
//! The supercell contains `nx × ny` unit cells with two carbon atoms each
//! (sublattices A and B). Every atom is identified by a basis index computed
//! with [`site_index`], and the Hamiltonians are dense `N × N` matrices over
//! this basis, with `N = 2 nx ny`.
//!
//! ```
//! let hamiltonian = graphene_tb::pristine_hamiltonian(4, 4, 2.7, 1).unwrap();
//! assert_eq!(hamiltonian.shape(), [32, 32]);
//! assert_eq!(hamiltonian[[0, 1]], -2.7);
//! ```

#![warn(clippy::all, clippy::pedantic)]

// disable some style lints
#![allow(clippy::needless_return, clippy::must_use_candidate, clippy::comparison_chain)]
#![allow(clippy::redundant_field_names, clippy::redundant_closure_for_method_calls)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc, clippy::module_name_repetitions)]

#![allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap, clippy::cast_lossless, clippy::cast_sign_loss)]

// Tests lints
#![cfg_attr(test, allow(clippy::float_cmp))]

mod errors;
pub use self::errors::Error;

pub mod lattice;
pub use self::lattice::{Lattice, Site, Sublattice, Convention};
pub use self::lattice::{site_index, positions, positions_with_convention};

pub mod hamiltonian;
pub use self::hamiltonian::{pristine_hamiltonian, pristine_hamiltonian_with_convention};
pub use self::hamiltonian::{vacancy_hamiltonian, vacancy_hamiltonian_with_convention};
pub use self::hamiltonian::{HamiltonianBuilder, HamiltonianParameters};
