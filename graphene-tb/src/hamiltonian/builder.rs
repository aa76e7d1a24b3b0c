use log::info;
use ndarray::Array2;

use crate::{Convention, Error, Lattice};
use super::{HoppingPass, hopping_passes, remove_sites};
use super::pristine::{assemble, check_hopping};

/// Parameters for the construction of graphene tight-binding Hamiltonians
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Deserialize, serde::Serialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct HamiltonianParameters {
    /// Number of unit cells along the first lattice direction
    pub nx: usize,
    /// Number of unit cells along the second lattice direction
    pub ny: usize,
    /// Hopping parameter `t`. Coupled sites get a `-t` entry in the
    /// Hamiltonian
    pub hopping: f64,
    /// Include hopping between all neighbors up to this order. Only first
    /// (`1`) and second (`2`) neighbors are supported.
    #[serde(default = "serde_default_neighbors")]
    pub neighbors: usize,
    /// Periodic convention to use for second neighbors
    #[serde(default)]
    pub convention: Convention,
    /// Basis indexes of the sites to remove from the system
    #[serde(default)]
    pub vacancies: Vec<usize>,
}

fn serde_default_neighbors() -> usize {
    return 1;
}

impl HamiltonianParameters {
    /// Check that these parameters describe a valid system, returning the
    /// corresponding supercell.
    pub fn validate(&self) -> Result<Lattice, Error> {
        let lattice = Lattice::new(self.nx, self.ny)?;
        check_hopping(self.hopping)?;

        if self.neighbors == 0 || self.neighbors > super::MAX_NEIGHBOR_ORDER {
            return Err(Error::UnsupportedNeighborOrder(self.neighbors));
        }

        if let Some(&site) = self.vacancies.iter().find(|&&site| site >= lattice.size()) {
            return Err(Error::IndexOutOfBounds { index: site, size: lattice.size() });
        }

        return Ok(lattice);
    }
}

/// `HamiltonianBuilder` builds Hamiltonians for a fixed supercell, hopping
/// parameter and set of neighbors, possibly with vacancies.
///
/// ```
/// use graphene_tb::HamiltonianBuilder;
///
/// let builder = HamiltonianBuilder::from_json(r#"{
///     "nx": 3,
///     "ny": 3,
///     "hopping": 2.7,
///     "vacancies": [0]
/// }"#).unwrap();
///
/// let hamiltonian = builder.build().unwrap();
/// assert_eq!(hamiltonian.shape(), [18, 18]);
/// assert_eq!(hamiltonian[[0, 1]], 0.0);
/// assert_eq!(builder.pristine().unwrap()[[0, 1]], -2.7);
/// ```
pub struct HamiltonianBuilder {
    parameters: HamiltonianParameters,
    lattice: Lattice,
    passes: Vec<Box<dyn HoppingPass>>,
}

impl std::fmt::Debug for HamiltonianBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.parameters)
    }
}

impl HamiltonianBuilder {
    /// Create a new builder with the given parameters
    pub fn new(parameters: HamiltonianParameters) -> Result<HamiltonianBuilder, Error> {
        let lattice = parameters.validate()?;
        let passes = hopping_passes(parameters.neighbors, parameters.convention)?;

        return Ok(HamiltonianBuilder {
            parameters: parameters,
            lattice: lattice,
            passes: passes,
        });
    }

    /// Create a new builder from parameters serialized to JSON
    pub fn from_json(json: &str) -> Result<HamiltonianBuilder, Error> {
        let parameters = serde_json::from_str::<HamiltonianParameters>(json)?;
        let builder = HamiltonianBuilder::new(parameters)?;
        info!(
            "building hamiltonians for a {}x{} supercell with neighbors up to order {} and {} vacancies",
            builder.parameters.nx, builder.parameters.ny,
            builder.parameters.neighbors, builder.parameters.vacancies.len()
        );
        return Ok(builder);
    }

    /// Get the parameters used to create this builder
    pub fn parameters(&self) -> &HamiltonianParameters {
        &self.parameters
    }

    /// Get the parameters used to create this builder as a JSON string
    pub fn parameters_json(&self) -> String {
        serde_json::to_string(&self.parameters).expect("failed to serialize to JSON")
    }

    /// Get the supercell used by this builder
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Get the hopping passes used by this builder, in the order they are
    /// applied
    pub fn passes(&self) -> &[Box<dyn HoppingPass>] {
        &self.passes
    }

    /// Build the Hamiltonian of the pristine supercell, ignoring the
    /// vacancies in the parameters.
    #[time_graph::instrument(name = "HamiltonianBuilder::pristine")]
    pub fn pristine(&self) -> Result<Array2<f64>, Error> {
        assemble(&self.lattice, self.parameters.hopping, &self.passes)
    }

    /// Build the Hamiltonian with the vacancies given in the parameters
    pub fn build(&self) -> Result<Array2<f64>, Error> {
        self.with_vacancies(&self.parameters.vacancies)
    }

    /// Build the Hamiltonian with the given `vacancies`, ignoring the
    /// vacancies in the parameters.
    pub fn with_vacancies(&self, vacancies: &[usize]) -> Result<Array2<f64>, Error> {
        let mut hamiltonian = self.pristine()?;
        remove_sites(&mut hamiltonian, vacancies)?;
        return Ok(hamiltonian);
    }
}
