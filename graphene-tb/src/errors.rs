#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    /// The supercell must contain at least one unit cell in each direction
    InvalidLatticeSize {
        nx: usize,
        ny: usize,
    },
    /// Only first and second neighbors hopping are implemented
    UnsupportedNeighborOrder(usize),
    /// A site index does not correspond to any site in the supercell
    IndexOutOfBounds {
        index: usize,
        size: usize,
    },
    /// Got an invalid parameter value in a function
    InvalidParameter(String),
    /// Error while serializing/deserializing data
    Json(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidLatticeSize { nx, ny } => write!(
                f, "invalid lattice size: got {}x{} unit cells, both dimensions must be at least 1", nx, ny
            ),
            Error::UnsupportedNeighborOrder(order) => write!(
                f, "unsupported neighbor order: {}, expected 1 or 2", order
            ),
            Error::IndexOutOfBounds { index, size } => write!(
                f, "index out of bounds: site {} does not exist in a system with {} sites", index, size
            ),
            Error::InvalidParameter(e) => write!(f, "invalid parameter: {}", e),
            Error::Json(e) => write!(f, "json error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::InvalidLatticeSize { .. } |
            Error::UnsupportedNeighborOrder(_) |
            Error::IndexOutOfBounds { .. } |
            Error::InvalidParameter(_) => None,
            Error::Json(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Error {
        Error::Json(error)
    }
}
