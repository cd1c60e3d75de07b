use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Vertex already exists: {0}")]
    VertexAlreadyExists(String),

    #[error("Vertex {0} doesn't exist")]
    VertexNotFound(String),

    #[error("Already existing edge from {from} to {to}")]
    EdgeAlreadyExists { from: String, to: String },
}

impl Error {
    pub(crate) fn vertex_exists<T: std::fmt::Debug>(payload: &T) -> Self {
        Error::VertexAlreadyExists(format!("{:?}", payload))
    }

    pub(crate) fn vertex_not_found<T: std::fmt::Debug>(payload: &T) -> Self {
        Error::VertexNotFound(format!("{:?}", payload))
    }

    pub(crate) fn edge_exists<T: std::fmt::Debug>(from: &T, to: &T) -> Self {
        Error::EdgeAlreadyExists {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }
}
