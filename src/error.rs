use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BetheError {
    #[error("Invalid {field} = {value}: expected {constraint}")]
    Validation {
        field: &'static str,
        value: f64,
        constraint: &'static str,
    },

    #[error("{quantity} = {value} is outside the valid domain: expected {constraint}")]
    Domain {
        quantity: &'static str,
        value: f64,
        constraint: &'static str,
    },
}

impl BetheError {
    pub fn is_validation(&self) -> bool {
        matches!(self, BetheError::Validation { .. })
    }

    pub fn is_domain(&self) -> bool {
        matches!(self, BetheError::Domain { .. })
    }
}

pub type BetheResult<T> = Result<T, BetheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_validation() {
        let err = BetheError::Validation {
            field: "momentum",
            value: -1.0,
            constraint: "p >= 0",
        };
        assert_eq!(err.to_string(), "Invalid momentum = -1: expected p >= 0");
        assert!(err.is_validation());
        assert!(!err.is_domain());
    }

    #[test]
    fn display_domain() {
        let err = BetheError::Domain {
            quantity: "beta",
            value: 1.0,
            constraint: "0 <= beta < 1",
        };
        assert!(err.to_string().contains("beta = 1"));
        assert!(err.is_domain());
    }
}
