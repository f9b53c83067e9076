use crate::core::vector::Role;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    #[error("Role Mismatch: cannot {op} a {left} with a {right}")]
    RoleMismatch {
        op: &'static str,
        left: Role,
        right: Role,
    },
    #[error("Degenerate Vector: cannot normalize a zero vector")]
    DegenerateVector,
    #[error("Invalid Basis: {0}")]
    InvalidBasis(String),
    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;

impl CoreError {
    pub fn role_mismatch(op: &'static str, left: Role, right: Role) -> Self {
        CoreError::RoleMismatch { op, left, right }
    }
    pub fn invalid_basis(message: &str) -> Self { CoreError::InvalidBasis(message.to_string()) }
    pub fn invalid_argument(message: &str) -> Self { CoreError::InvalidArgument(message.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn test_role_mismatch_error() {
        let err = CoreError::role_mismatch("dot", Role::Column, Role::Row);
        assert_eq!(format!("{}", err), "Role Mismatch: cannot dot a ket with a bra");
    }
    #[test] fn test_degenerate_error() {
        assert_eq!(format!("{}", CoreError::DegenerateVector), "Degenerate Vector: cannot normalize a zero vector");
    }
    #[test] fn test_invalid_basis_error() {
        let err = CoreError::invalid_basis("b0 is not a unit vector");
        assert_eq!(format!("{}", err), "Invalid Basis: b0 is not a unit vector");
    }
    #[test] fn test_invalid_argument_error() {
        let err = CoreError::invalid_argument("give exactly one of bases or theta");
        assert_eq!(format!("{}", err), "Invalid Argument: give exactly one of bases or theta");
    }
}
