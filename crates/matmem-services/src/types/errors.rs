// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Service layer error types.

Transport-agnostic errors that adapters map to their own status codes.
*/

use matmem_model::MatmemError;
use thiserror::Error;

/// Service layer errors (transport-agnostic)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// Resource not found (404 in HTTP)
    #[error("Not found: {resource} with id '{id}'")]
    NotFound { resource: String, id: String },

    /// Invalid input parameters (400 in HTTP)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Well-formed input the analyzers cannot process (422 in HTTP)
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// Internal service error (500 in HTTP)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

// ============================================================================
// ERROR CONVERSIONS FROM BACKEND
// ============================================================================

/// Request bodies naming an unknown key are invalid input; lookup routes
/// produce `NotFound` explicitly.
impl From<MatmemError> for ServiceError {
    fn from(err: MatmemError) -> Self {
        match err {
            MatmemError::InvalidParameter(msg) => ServiceError::InvalidInput(msg),
            MatmemError::UnknownMaterial(key) => {
                ServiceError::InvalidInput(format!("Unknown material type '{}'", key))
            }
            MatmemError::UnknownStimulusKind(key) => {
                ServiceError::InvalidInput(format!("Unknown stimulus type '{}'", key))
            }
            MatmemError::DegenerateSignal(msg) => ServiceError::Unprocessable(msg),
        }
    }
}

impl From<tokio::task::JoinError> for ServiceError {
    fn from(err: tokio::task::JoinError) -> Self {
        ServiceError::Internal(format!("Simulation task failed: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_mapping() {
        assert!(matches!(
            ServiceError::from(MatmemError::invalid("dt must be > 0")),
            ServiceError::InvalidInput(_)
        ));
        assert!(matches!(
            ServiceError::from(MatmemError::UnknownMaterial("glass".into())),
            ServiceError::InvalidInput(msg) if msg.contains("glass")
        ));
        assert!(matches!(
            ServiceError::from(MatmemError::degenerate("flat")),
            ServiceError::Unprocessable(_)
        ));
    }
}
