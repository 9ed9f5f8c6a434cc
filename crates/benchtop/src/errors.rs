//! Process exit-code mapping.

use benchtop_core::{exit_codes, SumError};

/// Map a failed run to its process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<SumError>() {
        Some(SumError::InvalidArgument(_)) => exit_codes::ERROR_CONFIG,
        Some(SumError::Timeout(_)) => exit_codes::ERROR_TIMEOUT,
        Some(SumError::Cancelled) => exit_codes::ERROR_CANCELED,
        Some(SumError::WorkerFailure { .. }) | None => exit_codes::ERROR_GENERIC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn invalid_argument_maps_to_config_error() {
        let err = anyhow::Error::new(SumError::InvalidArgument("missing draw count".into()));
        assert_eq!(exit_code(&err), exit_codes::ERROR_CONFIG);
    }

    #[test]
    fn timeout_maps_to_timeout_error() {
        let err = anyhow::Error::new(SumError::Timeout(Duration::from_secs(30)));
        assert_eq!(exit_code(&err), exit_codes::ERROR_TIMEOUT);
    }

    #[test]
    fn cancelled_maps_to_sigint_convention() {
        let err = anyhow::Error::new(SumError::Cancelled);
        assert_eq!(exit_code(&err), exit_codes::ERROR_CANCELED);
    }

    #[test]
    fn other_errors_map_to_generic() {
        let err = anyhow::Error::new(SumError::WorkerFailure {
            index: 1,
            reason: "panicked".into(),
        });
        assert_eq!(exit_code(&err), exit_codes::ERROR_GENERIC);

        let err = anyhow::anyhow!("something else");
        assert_eq!(exit_code(&err), exit_codes::ERROR_GENERIC);
    }
}
