/// A `name:value` token given to `technician_add_results` could not be split.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ResultEntryError {
    #[error("expected `name:value` but found no ':' in {0:?}")]
    MissingSeparator(String),
    #[error("expected exactly one ':' in {0:?}")]
    ExtraSeparator(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid endpoint {endpoint:?}: {reason}")]
    InvalidEndpoint {
        endpoint: String,
        reason: &'static str,
    },
    #[error("failed to connect to {endpoint}")]
    Connect {
        endpoint: String,
        #[source]
        source: tonic::transport::Error,
    },
    #[error("{call} failed")]
    Status {
        call: &'static str,
        #[source]
        status: tonic::Status,
    },
    #[error("failed to write output")]
    Output(#[from] std::io::Error),
}

impl ClientError {
    /// Wraps a non-success status returned by (or while streaming from) `call`.
    pub fn status(call: &'static str, status: tonic::Status) -> Self {
        Self::Status { call, status }
    }
}

pub type ClientResult<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_status_error_keeps_remote_status_as_source() {
        let err = ClientError::status(
            "DoctorService/FetchResults",
            tonic::Status::not_found("Not found"),
        );

        assert_eq!(err.to_string(), "DoctorService/FetchResults failed");
        let source = err.source().unwrap();
        let status = source.downcast_ref::<tonic::Status>().unwrap();
        assert_eq!(status.code(), tonic::Code::NotFound);
        assert_eq!(status.message(), "Not found");
    }

    #[test]
    fn test_result_entry_error_display() {
        let err = ResultEntryError::MissingSeparator("badtoken".into());
        assert_eq!(
            err.to_string(),
            "expected `name:value` but found no ':' in \"badtoken\""
        );
    }

    #[test]
    fn test_output_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert!(matches!(ClientError::from(io_err), ClientError::Output(_)));
    }
}
