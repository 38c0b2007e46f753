//! # Medtest Proto
//!
//! Protobuf messages and gRPC stubs for the remote medical-records service.
//!
//! Contains:
//! - Message types (`Person`, `MedTestResult`, `NewMedTestRequest`, ...)
//! - Client stubs for `PatientService`, `DoctorService`, `TechnicianService` and `DbService`
//! - Server traits for the same services (used by tests)
//!
//! Used by `medtest-core` for request construction and rendering, and by `medtest-cli` for calls.

// Re-export the generated protobuf module. The generated code will be placed
// into OUT_DIR at build time by the build script.
pub mod pb {
    tonic::include_proto!("medical_test");
}

pub use pb::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_map_is_ordered() {
        let mut request = NewMedTestRequest::default();
        request.results.insert("zinc".into(), "1".into());
        request.results.insert("albumin".into(), "2".into());

        let keys: Vec<&str> = request.results.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["albumin", "zinc"]);
    }
}
