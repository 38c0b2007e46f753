use clap::{Parser, Subcommand};
use medtest_core::{ResultEntry, DEFAULT_ENDPOINT};

#[derive(Debug, Parser)]
#[command(name = "medtest")]
#[command(about = "Medical test records client")]
pub struct Cli {
    /// Address of the medical records service
    #[arg(long, global = true, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// One variant per remote procedure. Verbs are spelled in snake_case on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
#[command(rename_all = "snake_case")]
pub enum Commands {
    /// List every test result recorded for a patient
    #[command(allow_negative_numbers = true)]
    PatientFetchAllResults {
        /// Patient ID
        id: i64,
    },
    /// List every test result
    DoctorFetchAllResults,
    /// Show a single test result
    #[command(allow_negative_numbers = true)]
    DoctorFetchResults {
        /// Test ID
        id: i64,
    },
    /// List test results with even or odd IDs
    DoctorFetchOnIdParity {
        /// `true` (any case) selects even IDs; anything else selects odd IDs
        is_even: String,
    },
    /// Submit a new test result
    #[command(allow_negative_numbers = true)]
    TechnicianAddResults {
        /// Technician ID
        technician_id: i64,
        /// Doctor ID
        doctor_id: i64,
        /// Patient ID
        patient_id: i64,
        /// Results as `name:value` pairs
        results: Vec<ResultEntry>,
    },
    /// Register a patient
    DbNewPatient {
        /// Patient name
        #[arg(allow_hyphen_values = true)]
        name: String,
    },
    /// Register a doctor
    DbNewDoctor {
        /// Doctor name
        #[arg(allow_hyphen_values = true)]
        name: String,
    },
    /// Register a technician
    DbNewTechnician {
        /// Technician name
        #[arg(allow_hyphen_values = true)]
        name: String,
    },
    /// List every patient
    DbFetchPatients,
    /// List every doctor
    DbFetchDoctors,
    /// List every technician
    DbFetchTechnicians,
}

impl Commands {
    /// The remote procedure this verb invokes, as `Service/Method`.
    pub fn remote_call(&self) -> &'static str {
        match self {
            Self::PatientFetchAllResults { .. } => "PatientService/FetchAllResults",
            Self::DoctorFetchAllResults => "DoctorService/FetchAllResults",
            Self::DoctorFetchResults { .. } => "DoctorService/FetchResults",
            Self::DoctorFetchOnIdParity { .. } => "DoctorService/FetchOnIdParity",
            Self::TechnicianAddResults { .. } => "TechnicianService/AddResults",
            Self::DbNewPatient { .. } => "DbService/NewPatient",
            Self::DbNewDoctor { .. } => "DbService/NewDoctor",
            Self::DbNewTechnician { .. } => "DbService/NewTechnician",
            Self::DbFetchPatients => "DbService/FetchPatients",
            Self::DbFetchDoctors => "DbService/FetchDoctors",
            Self::DbFetchTechnicians => "DbService/FetchTechnicians",
        }
    }
}
