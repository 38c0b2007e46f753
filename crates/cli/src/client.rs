use medtest_core::{ClientConfig, ClientError, ClientResult};
use medtest_proto::pb::{
    db_service_client::DbServiceClient, doctor_service_client::DoctorServiceClient,
    patient_service_client::PatientServiceClient,
    technician_service_client::TechnicianServiceClient,
};
use tonic::transport::Channel;

/// The four service stubs, all sharing one channel.
///
/// Built once at startup and handed to [`crate::execute`] by reference.
#[derive(Debug, Clone)]
pub struct Clients {
    pub patient: PatientServiceClient<Channel>,
    pub doctor: DoctorServiceClient<Channel>,
    pub technician: TechnicianServiceClient<Channel>,
    pub db: DbServiceClient<Channel>,
}

impl Clients {
    /// Opens the connection eagerly so an unreachable service fails before any call is made.
    pub async fn connect(config: &ClientConfig) -> ClientResult<Self> {
        let endpoint = Channel::from_shared(config.endpoint().to_string()).map_err(|_| {
            ClientError::InvalidEndpoint {
                endpoint: config.endpoint().to_string(),
                reason: "not a valid URI",
            }
        })?;

        tracing::info!(endpoint = config.endpoint(), "connecting");
        let channel = endpoint
            .connect()
            .await
            .map_err(|source| ClientError::Connect {
                endpoint: config.endpoint().to_string(),
                source,
            })?;

        Ok(Self::new(channel))
    }

    pub fn new(channel: Channel) -> Self {
        Self {
            patient: PatientServiceClient::new(channel.clone()),
            doctor: DoctorServiceClient::new(channel.clone()),
            technician: TechnicianServiceClient::new(channel.clone()),
            db: DbServiceClient::new(channel),
        }
    }
}
