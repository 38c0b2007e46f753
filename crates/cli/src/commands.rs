//! Invokes the remote procedure selected by a [`Commands`] value and renders the response.
//!
//! Unary responses are written once they arrive. Streamed responses are written one record at a
//! time, flushing after each, so records received before a mid-stream failure stay on the output.

use crate::cli::Commands;
use crate::client::Clients;
use medtest_core::{render, request, ClientError, ClientResult};
use std::io::{self, Write};
use tonic::codec::Streaming;

/// Runs `command` against `clients`, writing rendered records to `out`.
pub async fn execute<W: Write>(
    command: Commands,
    clients: &mut Clients,
    out: &mut W,
) -> ClientResult<()> {
    let call = command.remote_call();
    let failed = |status| ClientError::status(call, status);
    tracing::debug!(call, "invoking");

    match command {
        Commands::PatientFetchAllResults { id } => {
            let stream = clients
                .patient
                .fetch_all_results(request::id(id))
                .await
                .map_err(failed)?
                .into_inner();
            render_stream(call, stream, out, |out, r| render::write_med_test(out, r)).await?;
        }
        Commands::DoctorFetchAllResults => {
            let stream = clients
                .doctor
                .fetch_all_results(request::empty())
                .await
                .map_err(failed)?
                .into_inner();
            render_stream(call, stream, out, |out, r| render::write_med_test(out, r)).await?;
        }
        Commands::DoctorFetchResults { id } => {
            let result = clients
                .doctor
                .fetch_results(request::id(id))
                .await
                .map_err(failed)?
                .into_inner();
            render::write_med_test(out, &result)?;
        }
        Commands::DoctorFetchOnIdParity { is_even } => {
            let stream = clients
                .doctor
                .fetch_on_id_parity(request::id_parity_filter(&is_even))
                .await
                .map_err(failed)?
                .into_inner();
            render_stream(call, stream, out, |out, r| render::write_med_test(out, r)).await?;
        }
        Commands::TechnicianAddResults {
            technician_id,
            doctor_id,
            patient_id,
            results,
        } => {
            let response = clients
                .technician
                .add_results(request::new_med_test(
                    technician_id,
                    doctor_id,
                    patient_id,
                    results,
                ))
                .await
                .map_err(failed)?
                .into_inner();
            render::write_status(out, &response)?;
        }
        Commands::DbNewPatient { name } => {
            let patient = clients
                .db
                .new_patient(request::new_person(name))
                .await
                .map_err(failed)?
                .into_inner();
            render::write_person_record(out, &patient)?;
        }
        Commands::DbNewDoctor { name } => {
            let doctor = clients
                .db
                .new_doctor(request::new_person(name))
                .await
                .map_err(failed)?
                .into_inner();
            render::write_person_record(out, &doctor)?;
        }
        Commands::DbNewTechnician { name } => {
            let technician = clients
                .db
                .new_technician(request::new_person(name))
                .await
                .map_err(failed)?
                .into_inner();
            render::write_person_record(out, &technician)?;
        }
        Commands::DbFetchPatients => {
            let stream = clients
                .db
                .fetch_patients(request::empty())
                .await
                .map_err(failed)?
                .into_inner();
            render_stream(call, stream, out, |out, r| render::write_person_record(out, r)).await?;
        }
        Commands::DbFetchDoctors => {
            let stream = clients
                .db
                .fetch_doctors(request::empty())
                .await
                .map_err(failed)?
                .into_inner();
            render_stream(call, stream, out, |out, r| render::write_person_record(out, r)).await?;
        }
        Commands::DbFetchTechnicians => {
            let stream = clients
                .db
                .fetch_technicians(request::empty())
                .await
                .map_err(failed)?
                .into_inner();
            render_stream(call, stream, out, |out, r| render::write_person_record(out, r)).await?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Pulls records off `stream` until it ends, rendering and flushing each one as it arrives.
async fn render_stream<T, W, F>(
    call: &'static str,
    mut stream: Streaming<T>,
    out: &mut W,
    mut write_record: F,
) -> ClientResult<usize>
where
    W: Write,
    F: FnMut(&mut W, &T) -> io::Result<()>,
{
    let mut count = 0;
    while let Some(record) = stream
        .message()
        .await
        .map_err(|status| ClientError::status(call, status))?
    {
        write_record(out, &record)?;
        out.flush()?;
        count += 1;
    }

    tracing::debug!(call, count, "stream finished");
    Ok(count)
}
