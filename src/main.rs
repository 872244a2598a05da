//! Replays a recorded position trace against a trip, printing the
//! alerts a rider would have received.
//!
//! ```bash
//! alight-replay trip.json trace.json
//! # or, from the environment (or a `.env` file)
//! ALIGHT_TRIP=trip.json ALIGHT_TRACE=trace.json RUST_LOG=info alight-replay
//! ```
//!
//! `trip.json` holds a single service, `trace.json` an array of fixes.
//! Arrival alerts are confirmed automatically unless
//! `ALIGHT_AUTO_CONFIRM=false`.

use std::env;
use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use dotenv::dotenv;
use log::{info, warn};
use serde::de::DeserializeOwned;

use alight::navigator::{AlertKind, LogSink, SessionHandle};
use alight::{Coordinate, Service};

fn setting(position: usize, key: &str) -> Result<String, Box<dyn Error>> {
    env::args()
        .nth(position)
        .or_else(|| env::var(key).ok())
        .ok_or_else(|| format!("missing argument {position}, or {key} in the environment").into())
}

fn read_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, Box<dyn Error>> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load `.env` file, if present.
    dotenv().ok();

    #[cfg(feature = "tracing")]
    alight::util::trace::initialize_tracer();
    #[cfg(not(feature = "tracing"))]
    env_logger::init();

    let service: Service = read_json(setting(1, "ALIGHT_TRIP")?)?;
    let trace: Vec<Coordinate> = read_json(setting(2, "ALIGHT_TRACE")?)?;
    let auto_confirm = env::var("ALIGHT_AUTO_CONFIRM")
        .map(|value| value != "false" && value != "0")
        .unwrap_or(true);

    info!(
        "Replaying {} fixes over service {} ({} segments)",
        trace.len(),
        service.id,
        service.segments.len()
    );

    let (session, task) = SessionHandle::spawn(LogSink);
    session.start_trip(service).await?;

    for fix in trace {
        match session.position(fix).await {
            Ok(Some(alert)) if alert.kind == AlertKind::Arrival && auto_confirm => {
                session.confirm_arrival().await?;
            }
            Ok(_) => {}
            Err(err) => warn!("Rejected fix {fix:?}: {err}"),
        }

        if session.snapshot().await?.finished {
            break;
        }
    }

    let snapshot = session.snapshot().await?;
    drop(session);
    task.await?;

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
