//! Demo sector catalog
//!
//! Seed data for the New Delhi deployment used by the dashboard demo and
//! the integration tests: the fixed sector catalog, the four known
//! ingestion sources, the initial mission queue, and the first telemetry
//! lines. Sectors are created here at bootstrap and never deleted during
//! a session.

use crate::error::Result;
use crate::model::SituationModel;
use crate::types::{Coordinate, SourceState, TaskPriority};

/// Known ingestion sources for the demo deployment
pub const DEMO_SOURCES: [&str; 4] = [
    "Sentinel-2 Satellite",
    "UAV Swarm Alpha",
    "P2P Citizen Mesh",
    "Govt Infrastructure",
];

/// Populate a model with the demo catalog
///
/// Registers sectors S-07/S-12/S-02 with their observed risk scores and
/// node counts, reports the initial source health matrix, creates the
/// three tracked missions, and appends the seed telemetry lines.
pub fn seed_demo(model: &SituationModel) -> Result<()> {
    let sectors = model.sectors();
    sectors.register_sector(
        "S-07",
        "Connaught",
        1240,
        Coordinate { lat: 28.6139, lon: 77.2090 },
    )?;
    sectors.register_sector(
        "S-12",
        "Govt Dist",
        890,
        Coordinate { lat: 28.6239, lon: 77.2190 },
    )?;
    sectors.register_sector(
        "S-02",
        "East Res",
        2100,
        Coordinate { lat: 28.6039, lon: 77.1990 },
    )?;
    sectors.update_risk("S-07", 84)?;
    sectors.update_risk("S-12", 42)?;
    sectors.update_risk("S-02", 12)?;

    let sources = model.sources();
    for name in DEMO_SOURCES {
        sources.register_source(name);
    }
    sources.report_health("Sentinel-2 Satellite", SourceState::Synced, 100)?;
    sources.report_health("UAV Swarm Alpha", SourceState::Active, 94)?;
    sources.report_health("P2P Citizen Mesh", SourceState::Congested, 82)?;
    // Govt Infrastructure stays at its registered Offline / 0% default

    let missions = model.missions();
    missions.create_task("M-1", "Evacuate Sector 7", TaskPriority::High)?;
    missions.create_task("M-2", "Medical Drop: Sector 12", TaskPriority::Critical)?;
    missions.create_task("M-3", "UAV Mapping: East", TaskPriority::Normal)?;
    missions.report_progress("M-1", 65)?;
    missions.report_progress("M-2", 30)?;
    missions.report_progress("M-3", 100)?;

    let telemetry = model.telemetry();
    telemetry.append_now("SAT-L", "Change Detection: Zone 4 Red-Tagged");
    telemetry.append_now("UAV-1", "Sector 7 Thermal Scan Complete");
    telemetry.append_now("X788", "Structural Pulse: 34% Integrity Drop");

    Ok(())
}
