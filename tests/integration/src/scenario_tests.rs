//! End-to-end scenario tests across the situation stores
//!
//! Drives the model the way a deployment would: catalog bootstrap,
//! ingestion and operator mutations, then renderer-facing snapshot
//! assembly.

use quakelens_core::{RiskThresholds, SituationConfig};
use quakelens_situation::{
    catalog, SectorStatus, SituationError, SituationModel, SituationSnapshot, SourceState,
    TaskPriority,
};

fn booted_model() -> SituationModel {
    let model = SituationModel::with_defaults();
    catalog::seed_demo(&model).expect("demo catalog seeds cleanly");
    model
}

#[test]
fn test_bootstrap_then_ingestion_cycle() {
    let model = booted_model();

    // An ingestion round: mesh congestion clears, a sector degrades,
    // telemetry lands, and a mission advances.
    model
        .sources()
        .report_health("P2P Citizen Mesh", SourceState::Active, 97)
        .unwrap();
    model.sectors().update_risk("S-12", 71).unwrap();
    model.sectors().update_node_count("S-12", -40).unwrap();
    model
        .telemetry()
        .append_now("MESH-3", "Relay handoff complete, coverage restored");
    model.missions().report_progress("M-1", 80).unwrap();

    let snapshot = model.snapshot();

    // S-12 crossed the critical threshold and now sorts between S-07 and S-02
    let s12 = snapshot.sectors.iter().find(|s| s.id == "S-12").unwrap();
    assert_eq!(s12.status, SectorStatus::Critical);
    assert_eq!(s12.node_count, 850);
    assert_eq!(snapshot.summary.critical_sectors, 2);
    // Govt Infrastructure is still Offline from the seed
    assert_eq!(snapshot.summary.active_sources, 3);
    assert_eq!(snapshot.log.len(), 4);
    assert_eq!(snapshot.log[0].origin_node, "MESH-3");
    assert_eq!(
        snapshot
            .missions
            .iter()
            .find(|t| t.task_id == "M-1")
            .unwrap()
            .progress_pct,
        80
    );
}

#[test]
fn test_renderer_orderings_are_stable_contracts() {
    let model = booted_model();
    let snapshot = model.snapshot();

    // Sectors: descending risk, most critical first
    let sector_ids: Vec<_> = snapshot.sectors.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(sector_ids, vec!["S-07", "S-12", "S-02"]);

    // Sources: registration order
    assert_eq!(snapshot.sources[0].source_name, "Sentinel-2 Satellite");
    assert_eq!(snapshot.sources[3].source_name, "Govt Infrastructure");

    // Missions: severity descending, ties by ascending id
    let mission_ids: Vec<_> = snapshot.missions.iter().map(|t| t.task_id.as_str()).collect();
    assert_eq!(mission_ids, vec!["M-2", "M-1", "M-3"]);

    // Telemetry: newest first
    assert!(snapshot.log.windows(2).all(|w| w[0].seq > w[1].seq));
}

#[test]
fn test_rejected_mutations_leave_snapshot_identical() {
    let model = booted_model();
    let before = model.snapshot();

    assert!(model.sectors().update_risk("S-07", 120).is_err());
    assert!(model.sectors().update_node_count("S-12", -100_000).is_err());
    assert!(model
        .sources()
        .report_health("Govt Infrastructure", SourceState::Offline, 10)
        .is_err());
    assert!(matches!(
        model.missions().report_progress("M-3", 10),
        Err(SituationError::TerminalTask(_))
    ));

    let after = model.snapshot();
    assert_eq!(before.sectors, after.sectors);
    assert_eq!(before.sources, after.sources);
    assert_eq!(before.missions, after.missions);
    assert_eq!(before.log, after.log);
}

#[test]
fn test_custom_thresholds_reclassify_catalog() {
    let config = SituationConfig {
        log_capacity: 50,
        risk_thresholds: RiskThresholds {
            warning: 10,
            critical: 41,
        },
    };
    let model = SituationModel::new(config).unwrap();
    catalog::seed_demo(&model).unwrap();

    let snapshot = model.snapshot();
    // With critical at 41, S-12 (42) joins S-07 in the critical tier
    assert_eq!(snapshot.summary.critical_sectors, 2);
    assert_eq!(snapshot.summary.warning_sectors, 1);
    assert_eq!(snapshot.summary.stable_sectors, 0);
}

#[test]
fn test_log_capacity_bounds_full_session() {
    let config = SituationConfig {
        log_capacity: 5,
        risk_thresholds: RiskThresholds::default(),
    };
    let model = SituationModel::new(config).unwrap();

    for i in 0..20u64 {
        model.telemetry().append("NODE", &format!("pulse {i}"), i);
    }

    let snapshot = model.snapshot();
    assert_eq!(snapshot.log.len(), 5);
    assert_eq!(snapshot.log[0].message, "pulse 19");
    assert_eq!(snapshot.log[4].message, "pulse 15");
}

#[test]
fn test_snapshot_round_trips_through_json() {
    let model = booted_model();
    let snapshot = model.snapshot();

    let json = serde_json::to_string(&snapshot).unwrap();
    let decoded: SituationSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, snapshot);
}

#[test]
fn test_operator_reprioritization_flow() {
    let model = booted_model();

    // Operator escalates the evacuation and closes out the medical drop
    model.missions().set_priority("M-1", TaskPriority::Critical).unwrap();
    model.missions().report_progress("M-2", 100).unwrap();
    // Completed mapping run gets archived as routine
    model.missions().set_priority("M-3", TaskPriority::Normal).unwrap();

    let snapshot = model.snapshot();
    let ids: Vec<_> = snapshot.missions.iter().map(|t| t.task_id.as_str()).collect();
    assert_eq!(ids, vec!["M-1", "M-2", "M-3"]);
    assert_eq!(snapshot.summary.tasks_complete, 2);
    assert_eq!(snapshot.summary.tasks_in_progress, 1);
}
