// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Service-level behaviour through the `SimulationService` trait object.

use std::sync::Arc;

use matmem_services::{
    ServiceError, ServiceSettings, SignalAnalysisRequest, SimulationRequest, SimulationService,
    SimulationServiceImpl,
};

fn service() -> Arc<dyn SimulationService> {
    Arc::new(SimulationServiceImpl::new(ServiceSettings::default()))
}

#[tokio::test]
async fn lists_catalog_in_order() {
    let materials = service().list_materials().await.unwrap();
    let keys: Vec<&str> = materials.iter().map(|m| m.key.as_str()).collect();
    assert_eq!(keys, ["wood", "metal", "cloth", "soil", "water"]);
    assert_eq!(materials[1].tau_list, vec![0.1, 0.5]);
}

#[tokio::test]
async fn unknown_material_lookup_is_not_found() {
    let err = service().get_material("glass").await.unwrap_err();
    assert_eq!(
        err,
        ServiceError::NotFound {
            resource: "Material".to_string(),
            id: "glass".to_string()
        }
    );
}

#[tokio::test]
async fn unknown_material_in_request_is_invalid_input() {
    let err = service()
        .run_simulation(SimulationRequest::new("glass", "pulse"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));

    let err = service()
        .run_simulation(SimulationRequest::new("wood", "laser"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));
}

#[tokio::test]
async fn simulation_shapes_match() {
    let outcome = service()
        .run_simulation(SimulationRequest::new("wood", "sine"))
        .await
        .unwrap();
    assert_eq!(outcome.time.len(), 1000);
    assert_eq!(outcome.stimulus.len(), 1000);
    assert_eq!(outcome.response.len(), 1000);
    assert_eq!(outcome.internal_states.len(), 3);
    assert!(outcome.internal_states.iter().all(|row| row.len() == 1000));
    assert!(outcome.analysis.causality.is_none());
}

#[tokio::test]
async fn extended_analysis_on_request() {
    let mut request = SimulationRequest::new("water", "sound");
    request.extended_analysis = Some(true);
    let outcome = service().run_simulation(request).await.unwrap();
    assert!(outcome.analysis.spectral.is_some());
    assert!(outcome.analysis.stationarity.is_some());
    assert!(outcome.analysis.system_stability.is_some());
}

#[tokio::test]
async fn compare_preserves_request_order() {
    let requests = vec![
        SimulationRequest::new("soil", "heat"),
        SimulationRequest::new("metal", "pulse"),
        SimulationRequest::new("cloth", "light"),
    ];
    let entries = service().compare(requests).await.unwrap();
    let keys: Vec<&str> = entries.iter().map(|e| e.material_type.as_str()).collect();
    assert_eq!(keys, ["soil", "metal", "cloth"]);
}

#[tokio::test]
async fn compare_rejects_oversized_batch() {
    let requests = vec![SimulationRequest::new("wood", "pulse"); 6];
    let err = service().compare(requests).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));
}

#[tokio::test]
async fn sample_limit_enforced() {
    let service = SimulationServiceImpl::new(ServiceSettings {
        max_samples: 500,
        ..ServiceSettings::default()
    });
    let err = service
        .run_simulation(SimulationRequest::new("wood", "pulse"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidInput(_)));
}

#[tokio::test]
async fn flat_signals_are_unprocessable() {
    let err = service()
        .analyze_signals(SignalAnalysisRequest {
            stimulus: vec![1.0; 100],
            response: vec![0.0; 100],
            dt: 0.01,
            time: None,
            extended_analysis: None,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Unprocessable(_)));
}

#[tokio::test]
async fn analyze_signals_defaults_time_axis() {
    let response: Vec<f64> = (0..300).map(|i| (i as f64 * 0.05).sin() + 2.0).collect();
    let report = service()
        .analyze_signals(SignalAnalysisRequest {
            stimulus: response.clone(),
            response,
            dt: 0.1,
            time: None,
            extended_analysis: Some(true),
        })
        .await
        .unwrap();
    assert!(report.memory.memory_tau <= 29.9 + 1e-9);
    assert!(report.causality.is_some());
}

#[tokio::test]
async fn analyze_signals_rejects_malformed_time_axis() {
    let response: Vec<f64> = (0..300).map(|i| (i as f64 * 0.05).sin()).collect();
    let request = |dt: f64, time: Option<Vec<f64>>| SignalAnalysisRequest {
        stimulus: response.clone(),
        response: response.clone(),
        dt,
        time,
        extended_analysis: Some(false),
    };
    let decreasing: Vec<f64> = (0..300).map(|i| 3.0 - i as f64 * 0.01).collect();

    for req in [
        request(-0.01, None),
        request(0.0, None),
        request(f64::NAN, None),
        request(0.01, Some(decreasing)),
    ] {
        let err = service().analyze_signals(req).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)), "{err:?}");
    }
}
