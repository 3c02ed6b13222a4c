// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Simulation service implementation.
*/

use std::sync::Arc;

use async_trait::async_trait;
use matmem_analysis::{analyze, AnalysisOptions, AnalysisReport};
use matmem_engine::simulate;
use matmem_model::{generate_stimulus, list_materials, MaterialKind, StimulusKind};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::traits::SimulationService;
use crate::types::*;

/// Default implementation of SimulationService
#[derive(Debug, Clone)]
pub struct SimulationServiceImpl {
    settings: Arc<ServiceSettings>,
}

impl SimulationServiceImpl {
    pub fn new(settings: ServiceSettings) -> Self {
        Self {
            settings: Arc::new(settings),
        }
    }

    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }
}

fn analysis_options(settings: &ServiceSettings, extended: Option<bool>) -> AnalysisOptions {
    AnalysisOptions {
        max_lag: settings.max_lag,
        bins: settings.bins,
        stationarity_window: settings.stationarity_window,
        extended: extended.unwrap_or(settings.extended_by_default),
    }
}

fn check_sample_budget(settings: &ServiceSettings, duration: f64, dt: f64) -> ServiceResult<()> {
    // Non-positive or non-finite values are rejected by the generator
    if duration > 0.0 && dt > 0.0 && duration.is_finite() && dt.is_finite() {
        let samples = (duration / dt).ceil();
        if samples > settings.max_samples as f64 {
            return Err(ServiceError::InvalidInput(format!(
                "duration/dt yields {} samples, limit is {}",
                samples, settings.max_samples
            )));
        }
    }
    Ok(())
}

/// Full pipeline for one request; runs on the calling thread.
fn run_blocking(settings: &ServiceSettings, request: &SimulationRequest) -> ServiceResult<SimulationOutcome> {
    let material_kind: MaterialKind = request.material_type.parse()?;
    let stimulus_kind: StimulusKind = request.stimulus_type.parse()?;

    let duration = request.duration.unwrap_or(settings.default_duration);
    let intensity = request.intensity.unwrap_or(settings.default_intensity);
    let frequency = request.frequency.unwrap_or(settings.default_frequency);
    let dt = request.dt.unwrap_or(settings.default_dt);
    check_sample_budget(settings, duration, dt)?;

    let material = matmem_model::material(material_kind);
    let stimulus = generate_stimulus(stimulus_kind, duration, intensity, frequency, dt)?;
    let result = simulate(material, dt, &stimulus.t, &stimulus.u)?;

    let options = analysis_options(settings, request.extended_analysis);
    let analysis = analyze(&stimulus.t, &stimulus.u, &result.y, dt, &options)?;

    debug!(
        target: "matmem-services",
        "Simulated {} under {} ({} samples)",
        material_kind,
        stimulus_kind,
        stimulus.len()
    );

    Ok(SimulationOutcome {
        internal_states: result.states_as_rows(),
        time: stimulus.t,
        stimulus: stimulus.u,
        response: result.y,
        analysis,
    })
}

fn analyze_blocking(settings: &ServiceSettings, request: &SignalAnalysisRequest) -> ServiceResult<AnalysisReport> {
    if request.stimulus.len() != request.response.len() {
        return Err(ServiceError::InvalidInput(format!(
            "stimulus and response lengths differ: {} vs {}",
            request.stimulus.len(),
            request.response.len()
        )));
    }
    if request.response.len() > settings.max_samples {
        return Err(ServiceError::InvalidInput(format!(
            "{} samples exceeds the limit of {}",
            request.response.len(),
            settings.max_samples
        )));
    }

    let time = match &request.time {
        Some(time) => time.clone(),
        None => (0..request.response.len())
            .map(|i| i as f64 * request.dt)
            .collect(),
    };

    let options = analysis_options(settings, request.extended_analysis);
    Ok(analyze(
        &time,
        &request.stimulus,
        &request.response,
        request.dt,
        &options,
    )?)
}

#[async_trait]
impl SimulationService for SimulationServiceImpl {
    async fn health(&self) -> ServiceResult<HealthStatus> {
        Ok(HealthStatus {
            status: "ok".to_string(),
            message: "Material Memory Simulator API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }

    async fn list_materials(&self) -> ServiceResult<Vec<MaterialInfo>> {
        Ok(list_materials()
            .into_iter()
            .map(|(key, model)| MaterialInfo::from_model(key, model))
            .collect())
    }

    async fn get_material(&self, key: &str) -> ServiceResult<MaterialInfo> {
        let model = matmem_model::get_material(key).map_err(|_| ServiceError::NotFound {
            resource: "Material".to_string(),
            id: key.to_string(),
        })?;
        Ok(MaterialInfo::from_model(key, model))
    }

    async fn list_stimulus_kinds(&self) -> ServiceResult<Vec<StimulusKindInfo>> {
        Ok(StimulusKind::ALL
            .iter()
            .map(|kind| StimulusKindInfo {
                key: kind.key().to_string(),
                deterministic: kind.is_deterministic(),
            })
            .collect())
    }

    async fn run_simulation(&self, request: SimulationRequest) -> ServiceResult<SimulationOutcome> {
        let settings = Arc::clone(&self.settings);
        tokio::task::spawn_blocking(move || run_blocking(&settings, &request)).await?
    }

    async fn compare(&self, requests: Vec<SimulationRequest>) -> ServiceResult<Vec<ComparisonEntry>> {
        if requests.len() > self.settings.max_compare {
            return Err(ServiceError::InvalidInput(format!(
                "At most {} materials can be compared, got {}",
                self.settings.max_compare,
                requests.len()
            )));
        }

        info!(
            target: "matmem-services",
            "Comparing {} simulations",
            requests.len()
        );

        let settings = Arc::clone(&self.settings);
        tokio::task::spawn_blocking(move || {
            requests
                .par_iter()
                .map(|request| {
                    run_blocking(&settings, request).map(|data| ComparisonEntry {
                        material_type: request.material_type.clone(),
                        data,
                    })
                })
                .collect::<ServiceResult<Vec<_>>>()
        })
        .await?
    }

    async fn analyze_signals(&self, request: SignalAnalysisRequest) -> ServiceResult<AnalysisReport> {
        let settings = Arc::clone(&self.settings);
        tokio::task::spawn_blocking(move || analyze_blocking(&settings, &request)).await?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_budget() {
        let settings = ServiceSettings {
            max_samples: 1000,
            ..ServiceSettings::default()
        };
        assert!(check_sample_budget(&settings, 10.0, 0.01).is_ok());
        assert!(matches!(
            check_sample_budget(&settings, 10.0, 0.001),
            Err(ServiceError::InvalidInput(_))
        ));
        // left to the generator
        assert!(check_sample_budget(&settings, -1.0, 0.01).is_ok());
    }

    #[test]
    fn test_request_defaults_applied() {
        let settings = ServiceSettings {
            default_duration: 2.0,
            default_dt: 0.02,
            ..ServiceSettings::default()
        };
        let outcome = run_blocking(&settings, &SimulationRequest::new("metal", "pulse")).unwrap();
        assert_eq!(outcome.time.len(), 100);
        assert_eq!(outcome.internal_states.len(), 2);
    }

    #[test]
    fn test_extended_flag_falls_back_to_settings() {
        let settings = ServiceSettings {
            extended_by_default: true,
            ..ServiceSettings::default()
        };
        assert!(analysis_options(&settings, None).extended);
        assert!(!analysis_options(&settings, Some(false)).extended);
    }
}
