// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Built-in material presets.
//!
//! The catalog is built once on first access and is read-only afterwards.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::material::MaterialModel;
use super::nonlinear::Nonlinearity;
use crate::types::{MatmemError, Result};

/// Keys of the built-in material presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialKind {
    Wood,
    Metal,
    Cloth,
    Soil,
    Water,
}

impl MaterialKind {
    /// Catalog order
    pub const ALL: [MaterialKind; 5] = [
        MaterialKind::Wood,
        MaterialKind::Metal,
        MaterialKind::Cloth,
        MaterialKind::Soil,
        MaterialKind::Water,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            MaterialKind::Wood => "wood",
            MaterialKind::Metal => "metal",
            MaterialKind::Cloth => "cloth",
            MaterialKind::Soil => "soil",
            MaterialKind::Water => "water",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MaterialKind {
    type Err = MatmemError;

    fn from_str(s: &str) -> Result<Self> {
        MaterialKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| MatmemError::UnknownMaterial(s.to_string()))
    }
}

static CATALOG: OnceLock<Vec<MaterialModel>> = OnceLock::new();

fn preset(
    name: &str,
    tau: &[f64],
    k: &[f64],
    w: &[f64],
    nonlinearity: Nonlinearity,
) -> MaterialModel {
    MaterialModel {
        name: name.to_string(),
        tau: tau.to_vec(),
        k: k.to_vec(),
        w: w.to_vec(),
        nonlinearity,
    }
}

fn catalog() -> &'static [MaterialModel] {
    CATALOG.get_or_init(|| {
        vec![
            preset(
                "Wood",
                &[0.5, 2.0, 8.0],
                &[1.0, 0.8, 0.3],
                &[0.5, 0.3, 0.2],
                Nonlinearity::Saturating { gain: 1.5 },
            ),
            preset(
                "Metal",
                &[0.1, 0.5],
                &[2.0, 1.0],
                &[0.7, 0.3],
                Nonlinearity::Linear { gain: 1.0 },
            ),
            preset(
                "Cloth",
                &[1.0, 5.0, 15.0],
                &[0.5, 1.0, 0.4],
                &[0.4, 0.4, 0.2],
                Nonlinearity::Threshold {
                    gain: 3.0,
                    threshold: 0.3,
                },
            ),
            preset(
                "Soil",
                &[3.0, 10.0, 30.0],
                &[0.8, 0.5, 0.2],
                &[0.3, 0.4, 0.3],
                Nonlinearity::MagnitudeDecay { gain: 0.8 },
            ),
            preset(
                "Water",
                &[0.2, 1.0, 4.0],
                &[1.5, 1.0, 0.5],
                &[0.5, 0.3, 0.2],
                Nonlinearity::Resonance {
                    omega: 3.0,
                    gain: 1.2,
                },
            ),
        ]
    })
}

/// Look up a preset by key (`"wood"`, `"metal"`, ...).
pub fn get_material(key: &str) -> Result<&'static MaterialModel> {
    let kind: MaterialKind = key.parse()?;
    Ok(material(kind))
}

/// Preset for a known kind
pub fn material(kind: MaterialKind) -> &'static MaterialModel {
    &catalog()[kind.index()]
}

/// All presets as `(key, model)` pairs in catalog order
pub fn list_materials() -> Vec<(&'static str, &'static MaterialModel)> {
    MaterialKind::ALL
        .iter()
        .map(|kind| (kind.key(), material(*kind)))
        .collect()
}
