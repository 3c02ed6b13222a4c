// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
# Material Memory Service Layer

The stable application boundary between transport adapters and the
simulation/analysis core.

## Architecture

```text
┌─────────────────────────────────────────────────────────────────┐
│                    TRANSPORT ADAPTERS                            │
│  Axum/REST (matmem-api)                                          │
└────────────────────────────┬────────────────────────────────────┘
                             ↓
┌─────────────────────────────────────────────────────────────────┐
│              SERVICE LAYER (This Crate)                          │
│  • SimulationService - catalog, simulate, compare, analyze      │
└────────────────────────────┬────────────────────────────────────┘
                             ↓
┌─────────────────────────────────────────────────────────────────┐
│                   DOMAIN LAYER                                   │
│  matmem-model, matmem-engine, matmem-analysis                    │
└─────────────────────────────────────────────────────────────────┘
```

## Design Principles

1. **Transport-Agnostic**: Services know nothing about HTTP
2. **Async Boundary**: CPU-bound runs are moved to the blocking pool so the
   caller's executor keeps serving requests
3. **Error Translation**: Domain errors become `ServiceError`
4. **DTO-Based**: Parameters and returns are plain serde types

## Usage

```rust,no_run
use matmem_services::{SimulationRequest, SimulationService, SimulationServiceImpl, ServiceSettings};

# async fn run() -> matmem_services::ServiceResult<()> {
let service = SimulationServiceImpl::new(ServiceSettings::default());
let result = service
    .run_simulation(SimulationRequest::new("wood", "pulse"))
    .await?;
println!("memory tau = {}", result.analysis.memory.memory_tau);
# Ok(())
# }
```
*/

pub mod impls;
pub mod traits;
pub mod types;

pub use impls::SimulationServiceImpl;
pub use traits::SimulationService;
pub use types::*;
