// Copyright 2025 Lablup Inc. and Jeongkyu Shin
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Instance deployment configuration: selection state, availability gating,
//! mount-path allocation and the pricing calculator.

pub mod gate;
pub mod mount;
pub mod pricing;
pub mod selection;

pub use gate::{AvailabilityGate, SelectOutcome};
pub use pricing::PriceBreakdown;
pub use selection::{BillingCycle, DeploymentSelection, VolumeSource};
