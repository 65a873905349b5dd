// Copyright 2025 eraflo
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

//! Diagnostic helpers for browsing available samplers.

use cadence_core::SamplerProvider;

/// Lists every resolvable sampler name, optionally narrowed by a
/// case-insensitive substring filter.
///
/// Intended as the backing for a debug console command; hosts decide how
/// the result is displayed.
pub fn list_samplers(provider: &dyn SamplerProvider, filter: Option<&str>) -> Vec<String> {
    let needle = filter.map(str::to_lowercase);
    let mut names = provider.sampler_names();
    names.retain(|name| match &needle {
        Some(needle) => name.to_lowercase().contains(needle),
        None => true,
    });
    names
}
