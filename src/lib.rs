// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod bootstrap;
pub mod config;
pub mod sentiment;
pub mod text;
pub mod utils;
pub mod version;
pub mod vision;
