// Copyright (c) 2025-2026 the commafy contributors
// SPDX-License-Identifier: Apache-2.0

pub mod args;
pub mod config;
