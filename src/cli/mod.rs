// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI support shared by the export front ends

pub mod reporter;

pub use reporter::Reporter;
