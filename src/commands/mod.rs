// Copyright (c) 2025 the fintrack authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod achievement;
pub mod bill;
pub mod dashboard;
pub mod doctor;
pub mod expense;
pub mod exporter;
pub mod income;
pub mod quick;
pub mod remote;
pub mod saving;
