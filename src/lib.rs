// Copyright (c) 2025 the fintrack authors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod commands;
pub mod core;
pub mod db;
pub mod models;
pub mod remote;
pub mod store;
pub mod utils;
