// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod cli;
pub mod db;
pub mod models;
pub mod error;
pub mod utils;
pub mod accounts;
pub mod tx;
pub mod balance;
pub mod ledger;
pub mod daily;
pub mod stats;
pub mod engagement;
pub mod commands;
