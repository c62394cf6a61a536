// SPDX-FileCopyrightText: 2026 Phonebook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Common Test Utilities
//!
//! Shared fixtures, proptest strategies and a canned HTTP server.

#![allow(dead_code)]

pub mod fixtures;
pub mod http;
pub mod strategies;
