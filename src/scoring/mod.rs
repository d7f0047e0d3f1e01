// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers and their order.
//!
//! Relevance is a weighted occurrence count, plus flat phrase bonuses, plus a
//! recency boost that decays to nothing over a year. Ranking then sorts by
//! relevance or by one of the metadata keys the caller asked for.

mod core;
pub mod ranking;

pub use core::*;
