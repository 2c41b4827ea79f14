// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Row identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an element row. Displayed as `0x`-prefixed hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ElementId(pub u64);

/// Identifier of a model row
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ModelId(pub u64);

macro_rules! sqlite_id {
    ($ty:ident) => {
        impl $ty {
            /// SQLite stores integers signed; ids round-trip bit for bit.
            pub fn from_sql(raw: i64) -> Self {
                Self(raw as u64)
            }

            pub fn to_sql(self) -> i64 {
                self.0 as i64
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{:x}", self.0)
            }
        }
    };
}

sqlite_id!(ElementId);
sqlite_id!(ModelId);
