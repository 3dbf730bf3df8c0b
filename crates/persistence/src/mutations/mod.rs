// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! State-changing operations.
//!
//! Every mutation runs inside its own transaction: it commits when the
//! closure returns `Ok` and rolls back on any error.
//!
//! ## Module Organization
//!
//! - `venues`: Venue insert, update and cascading delete
//! - `artists`: Artist insert, update and cascading delete
//! - `shows`: Show insert

pub mod artists;
pub mod shows;
pub mod venues;
