// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # ilmethod
//!
//! Resolved-method adapter and signature encoder for methods whose body is produced by
//! explicit IL construction rather than parsed from bytecode.
//!
//! A compiler front end expects every method it compiles or calls to answer a rich
//! resolution interface: a canonical signature for symbol lookup, parameter and return types,
//! the address of compiled code, and a long list of attribute queries shaped after
//! object-oriented bytecode languages. `ilmethod` provides that interface for builder-defined
//! methods.
//!
//! ## Features
//!
//! - **Canonical signatures** - `(P1P2...Pn)R` encoding with a prefix-free type-code grammar
//! - **No silent truncation** - Signatures that exceed the capacity are reported as errors
//! - **Identity by injector** - Two methods are the same method only if the same body
//!   generator produced them
//! - **One-way entry point** - Compiled code is installed exactly once
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use ilmethod::prelude::*;
//!
//! struct Body;
//! impl IlInjector for Body {}
//!
//! let types = TypeDictionary::new();
//! let body = Arc::new(Body);
//!
//! let add = ResolvedMethodBuilder::new("add")
//!     .declaring_unit("math.cpp")
//!     .line("12")
//!     .parameters([types.int32(), types.int32()])
//!     .returns(types.int32())
//!     .injector(&body)
//!     .build()?;
//!
//! assert_eq!(add.signature(), "(II)I");
//! assert!(add.is_static() && add.is_public());
//! assert!(add.is_interpreted());
//!
//! add.set_entry_point(EntryPoint::new(0x7f00_1000).unwrap())?;
//! assert!(!add.is_interpreted());
//! # Ok::<(), ilmethod::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Type descriptions and the type-code table
//! - [`signature`] - The signature encoder
//! - [`method`] - The [`method::ResolvedMethod`] interface and its builder-defined implementation
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Logging
//!
//! The library logs through the [`log`] facade: `debug` when a method is resolved or its
//! entry point installed, `warn` when an operation is rejected. Install any `log`
//! implementation to see the output.

pub(crate) mod error;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use ilmethod::prelude::*;
///
/// let types = TypeDictionary::new();
/// assert_eq!(encode(&[types.int64()], &types.no_type())?, "(J)V");
/// # Ok::<(), ilmethod::Error>(())
/// ```
pub mod prelude;

pub mod method;
pub mod signature;
pub mod types;

/// `ilmethod` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `ilmethod` Error type
///
/// The main error type for all operations in this crate. See [`Error`] for the individual
/// failure kinds.
pub use error::Error;
