//! Dynamic connectivity over a fixed set of elements, applied two ways: an N-by-N percolation
//! grid whose open sites are tracked with a union-find forest, and a connected-components
//! analysis of an undirected graph using an iterative depth-first search.

// Enable warnings for all clippy lints. This automatically enables new lints shipped with new rust
// versions.
#![warn(
    clippy::correctness,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::cargo,
    clippy::restriction
)]
// Now selectively disable unneeded lints.
#![allow(
    clippy::indexing_slicing,               // Allow `vec[i]` indexing.
    clippy::module_name_repetitions,        // Allow.
    clippy::use_debug,                      // Allow.
    clippy::float_arithmetic,               // Allow.
    clippy::integer_arithmetic,             // Allow.
    clippy::integer_division,               // Allow.
    clippy::implicit_return,                // Allow.
    clippy::too_many_arguments,             // Allow.
    clippy::use_self,                       // Allow.
    clippy::shadow_same,                    // Allow.
    clippy::too_many_lines,                 // Allow.
    clippy::multiple_crate_versions,        // Disabled.
    clippy::missing_docs_in_private_items,  // Disabled.
    clippy::missing_errors_doc,             // Disabled.
    clippy::missing_inline_in_public_items, // Disabled.
    clippy::unknown_clippy_lints,           // To enable naming new lints added to nightly.
    clippy::cognitive_complexity,           // Disabled.
    clippy::result_expect_used,             // Should use `expect` rather than `unwrap`.
    clippy::option_expect_used,             // Should use `expect` rather than `unwrap`.
    clippy::panic,                          // Allow.
    clippy::unreachable,                    // Allow.
    clippy::todo,                           // Allow.
    clippy::must_use_candidate,             // Allow.
    clippy::inline_always,                  // Allow.
    clippy::as_conversions,                 // Allow but only when absolutely necessary.
    clippy::implicit_hasher                 // Default hasher is fine for now.
)]
// Do not allow print statements. Use `log::info!()` or equivalent instead.
#![deny(clippy::print_stdout)]

pub mod computations;
pub mod error;
pub mod graph;
pub mod percolation;
pub mod union_find;
pub mod util;

#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate derive_new;
