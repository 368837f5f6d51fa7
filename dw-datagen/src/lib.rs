#![deny(rust_2018_idioms)]
#![deny(clippy::correctness)]
#![deny(clippy::perf)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Synthetic dimension and fact tables for demo data warehouses, written as CSV.

pub mod context;
pub mod customer;
pub mod date;
pub mod error;
pub mod lookup;
pub mod order;
pub mod product;
pub mod report;
pub mod sink;
pub mod store;

pub use context::GenContext;
pub use customer::generate_customers;
pub use date::generate_date_dimension;
pub use error::GenError;
pub use order::generate_orders;
pub use product::{generate_products, ProductLookup};
pub use report::GenerationReport;
pub use store::{generate_stores, StoreLookup};
