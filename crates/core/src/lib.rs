//! Functional core for the visitcount project.
//!
//! Pure data types and functions shared by the Lambda function, the local
//! development server, and the client. Nothing in this crate performs I/O;
//! the storage seam is expressed as the [`storage::VisitRepository`] trait
//! and implemented in the `visitcount` crate.

pub mod http;
pub mod storage;
pub mod visit;
