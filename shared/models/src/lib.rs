//! Shared data types for the Keygate services.
//!
//! `auth` holds the persisted user record and token payloads, `graphql`
//! holds the request/response shapes exposed over the GraphQL boundary.

pub mod auth;
pub mod graphql;
