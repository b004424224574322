//! Integration tests for the resource clients.
//!
//! Each test drives a [`auth0_core::ManagementApiClient`] over a
//! [`crate::common::RecordingConnection`] and checks both the decoded result
//! and the request that reached the connection.

pub mod jobs_client;
