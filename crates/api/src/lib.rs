//! HTTP API: server, routing, and request/response mapping for the
//! OpenChoreo control plane.

pub mod app;
