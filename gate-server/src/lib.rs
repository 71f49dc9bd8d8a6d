//! Hyperspace gate routing server.
//!
//! A web application that answers: "what is the cheapest way to get
//! from this gate to that one, and how should I move my passengers?"

pub mod domain;
pub mod network;
pub mod routing;
pub mod transport;
pub mod web;
