//! Upstream services

pub mod abuseipdb;
