//! Shared scaffolding: mock upstreams, config builder and a live server

#![allow(dead_code)]

pub mod config;
pub mod mock_blob;
pub mod mock_openai;
