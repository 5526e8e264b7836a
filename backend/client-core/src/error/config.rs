use std::path::PathBuf;

use common::ErrorLocation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config Read Error: {path}: {source} {location}")]
    ReadError {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config Parse Error: {path}: {reason} {location}")]
    ParseError {
        location: ErrorLocation,
        path: PathBuf,
        reason: String,
    },

    #[error("Config Write Error: {path}: {source} {location}")]
    WriteError {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config Serialization Error: {reason} {location}")]
    SerializeError {
        location: ErrorLocation,
        reason: String,
    },

    #[error("Config Version Error: version {version} is not supported (expected 1-{supported}) {location}")]
    UnsupportedVersion {
        location: ErrorLocation,
        version: u32,
        supported: u32,
    },

    #[error("Config Base URL Error: {base_url:?}: {reason} {location}")]
    InvalidBaseUrl {
        location: ErrorLocation,
        base_url: String,
        reason: &'static str,
    },
}
