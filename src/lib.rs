//! Worksheet Builder - printable worksheets and answer keys.
//!
//! This crate composes worksheets from long-answer, fill-in-the-blank and
//! multiple-choice questions (optionally grouped into sections), lays them out
//! onto pages and renders them as PDF, with or without the answers printed.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
