//! Command-line glossary scanner built on the lemmata engine
//!
//! The binary loads a glossary from a JSON dictionary file, scans input
//! files for glossary phrases, and reports every occurrence with its
//! position and definition. It stands in for the editor host the engine
//! was designed to serve: dictionary in, annotated spans out.

pub mod commands;
pub mod dictionary;
pub mod error;
pub mod input;
pub mod output;
