// Returns Policy Bot - core library
//
// Scrapes a merchant homepage for a few salient signals and asks an LLM to
// write a returns policy from them. Infrastructure (HTTP fetch, OpenAI) lives
// in kernel/ behind traits; the pipeline steps live in domains/.

pub mod config;
pub mod domains;
pub mod kernel;

pub use config::*;
