//! # Omneuro
//! A menu-driven terminal assistant. Pick a mode, type a request, and the
//! reply from an OpenAI chat model is printed and saved as a text draft.
//!
//! Only one mode ships today, Paralegal Mode, which produces legal letters and
//! filings. New modes are added by registering them in
//! [`session::ModeRegistry::with_defaults`].
//!
//! ## Environment Variables:
//! - `OPENAI_API_KEY`: Required. Read from the environment or a `.env` file in the working directory.
//! - `OMNEURO_MODEL`: Optional. The model to use (default: gpt-4o, also valid: gpt-4o-mini, gpt-4.1, o3-mini)
//! - `OPENAI_BASE_URL`: Optional. Root of an OpenAI-compatible API (default: `https://api.openai.com/v1`)
//! - `OMNEURO_DRAFTS_DIR` / `OMNEURO_LOGS_DIR`: Optional. Where drafts and the log file go (default: `drafts`, `logs`)
//! - `OMNEURO_TIMEOUT_SECS`: Optional. Completion request timeout in seconds (default: none)
//! - `OMNEURO_LOG`: Optional. Log filter for `logs/omneuro.log` (default: `info`)
//!
//! ## Files
//! - `drafts/<mode>/draft_<YYYY-MM-DD_HH-MM-SS>.txt`: a `Prompt:` section and a `Response:` section.
//! - `logs/omneuro.log`: requests, outcomes and saved draft paths.
//!
pub mod cli;
pub mod config;
pub mod drafts;
pub mod errors;
pub mod logging;
pub mod openai;
pub mod paralegal;
pub mod session;

#[cfg(test)]
mod testing;
