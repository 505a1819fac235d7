// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) only builds the client and hands it to the menu.
//
// Module responsibilities:
// - `config`: storefront coordinates and request settings.
// - `cookie`: the session cookie and its `Set-Cookie` parsing.
// - `api`: HTTP transport, cookie bootstrap and authorized fetch.
// - `models`: the three response schemas.
// - `decode`: schema decoding with diagnostics and pretty rendering.
// - `dispatch`: menu answers to endpoints, and the request sequence.
// - `ui`: prompts, spinner and output.
pub mod api;
pub mod config;
pub mod cookie;
pub mod decode;
pub mod dispatch;
pub mod error;
pub mod models;
pub mod ui;
