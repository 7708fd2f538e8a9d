// Library root
// -----------
// The binary (`main.rs`) parses the command line and dispatches to the
// flows in `ui`. Everything else lives here so it can be tested without a
// terminal.
//
// Module responsibilities:
// - `config`: API key and endpoint, resolved once and passed in.
// - `error`: the failure taxonomy shared by the network and parsing code.
// - `api`: blocking HTTP client for the currencies and rates endpoints.
// - `catalog`: the sorted list of selectable currencies.
// - `picker`: the interactive selection state machine and its terminal loop.
// - `convert`: rate lookup, amount parsing and result lines.
// - `ui`: the user-facing flows tying the above together.
pub mod api;
pub mod catalog;
pub mod config;
pub mod convert;
pub mod error;
pub mod picker;
pub mod ui;
