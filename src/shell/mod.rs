// Composition root of the time recorder.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the HTTP or in memory API and wire it into the use case handlers.
// - Expose the command line, the interactive session and the development backend router.

pub mod cli;
pub mod config;
pub mod http;
pub mod render;
pub mod session;
pub mod state;
