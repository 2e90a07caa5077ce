// Composition root for the students bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in memory roster.
// - Wire the roster into use case handlers and mount them on the HTTP router.

pub mod config;
pub mod http;
pub mod state;
