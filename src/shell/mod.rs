// Composition root for the activities service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the concrete store adapter and seed it.
// - Wire the store into the use case handlers and expose them over HTTP and GraphQL.

pub mod bootstrap;
pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
