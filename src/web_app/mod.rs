// web_app/mod.rs - Root module for the Leptos web application
//
// This module contains all the components and logic for the full-stack
// product catalog built with the Leptos framework on top of the
// dummyjson.com product API.
//
// Architecture:
// - model/: Shared data types mirroring the remote JSON (client and server)
// - state.rs: Product list view state, free of any reactive runtime
// - thumbnail.rs: Inline image encoding for picked thumbnails
// - server_fns.rs: Server function declarations (both client and server)
// - api/: Remote API client and configuration (server and CLI tools)
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod model;
pub mod state;
pub mod thumbnail;

// Server function declarations - must be available to both client and server
// The #[server] macro generates client stubs that call the server via HTTP
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod server_fns;

// Remote API client (server side and CLI tools only)
#[cfg(feature = "api-client")]
pub mod api;

// Components, pages, and app are used by both server and client
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

// Re-export main app component for convenience
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
