//! Browser-side networking.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every account page reads and writes through the server's `/api` routes;
//! the session cookie rides along automatically so nothing here handles
//! tokens directly.

pub mod api;
