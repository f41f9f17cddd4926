//! Unit tests against the public API.
