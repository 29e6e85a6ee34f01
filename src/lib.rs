//! MasterBlog front end.
//!
//! A server-rendered client for the MasterBlog posts API: it pages, sorts and
//! searches posts, and creates, updates, deletes and likes them, keeping one
//! browsing session whose state only changes when the API call behind a
//! transition succeeds.

pub mod api;
pub mod components;
pub mod config;
pub mod confirm;
pub mod constants;
pub mod models;
pub mod pagination;
pub mod session;
pub mod store;
pub mod web;
