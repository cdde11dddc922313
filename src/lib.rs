//! Headless SportFamily storefront: a fixed sporting-goods catalog with
//! filtering and an in-memory session cart, served as a JSON API.

pub mod app;
pub mod audit;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod dto;
pub mod error;
pub mod filter;
pub mod models;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;
