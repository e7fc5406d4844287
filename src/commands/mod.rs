// Backend commands invoked by the dashboard shell

pub mod analytics;
pub mod auth;
pub mod business;
pub mod catalog;
pub mod content;
pub mod modules;
pub mod subscription;
