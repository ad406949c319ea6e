pub mod fake_feed;
pub mod feed;
pub mod fixture_fetch;
pub mod http_cache;
pub mod http_client;
pub mod league;
pub mod predict;
pub mod registry;
pub mod state;
pub mod stats;
