// --- File: crates/meetcost_stats/src/lib.rs ---
pub mod doc;
pub mod handlers;
pub mod logic;
#[cfg(test)]
mod logic_proptest;
pub mod methodology;
pub mod models;
pub mod report;
pub mod routes;
pub mod source;
pub mod window;
