// Wed Jan 15 2026 - Alex

pub mod cli;
