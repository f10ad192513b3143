//! Static template catalogs the generators sample from.
//!
//! Catalogs are plain data. Entries within one catalog have distinct natural
//! keys, so sampling without replacement never produces two records that
//! collide on the same key.

pub mod cases;
pub mod reference;
pub mod work;
