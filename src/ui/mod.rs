// Fri Oct 16 2026 - Alex

pub mod banner;

pub use banner::Banner;
