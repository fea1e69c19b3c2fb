#![doc(html_root_url = "https://docs.rs/shamir-fp/0.1.0")]
#![warn(rust_2018_idioms)]

//! # Introduction
//!
//! Shamir's Secret Sharing over the prime field GF(2^61 - 1). A secret below
//! the prime is split into shares, any `k` of which recover it exactly, while
//! fewer than `k` reveal nothing about it.
//!
//! # Getting Started
//!
//! ```toml
//! [dependencies]
//! shamir-fp = "0.1.0"
//! ```
//!
//! # Usage
//!
//! ```
//! use shamir_fp::{SecretSharingSession, recover_secret};
//!
//! let mut session = SecretSharingSession::new(1029384756, 3).unwrap();
//! let shares = session.generate_shares(5).unwrap();
//! assert_eq!(recover_secret(&shares[1..4]).unwrap(), 1029384756);
//! ```

/// The field modulus, the Mersenne prime 2^61 - 1.
pub const PRIME: u64 = (1 << 61) - 1;
/// The smallest threshold that hides anything.
pub const MIN_THRESHOLD: u64 = 2;

pub mod field;
mod interpolate;
pub use interpolate::{interpolate, recover_secret};

mod polynomial;
pub use polynomial::Polynomial;

mod shamir_error;
pub use shamir_error::{Result, ShamirError};

mod share;
pub use share::Share;

mod session_rng;
pub use session_rng::SessionRandomNumberGenerator;

mod shamir;
pub use shamir::{SecretSharingSession, split_secret};
