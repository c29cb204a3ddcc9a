//! License gate and per-call configuration.
//!
//! A [`Context`] is built once, consulted by every entry point, and never
//! mutated afterwards. It is `Copy`, so sharing it across threads or storing
//! it next to each buffer costs nothing.

use crate::{
    contract,
    error::Error,
    options::{AlgOptions, SearchStrategy},
};

/// Hashes identifying a licensee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LicenseKey {
    /// Hash of the licensee's first name.
    pub first_name_hash: u64,
    /// Hash of the licensee's last name.
    pub last_name_hash: u64,
    /// Hash of the licensee's e-mail address.
    pub email_hash: u64,
    /// Hash of the license itself.
    pub license_hash: u64,
}

/// Opaque license validator consulted once by [`Context::init`].
pub trait LicenseGate {
    /// Returns `true` if `key` grants use of the library.
    fn validate(&self, key: &LicenseKey) -> bool;
}

impl<F> LicenseGate for F
where
    F: Fn(&LicenseKey) -> bool,
{
    fn validate(&self, key: &LicenseKey) -> bool {
        self(key)
    }
}

/// Entry point for every algorithm in the crate.
///
/// The default context is unlicensed: each call on it fails with
/// [`Error::License`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Context {
    licensed: bool,
    options: AlgOptions,
}

impl Context {
    /// Runs `gate` against `key` and records the verdict.
    #[must_use]
    pub fn init<G: LicenseGate + ?Sized>(gate: &G, key: &LicenseKey) -> Self {
        let licensed = gate.validate(key);
        log::debug!("license gate verdict: licensed={licensed}");
        Self {
            licensed,
            options: AlgOptions::default(),
        }
    }

    /// A context that skips the gate, for embedders that validate elsewhere
    /// and for tests.
    #[must_use]
    pub const fn validated() -> Self {
        Self {
            licensed: true,
            options: AlgOptions {
                strategy: SearchStrategy::Bmh,
            },
        }
    }

    /// Whether the license check succeeded.
    #[must_use]
    pub const fn is_licensed(&self) -> bool {
        self.licensed
    }

    /// Current options.
    #[must_use]
    pub const fn options(&self) -> &AlgOptions {
        &self.options
    }

    /// Copy of this context using `options`.
    #[must_use]
    pub const fn with_options(mut self, options: AlgOptions) -> Self {
        self.options = options;
        self
    }

    /// Copy of this context searching with `strategy`.
    #[must_use]
    pub const fn with_strategy(mut self, strategy: SearchStrategy) -> Self {
        self.options.strategy = strategy;
        self
    }

    pub(crate) fn check_license(&self, call: &'static str) -> Result<(), Error> {
        contract::ensure(call, self.licensed, Error::License)
    }
}
