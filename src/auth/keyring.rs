//
//  teamcity-client
//  auth/keyring.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Secure Password Storage
//!
//! Passwords entered with `tc auth login` are kept in the platform keyring:
//!
//! - **macOS**: Keychain Services
//! - **Linux**: Secret Service API (GNOME Keyring, KWallet)
//! - **Windows**: Windows Credential Manager
//!
//! ## Storage Model
//!
//! - **Service**: `teamcity-client`
//! - **Account**: `<username>@<host>:<port>`, see [`account_key`]
//! - **Secret**: the password
//!
//! ## Example
//!
//! ```rust,no_run
//! use teamcity_client::auth::{account_key, KeyringStore};
//!
//! fn remember() -> anyhow::Result<()> {
//!     let store = KeyringStore::new();
//!     let account = account_key("admin", "ci.example.com", 8111);
//!
//!     store.store(&account, "secret")?;
//!     assert_eq!(store.get(&account)?.as_deref(), Some("secret"));
//!     store.delete(&account)?;
//!     Ok(())
//! }
//! ```

use anyhow::Result;
use keyring::Entry;

/// The service name used to identify this application in the system keyring.
const SERVICE_NAME: &str = "teamcity-client";

/// Builds the keyring account name for a user on a given server.
///
/// # Example
///
/// ```rust
/// use teamcity_client::auth::account_key;
///
/// assert_eq!(account_key("admin", "127.0.0.1", 8111), "admin@127.0.0.1:8111");
/// ```
pub fn account_key(username: &str, host: &str, port: u16) -> String {
    format!("{}@{}:{}", username, host, port)
}

/// Password storage backed by the system's native keyring service.
///
/// # Notes
///
/// - The keyring may require user interaction on first access.
/// - On Linux, a secret service daemon (GNOME Keyring, KWallet) must be running.
pub struct KeyringStore {
    service: String,
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyringStore {
    pub fn new() -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
        }
    }

    /// Stores (or replaces) the password for an account.
    pub fn store(&self, account: &str, password: &str) -> Result<()> {
        let entry = Entry::new(&self.service, account)?;
        entry.set_password(password)?;
        Ok(())
    }

    /// Retrieves the password for an account.
    ///
    /// Returns `Ok(None)` when nothing is stored.
    pub fn get(&self, account: &str) -> Result<Option<String>> {
        let entry = Entry::new(&self.service, account)?;
        match entry.get_password() {
            Ok(password) => Ok(Some(password)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Removes the password for an account. Missing entries are not an error.
    pub fn delete(&self, account: &str) -> Result<()> {
        let entry = Entry::new(&self.service, account)?;
        match entry.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()), // Already deleted
            Err(e) => Err(e.into()),
        }
    }
}
