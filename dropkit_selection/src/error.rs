// Copyright 2025 the Dropkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Configuration misuse detected while setting up items.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    /// A flag owned by the engine was set by the user.
    #[error("`{flag}` must not be set directly; use `{instead}` instead")]
    InternallyManaged {
        /// The engine-managed flag.
        flag: &'static str,
        /// The supported alternative.
        instead: &'static str,
    },
}
