// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Subscription system for supervisor events.
//!
//! Entity adapters attach to a supervisor with a [`SubscriberId`] and a
//! [`Subscription`] holding up to three callbacks: status updated,
//! connected and disconnected. Detaching with the same id removes them.
//!
//! # Overview
//!
//! - [`SubscriberId`] - Identity used for attach and detach
//! - [`Subscription`] - The callbacks of one subscriber
//! - [`SubscriberRegistry`] - Registry that stores subscriptions and dispatches events
//!
//! # Usage
//!
//! ```
//! use eq3bt_lib::event::SupervisorEvent;
//! use eq3bt_lib::subscription::{SubscriberId, SubscriberRegistry, Subscription};
//!
//! let registry = SubscriberRegistry::new();
//! let id = SubscriberId::new();
//!
//! registry.subscribe(id, Subscription::new().on_connected(|| println!("available")));
//! registry.notify(SupervisorEvent::Connected);
//!
//! registry.unsubscribe(id);
//! ```

mod callback;
mod subscriber_id;

pub use callback::{SubscriberRegistry, Subscription};
pub use subscriber_id::SubscriberId;
