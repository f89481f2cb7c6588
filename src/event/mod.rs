// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Event fan-out for async consumers.
//!
//! Synchronous callbacks are registered through the
//! [`subscription`](crate::subscription) module. This module offers the same
//! events over a tokio broadcast channel for consumers that prefer to await
//! them.
//!
//! # Examples
//!
//! ```
//! use eq3bt_lib::event::{EventBus, SupervisorEvent};
//!
//! let bus = EventBus::new();
//! let mut rx = bus.subscribe();
//!
//! bus.publish(SupervisorEvent::Connected);
//! assert_eq!(rx.try_recv().unwrap(), SupervisorEvent::Connected);
//! ```

mod event_bus;
mod supervisor_event;

pub use event_bus::{EVENT_BUS_CAPACITY, EventBus};
pub use supervisor_event::SupervisorEvent;
