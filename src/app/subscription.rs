// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Both the simulation timer and the window listener are declarative: they
//! live exactly as long as `App::subscription` keeps returning them.

use super::Message;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Routes the window events the status screen cares about.
///
/// Window close requests are turned into a message so the monitor can be
/// stopped before exiting.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::Opened { size, .. }) => Some(Message::WindowOpened {
            id: window_id,
            size,
        }),
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Window(window::Event::CloseRequested) => {
            Some(Message::WindowCloseRequested(window_id))
        }
        _ => None,
    })
}

/// Creates the simulation timer while the monitor is running.
pub fn create_tick_subscription(running: bool, period: Duration) -> Subscription<Message> {
    if running {
        time::every(period).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
