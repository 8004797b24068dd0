//! Host integration: viewport size queries and resize notifications.

use log::debug;

/// Callback invoked with the new viewport size.
pub type ResizeCallback = Box<dyn FnMut(u32, u32)>;

/// Environment a scene is displayed in.
pub trait Host {
    /// Current viewport size in pixels.
    fn viewport_size(&self) -> (u32, u32);

    /// Registers a callback for every subsequent viewport change.
    fn subscribe_resize(&mut self, callback: ResizeCallback);
}

/// In-process host whose viewport is changed programmatically.
pub struct HeadlessHost {
    width: u32,
    height: u32,
    listeners: Vec<ResizeCallback>,
}

impl HeadlessHost {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            listeners: Vec::new(),
        }
    }

    /// Updates the viewport and notifies every subscriber.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        debug!(
            "Viewport now {}x{}, notifying {} subscriber(s)",
            width,
            height,
            self.listeners.len()
        );
        for listener in &mut self.listeners {
            listener(width, height);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }
}

impl Host for HeadlessHost {
    fn viewport_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn subscribe_resize(&mut self, callback: ResizeCallback) {
        self.listeners.push(callback);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn set_viewport_notifies_subscribers() {
        let mut host = HeadlessHost::new(100, 50);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        host.subscribe_resize(Box::new(move |w, h| sink.borrow_mut().push((w, h))));

        host.set_viewport(320, 240);
        host.set_viewport(640, 480);

        assert_eq!(host.viewport_size(), (640, 480));
        assert_eq!(*seen.borrow(), vec![(320, 240), (640, 480)]);
    }
}
