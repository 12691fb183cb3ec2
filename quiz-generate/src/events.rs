use ::std::collections::HashMap;

type Handler<P> = Box<dyn FnMut(&P) + Send>;

/// Named-event publish/subscribe, composed into whatever needs to notify a
/// host.
pub struct EventDispatcher<P> {
    handlers: HashMap<String, Vec<Handler<P>>>,
}

impl<P> Default for EventDispatcher<P> {
    fn default() -> Self {
        Self { handlers: HashMap::new() }
    }
}

impl<P> EventDispatcher<P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<T, F>(&mut self, event: T, handler: F)
    where
        T: ToString,
        F: FnMut(&P) + Send + 'static,
    {
        self.handlers.entry(event.to_string()).or_default().push(Box::new(handler));
    }

    /// Calls every handler of `event` in subscription order and returns how
    /// many ran.
    pub fn publish(&mut self, event: &str, payload: &P) -> usize {
        let Some(handlers) = self.handlers.get_mut(event) else {
            tracing::trace!("No subscribers for {event}");
            return 0;
        };
        for handler in handlers.iter_mut() {
            handler(payload);
        }
        handlers.len()
    }

    pub fn subscriber_count(&self, event: &str) -> usize {
        self.handlers.get(event).map_or(0, |handlers| handlers.len())
    }
}

impl<P> ::std::fmt::Debug for EventDispatcher<P> {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.debug_map()
            .entries(self.handlers.iter().map(|(event, handlers)| (event, handlers.len())))
            .finish()
    }
}
