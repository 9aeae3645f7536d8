#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Handler<T> = Box<dyn FnMut(&T, &T)>;

/// Ordered list of `(old, new)` change handlers.
pub struct Listeners<T> {
    handlers: Vec<(ListenerId, Handler<T>)>,
    next_id: u64,
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self {
            handlers: Vec::new(),
            next_id: 0,
        }
    }
}

impl<T> Listeners<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, handler: impl FnMut(&T, &T) + 'static) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.handlers.push((id, Box::new(handler)));
        id
    }

    /// Returns false when the id was never registered or already removed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.handlers.len();
        self.handlers.retain(|(existing, _)| *existing != id);
        self.handlers.len() != before
    }

    pub fn notify(&mut self, old: &T, new: &T) {
        for (_, handler) in self.handlers.iter_mut() {
            handler(old, new);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// A value whose listeners see every `set`, called with the previous and the
/// incoming value before the replacement happens.
pub struct Observable<T> {
    value: T,
    listeners: Listeners<T>,
}

impl<T> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            listeners: Listeners::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn set(&mut self, value: T) {
        self.listeners.notify(&self.value, &value);
        self.value = value;
    }

    pub fn subscribe(&mut self, handler: impl FnMut(&T, &T) + 'static) -> ListenerId {
        self.listeners.subscribe(handler)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }
}
