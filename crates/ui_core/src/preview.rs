//! Single-handle preview resource slot.
//!
//! A file-preview surface holds at most one object URL at a time:
//! showing the next source releases the previous handle, and dropping
//! the slot releases whatever is still held. The URL factory is a trait
//! so the component layer can plug in the browser's object-URL API while
//! tests count create and release calls natively.

use std::marker::PhantomData;

/// Creates and releases preview handles for sources of type `S`.
pub trait ObjectUrlFactory<S> {
    /// Creates a handle for `source`. `None` means the host refused,
    /// which leaves the slot empty.
    fn create(&mut self, source: &S) -> Option<String>;

    /// Releases a previously created handle.
    fn revoke(&mut self, url: &str);
}

/// Holds at most one live preview handle.
#[derive(Debug)]
pub struct PreviewSlot<S, F: ObjectUrlFactory<S>> {
    factory: F,
    current: Option<String>,
    _source: PhantomData<S>,
}

impl<S, F: ObjectUrlFactory<S>> PreviewSlot<S, F> {
    /// Creates an empty slot around a factory.
    pub fn new(factory: F) -> Self {
        Self {
            factory,
            current: None,
            _source: PhantomData,
        }
    }

    /// Returns the currently held handle, when one exists.
    pub fn url(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Shows `source`, releasing the previously held handle first.
    pub fn show(&mut self, source: &S) -> Option<&str> {
        self.clear();
        self.current = self.factory.create(source);
        self.url()
    }

    /// Releases the held handle, when one exists.
    pub fn clear(&mut self) {
        if let Some(previous) = self.current.take() {
            self.factory.revoke(&previous);
        }
    }
}

impl<S, F: ObjectUrlFactory<S>> Drop for PreviewSlot<S, F> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct Counts {
        created: Vec<String>,
        revoked: Vec<String>,
    }

    #[derive(Clone, Default)]
    struct CountingFactory {
        counts: Rc<RefCell<Counts>>,
        next: Rc<RefCell<u32>>,
    }

    impl ObjectUrlFactory<String> for CountingFactory {
        fn create(&mut self, source: &String) -> Option<String> {
            let mut next = self.next.borrow_mut();
            *next += 1;
            let url = format!("blob:{source}#{next}");
            self.counts.borrow_mut().created.push(url.clone());
            Some(url)
        }

        fn revoke(&mut self, url: &str) {
            self.counts.borrow_mut().revoked.push(url.to_string());
        }
    }

    #[test]
    fn showing_the_next_source_releases_the_previous_handle() {
        let factory = CountingFactory::default();
        let counts = factory.counts.clone();
        let mut slot = PreviewSlot::new(factory);

        slot.show(&"a.png".to_string());
        let first = slot.url().expect("first handle").to_string();
        slot.show(&"b.png".to_string());

        assert_eq!(counts.borrow().revoked, vec![first]);
        assert_eq!(counts.borrow().created.len(), 2);
    }

    #[test]
    fn every_created_handle_is_eventually_released() {
        let factory = CountingFactory::default();
        let counts = factory.counts.clone();

        {
            let mut slot = PreviewSlot::new(factory);
            for name in ["a.png", "b.png", "c.png", "d.png", "e.png"] {
                slot.show(&name.to_string());
            }
        }

        let counts = counts.borrow();
        assert_eq!(counts.created.len(), 5);
        assert_eq!(counts.revoked, counts.created);
    }

    #[test]
    fn clear_is_idempotent() {
        let factory = CountingFactory::default();
        let counts = factory.counts.clone();
        let mut slot = PreviewSlot::new(factory);

        slot.show(&"a.png".to_string());
        slot.clear();
        slot.clear();

        assert_eq!(counts.borrow().revoked.len(), 1);
    }

    #[test]
    fn refused_creation_leaves_the_slot_empty() {
        struct RefusingFactory;
        impl ObjectUrlFactory<String> for RefusingFactory {
            fn create(&mut self, _source: &String) -> Option<String> {
                None
            }
            fn revoke(&mut self, _url: &str) {}
        }

        let mut slot = PreviewSlot::new(RefusingFactory);
        assert_eq!(slot.show(&"a.png".to_string()), None);
        assert_eq!(slot.url(), None);
    }
}
