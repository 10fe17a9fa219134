//! Target/action style event dispatch for controls.
//!
//! A control owns an [`EventTargets`] registry. Observers subscribe with a
//! mask of [`ControlEvents`] and get a [`TargetId`] back for unsubscribing.

use std::rc::Rc;

use bitflags::bitflags;
use slotmap::{SlotMap, new_key_type};
use smallvec::SmallVec;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ControlEvents: u32 {
        const VALUE_CHANGED = 1 << 0;
    }
}

new_key_type! {
    pub struct TargetId;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlEvent {
    pub kind: ControlEvents,
    /// The control's value after the change (the selected index).
    pub value: usize,
}

pub type EventHandler = Rc<dyn Fn(&ControlEvent)>;

struct Target {
    mask: ControlEvents,
    handler: EventHandler,
}

#[derive(Default)]
pub struct EventTargets {
    targets: SlotMap<TargetId, Target>,
}

impl EventTargets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        mask: ControlEvents,
        handler: impl Fn(&ControlEvent) + 'static,
    ) -> TargetId {
        self.targets.insert(Target {
            mask,
            handler: Rc::new(handler),
        })
    }

    /// Returns `false` if `id` was already removed.
    pub fn remove(&mut self, id: TargetId) -> bool {
        self.targets.remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Invokes every target whose mask intersects `event.kind`; returns how
    /// many ran.
    pub fn send(&self, event: &ControlEvent) -> usize {
        let handlers: SmallVec<[EventHandler; 4]> = self
            .targets
            .values()
            .filter(|t| t.mask.intersects(event.kind))
            .map(|t| t.handler.clone())
            .collect();
        log::trace!("dispatch {:?} to {} target(s)", event.kind, handlers.len());
        for h in &handlers {
            h(event);
        }
        handlers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn send_reaches_matching_targets_only() {
        let mut targets = EventTargets::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let s = seen.clone();
        let id = targets.add(ControlEvents::VALUE_CHANGED, move |e| {
            s.borrow_mut().push(e.value)
        });
        targets.add(ControlEvents::empty(), |_| panic!("empty mask must not fire"));

        let n = targets.send(&ControlEvent {
            kind: ControlEvents::VALUE_CHANGED,
            value: 3,
        });
        assert_eq!(n, 1);
        assert_eq!(*seen.borrow(), vec![3]);

        assert!(targets.remove(id));
        assert!(!targets.remove(id));
        assert_eq!(targets.len(), 1);
        assert_eq!(
            targets.send(&ControlEvent {
                kind: ControlEvents::VALUE_CHANGED,
                value: 4,
            }),
            0
        );
        assert_eq!(*seen.borrow(), vec![3]);
    }
}
