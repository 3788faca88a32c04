use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;

use crate::accessibility::platform::Announcer;
use crate::config;
use crate::scheduler::{BrowserScheduler, Scheduler};
use crate::utils::format_accessible_text;

/// Where live-region nodes are created and removed.
pub trait LiveRegionHost {
    type Node: Clone;

    /// Appends a polite live region holding `text`.
    fn attach(&self, text: &str) -> Option<Self::Node>;
    fn is_attached(&self, node: &Self::Node) -> bool;
    fn detach(&self, node: &Self::Node);
}

/// Live regions appended to `<body>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BodyLiveRegions;

impl LiveRegionHost for BodyLiveRegions {
    type Node = Element;

    fn attach(&self, text: &str) -> Option<Element> {
        let document = web_sys::window()?.document()?;
        let body = document.body()?;
        let node = match document.create_element("div") {
            Ok(node) => node,
            Err(e) => {
                log::warn!("could not create live region: {:?}", e);
                return None;
            }
        };

        for (name, value) in [("aria-live", "polite"), ("aria-atomic", "true")] {
            if let Err(e) = node.set_attribute(name, value) {
                log::warn!("could not set {} on live region: {:?}", name, e);
            }
        }
        node.set_class_name("sr-only");
        node.set_text_content(Some(text));

        if let Err(e) = body.append_child(&node) {
            log::warn!("could not attach live region: {:?}", e);
            return None;
        }
        Some(node)
    }

    fn is_attached(&self, node: &Element) -> bool {
        node.parent_node().is_some()
    }

    fn detach(&self, node: &Element) {
        if let Some(parent) = node.parent_node() {
            if let Err(e) = parent.remove_child(node) {
                log::warn!("could not remove live region: {:?}", e);
            }
        }
    }
}

/// Removal can race with teardown; a node that already left the document is
/// simply skipped.
fn remove_if_attached<H: LiveRegionHost>(host: &H, node: &H::Node) {
    if host.is_attached(node) {
        host.detach(node);
    }
}

struct PendingAnnouncement<N, T> {
    node: N,
    // Dropping the handle cancels the scheduled removal.
    _removal: T,
}

/// Appends short-lived `aria-live="polite"` regions through a [`LiveRegionHost`].
///
/// Each region removes itself after [`config::ANNOUNCEMENT_TTL_MS`]. Regions
/// still pending when the announcer is dropped are cancelled and removed
/// right away.
pub struct LiveRegionAnnouncer<H: LiveRegionHost = BodyLiveRegions, S: Scheduler = BrowserScheduler> {
    host: Rc<H>,
    scheduler: S,
    pending: RefCell<Vec<PendingAnnouncement<H::Node, S::Handle>>>,
}

impl LiveRegionAnnouncer {
    pub fn new() -> Self {
        Self::with_host(BodyLiveRegions, BrowserScheduler)
    }
}

impl<H: LiveRegionHost, S: Scheduler> LiveRegionAnnouncer<H, S> {
    pub fn with_host(host: H, scheduler: S) -> Self {
        Self {
            host: Rc::new(host),
            scheduler,
            pending: RefCell::new(Vec::new()),
        }
    }

    fn prune_detached(&self) {
        let host = &self.host;
        self.pending
            .borrow_mut()
            .retain(|pending| host.is_attached(&pending.node));
    }

    #[cfg(test)]
    fn pending_count(&self) -> usize {
        self.pending.borrow().len()
    }
}

impl<H, S> Announcer for LiveRegionAnnouncer<H, S>
where
    H: LiveRegionHost + 'static,
    H::Node: 'static,
    S: Scheduler,
{
    fn announce(&self, message: &str) {
        let Some(node) = self.host.attach(&format_accessible_text(message)) else {
            return;
        };

        let removal = {
            let host = Rc::clone(&self.host);
            let node = node.clone();
            self.scheduler
                .schedule(config::ANNOUNCEMENT_TTL_MS, move || remove_if_attached(&*host, &node))
        };

        self.prune_detached();
        self.pending.borrow_mut().push(PendingAnnouncement { node, _removal: removal });
    }
}

impl<H: LiveRegionHost, S: Scheduler> Drop for LiveRegionAnnouncer<H, S> {
    fn drop(&mut self) {
        for pending in self.pending.get_mut().drain(..) {
            let PendingAnnouncement { node, _removal: removal } = pending;
            drop(removal);
            remove_if_attached(&*self.host, &node);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::BTreeSet;
    use std::rc::Rc;

    use super::*;
    use crate::scheduler::testing::ManualScheduler;

    /// Nodes are ids; every attach and detach is recorded.
    #[derive(Clone, Default)]
    struct FakeRegions {
        texts: Rc<RefCell<Vec<String>>>,
        attached: Rc<RefCell<BTreeSet<usize>>>,
        detached: Rc<RefCell<Vec<usize>>>,
    }

    impl LiveRegionHost for FakeRegions {
        type Node = usize;

        fn attach(&self, text: &str) -> Option<usize> {
            let mut texts = self.texts.borrow_mut();
            let id = texts.len();
            texts.push(text.to_string());
            self.attached.borrow_mut().insert(id);
            Some(id)
        }

        fn is_attached(&self, node: &usize) -> bool {
            self.attached.borrow().contains(node)
        }

        fn detach(&self, node: &usize) {
            self.attached.borrow_mut().remove(node);
            self.detached.borrow_mut().push(*node);
        }
    }

    fn announcer() -> (LiveRegionAnnouncer<FakeRegions, ManualScheduler>, FakeRegions, ManualScheduler) {
        let regions = FakeRegions::default();
        let scheduler = ManualScheduler::default();
        let announcer = LiveRegionAnnouncer::with_host(regions.clone(), scheduler.clone());
        (announcer, regions, scheduler)
    }

    #[test]
    fn announcement_is_formatted_and_removed_after_ttl() {
        let (announcer, regions, scheduler) = announcer();
        announcer.announce("altoContraste   ativado");

        assert_eq!(*regions.texts.borrow(), vec!["alto Contraste ativado".to_string()]);
        assert_eq!(scheduler.delays(), vec![config::ANNOUNCEMENT_TTL_MS]);
        assert!(regions.is_attached(&0));

        scheduler.fire_all();
        assert!(!regions.is_attached(&0));
        assert_eq!(*regions.detached.borrow(), vec![0]);
    }

    #[test]
    fn drop_after_timeout_does_not_remove_twice() {
        let (announcer, regions, scheduler) = announcer();
        announcer.announce("Alto contraste ativado");
        scheduler.fire_all();
        drop(announcer);

        assert_eq!(*regions.detached.borrow(), vec![0]);
    }

    #[test]
    fn drop_before_timeout_cancels_and_removes_once() {
        let (announcer, regions, scheduler) = announcer();
        announcer.announce("Movimento reduzido ativado");
        announcer.announce("Tamanho da fonte alterado para grande");
        drop(announcer);

        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.cancelled(), 2);
        assert_eq!(*regions.detached.borrow(), vec![0, 1]);

        scheduler.fire_all();
        assert_eq!(*regions.detached.borrow(), vec![0, 1]);
    }

    #[test]
    fn removed_announcements_are_pruned_on_next_announce() {
        let (announcer, _regions, scheduler) = announcer();
        announcer.announce("primeira");
        scheduler.fire_all();
        assert_eq!(announcer.pending_count(), 1);

        announcer.announce("segunda");
        assert_eq!(announcer.pending_count(), 1);
    }

    #[test]
    fn removal_skips_nodes_already_gone() {
        let regions = FakeRegions::default();
        let node = regions.attach("x").unwrap();
        remove_if_attached(&regions, &node);
        remove_if_attached(&regions, &node);

        assert_eq!(*regions.detached.borrow(), vec![node]);
    }
}
