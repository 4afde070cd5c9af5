use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::NodeRef;

use crate::config;
use crate::state::{FormEvent, FormStatus};

#[derive(Serialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingFormData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub hectares: String,
    pub issue: String,
    pub contact_method: String,
}

/// Handles to the booking form controls, read once on submit.
#[derive(Clone, Default, PartialEq)]
pub struct BookingFields {
    pub name: NodeRef,
    pub email: NodeRef,
    pub phone: NodeRef,
    pub location: NodeRef,
    pub hectares: NodeRef,
    pub issue: NodeRef,
    pub contact_method: NodeRef,
}

impl BookingFields {
    pub fn read(&self) -> BookingFormData {
        BookingFormData {
            name: input_value(&self.name),
            email: input_value(&self.email),
            phone: input_value(&self.phone),
            location: input_value(&self.location),
            hectares: input_value(&self.hectares),
            issue: select_value(&self.issue),
            contact_method: select_value(&self.contact_method),
        }
    }
}

fn input_value(node: &NodeRef) -> String {
    node.cast::<HtmlInputElement>()
        .map(|input| input.value().trim().to_string())
        .unwrap_or_default()
}

fn select_value(node: &NodeRef) -> String {
    node.cast::<HtmlSelectElement>()
        .map(|select| select.value())
        .unwrap_or_default()
}

/// Runs a callback once after a delay. Dropping the returned handle cancels
/// the callback if it hasn't run yet.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `setTimeout` through gloo.
#[derive(Clone, Copy, Default)]
pub struct BrowserTimer;

impl Scheduler for BrowserTimer {
    type Handle = Timeout;

    fn schedule(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(millis, callback)
    }
}

/// The in-flight simulated request.
pub struct PendingSubmission<S: Scheduler> {
    scheduler: S,
    handle: Option<S::Handle>,
    fired: Rc<Cell<bool>>,
}

impl<S: Scheduler> PendingSubmission<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            handle: None,
            fired: Rc::new(Cell::new(false)),
        }
    }

    /// Moves an idle form to `Submitting` and arms the delay that completes
    /// it. `on_status` receives `Success` when the delay elapses. Returns the
    /// status the form shows right now; a form that isn't idle, or a request
    /// already in flight, is left as it was.
    pub fn submit<F>(&mut self, status: FormStatus, payload: &BookingFormData, on_status: F) -> FormStatus
    where
        F: FnOnce(FormStatus) + 'static,
    {
        if self.is_pending() {
            debug!("Booking request already in flight");
            return status;
        }
        let next = status.apply(FormEvent::Submit);
        if next != FormStatus::Submitting {
            return status;
        }
        self.start(payload, move || on_status(next.apply(FormEvent::Delivered)));
        next
    }

    /// Arms the delay, replacing any earlier one. `on_delivered` runs once the
    /// delay elapses unless `cancel` is called first.
    pub fn start<F>(&mut self, payload: &BookingFormData, on_delivered: F)
    where
        F: FnOnce() + 'static,
    {
        match serde_json::to_string(payload) {
            Ok(json) => debug!("Booking request payload: {}", json),
            Err(e) => debug!("Could not serialise booking payload: {}", e),
        }
        self.cancel();
        let fired = Rc::new(Cell::new(false));
        self.fired = fired.clone();
        let handle = self.scheduler.schedule(
            config::SUBMIT_DELAY_MS,
            Box::new(move || {
                fired.set(true);
                on_delivered();
            }),
        );
        self.handle = Some(handle);
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            if !self.fired.get() {
                debug!("Cancelling pending booking submission");
            }
            drop(handle);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.handle.is_some() && !self.fired.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    type Queued = Rc<RefCell<Vec<(u32, Rc<Cell<bool>>, Option<Box<dyn FnOnce()>>)>>>;

    /// Queues callbacks until `elapse` is called. Dropping a handle marks its
    /// callback cancelled, like clearing a JS timer.
    #[derive(Clone, Default)]
    struct ManualClock {
        queued: Queued,
    }

    struct ManualHandle {
        cancelled: Rc<Cell<bool>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.cancelled.set(true);
        }
    }

    impl Scheduler for ManualClock {
        type Handle = ManualHandle;

        fn schedule(&self, millis: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            self.queued
                .borrow_mut()
                .push((millis, cancelled.clone(), Some(callback)));
            ManualHandle { cancelled }
        }
    }

    impl ManualClock {
        /// Runs every callback due within `millis` that wasn't cancelled.
        fn elapse(&self, millis: u32) {
            let due: Vec<Box<dyn FnOnce()>> = self
                .queued
                .borrow_mut()
                .iter_mut()
                .filter(|(delay, cancelled, _)| *delay <= millis && !cancelled.get())
                .filter_map(|(_, _, callback)| callback.take())
                .collect();
            for callback in due {
                callback();
            }
        }

        fn scheduled_delays(&self) -> Vec<u32> {
            self.queued.borrow().iter().map(|(delay, _, _)| *delay).collect()
        }
    }

    fn filled() -> BookingFormData {
        BookingFormData {
            name: "Anna Svensson".into(),
            email: "anna@farm.se".into(),
            phone: "+46 70 123 45 67".into(),
            location: "Borås".into(),
            hectares: "50".into(),
            issue: "Low Crop Yield".into(),
            contact_method: "Email".into(),
        }
    }

    fn counter() -> (Rc<Cell<u32>>, impl FnOnce() + 'static) {
        let count = Rc::new(Cell::new(0));
        let hits = count.clone();
        (count, move || hits.set(hits.get() + 1))
    }

    #[test]
    fn payload_uses_camel_case_keys() {
        let value = serde_json::to_value(filled()).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj["contactMethod"], "Email");
        assert_eq!(obj["hectares"], "50");
        assert!(!obj.contains_key("contact_method"));
        assert_eq!(obj.len(), 7);
    }

    #[test]
    fn unmounted_fields_read_as_empty() {
        let data = BookingFields::default().read();
        assert_eq!(data, BookingFormData::default());
    }

    #[test]
    fn fresh_submission_is_not_pending() {
        let mut pending = PendingSubmission::new(ManualClock::default());
        assert!(!pending.is_pending());
        pending.cancel();
        assert!(!pending.is_pending());
    }

    #[test]
    fn delivery_fires_once_after_delay() {
        let clock = ManualClock::default();
        let mut pending = PendingSubmission::new(clock.clone());
        let (count, on_delivered) = counter();

        pending.start(&filled(), on_delivered);
        assert_eq!(clock.scheduled_delays(), vec![config::SUBMIT_DELAY_MS]);
        assert!(pending.is_pending());

        clock.elapse(config::SUBMIT_DELAY_MS - 1);
        assert_eq!(count.get(), 0);
        assert!(pending.is_pending());

        clock.elapse(config::SUBMIT_DELAY_MS);
        assert_eq!(count.get(), 1);
        assert!(!pending.is_pending());

        clock.elapse(config::SUBMIT_DELAY_MS * 2);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn cancel_stops_delivery() {
        let clock = ManualClock::default();
        let mut pending = PendingSubmission::new(clock.clone());
        let (count, on_delivered) = counter();

        pending.start(&filled(), on_delivered);
        pending.cancel();
        assert!(!pending.is_pending());

        clock.elapse(config::SUBMIT_DELAY_MS);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn dropping_pending_submission_stops_delivery() {
        let clock = ManualClock::default();
        let (count, on_delivered) = counter();
        {
            let mut pending = PendingSubmission::new(clock.clone());
            pending.start(&filled(), on_delivered);
        }
        clock.elapse(config::SUBMIT_DELAY_MS);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn restart_replaces_earlier_timer() {
        let clock = ManualClock::default();
        let mut pending = PendingSubmission::new(clock.clone());
        let (first, on_first) = counter();
        let (second, on_second) = counter();

        pending.start(&filled(), on_first);
        pending.start(&filled(), on_second);
        assert_eq!(clock.scheduled_delays().len(), 2);

        clock.elapse(config::SUBMIT_DELAY_MS);
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
        assert!(!pending.is_pending());
    }

    #[test]
    fn submit_sends_then_succeeds_then_resets() {
        let clock = ManualClock::default();
        let mut pending = PendingSubmission::new(clock.clone());
        let shown = Rc::new(Cell::new(FormStatus::Idle));

        let sink = shown.clone();
        let now = pending.submit(shown.get(), &filled(), move |s| sink.set(s));
        shown.set(now);
        assert_eq!(shown.get(), FormStatus::Submitting);
        assert!(shown.get().submit_disabled());
        assert_eq!(shown.get().submit_label(), "Sending...");

        clock.elapse(config::SUBMIT_DELAY_MS);
        assert_eq!(shown.get(), FormStatus::Success);
        assert!(!shown.get().submit_disabled());

        shown.set(shown.get().apply(FormEvent::Reset));
        assert_eq!(shown.get(), FormStatus::Idle);
        assert_eq!(shown.get().submit_label(), "Request Free Consultation");
    }

    #[test]
    fn second_submit_while_sending_is_ignored() {
        let clock = ManualClock::default();
        let mut pending = PendingSubmission::new(clock.clone());
        let (count, on_delivered) = counter();

        let now = pending.submit(FormStatus::Idle, &filled(), move |_| on_delivered());
        assert_eq!(now, FormStatus::Submitting);
        let again = pending.submit(FormStatus::Idle, &filled(), |_| panic!("second request armed"));
        assert_eq!(again, FormStatus::Idle);
        assert_eq!(clock.scheduled_delays().len(), 1);

        clock.elapse(config::SUBMIT_DELAY_MS);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn submit_from_success_arms_nothing() {
        let clock = ManualClock::default();
        let mut pending = PendingSubmission::new(clock.clone());

        let now = pending.submit(FormStatus::Success, &filled(), |_| panic!("armed from success"));
        assert_eq!(now, FormStatus::Success);
        assert!(!pending.is_pending());
        assert!(clock.scheduled_delays().is_empty());
    }
}
