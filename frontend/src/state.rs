use log::{debug, warn};

use crate::config::SCROLL_THRESHOLD_PX;

pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > SCROLL_THRESHOLD_PX
}

/// Hamburger button: flips the mobile menu.
pub fn toggle_menu(open: bool) -> bool {
    !open
}

/// Any link or CTA inside the mobile menu closes it.
pub fn close_menu() -> bool {
    false
}

/// Only one answer can be open: clicking the open entry closes it, clicking
/// any other entry moves the open slot there.
pub fn toggle_faq(active: Option<usize>, clicked: usize) -> Option<usize> {
    if active == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Success,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormEvent {
    Submit,
    Delivered,
    Reset,
}

impl Default for FormStatus {
    fn default() -> Self {
        FormStatus::Idle
    }
}

impl FormStatus {
    pub fn apply(self, event: FormEvent) -> FormStatus {
        let next = match (self, event) {
            (FormStatus::Idle, FormEvent::Submit) => FormStatus::Submitting,
            (FormStatus::Submitting, FormEvent::Delivered) => FormStatus::Success,
            (FormStatus::Success, FormEvent::Reset) => FormStatus::Idle,
            (current, event) => {
                warn!("Ignoring {:?} while booking form is {:?}", event, current);
                return current;
            }
        };
        debug!("Booking form {:?} -> {:?}", self, next);
        next
    }

    pub fn submit_disabled(self) -> bool {
        self == FormStatus::Submitting
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            FormStatus::Submitting => "Sending...",
            _ => "Request Free Consultation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_turns_solid_only_past_threshold() {
        for y in [0.0, 1.0, 19.5, 20.0] {
            assert!(!is_scrolled(y), "offset {} should not count as scrolled", y);
        }
        for y in [20.5, 21.0, 100.0, 5000.0] {
            assert!(is_scrolled(y), "offset {} should count as scrolled", y);
        }
    }

    #[test]
    fn scrolling_back_to_top_reverts_header() {
        assert!(is_scrolled(100.0));
        assert!(!is_scrolled(0.0));
    }

    #[test]
    fn hamburger_twice_restores_menu() {
        assert!(toggle_menu(false));
        assert!(!toggle_menu(true));
        for start in [false, true] {
            assert_eq!(toggle_menu(toggle_menu(start)), start);
        }
    }

    #[test]
    fn menu_link_closes_from_either_state() {
        // Opened via the hamburger, then a link is clicked
        let open = toggle_menu(false);
        assert!(open);
        assert!(!close_menu());

        // Already closed stays closed, and the hamburger still reopens it
        assert!(!close_menu());
        assert!(toggle_menu(close_menu()));
    }

    #[test]
    fn faq_opens_and_closes_same_entry() {
        let opened = toggle_faq(None, 3);
        assert_eq!(opened, Some(3));
        assert_eq!(toggle_faq(opened, 3), None);
    }

    #[test]
    fn faq_switches_to_other_entry() {
        assert_eq!(toggle_faq(Some(0), 5), Some(5));
        assert_eq!(toggle_faq(Some(5), 0), Some(0));
    }

    #[test]
    fn faq_never_holds_more_than_one_entry() {
        let clicks = [2, 4, 4, 1, 7, 7, 7, 0];
        let mut active = None;
        for clicked in clicks {
            let before = active;
            active = toggle_faq(active, clicked);
            match before {
                Some(prev) if prev == clicked => assert_eq!(active, None),
                _ => assert_eq!(active, Some(clicked)),
            }
        }
        assert_eq!(active, Some(0));
    }

    #[test]
    fn booking_round_trip_through_all_states() {
        let status = FormStatus::default();
        assert_eq!(status, FormStatus::Idle);

        let status = status.apply(FormEvent::Submit);
        assert_eq!(status, FormStatus::Submitting);

        let status = status.apply(FormEvent::Delivered);
        assert_eq!(status, FormStatus::Success);

        let status = status.apply(FormEvent::Reset);
        assert_eq!(status, FormStatus::Idle);
    }

    #[test]
    fn out_of_order_events_are_ignored() {
        assert_eq!(FormStatus::Idle.apply(FormEvent::Delivered), FormStatus::Idle);
        assert_eq!(FormStatus::Idle.apply(FormEvent::Reset), FormStatus::Idle);
        assert_eq!(FormStatus::Submitting.apply(FormEvent::Submit), FormStatus::Submitting);
        assert_eq!(FormStatus::Submitting.apply(FormEvent::Reset), FormStatus::Submitting);
        assert_eq!(FormStatus::Success.apply(FormEvent::Submit), FormStatus::Success);
        assert_eq!(FormStatus::Success.apply(FormEvent::Delivered), FormStatus::Success);
    }

    #[test]
    fn submit_button_disabled_only_while_sending() {
        assert!(!FormStatus::Idle.submit_disabled());
        assert!(FormStatus::Submitting.submit_disabled());
        assert!(!FormStatus::Success.submit_disabled());

        assert_eq!(FormStatus::Submitting.submit_label(), "Sending...");
        assert_eq!(FormStatus::Idle.submit_label(), "Request Free Consultation");
    }
}
