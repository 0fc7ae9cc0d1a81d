use log::Level;

/// Offset past which the scroll-to-top button shows.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;
/// Offset past which the nav bar gets its solid background.
pub const NAV_BACKGROUND_THRESHOLD: f64 = 50.0;
/// Hero content drifts at this fraction of the scroll offset.
pub const PARALLAX_FACTOR: f64 = 0.1;

/// Attribute carrying a region's reveal id.
pub const REVEAL_ATTRIBUTE: &str = "data-reveal";
/// Visible fraction a region needs before it reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

pub struct Practice {
    pub name: &'static str,
    pub credentials: &'static str,
    pub license: &'static str,
    pub phone_display: &'static str,
    pub phone_href: &'static str,
    pub email: &'static str,
    pub street: &'static str,
    pub city: &'static str,
}

pub const PRACTICE: Practice = Practice {
    name: "Dr. Serena Blake",
    credentials: "PsyD, Licensed Clinical Psychologist",
    license: "License #PSY12345",
    phone_display: "(323) 555-0192",
    phone_href: "tel:+13235550192",
    email: "serena@blakepsychology.com",
    street: "1287 Maplewood Drive",
    city: "Los Angeles, CA 90026",
};

impl Practice {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn address(&self) -> String {
        format!("{}, {}", self.street, self.city)
    }
}

pub struct OfficeHours {
    pub kind: &'static str,
    pub days: &'static str,
    pub short_days: &'static str,
    pub hours: &'static str,
    pub short_hours: &'static str,
}

pub const OFFICE_HOURS: [OfficeHours; 2] = [
    OfficeHours {
        kind: "In-Person",
        days: "Tuesday & Thursday",
        short_days: "Tue & Thu",
        hours: "10:00 AM - 6:00 PM",
        short_hours: "10 AM - 6 PM",
    },
    OfficeHours {
        kind: "Virtual",
        days: "Monday, Wednesday & Friday",
        short_days: "Mon, Wed & Fri",
        hours: "1:00 PM - 5:00 PM",
        short_hours: "1 PM - 5 PM",
    },
];

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_background_turns_on_before_scroll_top() {
        assert!(NAV_BACKGROUND_THRESHOLD < SCROLL_TOP_THRESHOLD);
    }

    #[test]
    fn contact_links() {
        assert_eq!(PRACTICE.mailto(), "mailto:serena@blakepsychology.com");
        assert_eq!(
            PRACTICE.address(),
            "1287 Maplewood Drive, Los Angeles, CA 90026"
        );
        assert!(PRACTICE.phone_href.starts_with("tel:+1"));
    }
}
