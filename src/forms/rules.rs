// SPDX-License-Identifier: GPL-3.0-only

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text
    Text,
    /// Absolute http/https URL
    Url,
    /// Checkbox, false when absent
    Boolean,
}

/// Declaration of a single form field.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Strip surrounding whitespace from the accepted value
    pub trim: bool,
    /// Value pre-filled into an empty form
    pub initial: Option<&'static str>,
}

impl FieldRule {
    const fn text(name: &'static str, label: &'static str, required: bool) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Text,
            required,
            trim: true,
            initial: None,
        }
    }

    const fn url(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Url,
            required: true,
            trim: true,
            initial: None,
        }
    }

    const fn boolean(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            kind: FieldKind::Boolean,
            required: false,
            trim: true,
            initial: None,
        }
    }

    const fn with_initial(mut self, initial: &'static str) -> Self {
        self.initial = Some(initial);
        self
    }

    /// Keep the value exactly as submitted once it passes the required check.
    const fn untrimmed(mut self) -> Self {
        self.trim = false;
        self
    }
}

pub const ADD_CAFE_RULES: &[FieldRule] = &[
    FieldRule::text("name", "Cafe Name:", true),
    FieldRule::url("map_url", "Cafe Location on Google Maps (URL):"),
    FieldRule::url("img_url", "Cafe Image (URL):"),
    FieldRule::text("location", "Location Name:", true),
    FieldRule::text(
        "seats",
        "Number of Seats (0-10, 10-20, 20-30, 30-40, 40-50, or 50+):",
        true,
    ),
    FieldRule::boolean("has_toilet", "Does the cafe have restrooms?"),
    FieldRule::boolean("has_wifi", "Does the cafe provide complementary wifi?"),
    FieldRule::boolean("has_sockets", "Does the cafe provide electrical sockets?"),
    FieldRule::boolean("can_take_calls", "Does the cafe have reception to take calls?"),
    FieldRule::text(
        "coffee_price",
        "What's the cheapest coffee price at that cafe? Please give to the nearest cent:",
        false,
    )
    .with_initial("£"),
];

// The name is compared byte for byte against the stored one
pub const DELETE_CAFE_RULES: &[FieldRule] = &[
    FieldRule::text("id", "Id of Cafe to be Deleted:", true),
    FieldRule::text("name", "Name of Cafe to be Deleted:", true).untrimmed(),
];
