// SPDX-License-Identifier: GPL-3.0-only
use crate::forms::rules::{ADD_CAFE_RULES, DELETE_CAFE_RULES};
use crate::forms::validator::{validate, FormErrors, FormInput};
use crate::store::NewCafe;

/// A validated add-cafe submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCafeFields(NewCafe);

impl AddCafeFields {
    pub fn parse(input: &FormInput) -> Result<Self, FormErrors> {
        let bag = validate(ADD_CAFE_RULES, input)?;
        let text = |name: &str| bag.text(name).unwrap_or_default().to_string();

        Ok(Self(NewCafe {
            name: text("name"),
            map_url: text("map_url"),
            img_url: text("img_url"),
            location: text("location"),
            seats: text("seats"),
            has_toilet: bag.flag("has_toilet"),
            has_wifi: bag.flag("has_wifi"),
            has_sockets: bag.flag("has_sockets"),
            can_take_calls: bag.flag("can_take_calls"),
            coffee_price: bag.text("coffee_price").map(str::to_string),
        }))
    }

    pub fn name(&self) -> &str {
        &self.0.name
    }

    pub fn into_new_cafe(self) -> NewCafe {
        self.0
    }
}

/// A validated delete-cafe submission: the id and the name it must match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCafeFields {
    pub id: String,
    pub name: String,
}

impl DeleteCafeFields {
    pub fn parse(input: &FormInput) -> Result<Self, FormErrors> {
        let bag = validate(DELETE_CAFE_RULES, input)?;
        Ok(Self {
            id: bag.text("id").unwrap_or_default().to_string(),
            name: bag.text("name").unwrap_or_default().to_string(),
        })
    }

    /// The submitted id as a store key. `None` if it is not an integer,
    /// which can never match a stored cafe.
    pub fn record_id(&self) -> Option<i64> {
        self.id.parse().ok()
    }
}
