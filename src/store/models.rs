// SPDX-License-Identifier: GPL-3.0-only

/// Column order used when listing cafes.
pub const CAFE_COLUMNS: [&str; 11] = [
    "id",
    "name",
    "map_url",
    "img_url",
    "location",
    "seats",
    "has_toilet",
    "has_wifi",
    "has_sockets",
    "can_take_calls",
    "coffee_price",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CafeRecord {
    /// Store-assigned identifier
    pub id: i64,

    /// Display name, unique across the store
    pub name: String,

    /// Link to the cafe on a map service
    pub map_url: String,

    /// Link to a picture of the cafe
    pub img_url: String,

    /// Human-readable location name
    pub location: String,

    /// Seat bucket label such as "20-30" or "50+"
    pub seats: String,

    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,

    /// Cheapest coffee price, currency prefixed
    pub coffee_price: Option<String>,
}

/// A cafe that has passed validation but has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCafe {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

impl NewCafe {
    pub fn into_record(self, id: i64) -> CafeRecord {
        CafeRecord {
            id,
            name: self.name,
            map_url: self.map_url,
            img_url: self.img_url,
            location: self.location,
            seats: self.seats,
            has_toilet: self.has_toilet,
            has_wifi: self.has_wifi,
            has_sockets: self.has_sockets,
            can_take_calls: self.can_take_calls,
            coffee_price: self.coffee_price,
        }
    }
}

impl CafeRecord {
    /// Render a single column as display text, in `CAFE_COLUMNS` order.
    pub fn column_text(&self, column: &str) -> Option<String> {
        let text = match column {
            "id" => self.id.to_string(),
            "name" => self.name.clone(),
            "map_url" => self.map_url.clone(),
            "img_url" => self.img_url.clone(),
            "location" => self.location.clone(),
            "seats" => self.seats.clone(),
            "has_toilet" => self.has_toilet.to_string(),
            "has_wifi" => self.has_wifi.to_string(),
            "has_sockets" => self.has_sockets.to_string(),
            "can_take_calls" => self.can_take_calls.to_string(),
            "coffee_price" => self.coffee_price.clone().unwrap_or_default(),
            _ => return None,
        };
        Some(text)
    }
}
