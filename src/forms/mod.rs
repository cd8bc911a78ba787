// SPDX-License-Identifier: GPL-3.0-only
pub mod csrf;
pub mod fields;
pub mod rules;
pub mod validator;

pub use fields::{AddCafeFields, DeleteCafeFields};
pub use rules::{FieldKind, FieldRule, ADD_CAFE_RULES, DELETE_CAFE_RULES};
pub use validator::{FormErrors, FormInput};
