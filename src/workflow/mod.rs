// SPDX-License-Identifier: GPL-3.0-only
pub mod controller;
pub mod notice;

pub use controller::{AddOutcome, DeleteOutcome, WorkflowController};
pub use notice::{Notice, NoticeSlots};
