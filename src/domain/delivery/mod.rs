//! Delivery domain module

mod candidate;
mod chord;
mod diagnosis;
mod mechanism;
mod remediation;
mod snapshot;

pub use candidate::{DeliveryCandidate, Invocation};
pub use chord::PasteChord;
pub use diagnosis::Diagnosis;
pub use mechanism::{Mechanism, MechanismTiming};
pub use remediation::{Remediation, ACCESSIBILITY_SETTINGS_URL};
pub use snapshot::ClipboardSnapshot;
