mod alert;
mod avatar;
mod button;
mod spinner;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use avatar::InitialsAvatar;
pub(crate) use button::{Button, ButtonVariant};
pub(crate) use spinner::{PageSpinner, Spinner};
