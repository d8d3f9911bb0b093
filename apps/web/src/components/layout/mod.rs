//! Layout components shared across routes.

mod app_shell;
mod language_select;
mod sidebar;

pub(crate) use app_shell::AppShell;
use language_select::LanguageSelect;
use sidebar::Sidebar;
