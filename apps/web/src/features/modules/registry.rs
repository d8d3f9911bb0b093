//! The one authoritative list of licensable feature areas. The route guard,
//! the sidebar, the dashboard tiles and the backend grant parser all read it,
//! so a module's key, label, icon and route can't drift apart.

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModuleName {
    Students,
    Projections,
    Paces,
    MonthlyAssignments,
    ReportCards,
    Groups,
    Teachers,
    SchoolAdmin,
    Schools,
    Users,
    Billing,
}

struct ModuleInfo {
    key: &'static str,
    label: &'static str,
    icon: &'static str,
    path: &'static str,
}

impl ModuleName {
    pub const ALL: [ModuleName; 11] = [
        ModuleName::Students,
        ModuleName::Projections,
        ModuleName::Paces,
        ModuleName::MonthlyAssignments,
        ModuleName::ReportCards,
        ModuleName::Groups,
        ModuleName::Teachers,
        ModuleName::SchoolAdmin,
        ModuleName::Schools,
        ModuleName::Users,
        ModuleName::Billing,
    ];

    fn info(self) -> ModuleInfo {
        let (key, label, icon, path) = match self {
            ModuleName::Students => ("students", "Students", "school", "/students"),
            ModuleName::Projections => ("projections", "Projections", "timeline", "/projections"),
            ModuleName::Paces => ("paces", "PACEs", "menu_book", "/paces"),
            ModuleName::MonthlyAssignments => (
                "monthlyAssignments",
                "Monthly assignments",
                "calendar_month",
                "/monthly-assignments",
            ),
            ModuleName::ReportCards => ("reportCards", "Report cards", "grading", "/report-cards"),
            ModuleName::Groups => ("groups", "Groups", "groups", "/groups"),
            ModuleName::Teachers => ("teachers", "Teachers", "co_present", "/teachers"),
            ModuleName::SchoolAdmin => (
                "school_admin",
                "School administration",
                "admin_panel_settings",
                "/school-admin",
            ),
            ModuleName::Schools => ("schools", "Schools", "domain", "/schools"),
            ModuleName::Users => ("users", "Users", "manage_accounts", "/users"),
            ModuleName::Billing => ("billing", "Billing", "payments", "/billing"),
        };
        ModuleInfo {
            key,
            label,
            icon,
            path,
        }
    }

    /// Entitlement key used by the backend.
    pub fn key(self) -> &'static str {
        self.info().key
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    /// Material Symbols icon name.
    pub fn icon(self) -> &'static str {
        self.info().icon
    }

    pub fn path(self) -> &'static str {
        self.info().path
    }

    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL.into_iter().find(|module| module.key() == key)
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|module| path == module.path() || path.starts_with(&format!("{}/", module.path())))
    }
}

#[cfg(test)]
mod tests {
    use super::ModuleName;
    use std::collections::HashSet;

    #[test]
    fn keys_round_trip() {
        for module in ModuleName::ALL {
            assert_eq!(ModuleName::from_key(module.key()), Some(module));
        }
        assert_eq!(ModuleName::from_key("monthlyAssignments"), Some(ModuleName::MonthlyAssignments));
        assert_eq!(ModuleName::from_key("school_admin"), Some(ModuleName::SchoolAdmin));
        assert_eq!(ModuleName::from_key("Students"), None);
    }

    #[test]
    fn keys_and_paths_are_unique() {
        let keys: HashSet<_> = ModuleName::ALL.iter().map(|m| m.key()).collect();
        let paths: HashSet<_> = ModuleName::ALL.iter().map(|m| m.path()).collect();
        assert_eq!(keys.len(), ModuleName::ALL.len());
        assert_eq!(paths.len(), ModuleName::ALL.len());
    }

    #[test]
    fn path_lookup_matches_nested_routes_only_on_segment_boundary() {
        assert_eq!(ModuleName::from_path("/students"), Some(ModuleName::Students));
        assert_eq!(ModuleName::from_path("/students/42"), Some(ModuleName::Students));
        assert_eq!(ModuleName::from_path("/studentsx"), None);
        assert_eq!(ModuleName::from_path("/dashboard"), None);
    }
}
