use leptos::prelude::*;

/// Closed icon set of the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Dashboard,
    Campaigns,
    Templates,
    Contacts,
    Send,
    History,
    Plus,
    Refresh,
    Edit,
    Delete,
    Save,
    Download,
    Upload,
    Copy,
    FileText,
    Filter,
    Search,
    X,
    Check,
    Eye,
    Alert,
    ChevronLeft,
    ChevronRight,
    ChevronsLeft,
    ChevronsRight,
    ChevronDown,
}

impl Icon {
    pub fn all() -> &'static [Icon] {
        use Icon::*;
        &[
            Dashboard, Campaigns, Templates, Contacts, Send, History, Plus, Refresh, Edit, Delete,
            Save, Download, Upload, Copy, FileText, Filter, Search, X, Check, Eye, Alert,
            ChevronLeft, ChevronRight, ChevronsLeft, ChevronsRight, ChevronDown,
        ]
    }

    /// Legacy string key
    pub fn name(self) -> &'static str {
        match self {
            Icon::Dashboard => "dashboard",
            Icon::Campaigns => "campaigns",
            Icon::Templates => "templates",
            Icon::Contacts => "contacts",
            Icon::Send => "send",
            Icon::History => "history",
            Icon::Plus => "plus",
            Icon::Refresh => "refresh",
            Icon::Edit => "edit",
            Icon::Delete => "delete",
            Icon::Save => "save",
            Icon::Download => "download",
            Icon::Upload => "upload",
            Icon::Copy => "copy",
            Icon::FileText => "file-text",
            Icon::Filter => "filter",
            Icon::Search => "search",
            Icon::X => "x",
            Icon::Check => "check",
            Icon::Eye => "eye",
            Icon::Alert => "alert",
            Icon::ChevronLeft => "chevron-left",
            Icon::ChevronRight => "chevron-right",
            Icon::ChevronsLeft => "chevrons-left",
            Icon::ChevronsRight => "chevrons-right",
            Icon::ChevronDown => "chevron-down",
        }
    }

    pub fn from_name(name: &str) -> Option<Icon> {
        Self::all().iter().copied().find(|i| i.name() == name)
    }

    /// Navigation icons are drawn larger
    fn size(self) -> u32 {
        match self {
            Icon::Dashboard
            | Icon::Campaigns
            | Icon::Templates
            | Icon::Contacts
            | Icon::Send
            | Icon::History => 20,
            _ => 16,
        }
    }

    fn shapes(self) -> AnyView {
        match self {
            Icon::Dashboard => view! {
                <rect x="3" y="3" width="7" height="9" rx="1"/>
                <rect x="14" y="3" width="7" height="5" rx="1"/>
                <rect x="14" y="12" width="7" height="9" rx="1"/>
                <rect x="3" y="16" width="7" height="5" rx="1"/>
            }
            .into_any(),
            Icon::Campaigns => view! {
                <path d="M3 11l18-5v12L3 14v-3z"/>
                <path d="M11.6 16.8a3 3 0 1 1-5.8-1.6"/>
            }
            .into_any(),
            Icon::Templates => view! {
                <rect x="3" y="3" width="18" height="18" rx="2"/>
                <path d="M3 9h18"/>
                <path d="M9 21V9"/>
            }
            .into_any(),
            Icon::Contacts => view! {
                <path d="M17 21v-2a4 4 0 0 0-4-4H7a4 4 0 0 0-4 4v2"/>
                <circle cx="9" cy="7" r="4"/>
                <path d="M23 21v-2a4 4 0 0 0-3-3.87"/>
                <path d="M16 3.13a4 4 0 0 1 0 7.75"/>
            }
            .into_any(),
            Icon::Send => view! {
                <path d="M22 2L11 13"/>
                <path d="M22 2l-7 20-4-9-9-4 20-7z"/>
            }
            .into_any(),
            Icon::History => view! {
                <circle cx="12" cy="12" r="10"/>
                <path d="M12 6v6l4 2"/>
            }
            .into_any(),
            Icon::Plus => view! {
                <path d="M12 5v14"/>
                <path d="M5 12h14"/>
            }
            .into_any(),
            Icon::Refresh => view! {
                <path d="M23 4v6h-6"/>
                <path d="M1 20v-6h6"/>
                <path d="M3.51 9a9 9 0 0 1 14.85-3.36L23 10M1 14l4.64 4.36A9 9 0 0 0 20.49 15"/>
            }
            .into_any(),
            Icon::Edit => view! {
                <path d="M12 20h9"/>
                <path d="M16.5 3.5a2.12 2.12 0 0 1 3 3L7 19l-4 1 1-4z"/>
            }
            .into_any(),
            Icon::Delete => view! {
                <path d="M3 6h18"/>
                <path d="M19 6l-1 14a2 2 0 0 1-2 2H8a2 2 0 0 1-2-2L5 6"/>
                <path d="M10 11v6"/>
                <path d="M14 11v6"/>
                <path d="M9 6V4a1 1 0 0 1 1-1h4a1 1 0 0 1 1 1v2"/>
            }
            .into_any(),
            Icon::Save => view! {
                <path d="M19 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11l5 5v11a2 2 0 0 1-2 2z"/>
                <path d="M17 21v-8H7v8"/>
                <path d="M7 3v5h8"/>
            }
            .into_any(),
            Icon::Download => view! {
                <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/>
                <path d="M7 10l5 5 5-5"/>
                <path d="M12 15V3"/>
            }
            .into_any(),
            Icon::Upload => view! {
                <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/>
                <path d="M17 8l-5-5-5 5"/>
                <path d="M12 3v12"/>
            }
            .into_any(),
            Icon::Copy => view! {
                <rect x="9" y="9" width="13" height="13" rx="2"/>
                <path d="M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1"/>
            }
            .into_any(),
            Icon::FileText => view! {
                <path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/>
                <path d="M14 2v6h6"/>
                <path d="M16 13H8"/>
                <path d="M16 17H8"/>
            }
            .into_any(),
            Icon::Filter => view! {
                <path d="M22 3H2l8 9.46V19l4 2v-8.54z"/>
            }
            .into_any(),
            Icon::Search => view! {
                <circle cx="11" cy="11" r="8"/>
                <path d="M21 21l-4.35-4.35"/>
            }
            .into_any(),
            Icon::X => view! {
                <path d="M18 6L6 18"/>
                <path d="M6 6l12 12"/>
            }
            .into_any(),
            Icon::Check => view! {
                <polyline points="20 6 9 17 4 12"/>
            }
            .into_any(),
            Icon::Eye => view! {
                <path d="M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z"/>
                <circle cx="12" cy="12" r="3"/>
            }
            .into_any(),
            Icon::Alert => view! {
                <path d="M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z"/>
                <path d="M12 9v4"/>
                <path d="M12 17h.01"/>
            }
            .into_any(),
            Icon::ChevronLeft => view! { <polyline points="15 18 9 12 15 6"/> }.into_any(),
            Icon::ChevronRight => view! { <polyline points="9 18 15 12 9 6"/> }.into_any(),
            Icon::ChevronsLeft => view! {
                <polyline points="11 17 6 12 11 7"/>
                <polyline points="18 17 13 12 18 7"/>
            }
            .into_any(),
            Icon::ChevronsRight => view! {
                <polyline points="13 17 18 12 13 7"/>
                <polyline points="6 17 11 12 6 7"/>
            }
            .into_any(),
            Icon::ChevronDown => view! { <polyline points="6 9 12 15 18 9"/> }.into_any(),
        }
    }

    pub fn view(self) -> AnyView {
        let size = self.size();
        view! {
            <svg
                width=size
                height=size
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
            >
                {self.shapes()}
            </svg>
        }
        .into_any()
    }
}

pub fn icon(icon: Icon) -> AnyView {
    icon.view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for i in Icon::all() {
            assert_eq!(Icon::from_name(i.name()), Some(*i));
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(Icon::from_name("customers"), None);
        assert_eq!(Icon::from_name(""), None);
    }
}
