//! Header navigation state. The header component owns one [`NavMenu`] and feeds
//! it user events; everything here is plain data so it can be tested without a
//! browser.

/// Scroll offset past which the header switches to its compact style.
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// Viewports at or below this width use the mobile menu.
pub const MOBILE_MAX_WIDTH: u32 = 1025;

/// Delay before a desktop submenu falls back to its default item.
pub const SUBMENU_RESTORE_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const NAV: [Section; 4] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// Element id of the section on the page.
    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLL_THRESHOLD
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavMenu {
    pub open: bool,
    pub submenu_open: bool,
    /// Highlighted project in the submenu.
    pub active_project: Option<u32>,
    default_project: Option<u32>,
}

impl NavMenu {
    pub fn new(default_project: Option<u32>) -> Self {
        Self {
            open: false,
            submenu_open: false,
            active_project: default_project,
            default_project,
        }
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A section link was followed. Returns the section to scroll to.
    pub fn navigate(&mut self, section: Section) -> Section {
        self.open = false;
        self.submenu_open = false;
        section
    }

    /// Mobile only; desktop submenus open on hover through CSS.
    pub fn toggle_submenu(&mut self, is_mobile: bool) {
        if is_mobile {
            self.submenu_open = !self.submenu_open;
        }
    }

    pub fn hover_project(&mut self, id: u32) {
        self.active_project = Some(id);
    }

    /// Called when the pointer has left the submenu for `SUBMENU_RESTORE_MS`.
    pub fn restore_default_project(&mut self) {
        self.active_project = self.default_project;
    }

    /// Viewport crossed to desktop width; mobile-only state no longer applies.
    pub fn viewport_changed(&mut self, is_mobile: bool) {
        if !is_mobile {
            self.open = false;
            self.submenu_open = false;
        }
    }
}
