pub mod nav_bar {
    pub const ARIA_NAV: &str = "Primary navigation";
}

pub mod hero {
    pub const GREETING: &str = "Hello,";
    pub const NAME_TEMPLATE: &str = "I'm {}.";
}

pub mod about {
    pub const TITLE: &str = "About Me";
    pub const DESCRIPTION: &str = "Description";
    pub const COMPETITIONS: &str = "Competitions";
}

pub mod experience {
    pub const TITLE: &str = "Experience";
}

pub mod projects {
    pub const TITLE: &str = "Projects";
    pub const ARIA_PREV: &str = "Previous project";
    pub const ARIA_NEXT: &str = "Next project";
    pub const ARIA_CAROUSEL: &str = "Project carousel";
    pub const SLIDE_TEMPLATE: &str = "{} of {}";
    pub const OPEN_TEMPLATE: &str = "Open {} in a new tab";
}

pub mod skills {
    pub const TITLE: &str = "Technical Expertise";
}

pub mod connect {
    pub const TITLE: &str = "Connect";
}

pub mod error_banner {
    pub const TITLE: &str = "Something went wrong";
    pub const CLOSE_ARIA: &str = "Dismiss error";
}

pub mod not_found {
    pub const TITLE: &str = "404 - Page not found";
    pub const BODY: &str = "Sorry, the page you are looking for does not exist.";
    pub const BACK_HOME: &str = "Back to the portfolio";
}
