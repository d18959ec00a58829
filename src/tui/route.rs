//! Two-way switch between the feedback form and the admin dashboard.

/// Top-level view selected by the route fragment.
///
/// # Examples
///
/// ```
/// use feedback_console::tui::Route;
///
/// assert_eq!(Route::from_fragment("#/admin"), Route::Admin);
/// assert_eq!(Route::from_fragment("#/"), Route::Feedback);
/// assert_eq!(Route::Feedback.toggled(), Route::Admin);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Route {
    /// Rating and review form for end users.
    #[default]
    Feedback,
    /// Monitoring dashboard for administrators.
    Admin,
}

impl Route {
    /// Parses a route fragment.
    ///
    /// Only `#/admin` (surrounding whitespace ignored) selects
    /// [`Route::Admin`]; any other fragment selects [`Route::Feedback`].
    #[must_use]
    pub fn from_fragment(fragment: &str) -> Self {
        if fragment.trim() == Self::Admin.fragment() {
            Self::Admin
        } else {
            Self::Feedback
        }
    }

    /// Returns the other route.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Feedback => Self::Admin,
            Self::Admin => Self::Feedback,
        }
    }

    /// Returns the canonical fragment for this route.
    #[must_use]
    pub const fn fragment(self) -> &'static str {
        match self {
            Self::Feedback => "#/",
            Self::Admin => "#/admin",
        }
    }

    /// Returns the header title for this route.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Feedback => "Share your feedback",
            Self::Admin => "Feedback dashboard",
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::Route;

    #[rstest]
    #[case("#/admin", Route::Admin)]
    #[case(" #/admin\n", Route::Admin)]
    #[case("#/admin/", Route::Feedback)]
    #[case("/admin", Route::Feedback)]
    #[case("admin", Route::Feedback)]
    #[case("#/ADMIN", Route::Feedback)]
    #[case("#/", Route::Feedback)]
    #[case("#/administrator", Route::Feedback)]
    #[case("", Route::Feedback)]
    fn fragments_select_routes(#[case] fragment: &str, #[case] expected: Route) {
        assert_eq!(Route::from_fragment(fragment), expected);
    }

    #[rstest]
    #[case(Route::Feedback)]
    #[case(Route::Admin)]
    fn canonical_fragment_round_trips(#[case] route: Route) {
        assert_eq!(Route::from_fragment(route.fragment()), route);
        assert_eq!(route.toggled().toggled(), route);
    }
}
